//! Outline builder.
//!
//! Walks a [`Program`] depth-first and turns the declarations it recognizes
//! into [`OutlineTree`]s. Unrecognized statements produce nothing; the only
//! hard failure is an unknown binding pattern.

use tracing::{trace, warn};

use super::ast::{
    Class, ClassProperty, ExportDeclaration, ExpressionStatement, MethodDefinition, Node,
    Program, TypeAlias, VariableDeclaration,
};
use super::error::Result;
use super::exports::{exported_object, module_exports_outline};
use super::options::{Keyword, OutlineOptions};
use super::outline::{Extent, Outline, OutlineKind, OutlineTree};
use super::patterns::{render_params, render_patterns};
use super::specs::{SpecCall, SpecFamily};
use super::text::{class_name, keyword, method, param, plain, string, type_name, whitespace, TokenizedText};

/// Build the outline of a whole program.
pub fn build_outline(program: &Program, options: &OutlineOptions) -> Result<Outline> {
    let builder = OutlineBuilder::new(options);
    Ok(Outline::new(builder.visit_all(&program.body, 0)?))
}

/// Stateless visitor; `depth` is threaded through the calls.
pub struct OutlineBuilder<'a> {
    options: &'a OutlineOptions,
}

impl<'a> OutlineBuilder<'a> {
    pub fn new(options: &'a OutlineOptions) -> Self {
        Self { options }
    }

    pub fn visit_all(&self, nodes: &[Node], depth: usize) -> Result<Vec<OutlineTree>> {
        let mut trees = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(tree) = self.visit_one(node, depth)? {
                trees.push(tree);
            }
        }
        Ok(trees)
    }

    pub fn visit_one(&self, node: &Node, depth: usize) -> Result<Option<OutlineTree>> {
        if depth > self.options.max_depth {
            warn!(
                kind = node.kind_name(),
                max_depth = self.options.max_depth,
                "outline nesting too deep, dropping subtree"
            );
            return Ok(None);
        }
        let Some(extent) = Extent::from_loc(node.loc()) else {
            trace!(kind = node.kind_name(), "node has no location, skipping");
            return Ok(None);
        };

        match node {
            Node::FunctionDeclaration(function) | Node::ArrowFunctionExpression(function) => {
                let name = function.id.as_ref().map(|id| id.name.as_str());
                self.function_outline(name, &function.params, extent).map(Some)
            }
            Node::ClassDeclaration(class) | Node::ClassExpression(class) => {
                self.class_outline(class, extent, depth).map(Some)
            }
            Node::ClassProperty(property) => self.class_property_outline(property, extent),
            Node::MethodDefinition(definition) => self.method_definition_outline(definition, extent),
            Node::ExportNamedDeclaration(export) => {
                self.export_outline(export, extent, export.default, depth)
            }
            Node::ExportDefaultDeclaration(export) => self.export_outline(export, extent, true, depth),
            Node::ExpressionStatement(statement) => self.expression_outline(statement, extent, depth),
            Node::TypeAlias(alias) | Node::DeclareTypeAlias(alias) => {
                Ok(Some(self.type_alias_outline(alias, extent)))
            }
            Node::VariableDeclaration(declaration) => self.variable_outline(declaration, extent),
            other => {
                trace!(kind = other.kind_name(), "no outline rule");
                Ok(None)
            }
        }
    }

    // `function name(params)`. Anonymous functions always show the keyword.
    fn function_outline(&self, name: Option<&str>, params: &[Node], extent: Extent) -> Result<OutlineTree> {
        let name = name.filter(|name| !name.is_empty());
        let mut text = TokenizedText::new();
        if self.options.shows(Keyword::Function) || name.is_none() {
            text.push(keyword("function"));
            if name.is_some() {
                text.push(whitespace(" "));
            }
        }
        if let Some(name) = name {
            text.push(method(name));
        }
        if self.options.show_function_args {
            text.append(render_params(params)?);
        }
        Ok(OutlineTree::leaf(
            OutlineKind::Function,
            text,
            name.map(str::to_string),
            extent,
        ))
    }

    fn class_outline(&self, class: &Class, extent: Extent, depth: usize) -> Result<OutlineTree> {
        let name = class.id.as_ref().map(|id| id.name.as_str()).filter(|name| !name.is_empty());
        let show_keyword = self.options.shows(Keyword::Class);

        let mut text = TokenizedText::new();
        if show_keyword || name.is_none() {
            text.push(keyword("class"));
        }
        if let Some(name) = name {
            if show_keyword {
                text.push(whitespace(" "));
            }
            text.push(class_name(name));
        }

        let children = self.visit_all(&class.body.body, depth + 1)?;
        Ok(OutlineTree::leaf(OutlineKind::Class, text, name.map(str::to_string), extent)
            .with_children(children))
    }

    fn class_property_outline(&self, property: &ClassProperty, extent: Extent) -> Result<Option<OutlineTree>> {
        let Some(key) = property.key.as_identifier() else {
            trace!(kind = property.key.kind_name(), "class property key is not an identifier");
            return Ok(None);
        };
        let name = key.name.as_str();

        if let Some(Node::ArrowFunctionExpression(arrow)) = property.value.as_deref() {
            return self.method_outline(name, &arrow.params, extent).map(Some);
        }

        let text = TokenizedText::from(vec![param(name), plain(":")]);
        Ok(Some(OutlineTree::leaf(
            OutlineKind::Property,
            text,
            Some(name.to_string()),
            extent,
        )))
    }

    fn method_definition_outline(
        &self,
        definition: &MethodDefinition,
        extent: Extent,
    ) -> Result<Option<OutlineTree>> {
        let Some(key) = definition.key.as_identifier() else {
            trace!(kind = definition.key.kind_name(), "method key is not an identifier");
            return Ok(None);
        };
        let params = definition
            .value
            .as_function_expression()
            .map(|function| function.params.as_slice())
            .unwrap_or_default();
        self.method_outline(&key.name, params, extent).map(Some)
    }

    fn method_outline(&self, name: &str, params: &[Node], extent: Extent) -> Result<OutlineTree> {
        let mut text = TokenizedText::new();
        text.push(method(name));
        if self.options.show_function_args {
            text.append(render_params(params)?);
        }
        Ok(OutlineTree::leaf(
            OutlineKind::Method,
            text,
            Some(name.to_string()),
            extent,
        ))
    }

    // The export statement's own extent replaces the declaration's.
    fn export_outline(
        &self,
        export: &ExportDeclaration,
        extent: Extent,
        is_default: bool,
        depth: usize,
    ) -> Result<Option<OutlineTree>> {
        let Some(declaration) = export.declaration.as_deref() else {
            return Ok(None);
        };
        let Some(inner) = self.visit_one(declaration, depth + 1)? else {
            return Ok(None);
        };

        let mut text = TokenizedText::new();
        if self.options.shows(Keyword::Export) {
            text.keyword_with_space("export");
        }
        if is_default && self.options.shows(Keyword::Default) {
            text.keyword_with_space("default");
        }
        text.append(inner.tokenized_text);

        Ok(Some(OutlineTree {
            kind: inner.kind,
            tokenized_text: text,
            representative_name: inner.representative_name,
            start_position: extent.start,
            end_position: extent.end,
            children: inner.children,
        }))
    }

    fn expression_outline(
        &self,
        statement: &ExpressionStatement,
        extent: Extent,
        depth: usize,
    ) -> Result<Option<OutlineTree>> {
        match statement.expression.as_ref() {
            Node::CallExpression(_) => Ok(self.spec_outline(statement, extent, depth)),
            Node::AssignmentExpression(assignment) => match exported_object(assignment) {
                Some(object) => module_exports_outline(self.options, object, extent).map(Some),
                None => Ok(None),
            },
            _ => Ok(None),
        }
    }

    // `describe('name', () => { ... })` and `it('name', () => { ... })`.
    fn spec_outline(&self, statement: &ExpressionStatement, extent: Extent, depth: usize) -> Option<OutlineTree> {
        let Node::CallExpression(call) = statement.expression.as_ref() else {
            return None;
        };
        let spec = SpecCall::recognize(call)?;

        let children = match spec.family {
            SpecFamily::It => Vec::new(),
            SpecFamily::Describe => self.spec_children(spec.body, depth + 1),
        };

        let mut text = TokenizedText::new();
        text.push(method(spec.function_name.as_str()))
            .push(whitespace(" "))
            .push(string(spec.description));
        Some(
            OutlineTree::leaf(
                OutlineKind::Function,
                text,
                Some(spec.description.to_string()),
                extent,
            )
            .with_children(children),
        )
    }

    // Only expression statements directly in the describe body can be specs.
    fn spec_children(&self, body: &[Node], depth: usize) -> Vec<OutlineTree> {
        if depth > self.options.max_depth {
            warn!(max_depth = self.options.max_depth, "spec nesting too deep, dropping children");
            return Vec::new();
        }
        body.iter()
            .filter_map(|node| match node {
                Node::ExpressionStatement(statement) => {
                    let extent = Extent::from_loc(statement.loc)?;
                    self.spec_outline(statement, extent, depth)
                }
                _ => None,
            })
            .collect()
    }

    fn type_alias_outline(&self, alias: &TypeAlias, extent: Extent) -> OutlineTree {
        let name = alias.id.name.as_str();
        let mut text = TokenizedText::new();
        if self.options.shows(Keyword::Type) {
            text.keyword_with_space("type");
        }
        text.push(type_name(name));
        OutlineTree::leaf(OutlineKind::Interface, text, Some(name.to_string()), extent)
    }

    // Only the first declarator of `let a = 1, b = 2` is outlined.
    fn variable_outline(
        &self,
        declaration: &VariableDeclaration,
        extent: Extent,
    ) -> Result<Option<OutlineTree>> {
        let Some(declarator) = declaration.declarations.first() else {
            return Ok(None);
        };
        let name = declarator.id.as_identifier().map(|id| id.name.as_str());

        if let Some(function) = declarator.init.as_deref().and_then(Node::as_function_expression) {
            return self.function_outline(name, &function.params, extent).map(Some);
        }

        let keyword = Keyword::from(declaration.kind);
        let mut text = TokenizedText::new();
        if self.options.shows(keyword) {
            text.keyword_with_space(keyword.as_str());
        }
        text.append(render_patterns([declarator.id.as_ref()])?);

        let kind = match keyword {
            Keyword::Const => OutlineKind::Constant,
            _ => OutlineKind::Variable,
        };
        Ok(Some(OutlineTree::leaf(kind, text, name.map(str::to_string), extent)))
    }
}

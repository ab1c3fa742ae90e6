//! CommonJS `module.exports = { ... }` recognition.

use super::ast::{AssignmentExpression, Node, ObjectExpression, Property};
use super::error::Result;
use super::options::OutlineOptions;
use super::outline::{Extent, OutlineKind, OutlineTree};
use super::patterns::render_params;
use super::text::{method, plain, string, TokenizedText};

/// `true` for exactly `module.exports`.
pub fn is_module_exports(left: &Node) -> bool {
    match left {
        Node::MemberExpression(member) if !member.computed => {
            matches!(member.object.as_identifier(), Some(id) if id.name == "module")
                && matches!(member.property.as_identifier(), Some(id) if id.name == "exports")
        }
        _ => false,
    }
}

/// The exported object literal, if `assignment` is `module.exports = { ... }`.
pub fn exported_object(assignment: &AssignmentExpression) -> Option<&ObjectExpression> {
    if !is_module_exports(&assignment.left) {
        return None;
    }
    match assignment.right.as_ref() {
        Node::ObjectExpression(object) => Some(object),
        _ => None,
    }
}

/// Outline `module.exports = { ... }`: one child per identifier-keyed property.
pub fn module_exports_outline(
    options: &OutlineOptions,
    object: &ObjectExpression,
    extent: Extent,
) -> Result<OutlineTree> {
    let mut children = Vec::with_capacity(object.properties.len());
    for member in &object.properties {
        let Node::Property(property) = member else {
            continue;
        };
        if let Some(child) = property_outline(options, property)? {
            children.push(child);
        }
    }

    let mut text = TokenizedText::new();
    text.push(plain("module.exports"));
    Ok(OutlineTree::leaf(OutlineKind::Module, text, None, extent).with_children(children))
}

fn property_outline(options: &OutlineOptions, property: &Property) -> Result<Option<OutlineTree>> {
    let Some(key) = property.key.as_identifier() else {
        return Ok(None);
    };
    let Some(extent) = Extent::from_loc(property.loc) else {
        return Ok(None);
    };
    let name = key.name.as_str();

    // `{ foo }` stands for `{ foo: foo }` and is listed like a method.
    if property.shorthand {
        let text = TokenizedText::from(vec![string(name)]);
        return Ok(Some(OutlineTree::leaf(
            OutlineKind::Method,
            text,
            Some(name.to_string()),
            extent,
        )));
    }

    if let Some(function) = property.value.as_function_expression() {
        let mut text = TokenizedText::new();
        text.push(method(name));
        if options.show_function_args {
            text.append(render_params(&function.params)?);
        }
        return Ok(Some(OutlineTree::leaf(
            OutlineKind::Method,
            text,
            Some(name.to_string()),
            extent,
        )));
    }

    let text = TokenizedText::from(vec![string(name), plain(":")]);
    Ok(Some(OutlineTree::leaf(
        OutlineKind::Field,
        text,
        Some(name.to_string()),
        extent,
    )))
}

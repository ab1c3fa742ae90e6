// AST data structures for Flow outline.
// These types mirror the ESTree-shaped JSON emitted by `flow ast`, restricted
// to the node kinds the outline builder looks at.

use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::{OutlineError, Result};

/// A `{line, column}` pair as written by the checker: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Source extent of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// A node in the abstract syntax tree.
///
/// Kinds the outline does not care about decode as [`Node::Other`], which keeps
/// the original `type` string around for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    FunctionDeclaration(Function),
    FunctionExpression(Function),
    ArrowFunctionExpression(Function),
    ClassDeclaration(Class),
    ClassExpression(Class),
    ClassProperty(ClassProperty),
    MethodDefinition(MethodDefinition),
    ExportNamedDeclaration(ExportDeclaration),
    ExportDefaultDeclaration(ExportDeclaration),
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    AssignmentExpression(AssignmentExpression),
    MemberExpression(MemberExpression),
    ObjectExpression(ObjectExpression),
    Property(Property),
    Identifier(Identifier),
    ObjectPattern(ObjectPattern),
    ArrayPattern(ArrayPattern),
    AssignmentPattern(AssignmentPattern),
    RestElement(RestElement),
    VariableDeclaration(VariableDeclaration),
    TypeAlias(TypeAlias),
    DeclareTypeAlias(TypeAlias),
    Literal(Literal),
    BlockStatement(BlockStatement),
    Other(OtherNode),
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Program {
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub body: Vec<Node>,
}

/// Shared shape of function declarations, function expressions and arrows.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Function {
    pub loc: Option<SourceLocation>,
    pub id: Option<Identifier>,
    #[serde(default)]
    pub params: Vec<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Class {
    pub loc: Option<SourceLocation>,
    pub id: Option<Identifier>,
    pub body: ClassBody,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ClassBody {
    #[serde(default)]
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ClassProperty {
    pub loc: Option<SourceLocation>,
    pub key: Box<Node>,
    pub value: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct MethodDefinition {
    pub loc: Option<SourceLocation>,
    pub key: Box<Node>,
    pub value: Box<Node>,
}

/// `export ...` and `export default ...`. Older Flow versions emit a single
/// `ExportDeclaration` kind with a `default` flag; it decodes to the named variant.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ExportDeclaration {
    pub loc: Option<SourceLocation>,
    pub declaration: Option<Box<Node>>,
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ExpressionStatement {
    pub loc: Option<SourceLocation>,
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CallExpression {
    pub loc: Option<SourceLocation>,
    pub callee: Box<Node>,
    #[serde(default)]
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct AssignmentExpression {
    pub loc: Option<SourceLocation>,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct MemberExpression {
    pub loc: Option<SourceLocation>,
    pub object: Box<Node>,
    pub property: Box<Node>,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ObjectExpression {
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub properties: Vec<Node>,
}

/// Object literal member, also used for the members of an object pattern.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Property {
    pub loc: Option<SourceLocation>,
    pub key: Box<Node>,
    pub value: Box<Node>,
    #[serde(default)]
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Identifier {
    pub loc: Option<SourceLocation>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ObjectPattern {
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub properties: Vec<Node>,
}

/// Array destructuring; `None` elements are elisions such as `[, b]`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ArrayPattern {
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub elements: Vec<Option<Node>>,
}

/// A binding with a default value. The default expression is never rendered,
/// so only the left side is kept.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct AssignmentPattern {
    pub loc: Option<SourceLocation>,
    pub left: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct RestElement {
    pub loc: Option<SourceLocation>,
    pub argument: Box<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct VariableDeclaration {
    pub loc: Option<SourceLocation>,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct VariableDeclarator {
    pub loc: Option<SourceLocation>,
    pub id: Box<Node>,
    pub init: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TypeAlias {
    pub loc: Option<SourceLocation>,
    pub id: Identifier,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Literal {
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct BlockStatement {
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub body: Vec<Node>,
}

/// Any node kind the outline has no rule for, or a known kind whose fields did
/// not have the expected shape.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherNode {
    pub kind: String,
    pub loc: Option<SourceLocation>,
}

const UNTYPED: &str = "<untyped>";

impl Node {
    /// Decode a JSON value leniently: anything unrecognized becomes [`Node::Other`].
    pub fn from_value(value: Value) -> Node {
        let kind = match value.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => {
                return Node::Other(OtherNode {
                    kind: UNTYPED.to_string(),
                    loc: None,
                })
            }
        };
        let loc = value
            .get("loc")
            .and_then(|loc| serde_json::from_value::<SourceLocation>(loc.clone()).ok());

        let decoded = match kind.as_str() {
            "Program" => decode(value, Node::Program),
            "FunctionDeclaration" => decode(value, Node::FunctionDeclaration),
            "FunctionExpression" => decode(value, Node::FunctionExpression),
            "ArrowFunctionExpression" => decode(value, Node::ArrowFunctionExpression),
            "ClassDeclaration" => decode(value, Node::ClassDeclaration),
            "ClassExpression" => decode(value, Node::ClassExpression),
            "ClassProperty" => decode(value, Node::ClassProperty),
            "MethodDefinition" => decode(value, Node::MethodDefinition),
            "ExportDeclaration" | "ExportNamedDeclaration" => {
                decode(value, Node::ExportNamedDeclaration)
            }
            "ExportDefaultDeclaration" => decode(value, Node::ExportDefaultDeclaration),
            "ExpressionStatement" => decode(value, Node::ExpressionStatement),
            "CallExpression" => decode(value, Node::CallExpression),
            "AssignmentExpression" => decode(value, Node::AssignmentExpression),
            "MemberExpression" => decode(value, Node::MemberExpression),
            "ObjectExpression" => decode(value, Node::ObjectExpression),
            "Property" => decode(value, Node::Property),
            "Identifier" => decode(value, Node::Identifier),
            "ObjectPattern" => decode(value, Node::ObjectPattern),
            "ArrayPattern" => decode(value, Node::ArrayPattern),
            "AssignmentPattern" => decode(value, Node::AssignmentPattern),
            "RestElement" => decode(value, Node::RestElement),
            "VariableDeclaration" => decode(value, Node::VariableDeclaration),
            "TypeAlias" => decode(value, Node::TypeAlias),
            "DeclareTypeAlias" => decode(value, Node::DeclareTypeAlias),
            "Literal" => decode(value, Node::Literal),
            "BlockStatement" => decode(value, Node::BlockStatement),
            _ => None,
        };

        decoded.unwrap_or(Node::Other(OtherNode { kind, loc }))
    }

    /// The ESTree `type` this node was decoded from.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Program(_) => "Program",
            Node::FunctionDeclaration(_) => "FunctionDeclaration",
            Node::FunctionExpression(_) => "FunctionExpression",
            Node::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Node::ClassDeclaration(_) => "ClassDeclaration",
            Node::ClassExpression(_) => "ClassExpression",
            Node::ClassProperty(_) => "ClassProperty",
            Node::MethodDefinition(_) => "MethodDefinition",
            Node::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
            Node::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::CallExpression(_) => "CallExpression",
            Node::AssignmentExpression(_) => "AssignmentExpression",
            Node::MemberExpression(_) => "MemberExpression",
            Node::ObjectExpression(_) => "ObjectExpression",
            Node::Property(_) => "Property",
            Node::Identifier(_) => "Identifier",
            Node::ObjectPattern(_) => "ObjectPattern",
            Node::ArrayPattern(_) => "ArrayPattern",
            Node::AssignmentPattern(_) => "AssignmentPattern",
            Node::RestElement(_) => "RestElement",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::TypeAlias(_) => "TypeAlias",
            Node::DeclareTypeAlias(_) => "DeclareTypeAlias",
            Node::Literal(_) => "Literal",
            Node::BlockStatement(_) => "BlockStatement",
            Node::Other(other) => &other.kind,
        }
    }

    pub fn loc(&self) -> Option<SourceLocation> {
        match self {
            Node::Program(n) => n.loc,
            Node::FunctionDeclaration(n)
            | Node::FunctionExpression(n)
            | Node::ArrowFunctionExpression(n) => n.loc,
            Node::ClassDeclaration(n) | Node::ClassExpression(n) => n.loc,
            Node::ClassProperty(n) => n.loc,
            Node::MethodDefinition(n) => n.loc,
            Node::ExportNamedDeclaration(n) | Node::ExportDefaultDeclaration(n) => n.loc,
            Node::ExpressionStatement(n) => n.loc,
            Node::CallExpression(n) => n.loc,
            Node::AssignmentExpression(n) => n.loc,
            Node::MemberExpression(n) => n.loc,
            Node::ObjectExpression(n) => n.loc,
            Node::Property(n) => n.loc,
            Node::Identifier(n) => n.loc,
            Node::ObjectPattern(n) => n.loc,
            Node::ArrayPattern(n) => n.loc,
            Node::AssignmentPattern(n) => n.loc,
            Node::RestElement(n) => n.loc,
            Node::VariableDeclaration(n) => n.loc,
            Node::TypeAlias(n) | Node::DeclareTypeAlias(n) => n.loc,
            Node::Literal(n) => n.loc,
            Node::BlockStatement(n) => n.loc,
            Node::Other(n) => n.loc,
        }
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Node::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// The function behind a function expression or arrow, if this is one.
    pub fn as_function_expression(&self) -> Option<&Function> {
        match self {
            Node::FunctionExpression(f) | Node::ArrowFunctionExpression(f) => Some(f),
            _ => None,
        }
    }

    /// The value of a string literal.
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Node::Literal(lit) => lit.value.as_str(),
            _ => None,
        }
    }
}

fn decode<T, F>(value: Value, wrap: F) -> Option<Node>
where
    T: serde::de::DeserializeOwned,
    F: FnOnce(T) -> Node,
{
    T::deserialize(serde_stacker::Deserializer::new(value))
        .ok()
        .map(wrap)
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Node::from_value(value))
    }
}

/// Parse the raw output of `flow ast` into a [`Program`].
///
/// Only the root is decoded strictly; everything below it is lenient.
/// Nesting depth is unbounded: long expression chains in ordinary code nest
/// far deeper than serde_json's default limit, so the stack grows on demand.
pub fn parse_program(raw: &str) -> Result<Program> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    program_from_value(value)
}

pub fn program_from_value(value: Value) -> Result<Program> {
    match value.get("type").and_then(Value::as_str) {
        Some("Program") => Ok(Program::deserialize(serde_stacker::Deserializer::new(value))?),
        Some(other) => Err(OutlineError::NotAProgram {
            kind: other.to_string(),
        }),
        None => Err(OutlineError::NotAProgram {
            kind: UNTYPED.to_string(),
        }),
    }
}

//! Test-framework call recognition.
//!
//! Jasmine, Mocha, Jest and AVA style `describe(...)` / `it(...)` calls are
//! shown in the outline as nested specs.

use super::ast::{CallExpression, Node};

/// Calls that group specs and get their body outlined.
pub const DESCRIBE_FUNCTIONS: &[&str] = &[
    "describe",
    "fdescribe",
    "ddescribe",
    "xdescribe",
    "describe.only",
    "describe.skip",
    "test.cb",
    "test.serial",
    "test.todo",
    "test.failing",
    "test",
    "test.concurrent",
    "test.only",
    "test.skip",
    "suite",
    "suite.only",
    "suite.skip",
    "xtest",
    "xtest.concurrent",
    "xtest.only",
    "xtest.skip",
];

/// Calls declaring a single spec. Always outline leaves.
pub const IT_FUNCTIONS: &[&str] = &["it", "fit", "iit", "pit", "xit", "it.only", "it.skip"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFamily {
    Describe,
    It,
}

impl SpecFamily {
    pub fn classify(function_name: &str) -> Option<SpecFamily> {
        if DESCRIBE_FUNCTIONS.contains(&function_name) {
            Some(SpecFamily::Describe)
        } else if IT_FUNCTIONS.contains(&function_name) {
            Some(SpecFamily::It)
        } else {
            None
        }
    }
}

/// A recognized spec call: `describe('name', () => { ... })`.
#[derive(Debug)]
pub struct SpecCall<'a> {
    pub function_name: String,
    pub family: SpecFamily,
    pub description: &'a str,
    pub body: &'a [Node],
}

impl<'a> SpecCall<'a> {
    pub fn recognize(call: &'a CallExpression) -> Option<SpecCall<'a>> {
        let function_name = function_name(&call.callee)?;
        let family = SpecFamily::classify(&function_name)?;
        let description = call.arguments.first()?.as_string_literal()?;
        let body = function_body(call.arguments.get(1)?)?;
        Some(SpecCall {
            function_name,
            family,
            description,
            body,
        })
    }
}

/// The callee as written: `describe`, or `describe.only` for a two-level member access.
pub fn function_name(callee: &Node) -> Option<String> {
    match callee {
        Node::Identifier(id) => Some(id.name.clone()),
        Node::MemberExpression(member) if !member.computed => {
            let object = member.object.as_identifier()?;
            let property = member.property.as_identifier()?;
            Some(format!("{}.{}", object.name, property.name))
        }
        _ => None,
    }
}

// Only block bodies count; `it('x', () => expr)` has no statements to outline.
fn function_body(node: &Node) -> Option<&[Node]> {
    let function = node.as_function_expression()?;
    match function.body.as_ref() {
        Node::BlockStatement(block) => Some(&block.body),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(callee: serde_json::Value, args: serde_json::Value) -> CallExpression {
        match Node::from_value(json!({ "type": "CallExpression", "callee": callee, "arguments": args })) {
            Node::CallExpression(call) => call,
            other => panic!("not a call: {:?}", other),
        }
    }

    fn ident(name: &str) -> serde_json::Value {
        json!({ "type": "Identifier", "name": name })
    }

    fn arrow() -> serde_json::Value {
        json!({ "type": "ArrowFunctionExpression", "params": [], "body": { "type": "BlockStatement", "body": [] } })
    }

    #[test]
    fn test_classify() {
        assert_eq!(SpecFamily::classify("describe.only"), Some(SpecFamily::Describe));
        assert_eq!(SpecFamily::classify("test.serial"), Some(SpecFamily::Describe));
        assert_eq!(SpecFamily::classify("xit"), Some(SpecFamily::It));
        assert_eq!(SpecFamily::classify("expect"), None);
    }

    #[test]
    fn test_member_callee_name() {
        let callee = Node::from_value(json!({
            "type": "MemberExpression",
            "object": ident("it"),
            "property": ident("skip"),
        }));
        assert_eq!(function_name(&callee).as_deref(), Some("it.skip"));
    }

    #[test]
    fn test_recognize_requires_string_and_block_function() {
        let ok = call(ident("it"), json!([{ "type": "Literal", "value": "works" }, arrow()]));
        let spec = SpecCall::recognize(&ok).unwrap();
        assert_eq!(spec.family, SpecFamily::It);
        assert_eq!(spec.description, "works");

        let numeric = call(ident("it"), json!([{ "type": "Literal", "value": 3 }, arrow()]));
        assert!(SpecCall::recognize(&numeric).is_none());

        let no_body = call(ident("describe"), json!([{ "type": "Literal", "value": "x" }]));
        assert!(SpecCall::recognize(&no_body).is_none());

        let expression_body = call(
            ident("it"),
            json!([
                { "type": "Literal", "value": "x" },
                { "type": "ArrowFunctionExpression", "params": [], "body": ident("y") },
            ]),
        );
        assert!(SpecCall::recognize(&expression_body).is_none());
    }
}

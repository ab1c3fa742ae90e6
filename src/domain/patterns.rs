//! Binding pattern rendering.
//!
//! Renders parameter lists and destructured bindings as tokens:
//! `a`, `{a, b}`, `[first, ...rest]`. Default values are dropped.

use super::ast::Node;
use super::error::{OutlineError, Result};
use super::text::{param, plain, whitespace, TokenizedText};

/// Render a comma separated list of patterns.
pub fn render_patterns<'a, I>(patterns: I) -> Result<TokenizedText>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut text = TokenizedText::new();
    for (index, pattern) in patterns.into_iter().enumerate() {
        if index > 0 {
            text.push(plain(",")).push(whitespace(" "));
        }
        render_pattern(pattern, &mut text)?;
    }
    Ok(text)
}

/// `(` + patterns + `)`.
pub fn render_params(params: &[Node]) -> Result<TokenizedText> {
    let mut text = TokenizedText::new();
    text.push(plain("("));
    text.append(render_patterns(params)?);
    text.push(plain(")"));
    Ok(text)
}

fn render_pattern(pattern: &Node, out: &mut TokenizedText) -> Result<()> {
    match pattern {
        Node::Identifier(id) => {
            out.push(param(id.name.as_str()));
        }
        Node::ObjectPattern(object) => {
            out.push(plain("{"));
            out.append(render_patterns(
                object.properties.iter().map(object_pattern_member),
            )?);
            out.push(plain("}"));
        }
        Node::ArrayPattern(array) => {
            out.push(plain("["));
            out.append(render_patterns(array.elements.iter().flatten())?);
            out.push(plain("]"));
        }
        Node::AssignmentPattern(assignment) => render_pattern(&assignment.left, out)?,
        Node::RestElement(rest) => {
            out.push(plain("..."));
            render_pattern(&rest.argument, out)?;
        }
        other => return Err(OutlineError::unexpected_pattern(other.kind_name())),
    }
    Ok(())
}

// Object patterns list their keys; `{...rest}` members are rendered whole.
fn object_pattern_member(member: &Node) -> &Node {
    match member {
        Node::Property(property) => property.key.as_ref(),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        Node::from_value(value)
    }

    fn ident(name: &str) -> serde_json::Value {
        json!({ "type": "Identifier", "name": name })
    }

    fn prop(name: &str) -> serde_json::Value {
        json!({ "type": "Property", "key": ident(name), "value": ident(name), "shorthand": true })
    }

    #[test]
    fn test_identifiers_are_comma_joined() {
        let params = vec![node(ident("a")), node(ident("b"))];
        let text = render_params(&params).unwrap();
        assert_eq!(text.text(), "(a, b)");
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(render_params(&[]).unwrap().text(), "()");
    }

    #[test]
    fn test_object_pattern_renders_keys() {
        let pattern = node(json!({
            "type": "ObjectPattern",
            "properties": [
                prop("a"),
                { "type": "Property", "key": ident("b"), "value": ident("renamed") },
            ],
        }));
        assert_eq!(render_patterns([&pattern]).unwrap().text(), "{a, b}");
    }

    #[test]
    fn test_nested_array_rest_and_default() {
        let pattern = node(json!({
            "type": "ArrayPattern",
            "elements": [
                null,
                { "type": "AssignmentPattern", "left": ident("first"), "right": { "type": "Literal", "value": 1 } },
                { "type": "ArrayPattern", "elements": [ident("x")] },
                { "type": "RestElement", "argument": ident("rest") },
            ],
        }));
        assert_eq!(render_patterns([&pattern]).unwrap().text(), "[first, [x], ...rest]");
    }

    #[test]
    fn test_object_rest_member() {
        let pattern = node(json!({
            "type": "ObjectPattern",
            "properties": [prop("a"), { "type": "RestElement", "argument": ident("others") }],
        }));
        assert_eq!(render_patterns([&pattern]).unwrap().text(), "{a, ...others}");
    }

    #[test]
    fn test_unknown_pattern_is_fatal() {
        let pattern = node(json!({ "type": "MemberExpression", "object": ident("a"), "property": ident("b") }));
        let err = render_patterns([&pattern]).unwrap_err();
        assert!(matches!(err, OutlineError::UnexpectedPattern { ref kind } if kind == "MemberExpression"));
        assert_eq!(err.to_string(), "encountered unexpected argument type MemberExpression");
    }
}

// ABOUTME: Renders one generated click function from a locator and a name.
// ABOUTME: Escapes the interpolated locator so generated source stays well-formed.

use crate::dom::locator::Locator;

/// Render one click stub.
///
/// The body evaluates the locator against the document body, takes the
/// first matching node, and dispatches a synthetic click. The template has
/// exactly two substitution points; the locator is escaped for the
/// single-quoted string it lands in, so an id value containing a quote
/// cannot break the generated source. Names contain only letters and
/// digits by construction and need no escaping.
pub fn emit_stub(locator: &Locator, name: &str) -> String {
    format!(
        "export function click_{}() {{\n    \
         (document.evaluate('{}', document.body, null, XPathResult.FIRST_ORDERED_NODE_TYPE)!\
         .singleNodeValue as HTMLElement).click();\n}}",
        name,
        escape_single_quoted(locator.as_str())
    )
}

/// Escape a string for embedding between single quotes in generated JS.
fn escape_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn emits_named_function_with_locator() {
        let stub = emit_stub(&Locator::id("b1"), "Go");

        assert_eq!(
            stub,
            "export function click_Go() {\n    \
             (document.evaluate('id(\"b1\")', document.body, null, XPathResult.FIRST_ORDERED_NODE_TYPE)!\
             .singleNodeValue as HTMLElement).click();\n}"
        );
    }

    #[test]
    fn structural_locator_is_interpolated_verbatim() {
        let stub = emit_stub(&Locator::path("/html/body/A[2]"), "Next");

        assert!(stub.starts_with("export function click_Next()"));
        assert!(stub.contains("document.evaluate('/html/body/A[2]'"));
    }

    #[test]
    fn single_quotes_in_locator_are_escaped() {
        let stub = emit_stub(&Locator::id("it's"), "X");

        assert!(stub.contains(r#"'id("it\'s")'"#));
    }

    #[test]
    fn backslashes_in_locator_are_escaped() {
        let stub = emit_stub(&Locator::id(r"a\b"), "X");

        assert!(stub.contains(r#"id("a\\b")"#));
    }
}

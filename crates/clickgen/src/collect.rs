// ABOUTME: Selects the interactive elements a document's stubs are generated for.
// ABOUTME: Buttons first, then anchors, each group in document order.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// The selector set is the single place to extend when more interactive tag
// types come into scope.
static BUTTONS: Lazy<Selector> = Lazy::new(|| Selector::parse("button").expect("static selector"));
static ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("static selector"));

/// Collect the elements to generate stubs for: every `button` in document
/// order, then every `a` in document order.
pub fn collect(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&BUTTONS).chain(doc.select(&ANCHORS)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buttons_come_before_anchors() {
        let doc = Html::parse_document(
            r#"<html><body>
            <a href="/1">one</a>
            <button>first</button>
            <a href="/2">two</a>
            <button>second</button>
            <a href="/3">three</a>
            </body></html>"#,
        );

        let elements = collect(&doc);
        let tags: Vec<&str> = elements.iter().map(|el| el.value().name()).collect();

        assert_eq!(elements.len(), 5);
        assert_eq!(tags, vec!["button", "button", "a", "a", "a"]);
    }

    #[test]
    fn each_group_keeps_document_order() {
        let doc = Html::parse_document(
            r#"<html><body>
            <a href="/1">one</a>
            <button>first</button>
            <a href="/2">two</a>
            <button>second</button>
            </body></html>"#,
        );

        let texts: Vec<String> = collect(&doc)
            .iter()
            .map(|el| el.text().collect::<String>())
            .collect();

        assert_eq!(texts, vec!["first", "second", "one", "two"]);
    }

    #[test]
    fn nested_interactive_elements_are_found() {
        let doc = Html::parse_document(
            r#"<html><body><div><nav><a href="/deep">deep</a></nav></div></body></html>"#,
        );

        assert_eq!(collect(&doc).len(), 1);
    }

    #[test]
    fn empty_document_collects_nothing() {
        let doc = Html::parse_document("<html><body><p>no links here</p></body></html>");
        assert!(collect(&doc).is_empty());
    }
}

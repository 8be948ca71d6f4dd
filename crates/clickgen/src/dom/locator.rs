// ABOUTME: Structural locator resolution for DOM elements.
// ABOUTME: Produces id("...") locators or positional XPath-style paths from the document root.

//! Locator resolution.
//!
//! A locator addresses exactly one node in a specific document snapshot.
//! Resolution prefers the element's `id` attribute (order-independent) and
//! falls back to a positional path built from ancestor tag names and
//! same-tag sibling counts. Positional steps use the uppercase tag form
//! that browser DOMs report, so the emitted path matches what
//! `document.evaluate` sees at click time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::node::DomNode;
use crate::error::GenerateError;

/// A string locator addressing one node in a document snapshot.
///
/// Either an absolute identifier reference (`id("...")`) or a positional
/// structural path from the document root. Not stable if the document
/// mutates after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// An absolute identifier locator: `id("<value>")`.
    pub fn id(value: &str) -> Self {
        Locator(format!("id(\"{}\")", value))
    }

    /// A structural path locator.
    pub fn path(path: impl Into<String>) -> Self {
        Locator(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is an identifier-based locator.
    pub fn is_id(&self) -> bool {
        self.0.starts_with("id(")
    }

    fn join_step(&self, step: &str) -> Self {
        Locator(format!("{}{}", self.0, step))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolve a unique locator for an element.
///
/// Precedence:
/// 1. A non-empty `id` attribute yields `id("<value>")` regardless of
///    position in the tree. Duplicate ids are not deduplicated; ids are
///    assumed unique by convention.
/// 2. The `body` element yields the fixed literal `/html/body`.
/// 3. Otherwise the parent is resolved recursively and a positional step is
///    appended: `/<TAG>` for the first same-tag sibling, `/<TAG>[n]`
///    (1-based) thereafter. Only element siblings count.
///
/// A detached element (no parent, not `body`) cannot be addressed and fails
/// with an `Unresolved` error.
pub fn resolve<N: DomNode>(node: &N) -> Result<Locator, GenerateError> {
    if let Some(id) = node.id_attr() {
        if !id.is_empty() {
            return Ok(Locator::id(&id));
        }
    }

    let tag = node.tag_name();
    if tag.eq_ignore_ascii_case("body") {
        return Ok(Locator::path("/html/body"));
    }

    let parent = match node.parent() {
        Some(p) => p,
        None => {
            return Err(GenerateError::unresolved(
                &tag,
                "Resolve",
                Some(anyhow::anyhow!("element has no parent and is not body")),
            ));
        }
    };

    // Count prior siblings sharing this tag; stop at the node itself.
    let mut ix = 0usize;
    for sibling in parent.children() {
        if sibling == *node {
            let step = if ix == 0 {
                format!("/{}", tag.to_ascii_uppercase())
            } else {
                format!("/{}[{}]", tag.to_ascii_uppercase(), ix + 1)
            };
            return Ok(resolve(&parent)?.join_step(&step));
        }
        if sibling.tag_name() == tag {
            ix += 1;
        }
    }

    Err(GenerateError::unresolved(
        &tag,
        "Resolve",
        Some(anyhow::anyhow!(
            "element not found among its parent's children"
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::ScraperNode;
    use pretty_assertions::assert_eq;
    use scraper::{ElementRef, Html, Selector};

    fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).collect()
    }

    fn resolve_one(doc: &Html, css: &str) -> Locator {
        let els = select_all(doc, css);
        resolve(&ScraperNode::new(els[0])).unwrap()
    }

    #[test]
    fn id_attribute_takes_precedence() {
        let doc = Html::parse_document(
            r#"<html><body><div><div><button id="deep">Go</button></div></div></body></html>"#,
        );
        assert_eq!(resolve_one(&doc, "button"), Locator::id("deep"));
        assert_eq!(resolve_one(&doc, "button").as_str(), r#"id("deep")"#);
    }

    #[test]
    fn empty_id_falls_back_to_structural_path() {
        let doc =
            Html::parse_document(r#"<html><body><button id="">Go</button></body></html>"#);
        assert_eq!(resolve_one(&doc, "button").as_str(), "/html/body/BUTTON");
    }

    #[test]
    fn body_is_the_fixed_literal() {
        let doc = Html::parse_document("<html><body><p>x</p></body></html>");
        assert_eq!(resolve_one(&doc, "body").as_str(), "/html/body");
    }

    #[test]
    fn sibling_index_is_one_based_and_omitted_for_first() {
        let doc = Html::parse_document(
            "<html><body><ul><li>a</li><li>b</li><li>c</li></ul></body></html>",
        );
        let items = select_all(&doc, "li");

        let paths: Vec<String> = items
            .iter()
            .map(|el| resolve(&ScraperNode::new(*el)).unwrap().to_string())
            .collect();

        assert_eq!(
            paths,
            vec![
                "/html/body/UL/LI",
                "/html/body/UL/LI[2]",
                "/html/body/UL/LI[3]",
            ]
        );
    }

    #[test]
    fn siblings_of_other_tags_do_not_count() {
        let doc = Html::parse_document(
            "<html><body><button>one</button><a href=\"/x\">x</a><button>two</button></body></html>",
        );
        let buttons = select_all(&doc, "button");

        let second = resolve(&ScraperNode::new(buttons[1])).unwrap();
        assert_eq!(second.as_str(), "/html/body/BUTTON[2]");

        let anchor = resolve_one(&doc, "a");
        assert_eq!(anchor.as_str(), "/html/body/A");
    }

    #[test]
    fn text_nodes_between_siblings_are_ignored() {
        let doc = Html::parse_document(
            "<html><body>lead <a>one</a> mid <a>two</a> tail</body></html>",
        );
        let anchors = select_all(&doc, "a");

        let second = resolve(&ScraperNode::new(anchors[1])).unwrap();
        assert_eq!(second.as_str(), "/html/body/A[2]");
    }

    #[test]
    fn ancestor_id_anchors_the_path() {
        let doc = Html::parse_document(
            r#"<html><body><nav id="menu"><a href="/x">x</a></nav></body></html>"#,
        );
        assert_eq!(resolve_one(&doc, "a").as_str(), r#"id("menu")/A"#);
    }

    #[test]
    fn resolve_is_idempotent() {
        let doc = Html::parse_document(
            "<html><body><div><a href=\"/a\">a</a><a href=\"/b\">b</a></div></body></html>",
        );
        let anchors = select_all(&doc, "a");
        let node = ScraperNode::new(anchors[1]);

        let first = resolve(&node).unwrap();
        let second = resolve(&node).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn detached_element_is_unresolved() {
        #[derive(Debug, Clone, PartialEq)]
        struct Detached;

        impl DomNode for Detached {
            fn tag_name(&self) -> String {
                "div".to_string()
            }
            fn id_attr(&self) -> Option<String> {
                None
            }
            fn parent(&self) -> Option<Self> {
                None
            }
            fn children(&self) -> Vec<Self> {
                Vec::new()
            }
        }

        let err = resolve(&Detached).unwrap_err();
        assert!(err.is_unresolved());
        assert_eq!(err.subject, "div");
    }
}

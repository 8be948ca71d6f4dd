// ABOUTME: Abstract node capabilities consumed by the locator resolver.
// ABOUTME: ScraperNode adapts scraper::ElementRef to the DomNode trait.

use scraper::ElementRef;

/// The node capabilities the locator resolver needs.
///
/// Equality must mean "same node in the same document", so a node can be
/// found among its parent's children.
pub trait DomNode: PartialEq + Sized {
    /// The element's tag name as reported by the parser.
    fn tag_name(&self) -> String;

    /// The element's `id` attribute value, if present.
    fn id_attr(&self) -> Option<String>;

    /// The parent element, or `None` at the top of the element tree.
    fn parent(&self) -> Option<Self>;

    /// Element children in document order. Text and comment nodes are
    /// excluded.
    fn children(&self) -> Vec<Self>;
}

/// A [`DomNode`] backed by a `scraper` element reference.
#[derive(Debug, Clone, Copy)]
pub struct ScraperNode<'a> {
    el: ElementRef<'a>,
}

impl<'a> ScraperNode<'a> {
    pub fn new(el: ElementRef<'a>) -> Self {
        Self { el }
    }
}

impl PartialEq for ScraperNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        // ego-tree node ids are unique within a document
        self.el.id() == other.el.id()
    }
}

impl<'a> DomNode for ScraperNode<'a> {
    fn tag_name(&self) -> String {
        self.el.value().name().to_string()
    }

    fn id_attr(&self) -> Option<String> {
        self.el.value().attr("id").map(str::to_string)
    }

    fn parent(&self) -> Option<Self> {
        self.el.parent().and_then(ElementRef::wrap).map(Self::new)
    }

    fn children(&self) -> Vec<Self> {
        self.el
            .children()
            .filter_map(ElementRef::wrap)
            .map(Self::new)
            .collect()
    }
}

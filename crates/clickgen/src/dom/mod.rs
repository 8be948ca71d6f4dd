// ABOUTME: DOM traversal module for locating elements within a parsed document.
// ABOUTME: Holds the node-capability trait and the structural locator resolver.

//! DOM traversal for locator resolution.
//!
//! The resolver never touches a parsing-library type directly: it operates
//! on the [`node::DomNode`] capability trait, with [`node::ScraperNode`]
//! adapting `scraper`'s element references to it. Swapping the parser means
//! writing one more adapter, not rewriting the resolver.

pub mod locator;
pub mod node;

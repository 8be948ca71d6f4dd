// ABOUTME: The source generator: parses HTML and renders one click stub per element.
// ABOUTME: Sequential, deterministic, fail-fast; disambiguates colliding names with ordinals.

use std::collections::HashMap;

use scraper::Html;

use crate::collect::collect;
use crate::dom::locator::resolve;
use crate::dom::node::ScraperNode;
use crate::emit::emit_stub;
use crate::error::GenerateError;
use crate::naming::derive_name;
use crate::result::{Generated, Stub};

/// Generate click stubs for every interactive element in the document.
///
/// Elements are processed strictly in collection order (buttons first, then
/// anchors, document order within each group), so output is deterministic.
/// Any element that cannot be resolved or named aborts the whole run; there
/// is no per-element isolation and no partial output.
///
/// Name stripping can map distinct elements onto the same fragment; the
/// second and later occurrences get an ordinal suffix (`Go`, `Go2`, `Go3`)
/// so the output never holds duplicate function definitions.
pub fn generate(html: &str) -> Result<Generated, GenerateError> {
    let doc = Html::parse_document(html);
    let elements = collect(&doc);
    tracing::debug!(count = elements.len(), "collected interactive elements");

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut code = String::new();
    let mut stubs = Vec::with_capacity(elements.len());

    for el in elements {
        let node = ScraperNode::new(el);
        let locator = resolve(&node)?;
        let name = disambiguate(&mut seen, derive_name(&el)?);

        code.push_str(&emit_stub(&locator, &name));
        code.push('\n');
        stubs.push(Stub {
            name,
            locator: locator.to_string(),
        });
    }

    Ok(Generated {
        code,
        stubs,
        ..Default::default()
    })
}

fn disambiguate(seen: &mut HashMap<String, usize>, base: String) -> String {
    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{}{}", base, *count)
    }
}

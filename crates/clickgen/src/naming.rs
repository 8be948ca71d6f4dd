// ABOUTME: Derives function-name fragments from an element's text or link target.
// ABOUTME: Strips every non-ASCII-letter character so the fragment is a legal identifier.

use scraper::ElementRef;

use crate::error::GenerateError;

/// Derive a function-name fragment for an element.
///
/// Uses the element's text content when non-empty, falling back to its
/// `href` attribute. Every character that is not an ASCII letter is
/// stripped, digits and punctuation included, so the fragment can be
/// spliced into a function name as-is. An element with neither source
/// fails with a `NameSource` error; the run has no per-element isolation,
/// so the caller aborts.
///
/// Distinct elements can collide onto the same fragment ("Go!" and "go");
/// disambiguation happens in the generator, not here.
pub fn derive_name(el: &ElementRef) -> Result<String, GenerateError> {
    let text: String = el.text().collect();
    let source = if !text.is_empty() {
        text
    } else if let Some(href) = el.value().attr("href") {
        href.to_string()
    } else {
        return Err(GenerateError::name_source(
            el.value().name(),
            "DeriveName",
            Some(anyhow::anyhow!(
                "element has no text content and no href attribute"
            )),
        ));
    };

    Ok(source.chars().filter(char::is_ascii_alphabetic).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn derive_first(html: &str, css: &str) -> Result<String, GenerateError> {
        let doc = Html::parse_document(html);
        let sel = Selector::parse(css).unwrap();
        let el = doc.select(&sel).next().unwrap();
        derive_name(&el)
    }

    #[test]
    fn strips_non_letter_characters() {
        let name = derive_first("<button>Go! Now 2</button>", "button").unwrap();
        assert_eq!(name, "GoNow");
    }

    #[test]
    fn falls_back_to_href_when_text_is_empty() {
        let name = derive_first(r#"<a href="/go-now"></a>"#, "a").unwrap();
        assert_eq!(name, "gonow");
    }

    #[test]
    fn text_wins_over_href() {
        let name = derive_first(r#"<a href="/other">Click Me</a>"#, "a").unwrap();
        assert_eq!(name, "ClickMe");
    }

    #[test]
    fn nested_text_is_concatenated() {
        let name = derive_first("<button><span>Sub</span>mit</button>", "button").unwrap();
        assert_eq!(name, "Submit");
    }

    #[test]
    fn missing_text_and_href_is_an_error() {
        let err = derive_first("<button></button>", "button").unwrap_err();
        assert!(err.is_name_source());
        assert_eq!(err.subject, "button");
    }
}

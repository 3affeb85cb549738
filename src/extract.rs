use regex::Regex;
use std::sync::OnceLock;

static SHORT_DESCRIPTION: OnceLock<Regex> = OnceLock::new();

fn short_description_regex() -> &'static Regex {
    SHORT_DESCRIPTION.get_or_init(|| {
        Regex::new(r"(?im)\{\{short description\|(.*?)\}\}").expect("valid short description pattern")
    })
}

/// Returns the first positional parameter of the first `{{Short description|...}}`
/// template in `content`, exactly as written between the `|` and the closing
/// `}}`. The template name matches in any casing.
pub fn extract_short_description(content: &str) -> Option<&str> {
    short_description_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[test]
fn test_extract_short_description() {
    {
        let content = "{{Short description|Canadian computer scientist}}\n{{Use mdy dates|date=March 2019}}";
        assert_eq!(
            extract_short_description(content),
            Some("Canadian computer scientist")
        );
    }

    {
        let content = "{{wiktionary|Kim|kim}}";
        assert_eq!(extract_short_description(content), None);
    }

    {
        let content = "{{SHORT DESCRIPTION|Shouted}}";
        assert_eq!(extract_short_description(content), Some("Shouted"));
    }

    {
        let content = "";
        assert_eq!(extract_short_description(content), None);
    }
}

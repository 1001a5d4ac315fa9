use std::collections::{HashMap, HashSet};

/// Render provider-supplied markdown to HTML safe for `dangerous_inner_html`.
///
/// Everything that goes through here came from a remote model, so the output
/// is always run through the sanitizer.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn markdown_to_html_keeps_code_blocks() {
        let html = markdown_to_html("```\nlet x = 1;\n```");
        assert!(html.contains("<pre>"));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn sanitize_html_strips_scripts() {
        let html = sanitize_html("<p>ok</p><script>alert(1)</script>");
        assert!(html.contains("<p>ok</p>"));
        assert!(!html.contains("script"));
    }
}

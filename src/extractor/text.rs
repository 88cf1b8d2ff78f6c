//! Html to scannable text.

use scraper::{ElementRef, Html, Node};

/// Subtrees that never hold visible text.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "svg", "template", "head"];

/// Elements whose boundaries end a line of text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section",
    "table", "td", "th", "tr", "ul", "body",
];

/// Extract visible text from an html document.
///
/// Text inside one block is collapsed to single spaces; block boundaries
/// become `\n`, so a name can never be stitched together from two blocks.
/// Every element or text node boundary is at least a space.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    walk(document.root_element(), &mut raw);
    normalize_whitespace(&raw)
}

fn walk(element: ElementRef, out: &mut String) {
    let name = element.value().name();
    if SKIPPED_TAGS.contains(&name) {
        return;
    }
    let boundary = if BLOCK_TAGS.contains(&name) { '\n' } else { ' ' };
    out.push(boundary);
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            walk(child_element, out);
        } else if let Node::Text(text) = child.value() {
            out.push(' ');
            out.push_str(text);
            out.push(' ');
        }
    }
    out.push(boundary);
}

/// Collapse whitespace runs: a run holding a line break becomes `\n`,
/// anything else a single space. Lines are trimmed and empty lines dropped.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_and_styles_are_dropped() {
        let html = r#"<html><head><title>T</title><style>p { color: red }</style></head>
            <body><script>var founder = "Evil Person";</script>
            <p>Founded by <b>Jane</b> Smith</p></body></html>"#;
        assert_eq!(html_to_text(html), "Founded by Jane Smith");
    }

    #[test]
    fn blocks_become_lines() {
        let html = "<div><h3>Jane Smith</h3><p>Co-Founder &amp; CEO</p></div>";
        assert_eq!(html_to_text(html), "Jane Smith\nCo-Founder & CEO");
    }

    #[test]
    fn adjacent_inline_elements_keep_a_boundary() {
        let html = "<div><span>Jane Smith</span><span>Co-Founder</span></div>";
        assert_eq!(html_to_text(html), "Jane Smith Co-Founder");
        let html = "<p>Acme was founded by<a href=\"/jane\">Jane Smith</a> in 2010</p>";
        assert_eq!(html_to_text(html), "Acme was founded by Jane Smith in 2010");
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize_whitespace("  a \t b\n\n  c  "), "a b\nc");
    }
}

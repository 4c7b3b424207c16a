//! Server-side markup for the drive list block.

use provider_google_drive::Node;

/// Markup shown when a tree has no entries
pub const EMPTY_TREE_MARKUP: &str = "<div>No files to display</div>";

/// Render a tree as nested lists.
///
/// Files become links, folders a name followed by the nested list of their
/// children (empty folders keep an empty list). Names and URLs are escaped.
pub fn render_tree(nodes: &[Node]) -> String {
    if nodes.is_empty() {
        return EMPTY_TREE_MARKUP.to_string();
    }

    let mut out = String::new();
    render_list(nodes, &mut out);
    out
}

fn render_list(nodes: &[Node], out: &mut String) {
    out.push_str(r#"<ul class="drive-list-list">"#);

    for node in nodes {
        out.push_str("<li>");
        match node {
            Node::File { name, url } => {
                out.push_str(&format!(
                    r#"<a href="{}">{}</a>"#,
                    escape(url),
                    escape(name)
                ));
            }
            Node::Folder { name, children } => {
                out.push_str(&format!(
                    r#"<span class="drive-list-folder-name">{}</span>"#,
                    escape(name)
                ));
                render_list(children, out);
            }
        }
        out.push_str("</li>");
    }

    out.push_str("</ul>");
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

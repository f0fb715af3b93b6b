//! HTML fragment renderer.
//!
//! Produces a newline-joined fragment, not a standalone page: the host
//! supplies the `<html>` shell, the stylesheet, and the math/diagram
//! runtimes. Every element carries a stable CSS class so host styling never
//! depends on element order.
//!
//! Mapping is total over [`Block`]; there is no error path.

use crate::ast::{Block, CodeBlock, Document, List, ListKind, Table};
use crate::inline::{escape_html, render_inline};

/// Render a classified document to an HTML fragment.
pub fn render_html(doc: &Document<'_>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(doc.blocks.len());
    for block in &doc.blocks {
        render_block(block, &mut parts);
    }
    parts.join("\n")
}

fn render_block(block: &Block<'_>, parts: &mut Vec<String>) {
    match block {
        Block::Title(b) => parts.push(format!(
            "<h1 class=\"title\">{}</h1>",
            render_inline(&b.text)
        )),
        Block::Heading(b) => parts.push(format!(
            "<h2 class=\"heading\">{}</h2>",
            render_inline(&b.text)
        )),
        Block::Subheading(b) => parts.push(format!(
            "<h3 class=\"subheading\">{}</h3>",
            render_inline(&b.text)
        )),
        Block::Subsubheading(b) => parts.push(format!(
            "<h4 class=\"subsubheading\">{}</h4>",
            render_inline(&b.text)
        )),
        Block::Paragraph(b) => parts.push(format!(
            "<p class=\"paragraph\">{}</p>",
            render_inline(&b.text)
        )),
        Block::Quote(b) => parts.push(format!(
            "<blockquote class=\"quote\">{}</blockquote>",
            render_inline(&b.text)
        )),
        Block::CodeBlock(code) => parts.push(render_code(code)),
        Block::List(list) => parts.push(render_list(list)),
        Block::Table(table) => parts.push(render_table(table)),
        Block::Divider(_) => parts.push("<hr class=\"divider\">".to_string()),
        Block::RawHtml(raw) => parts.push(raw.content.to_string()),
    }
}

/// Diagram fences become a `<div class="mermaid">` holding the escaped
/// source for the client-side renderer; everything else becomes a
/// `<pre>`/`<code>` pair wrapped for copy-button overlays. The payload is
/// escaped but never inline-transformed.
fn render_code(code: &CodeBlock<'_>) -> String {
    if code.is_diagram() {
        return format!(
            "<div class=\"mermaid\">{}</div>",
            escape_html(&code.content)
        );
    }

    match &code.lang {
        // the tag comes from untrusted source text and lands in attribute
        // position, so quotes are escaped along with the usual three
        Some(lang) => {
            let lang = escape_html(lang).replace('"', "&quot;");
            format!(
                "<div class=\"code-wrapper\" data-lang=\"{lang}\"><pre class=\"code-block\"><code class=\"{lang}\">{}</code></pre></div>",
                escape_html(&code.content)
            )
        }
        None => format!(
            "<div class=\"code-wrapper\"><pre class=\"code-block\"><code>{}</code></pre></div>",
            escape_html(&code.content)
        ),
    }
}

fn render_list(list: &List<'_>) -> String {
    let tag = match list.kind {
        ListKind::Ordered => "ol",
        ListKind::Unordered => "ul",
    };
    let mut lines = Vec::with_capacity(list.items.len() + 2);
    lines.push(format!("<{tag} class=\"list\">"));
    for item in &list.items {
        lines.push(format!("<li>{}</li>", render_inline(item)));
    }
    lines.push(format!("</{tag}>"));
    lines.join("\n")
}

/// Row 0 renders as `<thead>`, the rest as `<tbody>`. Cells go through the
/// full inline transformer, so formatting and links work inside tables.
fn render_table(table: &Table<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("<table class=\"table\">".to_string());

    lines.push("<thead><tr>".to_string());
    for cell in &table.rows[0] {
        lines.push(format!("<th>{}</th>", render_inline(cell)));
    }
    lines.push("</tr></thead>".to_string());

    lines.push("<tbody>".to_string());
    for row in &table.rows[1..] {
        lines.push("<tr>".to_string());
        for cell in row {
            lines.push(format!("<td>{}</td>", render_inline(cell)));
        }
        lines.push("</tr>".to_string());
    }
    lines.push("</tbody></table>".to_string());

    lines.join("\n")
}

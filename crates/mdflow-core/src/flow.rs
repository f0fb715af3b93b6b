//! Print flow renderer.
//!
//! Maps a classified document onto a linear sequence of [`FlowItem`]s, the
//! input model of a paginated layout engine. The mapping is total except
//! for raw passthrough blocks, which have no print meaning and are skipped.
//!
//! Paragraph text is markup-escaped but carries the inline Markdown markers
//! verbatim; the layout host decides what its rich-text dialect supports.

use serde::Serialize;

use crate::ast::{Block, CodeBlock, Document, List, Table};
use crate::theme::{Style, StyleKind, TableLayout, Theme};

/// Gap below a list, in centimeters.
const LIST_SPACER: f32 = 0.2;
/// Gap below a table, in centimeters.
const TABLE_SPACER: f32 = 0.5;
/// Vertical room a divider occupies, in centimeters.
const DIVIDER_SPACER: f32 = 0.5;

/// One item in the print flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowItem {
    /// Styled text run.
    Paragraph { text: String, style: Style },
    /// Fixed vertical gap in centimeters.
    Spacer { height: f32 },
    /// Grid with per-table resolved styling.
    Table(FlowTable),
}

/// A table ready for grid layout. Carries its own resolved colors and
/// geometry so the layout engine needs no theme access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowTable {
    /// Escaped cell texts; row 0 is the header.
    pub rows: Vec<Vec<String>>,
    pub col_widths: Vec<f32>,
    pub border_width: f32,
    pub header_background: String,
    pub header_text: String,
    pub header_font_size: f32,
    pub row_background: String,
    pub border_color: String,
}

/// Render a classified document into a print flow under the given theme.
pub fn render_document(doc: &Document<'_>, theme: &dyn Theme) -> Vec<FlowItem> {
    let mut items: Vec<FlowItem> = Vec::with_capacity(doc.blocks.len() * 2);
    for block in &doc.blocks {
        render_block(block, theme, &mut items);
    }
    items
}

fn render_block(block: &Block<'_>, theme: &dyn Theme, items: &mut Vec<FlowItem>) {
    match block {
        Block::Title(b) => {
            items.push(paragraph(&b.text, theme.style_for(StyleKind::Title)));
            items.push(FlowItem::Spacer {
                height: theme.title_spacer(),
            });
        }
        Block::Heading(b) => {
            items.push(paragraph(&b.text, theme.style_for(StyleKind::Heading)));
        }
        // both minor heading ranks print at subheading weight
        Block::Subheading(b) | Block::Subsubheading(b) => {
            items.push(paragraph(&b.text, theme.style_for(StyleKind::Subheading)));
        }
        // quotes print as ordinary body text
        Block::Paragraph(b) | Block::Quote(b) => {
            items.push(paragraph(&b.text, theme.style_for(StyleKind::Normal)));
        }
        Block::CodeBlock(code) => {
            items.push(FlowItem::Paragraph {
                text: code_text(code),
                style: theme.style_for(StyleKind::Code),
            });
        }
        Block::List(list) => render_list(list, theme, items),
        Block::Table(table) => {
            items.push(FlowItem::Table(flow_table(table, theme)));
            items.push(FlowItem::Spacer {
                height: TABLE_SPACER,
            });
        }
        Block::Divider(_) => {
            items.push(FlowItem::Spacer {
                height: DIVIDER_SPACER,
            });
        }
        // no print representation
        Block::RawHtml(_) => {}
    }
}

fn paragraph(text: &str, style: Style) -> FlowItem {
    FlowItem::Paragraph {
        text: escape_markup(text),
        style,
    }
}

/// Code payload for print. Comment lines are stripped to keep listings
/// short on paper, except for diagram sources where comment syntax
/// overlaps with the diagram grammar.
fn code_text(code: &CodeBlock<'_>) -> String {
    if code.is_diagram() {
        return escape_markup(&code.content);
    }
    let kept: Vec<&str> = code
        .content
        .lines()
        .filter(|line| {
            let t = line.trim_start();
            !(t.starts_with('#')
                || t.starts_with("//")
                || t.starts_with("/*")
                || t.starts_with("<!--"))
        })
        .collect();
    escape_markup(&kept.join("\n"))
}

fn render_list(list: &List<'_>, theme: &dyn Theme, items: &mut Vec<FlowItem>) {
    let style = theme.style_for(StyleKind::Normal);
    for item in &list.items {
        items.push(FlowItem::Paragraph {
            text: format!("\u{2022} {}", escape_markup(item)),
            style: style.clone(),
        });
    }
    items.push(FlowItem::Spacer {
        height: LIST_SPACER,
    });
}

fn flow_table(table: &Table<'_>, theme: &dyn Theme) -> FlowTable {
    let TableLayout {
        col_widths,
        border_width,
    } = theme.table_layout();
    let header_style = theme.style_for(StyleKind::TableHeader);

    FlowTable {
        rows: table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| escape_markup(cell)).collect())
            .collect(),
        col_widths,
        border_width,
        header_background: theme
            .color_for(crate::theme::ColorRole::TableHeader)
            .as_hex()
            .to_string(),
        header_text: header_style.color.as_hex().to_string(),
        header_font_size: header_style.font_size,
        row_background: theme
            .color_for(crate::theme::ColorRole::TableRow)
            .as_hex()
            .to_string(),
        border_color: theme
            .color_for(crate::theme::ColorRole::TableBorder)
            .as_hex()
            .to_string(),
    }
}

/// Escape for the layout engine's XML-flavored rich text. Unlike the HTML
/// side there is no math protection: print output has no math runtime.
fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

//! Block token model shared by both renderers.
//!
//! The classifier produces a [`Document`]: an ordered sequence of [`Block`]s.
//! This is the contract between the classifier and every renderer — a new
//! output target only needs a total mapping from these variants.
//!
//! Design points:
//!
//! - **Zero-copy**: text-bearing variants hold `Cow<'a, str>` borrowed from
//!   the input wherever the block is a single contiguous region; joined runs
//!   (paragraphs, quotes) own their text.
//! - **Unescaped**: blocks carry raw source text. Escaping and inline
//!   formatting happen at render time, so the same block feeds either
//!   renderer without re-parsing.
//! - **Immutable**: blocks are constructed once during classification and
//!   only read afterwards.

use crate::span::Span;
use serde::Serialize;

/// Borrowed or owned string type for zero-copy classification.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// Language tag that routes a fenced block to the diagram-passthrough
/// rendering path instead of code highlighting. Matched case-insensitively.
pub const DIAGRAM_KEYWORD: &str = "mermaid";

/// A classified document: an ordered sequence of blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document<'a> {
    /// Blocks in source order.
    pub blocks: Vec<Block<'a>>,
    /// Span covering the entire input.
    pub span: Span,
}

/// One classified structural unit of a document.
///
/// Heading levels 4 and 5 both collapse to [`Block::Subsubheading`] — a
/// deliberate flattening carried over from the output contract, not a bug.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block<'a> {
    /// Document title (`# `).
    Title(TextBlock<'a>),
    /// Section heading (`## `).
    Heading(TextBlock<'a>),
    /// Subsection heading (`### `).
    Subheading(TextBlock<'a>),
    /// Minor heading (`#### ` and `##### `, collapsed to one rank).
    Subsubheading(TextBlock<'a>),
    /// Text paragraph (run of plain lines joined with spaces).
    Paragraph(TextBlock<'a>),
    /// Block quotation (run of `>`-marked lines joined with spaces).
    Quote(TextBlock<'a>),
    /// Fenced code block with optional language tag.
    CodeBlock(CodeBlock<'a>),
    /// Ordered or unordered list of items.
    List(List<'a>),
    /// Pipe-delimited table; row 0 is the header.
    Table(Table<'a>),
    /// Horizontal rule (`---`).
    Divider(Span),
    /// Raw HTML lines passed through unescaped by the HTML renderer.
    RawHtml(RawHtml<'a>),
}

/// A block whose payload is a single run of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock<'a> {
    /// Unescaped source text.
    pub text: CowStr<'a>,
    /// Source span.
    pub span: Span,
}

/// Fenced code block payload.
///
/// `content` is opaque: it is escaped for the host format at render time but
/// never passed through the inline transformer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock<'a> {
    /// Language tag from the opening fence, if non-empty.
    pub lang: Option<CowStr<'a>>,
    /// Verbatim fence payload (lines joined with newlines).
    pub content: CowStr<'a>,
    /// Source span including both fence lines.
    pub span: Span,
}

impl CodeBlock<'_> {
    /// Whether this block routes to the diagram-passthrough rendering path.
    #[inline]
    pub fn is_diagram(&self) -> bool {
        matches!(&self.lang, Some(lang) if lang.eq_ignore_ascii_case(DIAGRAM_KEYWORD))
    }
}

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Numbered list (`1.` `2.` `3.`).
    Ordered,
    /// Bulleted list (`-` or `*`).
    Unordered,
}

/// A list block.
///
/// Items are homogeneous in ordering kind: a kind switch mid-run closes the
/// current list and starts a new block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List<'a> {
    /// Ordered or unordered.
    pub kind: ListKind,
    /// Item texts (text after the marker, unescaped).
    pub items: Vec<CowStr<'a>>,
    /// Source span.
    pub span: Span,
}

/// A table block. Always has at least two rows (header + one data row);
/// candidates with fewer surviving rows are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table<'a> {
    /// Cell texts per row; row 0 is the header. Rows may be ragged.
    pub rows: Vec<Vec<CowStr<'a>>>,
    /// Source span.
    pub span: Span,
}

/// Raw passthrough lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawHtml<'a> {
    /// Verbatim source region (lines joined with newlines).
    pub content: CowStr<'a>,
    /// Source span.
    pub span: Span,
}

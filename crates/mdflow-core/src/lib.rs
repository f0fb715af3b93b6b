//! # mdflow-core
//!
//! Single-pass Markdown classification with two independent render targets:
//! an HTML fragment for web embedding and a flow-item sequence for paginated
//! print layout.
//!
//! The pipeline has exactly two stages. [`classify`] cuts the input into an
//! ordered [`Document`] of typed blocks, total over any input. Each renderer
//! then maps that block sequence into its target independently, so adding an
//! output format never touches classification.
//!
//! ## Quickstart
//!
//! ```rust
//! use mdflow_core::{classify, render_html};
//!
//! let doc = classify("# Release Notes\n\nFixed **two** bugs.\n");
//! let html = render_html(&doc);
//! assert!(html.contains("<h1 class=\"title\">Release Notes</h1>"));
//! assert!(html.contains("<strong>two</strong>"));
//! ```
//!
//! Print output goes through a [`Theme`]:
//!
//! ```rust
//! use mdflow_core::{classify, render_document, ThemeConfig};
//!
//! let doc = classify("## Setup\n\n- clone\n- build\n");
//! let items = render_document(&doc, &ThemeConfig::default());
//! assert!(!items.is_empty());
//! ```

pub mod ast;
pub mod classify;
pub mod flow;
pub mod html;
pub mod inline;
pub mod lexer;
pub mod span;
pub mod theme;

pub use ast::{Block, CodeBlock, Document, List, ListKind, RawHtml, Table, TextBlock};
pub use classify::classify;
pub use flow::{render_document, FlowItem, FlowTable};
pub use html::render_html;
pub use inline::{escape_html, render_inline};
pub use span::Span;
pub use theme::{Color, ColorRole, Style, StyleKind, TableLayout, Theme, ThemeConfig};

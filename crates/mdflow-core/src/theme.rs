//! Print styling capability interface.
//!
//! The flow renderer consumes styling through the [`Theme`] trait, a small
//! set of typed queries. [`ThemeConfig`] is the standard implementation: a
//! deserializable bag of overrides where every missing key falls back to a
//! built-in default, so a partial config file is always valid.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque color value, carried as a hex string like `#1a365d`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// The hex form, as given.
    #[inline]
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(hex: &str) -> Self {
        Color(hex.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The named paragraph styles the flow renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Title,
    Heading,
    Subheading,
    Normal,
    Code,
    TableHeader,
}

/// The named color slots a theme must resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Title,
    Heading,
    Subheading,
    Text,
    CodeBg,
    CodeText,
    TableHeader,
    TableHeaderText,
    TableRow,
    TableBorder,
    Link,
}

impl ColorRole {
    /// Config-file key for this slot.
    fn key(self) -> &'static str {
        match self {
            ColorRole::Title => "title",
            ColorRole::Heading => "heading",
            ColorRole::Subheading => "subheading",
            ColorRole::Text => "text",
            ColorRole::CodeBg => "code_bg",
            ColorRole::CodeText => "code_text",
            ColorRole::TableHeader => "table_header",
            ColorRole::TableHeaderText => "table_header_text",
            ColorRole::TableRow => "table_row",
            ColorRole::TableBorder => "table_border",
            ColorRole::Link => "link",
        }
    }

    fn default_hex(self) -> &'static str {
        match self {
            ColorRole::Title => "#1a365d",
            ColorRole::Heading => "#2c5282",
            ColorRole::Subheading => "#2f855a",
            ColorRole::Text => "#1a202c",
            ColorRole::CodeBg => "#f7fafc",
            ColorRole::CodeText => "#1a202c",
            ColorRole::TableHeader => "#2c5282",
            ColorRole::TableHeaderText => "#ffffff",
            ColorRole::TableRow => "#ebf8ff",
            ColorRole::TableBorder => "#a0aec0",
            ColorRole::Link => "#3182ce",
        }
    }
}

/// Horizontal alignment of a flow paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
}

/// Fully resolved paragraph style. Sizes are in points, spacing in
/// centimeters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: Alignment,
    pub space_before: f32,
    pub space_after: f32,
    /// Fill color behind the paragraph, used by the code style.
    pub background: Option<Color>,
    /// Left indent in centimeters.
    pub indent: f32,
    /// Padding inside the background fill in centimeters. Zero for styles
    /// without a background.
    pub padding: f32,
}

/// Resolved table geometry. Widths are in inches, border in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLayout {
    pub col_widths: Vec<f32>,
    pub border_width: f32,
}

/// Styling queries the flow renderer makes. Implementations must be total;
/// there is no "unknown style" answer.
pub trait Theme {
    /// Resolved paragraph style for a style kind.
    fn style_for(&self, kind: StyleKind) -> Style;

    /// Resolved color for a color slot.
    fn color_for(&self, role: ColorRole) -> Color;

    /// Table geometry.
    fn table_layout(&self) -> TableLayout;

    /// Height in centimeters of the spacer emitted after the title.
    fn title_spacer(&self) -> f32 {
        0.5
    }
}

/// Code block geometry overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlockConfig {
    pub indent: Option<f32>,
    pub padding: Option<f32>,
}

/// Table geometry overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub col_widths: Option<Vec<f32>>,
    pub border_width: Option<f32>,
}

/// Key-value theme with per-key default fallback.
///
/// Designed to deserialize from a partial config file: any map may be
/// missing entirely, and any key within a map may be missing. Unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color overrides by slot key (`title`, `code_bg`, ...).
    pub colors: BTreeMap<String, Color>,
    /// Font size overrides in points by style key.
    pub font_sizes: BTreeMap<String, f32>,
    /// Leading overrides in points by style key.
    pub line_height: BTreeMap<String, f32>,
    /// Spacing overrides in centimeters (`title_after`, `heading_before`, ...).
    pub spacing: BTreeMap<String, f32>,
    pub code_block: CodeBlockConfig,
    pub table: TableConfig,
}

impl ThemeConfig {
    fn font_size(&self, key: &str, default: f32) -> f32 {
        self.font_sizes.get(key).copied().unwrap_or(default)
    }

    fn leading(&self, key: &str, default: f32) -> f32 {
        self.line_height.get(key).copied().unwrap_or(default)
    }

    fn spacing(&self, key: &str, default: f32) -> f32 {
        self.spacing.get(key).copied().unwrap_or(default)
    }
}

impl Theme for ThemeConfig {
    fn style_for(&self, kind: StyleKind) -> Style {
        match kind {
            StyleKind::Title => Style {
                font_size: self.font_size("title", 28.0),
                leading: self.leading("title", 36.0),
                color: self.color_for(ColorRole::Title),
                alignment: Alignment::Center,
                space_before: 0.0,
                // the post-title gap is a separate spacer item
                space_after: 0.0,
                background: None,
                indent: 0.0,
                padding: 0.0,
            },
            StyleKind::Heading => Style {
                font_size: self.font_size("heading", 18.0),
                leading: self.leading("heading", 24.0),
                color: self.color_for(ColorRole::Heading),
                alignment: Alignment::Left,
                space_before: self.spacing("heading_before", 0.4),
                space_after: self.spacing("heading_after", 0.3),
                background: None,
                indent: 0.0,
                padding: 0.0,
            },
            StyleKind::Subheading => Style {
                font_size: self.font_size("subheading", 14.0),
                leading: self.leading("subheading", 18.0),
                color: self.color_for(ColorRole::Subheading),
                alignment: Alignment::Left,
                space_before: self.spacing("subheading_before", 0.3),
                space_after: self.spacing("subheading_after", 0.2),
                background: None,
                indent: 0.0,
                padding: 0.0,
            },
            StyleKind::Normal => Style {
                font_size: self.font_size("normal", 11.0),
                leading: self.leading("normal", 14.0),
                color: self.color_for(ColorRole::Text),
                alignment: Alignment::Left,
                space_before: 0.0,
                space_after: self.spacing("normal_after", 0.2),
                background: None,
                indent: 0.0,
                padding: 0.0,
            },
            StyleKind::Code => Style {
                font_size: self.font_size("code", 9.0),
                leading: self.leading("code", 11.0),
                color: self.color_for(ColorRole::CodeText),
                alignment: Alignment::Left,
                space_before: 0.0,
                space_after: self.spacing("code_after", 0.3),
                background: Some(self.color_for(ColorRole::CodeBg)),
                indent: self.code_block.indent.unwrap_or(0.5),
                padding: self.code_block.padding.unwrap_or(0.2),
            },
            StyleKind::TableHeader => Style {
                font_size: self.font_size("table_header", 12.0),
                leading: self.leading("table_header", 14.0),
                color: self.color_for(ColorRole::TableHeaderText),
                alignment: Alignment::Left,
                space_before: 0.0,
                space_after: 0.0,
                background: Some(self.color_for(ColorRole::TableHeader)),
                indent: 0.0,
                padding: 0.0,
            },
        }
    }

    fn color_for(&self, role: ColorRole) -> Color {
        self.colors
            .get(role.key())
            .cloned()
            .unwrap_or_else(|| Color::from(role.default_hex()))
    }

    fn table_layout(&self) -> TableLayout {
        TableLayout {
            col_widths: self
                .table
                .col_widths
                .clone()
                .unwrap_or_else(|| vec![2.5, 3.5]),
            border_width: self.table.border_width.unwrap_or(0.5),
        }
    }

    fn title_spacer(&self) -> f32 {
        self.spacing("title_after", 0.5)
    }
}

//! Inline span transformer and HTML escaping.
//!
//! Both entry points are ordered substitution pipelines over already
//! classified text. Ordering is load-bearing twice over:
//!
//! - math and code spans are lifted into placeholders before any other rule
//!   runs, so their payloads are never reinterpreted as formatting;
//! - bold-italic must be rewritten before bold, and bold before italic,
//!   otherwise `***x***` degrades into nested partial matches.
//!
//! The placeholder sentinel is a NUL byte. Source text containing a literal
//! `\0MATH{n}\0` or `\0CODE{n}\0` sequence would collide with a placeholder;
//! NUL bytes are vanishingly rare in Markdown and the collision is accepted.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `$$...$$` display math or `$...$` inline math, shortest match.
static MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$[\s\S]*?\$\$|\$[^$\n]+?\$").unwrap());

static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static STRIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Escape `&`, `<`, `>` for HTML while leaving math spans byte-for-byte
/// intact, so client-side math typesetting still sees its original
/// delimiters and operators.
pub fn escape_html(text: &str) -> String {
    let mut math_spans: Vec<String> = Vec::new();
    let protected = MATH.replace_all(text, |caps: &Captures<'_>| {
        let token = format!("\0MATH{}\0", math_spans.len());
        math_spans.push(caps[0].to_string());
        token
    });

    let mut escaped = protected
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    for (i, span) in math_spans.iter().enumerate() {
        escaped = escaped.replace(&format!("\0MATH{i}\0"), span);
    }
    escaped
}

/// Transform inline Markdown into HTML.
///
/// The input is escaped first, then code spans are lifted out, then the
/// formatting rules run over what remains, then code spans are restored.
/// Formatting markers inside a code span are therefore rendered literally.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);

    // Lift code spans out before the formatting rules. The payload gets a
    // second escaping pass; since the first pass already ran, `&` arrives
    // here as `&amp;` and leaves as `&amp;amp;`. Long-standing output
    // contract, kept as-is.
    let mut code_spans: Vec<String> = Vec::new();
    let mut out = CODE
        .replace_all(&escaped, |caps: &Captures<'_>| {
            let token = format!("\0CODE{}\0", code_spans.len());
            code_spans.push(format!("<code>{}</code>", escape_html(&caps[1])));
            token
        })
        .into_owned();

    out = BOLD_ITALIC
        .replace_all(&out, "<strong><em>${1}</em></strong>")
        .into_owned();
    out = BOLD.replace_all(&out, "<strong>${1}</strong>").into_owned();
    out = ITALIC.replace_all(&out, "<em>${1}</em>").into_owned();
    out = STRIKE.replace_all(&out, "<del>${1}</del>").into_owned();
    out = LINK
        .replace_all(
            &out,
            r#"<a href="${2}" style="color:var(--color-link)">${1}</a>"#,
        )
        .into_owned();

    for (i, span) in code_spans.iter().enumerate() {
        out = out.replace(&format!("\0CODE{i}\0"), span);
    }
    out
}

//! Line-oriented block classifier.
//!
//! `classify` is a total function: malformed Markdown never raises an error,
//! it degrades to a paragraph. The classifier walks the input with an
//! explicit, never-decreasing line cursor and one line of lookahead. The
//! only state carried across dispatch iterations is the open-list
//! accumulator, since list runs end at the first non-matching line without
//! consuming it.
//!
//! Dispatch precedence is fixed: blank, heading, quote, fence, list item,
//! table candidate, divider, raw passthrough, paragraph. A quote line inside
//! an open list closes the list rather than nesting; a table-shaped line
//! inside a paragraph run is never reinterpreted retroactively.

use std::borrow::Cow;

use crate::ast::{Block, CodeBlock, CowStr, Document, List, ListKind, RawHtml, Table, TextBlock};
use crate::lexer::{lines, Line};
use crate::span::Span;

/// Classify input into an ordered block sequence.
///
/// Total and lenient: unterminated fences run to end of input, undersized
/// table candidates are consumed and dropped, everything else falls back to
/// a paragraph.
pub fn classify(input: &str) -> Document<'_> {
    let mut classifier = Classifier {
        input,
        lines: lines(input).collect(),
        cursor: 0,
        blocks: Vec::with_capacity(16),
        open_list: None,
    };
    classifier.run();

    Document {
        blocks: classifier.blocks,
        span: Span::new(0, input.len() as u32),
    }
}

struct Classifier<'a> {
    input: &'a str,
    lines: Vec<Line<'a>>,
    cursor: usize,
    blocks: Vec<Block<'a>>,
    /// List accumulator kept open across blank lines and fed by rule 5.
    open_list: Option<List<'a>>,
}

impl<'a> Classifier<'a> {
    fn run(&mut self) {
        while self.cursor < self.lines.len() {
            let line = self.lines[self.cursor];

            if line.is_blank() {
                // Blanks are skipped outright; an open list survives them.
                self.cursor += 1;
                continue;
            }

            if let Some((level, text)) = heading_line(line.text) {
                self.close_list();
                self.emit_heading(level, text, line.span);
                self.cursor += 1;
                continue;
            }

            let trimmed = line.trimmed();

            if trimmed.starts_with('>') {
                self.close_list();
                self.consume_quote();
                continue;
            }

            if trimmed.starts_with("```") {
                self.close_list();
                self.consume_fence();
                continue;
            }

            if let Some((kind, item)) = list_item(line.text) {
                self.push_list_item(kind, item, line.span);
                continue;
            }

            if line.text.contains('|') && self.next_line_has_pipe() {
                self.close_list();
                self.consume_table();
                continue;
            }

            if trimmed == "---" {
                self.close_list();
                self.blocks.push(Block::Divider(line.span));
                self.cursor += 1;
                continue;
            }

            if trimmed.starts_with('<') {
                self.close_list();
                self.consume_raw();
                continue;
            }

            self.close_list();
            self.consume_paragraph();
        }

        // Implicit close at end of input.
        self.close_list();
    }

    fn emit_heading(&mut self, level: u8, text: &'a str, span: Span) {
        let block = TextBlock {
            text: Cow::Borrowed(text),
            span,
        };
        self.blocks.push(match level {
            1 => Block::Title(block),
            2 => Block::Heading(block),
            3 => Block::Subheading(block),
            // 4 and 5 collapse to one rank
            _ => Block::Subsubheading(block),
        });
    }

    fn push_list_item(&mut self, kind: ListKind, item: &'a str, span: Span) {
        match &mut self.open_list {
            Some(list) if list.kind == kind => {
                list.items.push(Cow::Borrowed(item));
                list.span.end = span.end;
            }
            _ => {
                // Kind switch (or no open list): lists never straddle a
                // mixed-kind boundary.
                self.close_list();
                self.open_list = Some(List {
                    kind,
                    items: vec![Cow::Borrowed(item)],
                    span,
                });
            }
        }
        self.cursor += 1;
    }

    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take() {
            self.blocks.push(Block::List(list));
        }
    }

    #[inline]
    fn next_line_has_pipe(&self) -> bool {
        self.lines
            .get(self.cursor + 1)
            .is_some_and(|line| line.text.contains('|'))
    }

    /// Rule 3: maximal run of `>`-marked lines, one marker stripped per
    /// line, joined with single spaces.
    fn consume_quote(&mut self) {
        let start = self.lines[self.cursor].span;
        let mut end = start;
        let mut parts: Vec<&'a str> = Vec::new();

        while let Some(line) = self.lines.get(self.cursor) {
            let trimmed = line.trimmed();
            if !trimmed.starts_with('>') {
                break;
            }
            parts.push(trimmed.strip_prefix('>').unwrap_or(trimmed).trim());
            end = line.span;
            self.cursor += 1;
        }

        self.blocks.push(Block::Quote(TextBlock {
            text: join_spaced(parts),
            span: Span::new(start.start, end.end),
        }));
    }

    /// Rule 4: verbatim payload until a closing fence or end of input.
    /// Unterminated fences consume to EOF; a fence with no payload lines
    /// emits nothing.
    fn consume_fence(&mut self) {
        let open = self.lines[self.cursor];
        self.cursor += 1;

        let tag = open
            .trimmed()
            .strip_prefix("```")
            .unwrap_or_default()
            .trim();

        // payload bounds come from the payload lines' own spans, so the
        // delimiter width (LF or CRLF) never leaks into the content
        let mut payload: Option<(usize, usize)> = None;
        let mut end = open.span;

        while let Some(line) = self.lines.get(self.cursor) {
            if line.trimmed().starts_with("```") {
                end = line.span;
                self.cursor += 1;
                break;
            }
            let start = payload.map_or(line.span.start as usize, |(s, _)| s);
            payload = Some((start, line.span.end as usize));
            end = line.span;
            self.cursor += 1;
        }

        let Some((content_start, content_end)) = payload else {
            return;
        };
        let content = &self.input[content_start..content_end];

        self.blocks.push(Block::CodeBlock(CodeBlock {
            lang: (!tag.is_empty()).then(|| Cow::Borrowed(tag)),
            content: Cow::Borrowed(content),
            span: Span::new(open.span.start, end.end),
        }));
    }

    /// Rule 6: contiguous run of `|`-containing lines. Decoration rows (the
    /// alignment marker) are dropped; the candidate is emitted only when at
    /// least a header and one data row survive, otherwise the consumed run
    /// is silently discarded. Ragged rows are kept as-is.
    fn consume_table(&mut self) {
        let start = self.lines[self.cursor].span;
        let mut end = start;
        let mut rows: Vec<Vec<CowStr<'a>>> = Vec::new();

        while let Some(line) = self.lines.get(self.cursor) {
            if !line.text.contains('|') {
                break;
            }
            let cells = split_row(line.trimmed());
            if !cells.is_empty() && !is_decoration_row(&cells) {
                rows.push(cells);
            }
            end = line.span;
            self.cursor += 1;
        }

        if rows.len() >= 2 {
            self.blocks.push(Block::Table(Table {
                rows,
                span: Span::new(start.start, end.end),
            }));
        }
    }

    /// Rule 8: contiguous non-blank lines that do not start a heading,
    /// divider, fence, or table candidate, passed through verbatim.
    fn consume_raw(&mut self) {
        let start = self.lines[self.cursor].span;
        let mut end = start;
        self.cursor += 1;

        while let Some(line) = self.lines.get(self.cursor) {
            let trimmed = line.trimmed();
            if line.is_blank()
                || line.text.starts_with('#')
                || trimmed == "---"
                || trimmed.starts_with("```")
                || (line.text.contains('|') && self.next_line_has_pipe())
            {
                break;
            }
            end = line.span;
            self.cursor += 1;
        }

        self.blocks.push(Block::RawHtml(RawHtml {
            content: Cow::Borrowed(&self.input[start.start as usize..end.end as usize]),
            span: Span::new(start.start, end.end),
        }));
    }

    /// Rule 9: contiguous non-blank lines that do not trigger the heading,
    /// fence, table, divider, or raw rules, joined with single spaces.
    fn consume_paragraph(&mut self) {
        let first = self.lines[self.cursor];
        let mut end = first.span;
        let mut parts: Vec<&'a str> = vec![first.text];
        self.cursor += 1;

        while let Some(line) = self.lines.get(self.cursor) {
            let trimmed = line.trimmed();
            if line.is_blank()
                || line.text.starts_with('#')
                || trimmed == "---"
                || line.text.contains('|')
                || trimmed.starts_with('<')
                || trimmed.starts_with("```")
            {
                break;
            }
            parts.push(line.text);
            end = line.span;
            self.cursor += 1;
        }

        self.blocks.push(Block::Paragraph(TextBlock {
            text: join_spaced(parts),
            span: Span::new(first.span.start, end.end),
        }));
    }
}

/// Match the five heading prefixes. Returns the raw level (1-5) and the
/// trimmed heading text. `######` and hash-without-space fall through.
#[inline]
fn heading_line(text: &str) -> Option<(u8, &str)> {
    const PREFIXES: [(&str, u8); 5] = [
        ("# ", 1),
        ("## ", 2),
        ("### ", 3),
        ("#### ", 4),
        ("##### ", 5),
    ];
    for (prefix, level) in PREFIXES {
        if let Some(rest) = text.strip_prefix(prefix) {
            return Some((level, rest.trim()));
        }
    }
    None
}

/// Match a list-item line: optional indentation, `-`/`*` or `digits.`
/// marker, at least one whitespace, then non-empty item text.
#[inline]
fn list_item(text: &str) -> Option<(ListKind, &str)> {
    let rest = text.trim_start();
    let bytes = rest.as_bytes();

    if matches!(bytes.first(), Some(b'-' | b'*'))
        && matches!(bytes.get(1), Some(b' ' | b'\t'))
    {
        let item = rest[2..].trim_start();
        return (!item.is_empty()).then_some((ListKind::Unordered, item));
    }

    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0
        && bytes.get(digits) == Some(&b'.')
        && matches!(bytes.get(digits + 1), Some(b' ' | b'\t'))
    {
        let item = rest[digits + 2..].trim_start();
        return (!item.is_empty()).then_some((ListKind::Ordered, item));
    }

    None
}

/// Split a table row on `|`, trimming cells and discarding the leading and
/// trailing empty cells produced by edge separators.
fn split_row(line: &str) -> Vec<CowStr<'_>> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(Cow::Borrowed).collect()
}

/// An alignment row: every cell non-empty and made only of `-` and `:`.
fn is_decoration_row(cells: &[CowStr<'_>]) -> bool {
    cells
        .iter()
        .all(|c| !c.is_empty() && c.bytes().all(|b| matches!(b, b'-' | b':')))
}

/// Join line parts with single spaces, borrowing when there is only one.
fn join_spaced(parts: Vec<&str>) -> CowStr<'_> {
    if parts.len() == 1 {
        Cow::Borrowed(parts[0])
    } else {
        Cow::Owned(parts.join(" "))
    }
}

//! Integration tests for the block classifier

use mdflow_core::ast::{Block, ListKind};
use mdflow_core::classify;

fn blocks(input: &str) -> Vec<Block<'_>> {
    classify(input).blocks
}

// ============================================================================
// Heading Tests
// ============================================================================

#[test]
fn test_heading_ranks() {
    let doc = blocks("# T\n## H\n### S\n#### S2\n##### S3\n");
    assert_eq!(doc.len(), 5);
    assert!(matches!(&doc[0], Block::Title(b) if b.text == "T"));
    assert!(matches!(&doc[1], Block::Heading(b) if b.text == "H"));
    assert!(matches!(&doc[2], Block::Subheading(b) if b.text == "S"));
    assert!(matches!(&doc[3], Block::Subsubheading(b) if b.text == "S2"));
    assert!(matches!(&doc[4], Block::Subsubheading(b) if b.text == "S3"));
}

#[test]
fn test_six_hashes_is_a_paragraph() {
    let doc = blocks("###### deep\n");
    assert!(matches!(&doc[0], Block::Paragraph(b) if b.text == "###### deep"));
}

#[test]
fn test_hash_without_space_is_a_paragraph() {
    let doc = blocks("#nospace\n");
    assert!(matches!(&doc[0], Block::Paragraph(b) if b.text == "#nospace"));
}

#[test]
fn test_heading_text_is_trimmed() {
    let doc = blocks("##   padded   \n");
    assert!(matches!(&doc[0], Block::Heading(b) if b.text == "padded"));
}

// ============================================================================
// Paragraph Tests
// ============================================================================

#[test]
fn test_paragraph_lines_join_with_spaces() {
    let doc = blocks("first line\nsecond line\n\nnext para\n");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc[0], Block::Paragraph(b) if b.text == "first line second line"));
    assert!(matches!(&doc[1], Block::Paragraph(b) if b.text == "next para"));
}

#[test]
fn test_paragraph_stops_at_heading() {
    let doc = blocks("text\n## next\n");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc[0], Block::Paragraph(b) if b.text == "text"));
    assert!(matches!(&doc[1], Block::Heading(_)));
}

#[test]
fn test_paragraph_stops_at_divider_and_fence() {
    let doc = blocks("text\n---\nmore\n```\nx\n```\n");
    assert_eq!(doc.len(), 4);
    assert!(matches!(&doc[0], Block::Paragraph(_)));
    assert!(matches!(&doc[1], Block::Divider(_)));
    assert!(matches!(&doc[2], Block::Paragraph(b) if b.text == "more"));
    assert!(matches!(&doc[3], Block::CodeBlock(_)));
}

#[test]
fn test_list_marker_line_is_absorbed_into_paragraph() {
    // continuation does not re-dispatch, so the item line joins the run
    let doc = blocks("intro\n- item\n");
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc[0], Block::Paragraph(b) if b.text == "intro - item"));
}

// ============================================================================
// Quote Tests
// ============================================================================

#[test]
fn test_quote_lines_join() {
    let doc = blocks("> one\n> two\n");
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc[0], Block::Quote(b) if b.text == "one two"));
}

#[test]
fn test_quote_strips_single_marker_only() {
    let doc = blocks(">> nested\n");
    assert!(matches!(&doc[0], Block::Quote(b) if b.text == "> nested"));
}

#[test]
fn test_bare_quote_marker_yields_empty_part() {
    let doc = blocks("> a\n>\n> b\n");
    assert!(matches!(&doc[0], Block::Quote(b) if b.text == "a  b"));
}

// ============================================================================
// Code Fence Tests
// ============================================================================

#[test]
fn test_fence_with_language_tag() {
    let doc = blocks("```rust\nfn main() {}\n```\n");
    assert_eq!(doc.len(), 1);
    match &doc[0] {
        Block::CodeBlock(code) => {
            assert_eq!(code.lang.as_deref(), Some("rust"));
            assert_eq!(code.content, "fn main() {}");
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn test_fence_without_tag() {
    let doc = blocks("```\nplain\n```\n");
    match &doc[0] {
        Block::CodeBlock(code) => {
            assert_eq!(code.lang, None);
            assert_eq!(code.content, "plain");
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn test_fence_payload_is_verbatim() {
    let doc = blocks("```\n# not a heading\n- not a list\n```\n");
    match &doc[0] {
        Block::CodeBlock(code) => {
            assert_eq!(code.content, "# not a heading\n- not a list");
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn test_unterminated_fence_runs_to_end() {
    let doc = blocks("```py\nx = 1\ny = 2\n");
    assert_eq!(doc.len(), 1);
    match &doc[0] {
        Block::CodeBlock(code) => assert_eq!(code.content, "x = 1\ny = 2"),
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn test_empty_fence_emits_nothing() {
    assert!(blocks("```\n```\n").is_empty());
}

#[test]
fn test_fence_with_one_blank_payload_line() {
    let doc = blocks("```\n\n```\n");
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc[0], Block::CodeBlock(code) if code.content == ""));
}

#[test]
fn test_crlf_fence_payload_has_no_stray_delimiter() {
    let doc = blocks("```\r\nx = 1\r\n```\r\n");
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc[0], Block::CodeBlock(code) if code.content == "x = 1"));
}

#[test]
fn test_crlf_fence_multiline_round_trip() {
    let doc = blocks("```py\r\nx = 1\r\ny = 2\r\n```\r\n");
    match &doc[0] {
        Block::CodeBlock(code) => {
            let lines: Vec<&str> = code.content.lines().collect();
            assert_eq!(lines, vec!["x = 1", "y = 2"]);
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn test_diagram_tag_is_case_insensitive() {
    let doc = blocks("```Mermaid\ngraph TD\n```\n");
    assert!(matches!(&doc[0], Block::CodeBlock(code) if code.is_diagram()));
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_unordered_list_markers() {
    let doc = blocks("- a\n* b\n");
    assert_eq!(doc.len(), 1);
    match &doc[0] {
        Block::List(list) => {
            assert_eq!(list.kind, ListKind::Unordered);
            assert_eq!(list.items, vec!["a", "b"]);
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn test_ordered_list() {
    let doc = blocks("1. one\n2. two\n10. ten\n");
    match &doc[0] {
        Block::List(list) => {
            assert_eq!(list.kind, ListKind::Ordered);
            assert_eq!(list.items, vec!["one", "two", "ten"]);
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn test_kind_switch_splits_lists() {
    let doc = blocks("- a\n1. b\n- c\n");
    assert_eq!(doc.len(), 3);
    assert!(matches!(&doc[0], Block::List(l) if l.kind == ListKind::Unordered));
    assert!(matches!(&doc[1], Block::List(l) if l.kind == ListKind::Ordered));
    assert!(matches!(&doc[2], Block::List(l) if l.kind == ListKind::Unordered));
}

#[test]
fn test_blank_line_keeps_list_open() {
    let doc = blocks("- a\n\n- b\n");
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc[0], Block::List(l) if l.items == vec!["a", "b"]));
}

#[test]
fn test_non_item_line_closes_list() {
    let doc = blocks("- a\ntext\n");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc[0], Block::List(_)));
    assert!(matches!(&doc[1], Block::Paragraph(_)));
}

#[test]
fn test_quote_closes_open_list() {
    let doc = blocks("- a\n> q\n");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc[0], Block::List(_)));
    assert!(matches!(&doc[1], Block::Quote(_)));
}

#[test]
fn test_list_open_at_end_of_input_is_emitted() {
    let doc = blocks("- last");
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc[0], Block::List(l) if l.items == vec!["last"]));
}

#[test]
fn test_marker_without_text_is_not_an_item() {
    let doc = blocks("- \n");
    assert!(matches!(&doc[0], Block::Paragraph(_)));
}

// ============================================================================
// Table Tests
// ============================================================================

#[test]
fn test_basic_table() {
    let doc = blocks("| A | B |\n|---|---|\n| 1 | 2 |\n");
    assert_eq!(doc.len(), 1);
    match &doc[0] {
        Block::Table(table) => {
            assert_eq!(table.rows.len(), 2);
            assert_eq!(table.rows[0], vec!["A", "B"]);
            assert_eq!(table.rows[1], vec!["1", "2"]);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn test_alignment_row_is_dropped() {
    let doc = blocks("| A |\n|:--:|\n| 1 |\n| 2 |\n");
    match &doc[0] {
        Block::Table(table) => assert_eq!(table.rows.len(), 3),
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn test_ragged_rows_are_preserved() {
    let doc = blocks("| A | B | C |\n| 1 |\n");
    match &doc[0] {
        Block::Table(table) => {
            assert_eq!(table.rows[0].len(), 3);
            assert_eq!(table.rows[1].len(), 1);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn test_undersized_candidate_is_consumed_and_dropped() {
    // header plus alignment row only: one surviving row, no block
    let doc = blocks("| A | B |\n|---|---|\n\nafter\n");
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc[0], Block::Paragraph(b) if b.text == "after"));
}

#[test]
fn test_single_pipe_line_is_a_paragraph() {
    let doc = blocks("a | b\n\nx\n");
    assert!(matches!(&doc[0], Block::Paragraph(b) if b.text == "a | b"));
}

#[test]
fn test_interior_cells_keep_empty_entries() {
    let doc = blocks("| A |  | C |\n| 1 | 2 | 3 |\n");
    match &doc[0] {
        Block::Table(table) => assert_eq!(table.rows[0], vec!["A", "", "C"]),
        other => panic!("expected table, got {other:?}"),
    }
}

// ============================================================================
// Divider and Raw Passthrough Tests
// ============================================================================

#[test]
fn test_divider() {
    let doc = blocks("---\n");
    assert!(matches!(&doc[0], Block::Divider(_)));
}

#[test]
fn test_four_dashes_is_a_paragraph() {
    let doc = blocks("----\n");
    assert!(matches!(&doc[0], Block::Paragraph(_)));
}

#[test]
fn test_raw_run_is_verbatim() {
    let doc = blocks("<div class=\"x\">\n<span>hi</span>\n</div>\n\ntext\n");
    assert_eq!(doc.len(), 2);
    match &doc[0] {
        Block::RawHtml(raw) => {
            assert_eq!(raw.content, "<div class=\"x\">\n<span>hi</span>\n</div>");
        }
        other => panic!("expected raw block, got {other:?}"),
    }
}

#[test]
fn test_raw_run_stops_at_table_candidate() {
    let doc = blocks("<br>\n| A |\n| 1 |\n");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc[0], Block::RawHtml(raw) if raw.content == "<br>"));
    assert!(matches!(&doc[1], Block::Table(_)));
}

#[test]
fn test_raw_run_stops_at_heading() {
    let doc = blocks("<br>\n# Title\n");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc[0], Block::RawHtml(raw) if raw.content == "<br>"));
    assert!(matches!(&doc[1], Block::Title(_)));
}

// ============================================================================
// Span and Document Tests
// ============================================================================

#[test]
fn test_empty_input() {
    let doc = classify("");
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.span.len(), 0);
}

#[test]
fn test_blank_only_input() {
    assert!(blocks("\n\n   \n\t\n").is_empty());
}

#[test]
fn test_spans_index_into_source() {
    let input = "# Title\n\npara\n";
    let doc = classify(input);
    match &doc.blocks[0] {
        Block::Title(b) => {
            assert_eq!(&input[b.span.start as usize..b.span.end as usize], "# Title");
        }
        other => panic!("expected title, got {other:?}"),
    }
    match &doc.blocks[1] {
        Block::Paragraph(b) => {
            assert_eq!(&input[b.span.start as usize..b.span.end as usize], "para");
        }
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn test_crlf_input() {
    let doc = blocks("# Title\r\n\r\ntext\r\n");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc[0], Block::Title(b) if b.text == "Title"));
    assert!(matches!(&doc[1], Block::Paragraph(b) if b.text == "text"));
}

#[test]
fn test_mixed_document_order() {
    let input = "# T\n\npara\n\n- a\n- b\n\n| H |\n| 1 |\n\n---\n\n> q\n";
    let doc = blocks(input);
    assert_eq!(doc.len(), 6);
    assert!(matches!(&doc[0], Block::Title(_)));
    assert!(matches!(&doc[1], Block::Paragraph(_)));
    assert!(matches!(&doc[2], Block::List(_)));
    assert!(matches!(&doc[3], Block::Table(_)));
    assert!(matches!(&doc[4], Block::Divider(_)));
    assert!(matches!(&doc[5], Block::Quote(_)));
}

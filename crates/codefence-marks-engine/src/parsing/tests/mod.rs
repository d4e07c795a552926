//! Fixture tests for the scanner.
//!
//! Uses snapshot testing with JSON format. Fixtures (.md) and snapshots (.snap)
//! are co-located in `fixtures/`.

use crate::{
    document::TextDocument,
    keywords::KeywordConfig,
    parsing::{CodeBlock, locate, snapshot},
};

// Fixture-based snapshot tests

#[test]
fn fixture_mixed_keywords() {
    assert_fixture("mixed_keywords");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

#[test]
fn fixture_empty_blocks() {
    assert_fixture("empty_blocks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let doc = TextDocument::new(&md);
    let config = KeywordConfig::default();

    let blocks: Vec<CodeBlock> = locate(&doc).collect();
    snapshot::invariants(&doc, &blocks);

    let snap = snapshot::normalize(&doc, &blocks, &config);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_json_snapshot!(name, snap);
    });
}

// Invariant tests

/// Every emitted range should slice back to fence-delimited text.
#[test]
fn block_ranges_start_and_end_on_fences() {
    let doc = TextDocument::new("intro\n```a\nx\n```\ntext\n```b\n```\n");
    let blocks: Vec<_> = locate(&doc).collect();

    assert_eq!(blocks.len(), 2);
    snapshot::invariants(&doc, &blocks);
}

/// Text inside a block is never re-scanned for openers.
#[test]
fn fences_do_not_nest() {
    let doc = TextDocument::new("```outer\n```inner\nbody\n```\n");
    let blocks: Vec<_> = locate(&doc).collect();

    // The second line closes the first block; the last fence is unterminated.
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].info, "outer");
    assert_eq!(blocks[0].range.end.line, 1);
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let doc = TextDocument::new("");
    assert_eq!(locate(&doc).count(), 0);
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let doc = TextDocument::new("\n\n\n");
    assert_eq!(locate(&doc).count(), 0);
}

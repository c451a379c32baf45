//! Integration tests for parsing real packages and rendering Markdown.

mod common;

use common::DocxBuilder;
use docxmd::render::{to_markdown, MarkdownRenderer};
use docxmd::{parse_bytes, Block, Docxmd, RenderOptions};

fn body_of(docx: &[u8]) -> Vec<String> {
    let doc = parse_bytes(docx).unwrap();
    MarkdownRenderer::new(RenderOptions::default())
        .body_lines(&doc)
        .unwrap()
}

#[test]
fn test_styles_resolve_to_heading_levels() {
    let docx = DocxBuilder::new()
        .heading("Top", 1)
        .heading("Intro", 2)
        .build();

    let doc = parse_bytes(&docx).unwrap();
    let styles: Vec<_> = doc.paragraphs().map(|p| p.style_name().to_string()).collect();
    assert_eq!(styles, vec!["Heading 1", "Heading 2"]);

    assert_eq!(body_of(&docx), vec!["# Top  ", "## Intro  "]);
}

#[test]
fn test_inline_code_bridges_space_run() {
    let docx = DocxBuilder::new()
        .runs(&[
            ("Use ", None),
            ("x", Some("Cascadia Mono")),
            (" ", None),
            ("y", Some("Cascadia Mono")),
            (" here", None),
        ])
        .build();

    assert_eq!(body_of(&docx), vec!["Use `x y` here  "]);
}

#[test]
fn test_mixed_runs_are_not_a_code_block() {
    let docx = DocxBuilder::new()
        .runs(&[("let", Some("Cascadia Mono")), (" value", None)])
        .build();

    assert_eq!(body_of(&docx), vec!["`let` value  "]);
}

#[test]
fn test_blank_lines_inside_and_outside_code() {
    let docx = DocxBuilder::new()
        .paragraph("text")
        .blank()
        .code("a = 1")
        .blank()
        .code("b = 2")
        .build();

    assert_eq!(
        body_of(&docx),
        vec!["text  ", "", "```python\na = 1\n\nb = 2\n```  "]
    );
}

#[test]
fn test_table_ends_code_run() {
    let docx = DocxBuilder::new()
        .code("x = 1")
        .table(&[&["Key", "Value"], &["k", "v"]])
        .code("y = 2")
        .build();

    assert_eq!(
        body_of(&docx),
        vec![
            "```python\nx = 1\n```  ",
            "",
            "| Key | Value |  ",
            "|---|---|  ",
            "| k | v |  ",
            "",
            "```python\ny = 2\n```  ",
        ]
    );
}

#[test]
fn test_section_properties_are_not_blocks() {
    let docx = DocxBuilder::new().paragraph("only").build();
    let doc = parse_bytes(&docx).unwrap();

    assert_eq!(doc.body.len(), 1);
    assert!(matches!(doc.body[0], Block::Paragraph(_)));
}

#[test]
fn test_duplicate_and_punctuated_headings() {
    let docx = DocxBuilder::new()
        .heading("Setup", 1)
        .heading("Setup", 1)
        .heading("What's new?", 2)
        .build();

    let doc = parse_bytes(&docx).unwrap();
    let md = to_markdown(&doc, &RenderOptions::default()).unwrap();

    assert!(md.starts_with(
        "## Table of Contents  \n- [Setup](#setup)  \n- [Setup](#setup-2)  \n  - [What's new?](#whats-new)  \n\n"
    ));
}

#[test]
fn test_builder_round_trip() {
    let docx = DocxBuilder::new().paragraph("Plain text   ").build();

    let md = Docxmd::new()
        .without_toc()
        .parse_bytes(&docx)
        .unwrap()
        .to_markdown()
        .unwrap();

    assert_eq!(md, "Plain text  ");
}

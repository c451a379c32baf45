//! DOCX document parser over the OOXML package.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use roxmltree::Node;
use zip::ZipArchive;

use crate::detect::{check_magic, DOCUMENT_PART};
use crate::error::{Error, Result};
use crate::model::{Block, Document, Metadata, Paragraph, Resource, Run, Table, TableCell, TableRow};

use super::options::{ErrorMode, ParseOptions};
use super::relationships::{resolve_part_name, Relationships};
use super::styles::StyleSheet;
use super::xml::{attr, child, children, descendant, has_descendant, is_tag, strip_bom, trimmed_text};

const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
const STYLES_PART: &str = "word/styles.xml";
const CORE_PROPS_PART: &str = "docProps/core.xml";

/// Run-level containers whose runs belong to the enclosing paragraph.
const RUN_CONTAINERS: &[&str] = &["hyperlink", "ins", "smartTag"];

type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

/// DOCX document parser.
pub struct DocxParser {
    data: Vec<u8>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_vec(data, options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Self::from_vec(data.to_vec(), options)
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data, options)
    }

    /// Only the magic is checked here; the archive is opened once, in `parse`.
    fn from_vec(data: Vec<u8>, options: ParseOptions) -> Result<Self> {
        check_magic(&data)?;
        Ok(Self { data, options })
    }

    /// Parse the package and return the document model.
    pub fn parse(&self) -> Result<Document> {
        let mut archive = ZipArchive::new(Cursor::new(self.data.as_slice()))?;

        let rels = match read_part_text(&mut archive, DOCUMENT_RELS_PART)? {
            Some(xml) => self.optional(DOCUMENT_RELS_PART, Relationships::parse(&xml))?,
            None => Relationships::default(),
        };
        let styles = match read_part_text(&mut archive, STYLES_PART)? {
            Some(xml) => self.optional(STYLES_PART, StyleSheet::parse(&xml))?,
            None => StyleSheet::default(),
        };

        let mut document = Document::new();
        if let Some(xml) = read_part_text(&mut archive, CORE_PROPS_PART)? {
            document.metadata = self.optional(CORE_PROPS_PART, parse_core_properties(&xml))?;
        }

        let body_xml = read_part_text(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;
        document.body = parse_body(&body_xml, &styles)?;

        if self.options.extract_images {
            document.images = load_images(&mut archive, &rels)?;
        }

        log::debug!(
            "Parsed {} body blocks, {} image parts",
            document.body.len(),
            document.images.len()
        );
        Ok(document)
    }

    /// Apply the error mode to the result of parsing an optional part.
    fn optional<T: Default>(&self, part: &str, result: Result<T>) -> Result<T> {
        match (result, self.options.error_mode) {
            (Ok(value), _) => Ok(value),
            (Err(e), ErrorMode::Lenient) => {
                log::warn!("Ignoring malformed part {}: {}", part, e);
                Ok(T::default())
            }
            (Err(e), ErrorMode::Strict) => Err(e),
        }
    }
}

fn read_part_bytes(archive: &mut Archive<'_>, name: &str) -> Result<Option<Vec<u8>>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut data = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut data)?;
    Ok(Some(data))
}

fn read_part_text(archive: &mut Archive<'_>, name: &str) -> Result<Option<String>> {
    match read_part_bytes(archive, name)? {
        Some(bytes) => String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| Error::Xml(format!("{} is not valid UTF-8: {}", name, e))),
        None => Ok(None),
    }
}

/// Build the relationship-id to image-bytes table.
fn load_images(archive: &mut Archive<'_>, rels: &Relationships) -> Result<HashMap<String, Resource>> {
    let mut images = HashMap::new();
    for rel in rels.images() {
        let part_name = resolve_part_name("word", &rel.target);
        match read_part_bytes(archive, &part_name)? {
            Some(data) => {
                images.insert(rel.id.clone(), Resource::image(data).with_part_name(part_name));
            }
            None => log::warn!("Image relationship {} points to missing part {}", rel.id, part_name),
        }
    }
    Ok(images)
}

fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let doc = roxmltree::Document::parse(strip_bom(xml))?;
    let root = doc.root_element();
    let text_of = |local: &str| child(&root, local).and_then(|n| trimmed_text(&n));
    let date_of = |local: &str| {
        text_of(local)
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    };

    Ok(Metadata {
        title: text_of("title"),
        author: text_of("creator"),
        subject: text_of("subject"),
        keywords: text_of("keywords"),
        created: date_of("created"),
        modified: date_of("modified"),
    })
}

fn parse_body(xml: &str, styles: &StyleSheet) -> Result<Vec<Block>> {
    let doc = roxmltree::Document::parse(strip_bom(xml))?;
    let body = descendant(&doc.root_element(), "body")
        .ok_or_else(|| Error::MissingPart(format!("{} body", DOCUMENT_PART)))?;

    let mut blocks = Vec::new();
    for element in body.children().filter(|n| n.is_element()) {
        match element.tag_name().name() {
            "p" => blocks.push(Block::Paragraph(parse_paragraph(&element, styles))),
            "tbl" => blocks.push(Block::Table(parse_table(&element, styles))),
            "sectPr" => {}
            other => {
                log::debug!("Keeping unsupported body element <{}>", other);
                blocks.push(Block::Unsupported {
                    tag: other.to_string(),
                });
            }
        }
    }
    Ok(blocks)
}

fn parse_paragraph(node: &Node, styles: &StyleSheet) -> Paragraph {
    let style_id = child(node, "pPr")
        .and_then(|ppr| child(&ppr, "pStyle"))
        .and_then(|s| attr(&s, "val"));

    let mut runs = Vec::new();
    collect_runs(node, &mut runs);

    Paragraph {
        runs,
        style_name: styles.resolve(style_id).to_string(),
        is_list_item: has_descendant(node, "numPr"),
        has_image: has_descendant(node, "pic"),
    }
}

fn collect_runs(parent: &Node, runs: &mut Vec<Run>) {
    for node in parent.children().filter(|n| n.is_element()) {
        let name = node.tag_name().name();
        if name == "r" {
            runs.push(parse_run(&node));
        } else if RUN_CONTAINERS.contains(&name) {
            collect_runs(&node, runs);
        }
    }
}

fn parse_run(node: &Node) -> Run {
    let mut text = String::new();
    for item in node.children().filter(|n| n.is_element()) {
        match item.tag_name().name() {
            "t" => text.push_str(item.text().unwrap_or_default()),
            "tab" | "ptab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }

    let font_name = child(node, "rPr")
        .and_then(|rpr| child(&rpr, "rFonts"))
        .and_then(|fonts| attr(&fonts, "ascii").or_else(|| attr(&fonts, "hAnsi")))
        .map(str::to_string);

    let image_ref = node
        .descendants()
        .find(|n| is_tag(n, "pic"))
        .and_then(|pic| descendant(&pic, "blip"))
        .and_then(|blip| attr(&blip, "embed"))
        .map(str::to_string);

    Run {
        text,
        font_name,
        image_ref,
    }
}

fn parse_table(node: &Node, styles: &StyleSheet) -> Table {
    let rows: Vec<TableRow> = children(node, "tr")
        .map(|tr| TableRow::new(children(&tr, "tc").map(|tc| parse_cell(&tc, styles)).collect()))
        .collect();

    let grid_columns = child(node, "tblGrid")
        .map(|grid| children(&grid, "gridCol").count())
        .unwrap_or(0);
    let column_count = if grid_columns > 0 {
        grid_columns
    } else {
        rows.first().map(|r| r.cells.len()).unwrap_or(0)
    };

    let mut table = Table::new(column_count);
    for row in rows {
        table.add_row(row);
    }
    table
}

fn parse_cell(node: &Node, styles: &StyleSheet) -> TableCell {
    let text = children(node, "p")
        .map(|p| parse_paragraph(&p, styles).text())
        .collect::<Vec<_>>()
        .join("\n");
    TableCell::text(text)
}

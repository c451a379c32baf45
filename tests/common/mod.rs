//! In-memory DOCX packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const NAMESPACES: &str = concat!(
    r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture""#,
);

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>
  <w:style w:type="paragraph" w:styleId="ListParagraph"><w:name w:val="List Paragraph"/></w:style>
</w:styles>"#;

/// Smallest PNG signature plus padding, enough for MIME sniffing.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

/// Builds a DOCX package body element by element.
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
    rels: Vec<(String, String)>,
    media: Vec<(String, Vec<u8>)>,
    core: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.body
            .push_str(&format!("<w:p>{}</w:p>", run(text, None)));
        self
    }

    pub fn blank(mut self) -> Self {
        self.body.push_str("<w:p/>");
        self
    }

    pub fn heading(mut self, text: &str, level: u8) -> Self {
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading{}"/></w:pPr>{}</w:p>"#,
            level,
            run(text, None)
        ));
        self
    }

    pub fn list_item(mut self, text: &str) -> Self {
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="ListParagraph"/><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr>{}</w:p>"#,
            run(text, None)
        ));
        self
    }

    pub fn code(mut self, text: &str) -> Self {
        self.body
            .push_str(&format!("<w:p>{}</w:p>", run(text, Some("Cascadia Mono"))));
        self
    }

    /// Paragraph built from `(text, font)` runs.
    pub fn runs(mut self, runs: &[(&str, Option<&str>)]) -> Self {
        let inner: String = runs.iter().map(|(t, f)| run(t, *f)).collect();
        self.body.push_str(&format!("<w:p>{}</w:p>", inner));
        self
    }

    pub fn table(mut self, rows: &[&[&str]]) -> Self {
        let columns = rows.first().map_or(0, |r| r.len());
        let mut xml = String::from("<w:tbl><w:tblGrid>");
        xml.push_str(&"<w:gridCol/>".repeat(columns));
        xml.push_str("</w:tblGrid>");
        for row in rows {
            xml.push_str("<w:tr>");
            for cell in *row {
                xml.push_str("<w:tc>");
                for line in cell.split('\n') {
                    xml.push_str(&format!("<w:p>{}</w:p>", run(line, None)));
                }
                xml.push_str("</w:tc>");
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl>");
        self.body.push_str(&xml);
        self
    }

    /// Picture paragraph referencing `rel_id`; the bytes are packaged only
    /// when `data` is given.
    pub fn image(mut self, rel_id: &str, data: Option<&[u8]>) -> Self {
        self.body.push_str(&format!(
            r#"<w:p><w:r><w:drawing><wp:inline><a:graphic><a:graphicData><pic:pic><pic:blipFill><a:blip r:embed="{}"/></pic:blipFill></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#,
            rel_id
        ));
        if let Some(bytes) = data {
            let target = format!("media/image-{}.png", rel_id);
            self.rels.push((rel_id.to_string(), target.clone()));
            self.media.push((format!("word/{}", target), bytes.to_vec()));
        }
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.core = Some(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{}</dc:title><dc:creator>Tester</dc:creator></cp:coreProperties>"#,
            title
        ));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {}><w:body>{}<w:sectPr/></w:body></w:document>"#,
            NAMESPACES, self.body
        );
        let rels: String = self
            .rels
            .iter()
            .map(|(id, target)| {
                format!(
                    r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="{}"/>"#,
                    id, target
                )
            })
            .collect();
        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
            rels
        );

        let mut parts: Vec<(String, Vec<u8>)> = vec![
            ("word/document.xml".to_string(), document.into_bytes()),
            ("word/_rels/document.xml.rels".to_string(), rels.into_bytes()),
            ("word/styles.xml".to_string(), STYLES.as_bytes().to_vec()),
        ];
        if let Some(core) = self.core {
            parts.push(("docProps/core.xml".to_string(), core.into_bytes()));
        }
        parts.extend(self.media);

        for (name, data) in parts {
            zip.start_file(name, options).unwrap();
            zip.write_all(&data).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}

fn run(text: &str, font: Option<&str>) -> String {
    let props = font
        .map(|f| format!(r#"<w:rPr><w:rFonts w:ascii="{0}" w:hAnsi="{0}"/></w:rPr>"#, f))
        .unwrap_or_default();
    format!(
        r#"<w:r>{}<w:t xml:space="preserve">{}</w:t></w:r>"#,
        props,
        escape(text)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

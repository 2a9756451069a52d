//! Shared test fixtures.
//!
//! Builds the binary inputs tests need — attendee spreadsheets and logo
//! images — from code, so the repository ships no opaque fixture files.
//! The spreadsheet writer produces the smallest `.xlsx` package `calamine`
//! reads back: workbook, one worksheet, inline strings, boolean cells.

use quick_xml::escape::escape;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

/// One attendee row for a fixture spreadsheet.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub selected: bool,
    pub fname: String,
    pub lname: String,
    pub tel: String,
    pub email: String,
}

const ROSTER_HEADERS: [&str; 5] = ["selected", "fname", "lname", "tel", "email"];

/// Write a roster spreadsheet with the conventional five columns.
pub fn write_roster_xlsx(path: &Path, rows: &[RosterRow]) {
    let mut sheet_rows: Vec<Vec<CellValue>> = vec![
        ROSTER_HEADERS
            .iter()
            .map(|h| CellValue::Text(h.to_string()))
            .collect(),
    ];
    for row in rows {
        sheet_rows.push(vec![
            CellValue::Bool(row.selected),
            CellValue::Text(row.fname.clone()),
            CellValue::Text(row.lname.clone()),
            CellValue::Text(row.tel.clone()),
            CellValue::Text(row.email.clone()),
        ]);
    }
    write_xlsx(path, &sheet_rows);
}

/// Write a spreadsheet with only a header row (arbitrary column names).
pub fn write_xlsx_with_headers(path: &Path, headers: &[&str]) {
    let header_row: Vec<CellValue> = headers
        .iter()
        .map(|h| CellValue::Text(h.to_string()))
        .collect();
    write_xlsx(path, &[header_row]);
}

/// Write a solid-color RGBA logo image.
pub fn write_logo_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    img.save(path).unwrap();
}

pub enum CellValue {
    Text(String),
    Bool(bool),
}

fn column_letter(index: usize) -> char {
    // Fixture sheets never exceed a handful of columns.
    (b'A' + index as u8) as char
}

fn sheet_xml(rows: &[Vec<CellValue>]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
         <sheetData>",
    );
    for (r, row) in rows.iter().enumerate() {
        xml.push_str(&format!("<row r=\"{}\">", r + 1));
        for (c, cell) in row.iter().enumerate() {
            let cell_ref = format!("{}{}", column_letter(c), r + 1);
            match cell {
                CellValue::Text(text) => xml.push_str(&format!(
                    "<c r=\"{cell_ref}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                    escape(text)
                )),
                CellValue::Bool(flag) => xml.push_str(&format!(
                    "<c r=\"{cell_ref}\" t=\"b\"><v>{}</v></c>",
                    if *flag { 1 } else { 0 }
                )),
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn write_xlsx(path: &Path, rows: &[Vec<CellValue>]) {
    const CONTENT_TYPES: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
<Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
</Types>";

    const ROOT_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
</Relationships>";

    const WORKBOOK: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
<sheets><sheet name=\"Sheet1\" sheetId=\"1\" r:id=\"rId1\"/></sheets>\
</workbook>";

    const WORKBOOK_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>\
</Relationships>";

    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default();

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", WORKBOOK.to_string()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
    ];
    for (name, body) in parts {
        zip.start_file(name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

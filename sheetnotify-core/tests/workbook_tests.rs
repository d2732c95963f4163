#![cfg(feature = "workbook")]

use serde_json::{Value, json};
use sheetnotify_core::{
    CellValue, EditEvent, EditRange, NotifyError, SheetSource, UpdatePayload, WorkbookSheet,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

// Helper to create a minimal valid XLSX file; each sheet is a list of
// (cell reference, raw <c> element body) pairs
fn create_mock_xlsx(path: &Path, sheets: &[(&str, &[&str])]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    // 1. [Content_Types].xml
    zip.start_file("[Content_Types].xml", options)?;
    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
"#,
    );
    for (i, _) in sheets.iter().enumerate() {
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            i + 1
        ));
    }
    content_types.push_str("</Types>");
    zip.write_all(content_types.as_bytes())?;

    // 2. _rels/.rels
    zip.start_file("_rels/.rels", options)?;
    zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#.as_bytes())?;

    // 3. xl/workbook.xml
    zip.start_file("xl/workbook.xml", options)?;
    let mut workbook_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets>
"#,
    );
    for (i, (name, _)) in sheets.iter().enumerate() {
        workbook_xml.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            name,
            i + 1,
            i + 1
        ));
    }
    workbook_xml.push_str("</sheets></workbook>");
    zip.write_all(workbook_xml.as_bytes())?;

    // 4. xl/_rels/workbook.xml.rels
    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    let mut rels_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for (i, _) in sheets.iter().enumerate() {
        rels_xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            i + 1, i + 1
        ));
    }
    rels_xml.push_str("</Relationships>");
    zip.write_all(rels_xml.as_bytes())?;

    // 5. sheets, one <row> per distinct row number
    for (i, (_, cells)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        let mut sheet_xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
        );
        let mut current_row: Option<String> = None;
        for cell in cells.iter() {
            let reference = cell
                .split('"')
                .nth(1)
                .ok_or_else(|| anyhow::anyhow!("cell without reference: {}", cell))?;
            let row: String = reference.chars().filter(|c| c.is_ascii_digit()).collect();
            if current_row.as_deref() != Some(row.as_str()) {
                if current_row.is_some() {
                    sheet_xml.push_str("</row>");
                }
                sheet_xml.push_str(&format!(r#"<row r="{}">"#, row));
                current_row = Some(row);
            }
            sheet_xml.push_str(cell);
        }
        if current_row.is_some() {
            sheet_xml.push_str("</row>");
        }
        sheet_xml.push_str("</sheetData></worksheet>");
        zip.write_all(sheet_xml.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

const EMPTY: &[&str] = &[];

const CARS: &[&str] = &[
    r#"<c r="A1" t="inlineStr"><is><t>Car_ID</t></is></c>"#,
    r#"<c r="B1" t="inlineStr"><is><t>Car_Name</t></is></c>"#,
    r#"<c r="C1" t="inlineStr"><is><t>Cylinders</t></is></c>"#,
    r#"<c r="A2"><v>1</v></c>"#,
    r#"<c r="B2" t="inlineStr"><is><t>chevrolet chevelle malibu</t></is></c>"#,
    r#"<c r="C2"><v>8</v></c>"#,
    r#"<c r="D2" t="d"><v>2023-08-01T00:00:00</v></c>"#,
    r#"<c r="A3"><v>2</v></c>"#,
    r#"<c r="C3"><v>2.5</v></c>"#,
    r#"<c r="D3" t="b"><v>1</v></c>"#,
];

#[test]
fn test_reads_named_sheet() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cars.xlsx");
    create_mock_xlsx(&path, &[("Notes", EMPTY), ("Cars", CARS)])?;

    let sheet = WorkbookSheet::open(&path, Some("Cars"))?;
    assert_eq!(sheet.name(), "Cars");
    assert_eq!(sheet.value_at(1, 2), CellValue::Text("Car_Name".to_string()));
    assert_eq!(sheet.value_at(2, 3), CellValue::Number(8.0));
    assert_eq!(sheet.value_at(3, 4), CellValue::Bool(true));
    assert_eq!(sheet.value_at(3, 2), CellValue::Empty);
    // Outside the used range
    assert_eq!(sheet.value_at(50, 50), CellValue::Empty);

    Ok(())
}

#[test]
fn test_defaults_to_first_sheet() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("first.xlsx");
    create_mock_xlsx(&path, &[("Cars", CARS), ("Other", EMPTY)])?;

    let sheet = WorkbookSheet::open(&path, None)?;
    assert_eq!(sheet.name(), "Cars");
    Ok(())
}

#[test]
fn test_missing_sheet() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.xlsx");
    create_mock_xlsx(&path, &[("Cars", CARS)])?;

    let result = WorkbookSheet::open(&path, Some("Trucks"));
    match result {
        Err(NotifyError::Workbook(message)) => assert!(message.contains("Trucks")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected missing sheet error"),
    }
    Ok(())
}

#[test]
fn test_payload_from_workbook_edit() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("edit.xlsx");
    create_mock_xlsx(&path, &[("Cars", CARS)])?;

    let sheet = WorkbookSheet::open(&path, Some("Cars"))?;
    let event = EditEvent::new(&sheet, EditRange::parse("B2:C3")?);
    let payload = UpdatePayload::from_event(&event);

    let body: Value = serde_json::from_slice(&payload.to_json()?)?;
    assert_eq!(
        body,
        json!({
            "sheetName": "Cars",
            "updates": [
                {"row": 2, "col": 2, "value": "chevrolet chevelle malibu"},
                {"row": 2, "col": 3, "value": 8},
                {"row": 3, "col": 2, "value": ""},
                {"row": 3, "col": 3, "value": 2.5},
            ]
        })
    );
    Ok(())
}

#[test]
fn test_date_cells_serialize_as_iso_utc() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dates.xlsx");
    create_mock_xlsx(&path, &[("Cars", CARS)])?;

    let sheet = WorkbookSheet::open(&path, Some("Cars"))?;
    let value = sheet.value_at(2, 4);
    assert!(matches!(value, CellValue::DateTime(_)), "got {:?}", value);
    assert_eq!(serde_json::to_string(&value)?, r#""2023-08-01T00:00:00.000Z""#);

    let payload = UpdatePayload::from_event(&EditEvent::new(&sheet, EditRange::single(2, 4)?));
    let body: Value = serde_json::from_slice(&payload.to_json()?)?;
    assert_eq!(body["updates"][0]["value"], "2023-08-01T00:00:00.000Z");
    Ok(())
}

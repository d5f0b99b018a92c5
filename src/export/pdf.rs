use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::emissions::UnitSystem;
use crate::error::{AppError, Result};
use crate::locale::LocaleStrings;
use crate::models::FootprintResult;

const LINE_LEADING: i64 = 20;

/// Writes the single-page PDF report: localized title, one line per
/// category, and a total line. A failed write removes the partial file.
pub fn export_pdf(
    result: &FootprintResult,
    unit_system: UnitSystem,
    strings: &LocaleStrings,
    path: &Path,
) -> Result<()> {
    write_report(result, unit_system, strings, path).map_err(|err| {
        let _ = std::fs::remove_file(path);
        err
    })
}

fn write_report(
    result: &FootprintResult,
    unit_system: UnitSystem,
    strings: &LocaleStrings,
    path: &Path,
) -> Result<()> {
    let mass = unit_system.mass_label();
    let mut lines: Vec<String> = result
        .per_category
        .iter()
        .map(|(category, value)| {
            format!("{}: {:.2} {} CO2/month", category.display_name(), value, mass)
        })
        .collect();
    lines.push(format!(
        "{}: {:.2} {} CO2/month",
        strings.total, result.total, mass
    ));

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 16.into()]),
        Operation::new("Td", vec![72.into(), 790.into()]),
        Operation::new("Tj", vec![Object::string_literal(strings.title)]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![0.into(), (-2 * LINE_LEADING).into()]),
    ];
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-LINE_LEADING).into()]));
        }
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.as_str())],
        ));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| AppError::Export(format!("Failed to encode PDF content: {}", e)))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        // A4
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    doc.save(path)
        .map_err(|e| AppError::Export(format!("Failed to write PDF file: {}", e)))?;
    Ok(())
}

//! CSV output for classified rows.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use coursetag_common::Result;

use crate::models::{TaggedCatalog, TaggedCourse};

/// Write `rows` with `catalog`'s output header to `path`, creating parent
/// directories. Returns the number of data rows written.
pub fn write_courses(path: &Path, catalog: &TaggedCatalog, rows: &[TaggedCourse]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_to(file, catalog, rows)?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

/// Write `rows` to any sink. Flags render as `true`/`false`.
pub fn write_to<W: Write>(sink: W, catalog: &TaggedCatalog, rows: &[TaggedCourse]) -> Result<()> {
    let headers = catalog.output_headers();
    let column = |name: &str| headers.iter().position(|h| h == name).unwrap_or(headers.len());

    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(&headers)?;

    for row in rows {
        let mut cells = row.record.fields.clone();
        cells.resize(headers.len(), String::new());
        for (topic, result) in &row.tags {
            if let Some(cell) = cells.get_mut(column(topic.flag_column())) {
                *cell = result.matched.to_string();
            }
            if let Some(cell) = cells.get_mut(column(topic.reason_column())) {
                cell.clone_from(&result.reason);
            }
        }
        writer.write_record(&cells)?;
    }

    writer.flush()?;
    Ok(())
}

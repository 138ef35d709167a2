//! Course CSV loading.
//!
//! Required columns are validated from the header before any row is read, so
//! a malformed catalog fails fast instead of half-way through a batch.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use coursetag_common::{CourseRecord, CoursetagError, Result};

pub const REQUIRED_COLUMNS: [&str; 4] = ["prefix", "number", "title", "description"];

/// Optional column carried into [`CourseRecord::term`].
pub const TERM_COLUMN: &str = "term";

/// Header plus every row of a course catalog, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseTable {
    pub headers: Vec<String>,
    pub records: Vec<CourseRecord>,
}

impl CourseTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    prefix: usize,
    number: usize,
    title: usize,
    description: usize,
    term: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        match REQUIRED_COLUMNS.map(find) {
            [Some(prefix), Some(number), Some(title), Some(description)] => Ok(Self {
                prefix,
                number,
                title,
                description,
                term: find(TERM_COLUMN),
            }),
            positions => Err(CoursetagError::MissingColumns(
                REQUIRED_COLUMNS
                    .iter()
                    .zip(positions)
                    .filter(|(_, pos)| pos.is_none())
                    .map(|(c, _)| c.to_string())
                    .collect(),
            )),
        }
    }
}

/// Load a course CSV from disk.
pub fn load_courses(path: &Path) -> Result<CourseTable> {
    if !path.exists() {
        return Err(CoursetagError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let table = read_courses(file)?;
    info!("Loaded {} course rows from {}", table.len(), path.display());
    Ok(table)
}

/// Parse a course CSV from any reader.
///
/// Short rows and empty cells become empty strings; cells beyond the header
/// width are dropped.
pub fn read_courses<R: Read>(reader: R) -> Result<CourseTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (row_no, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() > headers.len() {
            debug!("Row {} has {} cells, header has {}; extra cells dropped", row_no + 1, row.len(), headers.len());
        }

        let mut fields: Vec<String> = row.iter().take(headers.len()).map(|s| s.to_string()).collect();
        fields.resize(headers.len(), String::new());

        let cell = |i: usize| fields[i].trim().to_string();
        let term = columns.term.map(cell).filter(|t| !t.is_empty());
        records.push(CourseRecord {
            term,
            prefix: cell(columns.prefix),
            number: cell(columns.number),
            title: fields[columns.title].clone(),
            description: fields[columns.description].clone(),
            fields,
        });
    }

    Ok(CourseTable { headers, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_required_and_passthrough_columns() {
        let csv = "term,prefix,number,title,description,units\n\
                   Fall 2025,CS,470,Artificial Intelligence,Search and learning.,3\n";
        let table = read_courses(csv.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["term", "prefix", "number", "title", "description", "units"]);
        assert_eq!(table.len(), 1);
        let rec = &table.records[0];
        assert_eq!(rec.term.as_deref(), Some("Fall 2025"));
        assert_eq!(rec.key().to_string(), "CS 470");
        assert_eq!(rec.fields[5], "3");
    }

    #[test]
    fn test_missing_columns_reported_together() {
        let csv = "prefix,number,units\nCS,470,3\n";
        let err = read_courses(csv.as_bytes()).unwrap_err();
        match err {
            CoursetagError::MissingColumns(cols) => assert_eq!(cols, vec!["title", "description"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_columns_resolved_in_any_order() {
        let csv = "description, title ,units,number,prefix\nSearch and learning.,Artificial Intelligence,3,470,CS\n";
        let table = read_courses(csv.as_bytes()).unwrap();
        let rec = &table.records[0];
        assert_eq!(rec.key().to_string(), "CS 470");
        assert_eq!(rec.title, "Artificial Intelligence");
        assert_eq!(rec.description, "Search and learning.");
        assert_eq!(rec.term, None);
    }

    #[test]
    fn test_term_column_is_optional() {
        let err = read_courses("term,prefix,number,title\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Missing required columns: description");
        assert!(read_courses("prefix,number,title,description\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_short_rows_and_empty_cells_become_empty() {
        let csv = "prefix,number,title,description\nPHIL,100,Ethics\nART,200,,\n";
        let table = read_courses(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].description, "");
        assert_eq!(table.records[0].fields.len(), 4);
        assert_eq!(table.records[1].title, "");
        assert_eq!(table.records[1].term, None);
    }

    #[test]
    fn test_extra_cells_dropped() {
        let csv = "prefix,number,title,description\nCS,101,Intro,Basics,stray\n";
        let table = read_courses(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].fields, vec!["CS", "101", "Intro", "Basics"]);
    }

    #[test]
    fn test_quoted_multiline_description() {
        let csv = "prefix,number,title,description\nCS,480,Deep Learning,\"Line one,\nline two\"\n";
        let table = read_courses(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].description, "Line one,\nline two");
    }

    #[test]
    fn test_missing_file() {
        let err = load_courses(Path::new("/nonexistent/courses.csv")).unwrap_err();
        assert!(matches!(err, CoursetagError::InputNotFound(_)));
        assert!(err.is_configuration());
    }
}

//! Tabular input for knapsack items and TSP cities.
//!
//! Rows are comma separated, without a header, with three fields:
//! `id,weight,value` for items and `id,x,y` for cities. Rows that are too
//! short or fail to parse are skipped and counted; the caller always learns
//! how many rows were dropped.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::Result;
use crate::model::{City, Item};

/// Parsed records plus the number of rows that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    /// Successfully parsed records, in file order.
    pub records: Vec<T>,
    /// Rows that could not be parsed.
    pub skipped: usize,
}

/// Reads items from a CSV stream.
///
/// ```
/// use u_tabu::loader::load_items;
///
/// let data = "1,2.0,3.0\nnot,a,row\n2, 3.5 ,4\n";
/// let loaded = load_items(data.as_bytes()).unwrap();
/// assert_eq!(loaded.records.len(), 2);
/// assert_eq!(loaded.skipped, 1);
/// ```
pub fn load_items<R: Read>(reader: R) -> Result<Loaded<Item>> {
    load_rows(reader, "item", |r| {
        Some(Item::new(field(r, 0)?, field(r, 1)?, field(r, 2)?))
    })
}

/// Reads cities from a CSV stream.
pub fn load_cities<R: Read>(reader: R) -> Result<Loaded<City>> {
    load_rows(reader, "city", |r| {
        Some(City::new(field(r, 0)?, field(r, 1)?, field(r, 2)?))
    })
}

/// Reads items from a CSV file.
pub fn load_items_from_path<P: AsRef<Path>>(path: P) -> Result<Loaded<Item>> {
    load_items(File::open(path)?)
}

/// Reads cities from a CSV file.
pub fn load_cities_from_path<P: AsRef<Path>>(path: P) -> Result<Loaded<City>> {
    load_cities(File::open(path)?)
}

fn field<T: FromStr>(record: &StringRecord, index: usize) -> Option<T> {
    record.get(index)?.parse().ok()
}

fn load_rows<R, T, F>(reader: R, kind: &'static str, parse: F) -> Result<Loaded<T>>
where
    R: Read,
    F: Fn(&StringRecord) -> Option<T>,
{
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;
    for (line, row) in csv.records().enumerate() {
        let row = row?;
        match parse(&row) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                tracing::warn!(line = line + 1, kind, "skipping unparsable row");
            }
        }
    }

    tracing::debug!(kind, loaded = records.len(), skipped, "rows loaded");
    Ok(Loaded { records, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabuError;

    #[test]
    fn test_load_items() {
        let data = "1,2,3\n2,3,4\n3,4,5\n";
        let loaded = load_items(data.as_bytes()).unwrap();
        assert_eq!(loaded.skipped, 0);
        assert_eq!(
            loaded.records,
            vec![
                Item::new(1, 2.0, 3.0),
                Item::new(2, 3.0, 4.0),
                Item::new(3, 4.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_load_cities_skips_bad_rows() {
        let data = "1,0,0\n2,0\nx,1,1\n3, 1.5 , 2.5\n4,1,1,extra\n";
        let loaded = load_cities(data.as_bytes()).unwrap();
        assert_eq!(loaded.skipped, 2);
        let ids: Vec<i64> = loaded.records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!((loaded.records[1].x - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_header_row_counted_as_skipped() {
        let data = "id,weight,value\n1,1,1\n";
        let loaded = load_items(data.as_bytes()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 1);
    }

    #[test]
    fn test_empty_input() {
        let loaded = load_cities("".as_bytes()).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn test_missing_file() {
        let err = load_items_from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, TabuError::Io(_)));
    }
}

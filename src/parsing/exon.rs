//! Parser and writer for HITindex EXON files.
//!
//! An EXON file is tab-delimited with a header line. Three columns are used:
//! `exon` (locus), `ID` (positional class) and `HITindex` (usage score).
//! Any other columns are ignored.

use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::exon::{Exon, LocusMap};
use crate::core::types::{normalize_hit_id, HitId};

pub const LOCUS_FIELD: &str = "exon";
pub const ID_FIELD: &str = "ID";
pub const HIT_INDEX_FIELD: &str = "HITindex";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required field '{field}' on line {line}")]
    MissingField { field: &'static str, line: usize },

    #[error("Invalid HITindex on line {line}: '{value}'")]
    InvalidHitIndex { line: usize, value: String },

    #[error("Unknown exon category on line {line}: '{value}'")]
    UnknownCategory { line: usize, value: String },

    #[error("Invalid EXON file format: {0}")]
    InvalidFormat(String),
}

/// Column positions of the required fields within a row
struct Columns {
    locus: usize,
    id: usize,
    hit_index: usize,
}

impl Columns {
    fn from_header(header: &[&str], line: usize) -> Result<Self, ParseError> {
        let find = |field: &'static str| {
            header
                .iter()
                .position(|name| *name == field)
                .ok_or(ParseError::MissingField { field, line })
        };

        Ok(Self {
            locus: find(LOCUS_FIELD)?,
            id: find(ID_FIELD)?,
            hit_index: find(HIT_INDEX_FIELD)?,
        })
    }
}

/// Read an EXON file into a locus to exon mapping
///
/// IDs outside the five positional classes are rejected here, so a mapping
/// that reads successfully can always be compared.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error from
/// [`read_exon_text`] if the content is invalid.
pub fn read_exon(path: &Path) -> Result<LocusMap, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let locus_to_exon = read_exon_text(&content)?;

    debug!(
        "Read {} exons from {}",
        locus_to_exon.len(),
        path.display()
    );

    Ok(locus_to_exon)
}

/// Parse EXON text into a locus to exon mapping.
///
/// When a locus appears more than once the last row wins.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if there is no header line,
/// `ParseError::MissingField` if the header or a row lacks a required column,
/// `ParseError::InvalidHitIndex` if a score is not numeric, or
/// `ParseError::UnknownCategory` if an ID does not name a positional class.
pub fn read_exon_text(text: &str) -> Result<LocusMap, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No header line found".to_string()))?;
    let header: Vec<&str> = header.split('\t').collect();
    let columns = Columns::from_header(&header, header_line)?;

    let mut locus_to_exon = LocusMap::new();

    for (line_num, line) in lines {
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |idx: usize, name: &'static str| {
            fields.get(idx).copied().ok_or(ParseError::MissingField {
                field: name,
                line: line_num,
            })
        };

        let locus = field(columns.locus, LOCUS_FIELD)?;
        let raw_id = field(columns.id, ID_FIELD)?;
        let raw_index = field(columns.hit_index, HIT_INDEX_FIELD)?;

        let hit_index: f64 = raw_index.trim().parse().map_err(|_| ParseError::InvalidHitIndex {
            line: line_num,
            value: raw_index.to_string(),
        })?;

        let label = normalize_hit_id(raw_id);
        let hit_id = HitId::parse(&label).ok_or_else(|| ParseError::UnknownCategory {
            line: line_num,
            value: raw_id.to_string(),
        })?;

        let exon = Exon::new(locus, hit_index, hit_id);
        if locus_to_exon.insert(locus.to_string(), exon).is_some() {
            warn!("Duplicate locus '{locus}' on line {line_num}; keeping the later row");
        }
    }

    Ok(locus_to_exon)
}

/// Write a locus to exon mapping as an EXON file with canonical IDs.
///
/// The output reads back through [`read_exon_text`] to the same mapping.
///
/// # Errors
///
/// Returns `ParseError::Io` if writing fails.
pub fn write_exon_tsv<W: Write>(writer: &mut W, locus_to_exon: &LocusMap) -> Result<(), ParseError> {
    writeln!(writer, "{LOCUS_FIELD}\t{ID_FIELD}\t{HIT_INDEX_FIELD}")?;
    for exon in locus_to_exon.values() {
        writeln!(writer, "{}\t{}\t{}", exon.locus, exon.hit_id, exon.hit_index)?;
    }
    Ok(())
}

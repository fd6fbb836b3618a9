//! Parsers for HITindex output files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hit_compare::parsing::exon::read_exon;
//! use std::path::Path;
//!
//! let exons = read_exon(Path::new("sample_rep1.exon")).unwrap();
//! for (locus, exon) in &exons {
//!     println!("{locus}\t{}\t{}", exon.hit_id, exon.hit_index);
//! }
//! ```
//!
//! ## Required columns
//!
//! | Column     | Description | Parsed as |
//! |------------|-------------|-----------|
//! | `exon`     | Locus key | string |
//! | `ID`       | Positional class | [`HitId`](crate::core::HitId) |
//! | `HITindex` | Positional usage score | `f64` |

pub mod exon;

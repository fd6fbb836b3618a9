//! Core data types for exon usage comparison.
//!
//! - [`Exon`]: one exon call with its locus, HITindex score and positional class
//! - [`HitId`]: the closed set of positional classes, in matrix order
//! - [`LocusMap`]: locus to exon mapping produced by parsing or merging
//!
//! ## Positional classes
//!
//! | Row/column | Label            | HITindex `ID` prefix |
//! |------------|------------------|----------------------|
//! | 0          | `first`          | `First`              |
//! | 1          | `first_internal` | `FirstInternal`      |
//! | 2          | `internal`       | `Internal`           |
//! | 3          | `internal_last`  | `InternalLast`       |
//! | 4          | `last`           | `Last`               |

pub mod exon;
pub mod types;

pub use exon::{Exon, LocusMap};
pub use types::HitId;

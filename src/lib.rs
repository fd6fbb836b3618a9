//! # hit-compare
//!
//! Compare exon positional usage called by HITindex across replicate samples
//! and between sample groups.
//!
//! HITindex classifies every exon it sees as first, first-internal, internal,
//! internal-last or last, and gives it a HITindex score. `hit-compare` reads
//! those calls from EXON files, keeps the exons two replicates agree on, and
//! compares two sets of exons by pairing their scores and counting how their
//! positional classes change.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hit_compare::{get_matrices, rep_merge, HitId};
//! use std::path::Path;
//!
//! let control = rep_merge(Path::new("ctl_rep1.exon"), Path::new("ctl_rep2.exon")).unwrap();
//! let treated = rep_merge(Path::new("trt_rep1.exon"), Path::new("trt_rep2.exon")).unwrap();
//!
//! let result = get_matrices(&control, &treated);
//! println!(
//!     "{} shared exons, {} stayed first",
//!     result.common_loci(),
//!     result.id_matrix.get(HitId::First, HitId::First)
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Exon records and positional classes
//! - [`parsing`]: EXON file reader and writer
//! - [`compare`]: Replicate merging and matrix construction
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod compare;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use compare::matrix::{get_matrices, ComparisonMatrices, ContingencyMatrix, IndexPair};
pub use compare::merge::{merge_replicates, rep_merge};
pub use core::exon::{Exon, LocusMap};
pub use core::types::HitId;
pub use parsing::exon::{read_exon, read_exon_text, ParseError};

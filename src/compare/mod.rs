//! Replicate merging and cross-set comparison.
//!
//! - [`merge`]: combine two replicate EXON files into one consensus mapping
//! - [`matrix`]: pair scores and count class transitions between two mappings
//!
//! ## Example
//!
//! ```rust,no_run
//! use hit_compare::compare::{matrix::get_matrices, merge::rep_merge};
//! use std::path::Path;
//!
//! let control = rep_merge(Path::new("ctl_rep1.exon"), Path::new("ctl_rep2.exon")).unwrap();
//! let treated = rep_merge(Path::new("trt_rep1.exon"), Path::new("trt_rep2.exon")).unwrap();
//!
//! let result = get_matrices(&control, &treated);
//! println!("{} shared exons", result.common_loci());
//! ```

pub mod matrix;
pub mod merge;

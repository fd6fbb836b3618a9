use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::HitId;

/// Mapping from locus to the exon called at that locus.
///
/// Ordered by locus so every traversal, and everything derived from one,
/// is reproducible.
pub type LocusMap = BTreeMap<String, Exon>;

/// A single exon row from an EXON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exon {
    /// Locus key (the `exon` column)
    pub locus: String,

    /// Positional usage score (the `HITindex` column)
    pub hit_index: f64,

    /// Positional class (the normalized `ID` column)
    pub hit_id: HitId,
}

impl Exon {
    #[must_use]
    pub fn new(locus: impl Into<String>, hit_index: f64, hit_id: HitId) -> Self {
        Self {
            locus: locus.into(),
            hit_index,
            hit_id,
        }
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::exon::LocusMap;
use crate::core::types::HitId;

/// Paired scores for one locus: `[score in first set, score in second set]`
pub type IndexPair = [f64; 2];

/// 5x5 table counting positional-class transitions between two exon sets.
///
/// Rows are the class in the first set, columns the class in the second, both
/// in [`HitId::ALL`] order. Cells hold counts stored as `f64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContingencyMatrix {
    counts: [[f64; HitId::COUNT]; HitId::COUNT],
}

impl ContingencyMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one locus classed `from` in the first set and `to` in the second
    pub fn increment(&mut self, from: HitId, to: HitId) {
        self.counts[from.index()][to.index()] += 1.0;
    }

    #[must_use]
    pub fn get(&self, from: HitId, to: HitId) -> f64 {
        self.counts[from.index()][to.index()]
    }

    #[must_use]
    pub fn rows(&self) -> &[[f64; HitId::COUNT]; HitId::COUNT] {
        &self.counts
    }

    /// Sum of all cells, i.e. the number of loci counted
    #[must_use]
    pub fn total(&self) -> f64 {
        self.counts.iter().flatten().sum()
    }

    /// Number of loci whose class is the same in both sets
    #[must_use]
    pub fn diagonal_total(&self) -> f64 {
        (0..HitId::COUNT).map(|i| self.counts[i][i]).sum()
    }
}

/// Result of comparing two exon sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrices {
    /// Score pairs for every shared locus, sorted by the first score
    pub index_pairs: Vec<IndexPair>,

    /// Positional-class transition counts for every shared locus
    pub id_matrix: ContingencyMatrix,
}

impl ComparisonMatrices {
    /// Number of loci present in both sets
    #[must_use]
    pub fn common_loci(&self) -> usize {
        self.index_pairs.len()
    }
}

/// Build the comparison matrices for two locus to exon mappings.
///
/// Only loci present in both mappings contribute. The pair list is stably
/// sorted on the first score, so equal scores keep locus order.
#[must_use]
pub fn get_matrices(locus_to_exon1: &LocusMap, locus_to_exon2: &LocusMap) -> ComparisonMatrices {
    let mut index_pairs = Vec::new();
    let mut id_matrix = ContingencyMatrix::new();

    for (locus, exon1) in locus_to_exon1 {
        let Some(exon2) = locus_to_exon2.get(locus) else {
            continue;
        };

        index_pairs.push([exon1.hit_index, exon2.hit_index]);
        id_matrix.increment(exon1.hit_id, exon2.hit_id);
    }

    // Adding 0.0 folds -0.0 into 0.0 so the two compare equal and keep locus order
    index_pairs.sort_by(|a, b| (a[0] + 0.0).total_cmp(&(b[0] + 0.0)));

    debug!(
        "Compared {} and {} exons: {} shared",
        locus_to_exon1.len(),
        locus_to_exon2.len(),
        index_pairs.len()
    );

    ComparisonMatrices {
        index_pairs,
        id_matrix,
    }
}

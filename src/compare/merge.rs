use std::path::Path;
use tracing::debug;

use crate::core::exon::{Exon, LocusMap};
use crate::parsing::exon::{read_exon, ParseError};

/// Read two replicate EXON files and merge them.
///
/// # Errors
///
/// Returns any `ParseError` raised while reading either file.
pub fn rep_merge(rep1_exon: &Path, rep2_exon: &Path) -> Result<LocusMap, ParseError> {
    let locus_to_rep1 = read_exon(rep1_exon)?;
    let locus_to_rep2 = read_exon(rep2_exon)?;

    let merged = merge_replicates(&locus_to_rep1, &locus_to_rep2);
    debug!(
        "Merged {} and {}: {} of {} / {} exons retained",
        rep1_exon.display(),
        rep2_exon.display(),
        merged.len(),
        locus_to_rep1.len(),
        locus_to_rep2.len()
    );

    Ok(merged)
}

/// Merge two replicate mappings.
///
/// Keeps only loci called in both replicates with the same positional class;
/// the merged score is the mean of the two replicate scores. Loci whose class
/// differs between replicates are dropped.
#[must_use]
pub fn merge_replicates(locus_to_rep1: &LocusMap, locus_to_rep2: &LocusMap) -> LocusMap {
    let mut merged = LocusMap::new();

    for (locus, rep1) in locus_to_rep1 {
        let Some(rep2) = locus_to_rep2.get(locus) else {
            continue;
        };

        if rep1.hit_id != rep2.hit_id {
            debug!(
                "Dropping {locus}: replicates disagree ({} vs {})",
                rep1.hit_id, rep2.hit_id
            );
            continue;
        }

        let hit_index = rep1.hit_index / 2.0 + rep2.hit_index / 2.0;
        merged.insert(locus.clone(), Exon::new(locus.as_str(), hit_index, rep1.hit_id));
    }

    merged
}

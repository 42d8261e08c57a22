use crate::core::models::ids::BasePair;
use crate::core::models::structure::Structure;
use crate::engine::candidates::find_candidates;
use crate::engine::config::PairSearchConfig;
use crate::engine::criteria::is_base_pair;
use crate::engine::error::EngineError;
use crate::engine::frames::match_base;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the complete base-pair search over a structure.
///
/// Candidates are enumerated from sugar-anchor proximity, each candidate's two
/// residues are matched against the standard bases, and the DSSR criteria
/// decide acceptance. Candidates whose bases cannot be matched (unsupported or
/// too incomplete) are dropped with a warning; only an invalid configuration
/// fails the run.
#[instrument(skip_all, name = "basepair_search")]
pub fn run(structure: &Structure, config: &PairSearchConfig) -> Result<Vec<BasePair>, EngineError> {
    config.validate()?;

    info!(
        max_cutoff = config.max_cutoff,
        min_cutoff = config.min_cutoff,
        "Searching for base-pair candidates."
    );
    let candidates = find_candidates(structure, config);
    info!(
        num_candidates = candidates.len(),
        "Evaluating candidates against the pairing criteria."
    );

    #[cfg(not(feature = "parallel"))]
    let iterator = candidates.iter();

    #[cfg(feature = "parallel")]
    let iterator = candidates.par_iter();

    let pairs: Vec<BasePair> = iterator
        .filter_map(|candidate| evaluate_candidate(structure, candidate, config))
        .collect();

    info!(num_pairs = pairs.len(), "Base-pair search complete.");
    Ok(pairs)
}

/// Convenience wrapper over [`run`] using the published default cutoffs.
pub fn find_base_pairs(
    structure: &Structure,
    min_atoms_per_base: usize,
) -> Result<Vec<BasePair>, EngineError> {
    let config = PairSearchConfig::builder()
        .min_atoms_per_base(min_atoms_per_base)
        .build()?;
    run(structure, &config)
}

fn evaluate_candidate(
    structure: &Structure,
    candidate: &BasePair,
    config: &PairSearchConfig,
) -> Option<BasePair> {
    let residues = [
        structure.residue(&candidate.first),
        structure.residue(&candidate.second),
    ];
    let mut matched = Vec::with_capacity(2);
    for (residue, key) in residues.iter().zip([&candidate.first, &candidate.second]) {
        match match_base(residue, config.min_atoms_per_base) {
            Ok(base) => matched.push(base),
            Err(error) => {
                warn!(residue = %key, %error, "Skipping candidate base.");
                return None;
            }
        }
    }

    match is_base_pair(&matched[0], &matched[1]) {
        Ok(true) => Some(candidate.clone()),
        Ok(false) => None,
        Err(error) => {
            warn!(candidate = %candidate, %error, "Excluding candidate pair.");
            None
        }
    }
}

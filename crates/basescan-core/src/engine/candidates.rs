use crate::core::models::ids::{BasePair, ResidueKey};
use crate::core::models::structure::Structure;
use crate::core::spatial::CellGrid;
use crate::core::utils::filter::{filter_atom_names, filter_nucleotides};
use crate::core::utils::geometry::distance;
use crate::core::utils::identifiers::ANCHOR_ATOM_NAMES;
use crate::engine::config::PairSearchConfig;
use std::collections::HashSet;
use tracing::debug;

/// Enumerates residue pairs whose sugar anchor atoms lie inside the
/// configured distance band.
///
/// Anchors are the C1' carbons (under either nomenclature) of nucleotide
/// residues with a defined residue id. Pairs are kept when the anchor
/// distance is within `max_cutoff` (inclusive) and strictly above
/// `min_cutoff`, which discards bonded neighbors within the same helix step.
/// Every unordered pair is reported at most once.
pub fn find_candidates(structure: &Structure, config: &PairSearchConfig) -> Vec<BasePair> {
    let anchor_mask: Vec<bool> = filter_nucleotides(structure)
        .into_iter()
        .zip(filter_atom_names(structure, ANCHOR_ATOM_NAMES))
        .map(|(is_nucleotide, is_anchor)| is_nucleotide && is_anchor)
        .collect();
    let anchors = structure.masked(&anchor_mask);

    let grid = CellGrid::new(&anchors.positions(), config.max_cutoff);

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for (i, j) in grid.contacts_within(config.max_cutoff) {
        let atom_i = &anchors.atoms()[i];
        let atom_j = &anchors.atoms()[j];
        let (Some(key_i), Some(key_j)) = (ResidueKey::of_atom(atom_i), ResidueKey::of_atom(atom_j))
        else {
            continue;
        };
        if key_i == key_j {
            continue;
        }
        if distance(&atom_i.position, &atom_j.position) <= config.min_cutoff {
            continue;
        }
        let pair = BasePair::new(key_i, key_j);
        if seen.insert(pair.clone()) {
            candidates.push(pair);
        }
    }

    debug!(
        num_anchors = anchors.len(),
        num_candidates = candidates.len(),
        "Enumerated proximity candidates."
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    fn anchor(res_name: &str, res_id: isize, chain_id: &str, x: f64) -> Atom {
        let mut atom = Atom::new("C1'", res_name, Point3::new(x, 0.0, 0.0));
        atom.res_id = Some(res_id);
        atom.chain_id = chain_id.to_string();
        atom
    }

    fn config() -> PairSearchConfig {
        PairSearchConfig::default()
    }

    #[test]
    fn anchors_inside_the_band_form_a_candidate() {
        let structure = Structure::from_atoms(vec![
            anchor("A", 1, "A", 0.0),
            anchor("U", 2, "A", 10.5),
        ]);
        let candidates = find_candidates(&structure, &config());
        assert_eq!(
            candidates,
            vec![BasePair::new(
                ResidueKey::new("A", 1),
                ResidueKey::new("A", 2)
            )]
        );
    }

    #[test]
    fn anchors_exactly_at_min_cutoff_are_excluded() {
        let structure = Structure::from_atoms(vec![
            anchor("A", 1, "A", 0.0),
            anchor("U", 2, "A", 9.0),
        ]);
        assert!(find_candidates(&structure, &config()).is_empty());
    }

    #[test]
    fn anchors_exactly_at_max_cutoff_are_included() {
        let structure = Structure::from_atoms(vec![
            anchor("A", 1, "A", 0.0),
            anchor("U", 2, "A", 15.0),
        ]);
        assert_eq!(find_candidates(&structure, &config()).len(), 1);
    }

    #[test]
    fn anchors_beyond_max_cutoff_are_excluded() {
        let structure = Structure::from_atoms(vec![
            anchor("A", 1, "A", 0.0),
            anchor("U", 2, "A", 15.1),
        ]);
        assert!(find_candidates(&structure, &config()).is_empty());
    }

    #[test]
    fn legacy_anchor_names_are_recognized() {
        let mut legacy = Atom::new("C1*", "DA", Point3::new(0.0, 0.0, 0.0));
        legacy.res_id = Some(1);
        legacy.chain_id = "A".to_string();
        let structure = Structure::from_atoms(vec![legacy, anchor("DT", 2, "A", 12.0)]);
        assert_eq!(find_candidates(&structure, &config()).len(), 1);
    }

    #[test]
    fn non_nucleotide_and_non_anchor_atoms_are_ignored() {
        let mut ca = Atom::new("CA", "GLY", Point3::new(10.0, 0.0, 0.0));
        ca.res_id = Some(5);
        ca.chain_id = "A".to_string();
        let mut c2 = Atom::new("C2'", "A", Point3::new(11.0, 0.0, 0.0));
        c2.res_id = Some(6);
        c2.chain_id = "A".to_string();
        let structure = Structure::from_atoms(vec![anchor("A", 1, "A", 0.0), ca, c2]);
        assert!(find_candidates(&structure, &config()).is_empty());
    }

    #[test]
    fn anchors_without_residue_id_are_ignored() {
        let orphan = Atom::new("C1'", "A", Point3::new(10.0, 0.0, 0.0));
        let structure = Structure::from_atoms(vec![anchor("A", 1, "A", 0.0), orphan]);
        assert!(find_candidates(&structure, &config()).is_empty());
    }

    #[test]
    fn each_unordered_pair_is_reported_once() {
        let structure = Structure::from_atoms(vec![
            anchor("A", 1, "A", 0.0),
            anchor("U", 2, "A", 10.0),
            anchor("G", 3, "A", 20.0),
        ]);
        let candidates = find_candidates(&structure, &config());
        // 1-2 and 2-3 are in band; 1-3 is out of range.
        assert_eq!(candidates.len(), 2);
        let unique: HashSet<_> = candidates.iter().cloned().collect();
        assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn residues_on_different_chains_are_distinct() {
        let structure = Structure::from_atoms(vec![
            anchor("A", 1, "A", 0.0),
            anchor("U", 1, "B", 10.0),
        ]);
        let candidates = find_candidates(&structure, &config());
        assert_eq!(
            candidates,
            vec![BasePair::new(
                ResidueKey::new("A", 1),
                ResidueKey::new("B", 1)
            )]
        );
    }
}

use super::identifiers;
use crate::core::models::structure::Structure;

/// Boolean mask selecting all atoms that belong to a nucleotide residue.
pub fn filter_nucleotides(structure: &Structure) -> Vec<bool> {
    structure
        .iter()
        .map(|atom| identifiers::is_nucleotide_residue(&atom.res_name))
        .collect()
}

/// Boolean mask selecting all atoms that belong to the solvent.
pub fn filter_solvent(structure: &Structure) -> Vec<bool> {
    structure
        .iter()
        .map(|atom| identifiers::is_solvent_residue(&atom.res_name))
        .collect()
}

/// Boolean mask selecting all atoms that belong to a canonical amino acid.
pub fn filter_amino_acids(structure: &Structure) -> Vec<bool> {
    structure
        .iter()
        .map(|atom| identifiers::is_amino_acid_residue(&atom.res_name))
        .collect()
}

/// Boolean mask selecting monoatomic ions.
///
/// Exclusively in monoatomic ions, the residue name equals the element symbol.
pub fn filter_monoatomic_ions(structure: &Structure) -> Vec<bool> {
    structure
        .iter()
        .map(|atom| atom.res_name == atom.element)
        .collect()
}

/// Boolean mask selecting atoms whose name appears in `atom_names` and whose
/// residue id is defined.
pub fn filter_atom_names(structure: &Structure, atom_names: &[&str]) -> Vec<bool> {
    structure
        .iter()
        .map(|atom| atom_names.contains(&atom.name.as_str()) && atom.res_id.is_some())
        .collect()
}

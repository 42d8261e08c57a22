use phf::{Set, phf_set};

// Canonical nucleotides plus the most common modified residues. Modified
// nucleotides pass the filter but are not matchable against a standard base.
static NUCLEOTIDE_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "A", "DA", "C", "DC", "G", "DG", "T", "DT", "U", "DU",
    "I", "DI", "PSU", "5MC", "5MU", "1MA", "2MG", "7MG", "M2G",
    "OMC", "OMG", "H2U", "4SU",
};

static SOLVENT_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "SOL",
};

static AMINO_ACID_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "PYL", "SER", "THR", "TRP", "TYR",
    "VAL", "SEC",
};

/// The C1' sugar carbon under PDB format V3 and V2 nomenclature.
pub const ANCHOR_ATOM_NAMES: &[&str] = &["C1'", "C1*"];

pub fn is_nucleotide_residue(res_name: &str) -> bool {
    NUCLEOTIDE_RESIDUE_NAMES.contains(res_name.trim())
}

pub fn is_solvent_residue(res_name: &str) -> bool {
    SOLVENT_RESIDUE_NAMES.contains(res_name.trim())
}

pub fn is_amino_acid_residue(res_name: &str) -> bool {
    AMINO_ACID_RESIDUE_NAMES.contains(res_name.trim())
}

pub fn is_anchor_atom(atom_name: &str) -> bool {
    ANCHOR_ATOM_NAMES.contains(&atom_name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_ribo_and_deoxy_nucleotides() {
        for name in ["A", "DA", "C", "DC", "G", "DG", "T", "DT", "U", "DU"] {
            assert!(is_nucleotide_residue(name), "{name} should be a nucleotide");
        }
    }

    #[test]
    fn recognizes_common_modified_nucleotides() {
        assert!(is_nucleotide_residue("PSU"));
        assert!(is_nucleotide_residue("7MG"));
        assert!(is_nucleotide_residue("DI"));
    }

    #[test]
    fn rejects_non_nucleotide_residues() {
        assert!(!is_nucleotide_residue("ALA"));
        assert!(!is_nucleotide_residue("HOH"));
        assert!(!is_nucleotide_residue(""));
    }

    #[test]
    fn nucleotide_lookup_trims_whitespace() {
        assert!(is_nucleotide_residue(" DA "));
        assert!(!is_nucleotide_residue("D A"));
    }

    #[test]
    fn recognizes_solvent_names() {
        assert!(is_solvent_residue("HOH"));
        assert!(is_solvent_residue("SOL"));
        assert!(!is_solvent_residue("NA"));
    }

    #[test]
    fn recognizes_canonical_amino_acids() {
        assert!(is_amino_acid_residue("GLY"));
        assert!(is_amino_acid_residue("SEC"));
        assert!(!is_amino_acid_residue("DA"));
    }

    #[test]
    fn anchor_atom_accepts_both_nomenclatures() {
        assert!(is_anchor_atom("C1'"));
        assert!(is_anchor_atom("C1*"));
        assert!(!is_anchor_atom("C2'"));
        assert!(!is_anchor_atom("C1"));
    }
}

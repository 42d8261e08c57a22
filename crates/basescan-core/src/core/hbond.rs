use crate::core::models::structure::Structure;
use crate::core::utils::geometry::{angle_between, distance};

/// Maximum hydrogen-acceptor distance in Angstroms (Baker & Hubbard).
const HYDROGEN_ACCEPTOR_CUTOFF: f64 = 2.5;
/// Minimum donor-hydrogen-acceptor angle in degrees (Baker & Hubbard).
const DONOR_ANGLE_CUTOFF_DEGREES: f64 = 120.0;
/// Maximum distance at which a hydrogen is considered bound to its donor.
const DONOR_HYDROGEN_CUTOFF: f64 = 1.5;

/// A detected hydrogen bond, as indices into the analyzed structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrogenBond {
    pub donor: usize,
    pub hydrogen: usize,
    pub acceptor: usize,
}

fn is_hbond_element(element: &str) -> bool {
    matches!(element, "N" | "O" | "S")
}

/// Detects hydrogen bonds in a structure with explicit hydrogen atoms.
///
/// Donor candidates are N/O/S atoms selected by `donor_mask` with a hydrogen
/// within covalent range; acceptor candidates are N/O/S atoms selected by
/// `acceptor_mask`. A bond requires the hydrogen-acceptor distance and the
/// donor-hydrogen-acceptor angle to satisfy the Baker-Hubbard criterion.
/// Masks shorter than the structure deselect the remaining atoms.
pub fn find_hydrogen_bonds(
    structure: &Structure,
    donor_mask: &[bool],
    acceptor_mask: &[bool],
) -> Vec<HydrogenBond> {
    let atoms = structure.atoms();
    let min_angle = DONOR_ANGLE_CUTOFF_DEGREES.to_radians();
    let mut bonds = Vec::new();

    for (donor, donor_atom) in atoms.iter().enumerate() {
        if !donor_mask.get(donor).copied().unwrap_or(false)
            || donor_atom.is_hydrogen()
            || !is_hbond_element(&donor_atom.element)
        {
            continue;
        }
        for (hydrogen, hydrogen_atom) in atoms.iter().enumerate() {
            if !hydrogen_atom.is_hydrogen()
                || distance(&donor_atom.position, &hydrogen_atom.position)
                    > DONOR_HYDROGEN_CUTOFF
            {
                continue;
            }
            for (acceptor, acceptor_atom) in atoms.iter().enumerate() {
                if acceptor == donor
                    || !acceptor_mask.get(acceptor).copied().unwrap_or(false)
                    || acceptor_atom.is_hydrogen()
                    || !is_hbond_element(&acceptor_atom.element)
                {
                    continue;
                }
                if distance(&hydrogen_atom.position, &acceptor_atom.position)
                    > HYDROGEN_ACCEPTOR_CUTOFF
                {
                    continue;
                }
                let to_donor = donor_atom.position - hydrogen_atom.position;
                let to_acceptor = acceptor_atom.position - hydrogen_atom.position;
                if angle_between(&to_donor, &to_acceptor) >= min_angle {
                    bonds.push(HydrogenBond {
                        donor,
                        hydrogen,
                        acceptor,
                    });
                }
            }
        }
    }
    bonds
}

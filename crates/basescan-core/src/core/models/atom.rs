use nalgebra::Point3;

/// Represents an atom in a nucleic acid structure.
///
/// This struct carries the identity and position of a single atom. Atoms are
/// self-describing: residue and chain identity live on the atom itself rather
/// than in a containing hierarchy, which keeps structures trivially sliceable
/// during analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "C1'", "N9", "O6").
    pub name: String,
    /// The residue sequence number, or `None` when the source structure does
    /// not define one.
    pub res_id: Option<isize>,
    /// The identifier of the chain this atom belongs to (e.g., "A").
    pub chain_id: String,
    /// The name of the parent residue (e.g., "DA", "G", "HOH").
    pub res_name: String,
    /// The element symbol (e.g., "C", "N", "H").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with the given name, residue name, and position.
    ///
    /// The element symbol is inferred from the first alphabetic character of
    /// the atom name; residue id and chain id are left unset and can be filled
    /// in afterward as needed.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `res_name` - The name of the parent residue.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, res_name: &str, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            res_id: None,
            chain_id: String::new(),
            res_name: res_name.to_string(),
            element: infer_element(name),
            position,
        }
    }

    /// Returns `true` if this atom is a hydrogen (or deuterium) atom.
    pub fn is_hydrogen(&self) -> bool {
        matches!(self.element.as_str(), "H" | "D")
    }
}

fn infer_element(atom_name: &str) -> String {
    atom_name
        .trim()
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_infers_element_from_name() {
        let atom = Atom::new("N9", "A", Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.name, "N9");
        assert_eq!(atom.element, "N");
        assert_eq!(atom.res_name, "A");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.res_id, None);
        assert_eq!(atom.chain_id, "");
    }

    #[test]
    fn element_inference_skips_leading_digits() {
        let atom = Atom::new("1H5'", "DT", Point3::origin());
        assert_eq!(atom.element, "H");
    }

    #[test]
    fn element_inference_handles_primed_sugar_names() {
        assert_eq!(Atom::new("C1'", "DA", Point3::origin()).element, "C");
        assert_eq!(Atom::new("C1*", "DA", Point3::origin()).element, "C");
        assert_eq!(Atom::new("O4'", "DA", Point3::origin()).element, "O");
    }

    #[test]
    fn is_hydrogen_recognizes_hydrogen_and_deuterium() {
        let mut atom = Atom::new("H61", "A", Point3::origin());
        assert!(atom.is_hydrogen());
        atom.element = "D".to_string();
        assert!(atom.is_hydrogen());
        let heavy = Atom::new("N6", "A", Point3::origin());
        assert!(!heavy.is_hydrogen());
    }
}

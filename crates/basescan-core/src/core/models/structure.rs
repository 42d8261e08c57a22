use super::atom::Atom;
use super::ids::ResidueKey;
use nalgebra::Point3;

/// An ordered collection of atoms, treated as an immutable snapshot during
/// analysis.
///
/// A `Structure` may hold an entire model, a single residue, or any other
/// slice of atoms; all analysis operations work uniformly on any of them.
/// Derived structures (masked subsets, residue extractions, concatenations)
/// are new owned values and never alias their source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structure from an ordered list of atoms.
    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    /// Returns the positions of all atoms, in structure order.
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|atom| atom.position).collect()
    }

    /// Returns the first atom with the given name, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.name == name)
    }

    pub fn contains_atom_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Returns the subset of atoms selected by a boolean mask.
    ///
    /// The mask must have one entry per atom; shorter masks deselect the
    /// remaining atoms.
    pub fn masked(&self, mask: &[bool]) -> Structure {
        let atoms = self
            .atoms
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(atom, _)| atom.clone())
            .collect();
        Structure { atoms }
    }

    /// Returns the concatenation of this structure and another, preserving
    /// atom order within each operand.
    pub fn merged(&self, other: &Structure) -> Structure {
        let mut atoms = self.atoms.clone();
        atoms.extend(other.atoms.iter().cloned());
        Structure { atoms }
    }

    /// Extracts all atoms belonging to the residue identified by `key`.
    pub fn residue(&self, key: &ResidueKey) -> Structure {
        let atoms = self
            .atoms
            .iter()
            .filter(|atom| atom.res_id == Some(key.res_id) && atom.chain_id == key.chain_id)
            .cloned()
            .collect();
        Structure { atoms }
    }
}

impl FromIterator<Atom> for Structure {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

//! Standard reference geometry for the five canonical bases.
//!
//! Each base is described in a fixed canonical frame (origin `(0,0,0)`,
//! identity axes) by a small hand-curated structure, together with the
//! coordinates of its aromatic ring centers and boolean masks marking the
//! heteroatoms that can act as hydrogen-bond donors or acceptors. Two
//! atom-naming variants are kept per base: the legacy PDB format V2 spelling
//! (`C1*`, `C5M`) and the modern V3 spelling (`C1'`, `C7`). The templates are
//! process-wide constants, built once and never mutated.

use crate::core::models::atom::Atom;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use phf::{Map, phf_map};
use std::sync::LazyLock;

/// The chemical identity of a canonical base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    Adenine,
    Cytosine,
    Guanine,
    Thymine,
    Uracil,
}

static RESIDUE_NAME_TO_KIND: Map<&'static str, BaseKind> = phf_map! {
    "A" => BaseKind::Adenine,
    "DA" => BaseKind::Adenine,
    "C" => BaseKind::Cytosine,
    "DC" => BaseKind::Cytosine,
    "G" => BaseKind::Guanine,
    "DG" => BaseKind::Guanine,
    "T" => BaseKind::Thymine,
    "DT" => BaseKind::Thymine,
    "U" => BaseKind::Uracil,
    "DU" => BaseKind::Uracil,
};

impl BaseKind {
    /// Maps a residue name onto its base identity, or `None` for residues
    /// outside the five recognized identity sets.
    pub fn from_residue_name(res_name: &str) -> Option<Self> {
        RESIDUE_NAME_TO_KIND.get(res_name.trim()).copied()
    }

    pub fn is_purine(self) -> bool {
        matches!(self, BaseKind::Adenine | BaseKind::Guanine)
    }
}

/// The immutable reference description of one canonical base.
#[derive(Debug, Clone)]
pub struct StandardBase {
    pub kind: BaseKind,
    legacy: Structure,
    modern: Structure,
    ring_centers: Vec<Point3<f64>>,
    donor_mask: Vec<bool>,
    acceptor_mask: Vec<bool>,
}

impl StandardBase {
    pub fn atom_count(&self) -> usize {
        self.legacy.len()
    }

    /// The template under legacy (PDB format V2) atom names.
    pub fn legacy(&self) -> &Structure {
        &self.legacy
    }

    /// The template under modern (PDB format V3) atom names.
    pub fn modern(&self) -> &Structure {
        &self.modern
    }

    /// Aromatic ring centers in the canonical frame: the pyrimidine ring
    /// first, followed by the imidazole ring for purines.
    pub fn ring_centers(&self) -> &[Point3<f64>] {
        &self.ring_centers
    }

    pub fn donor_mask(&self) -> &[bool] {
        &self.donor_mask
    }

    pub fn acceptor_mask(&self) -> &[bool] {
        &self.acceptor_mask
    }

    /// Selects the naming variant whose atom names overlap more with the
    /// observed residue. The legacy variant is the default; the modern one is
    /// chosen only on strictly greater overlap.
    pub fn variant_for(&self, observed: &Structure) -> &Structure {
        let overlap = |template: &Structure| {
            template
                .iter()
                .filter(|atom| observed.contains_atom_name(&atom.name))
                .count()
        };
        if overlap(&self.modern) > overlap(&self.legacy) {
            &self.modern
        } else {
            &self.legacy
        }
    }
}

/// Looks up the process-wide template for a base identity.
pub fn standard_base(kind: BaseKind) -> &'static StandardBase {
    match kind {
        BaseKind::Adenine => &STD_ADENINE,
        BaseKind::Cytosine => &STD_CYTOSINE,
        BaseKind::Guanine => &STD_GUANINE,
        BaseKind::Thymine => &STD_THYMINE,
        BaseKind::Uracil => &STD_URACIL,
    }
}

static STD_ADENINE: LazyLock<StandardBase> = LazyLock::new(build_adenine);
static STD_CYTOSINE: LazyLock<StandardBase> = LazyLock::new(build_cytosine);
static STD_GUANINE: LazyLock<StandardBase> = LazyLock::new(build_guanine);
static STD_THYMINE: LazyLock<StandardBase> = LazyLock::new(build_thymine);
static STD_URACIL: LazyLock<StandardBase> = LazyLock::new(build_uracil);

fn build_adenine() -> StandardBase {
    let legacy = template_structure(
        "A",
        &[
            ("C1*", -2.479, 5.346, 0.000),
            ("N9", -1.291, 4.498, 0.000),
            ("C8", 0.024, 4.897, 0.000),
            ("N7", 0.877, 3.902, 0.000),
            ("C5", 0.071, 2.771, 0.000),
            ("C6", 0.369, 1.398, 0.000),
            ("N6", 1.611, 0.909, 0.000),
            ("N1", -0.668, 0.532, 0.000),
            ("C2", -1.912, 1.023, 0.000),
            ("N3", -2.320, 2.290, 0.000),
            ("C4", -1.267, 3.124, 0.000),
        ],
    );
    let modern = with_modern_names(&legacy, &[(0, "C1'")]);
    let ring_centers = vec![
        ring_center(&legacy, &[4, 5, 7, 8, 9, 10]),
        ring_center(&legacy, &[1, 2, 3, 4, 10]),
    ];
    let donor_mask = boolean_mask(legacy.len(), &[1, 6]);
    let acceptor_mask = boolean_mask(legacy.len(), &[1, 3, 6, 7, 9]);
    StandardBase {
        kind: BaseKind::Adenine,
        legacy,
        modern,
        ring_centers,
        donor_mask,
        acceptor_mask,
    }
}

fn build_cytosine() -> StandardBase {
    let legacy = template_structure(
        "C",
        &[
            ("C1*", -2.477, 5.402, 0.000),
            ("N1", -1.285, 4.542, 0.000),
            ("C2", -1.472, 3.158, 0.000),
            ("O2", -2.628, 2.709, 0.000),
            ("N3", -0.391, 2.344, 0.000),
            ("C4", 0.837, 2.868, 0.000),
            ("N4", 1.875, 2.027, 0.000),
            ("C5", 1.056, 4.275, 0.000),
            ("C6", -0.023, 5.068, 0.000),
        ],
    );
    let modern = with_modern_names(&legacy, &[(0, "C1'")]);
    let ring_centers = vec![ring_center(&legacy, &[1, 2, 4, 5, 7, 8])];
    let donor_mask = boolean_mask(legacy.len(), &[1, 6]);
    let acceptor_mask = boolean_mask(legacy.len(), &[1, 3, 4, 6]);
    StandardBase {
        kind: BaseKind::Cytosine,
        legacy,
        modern,
        ring_centers,
        donor_mask,
        acceptor_mask,
    }
}

fn build_guanine() -> StandardBase {
    let legacy = template_structure(
        "G",
        &[
            ("C1*", -2.477, 5.399, 0.000),
            ("N9", -1.289, 4.551, 0.000),
            ("C8", 0.023, 4.962, 0.000),
            ("N7", 0.870, 3.969, 0.000),
            ("C5", 0.071, 2.833, 0.000),
            ("C6", 0.424, 1.460, 0.000),
            ("O6", 1.554, 0.955, 0.000),
            ("N1", -0.700, 0.641, 0.000),
            ("C2", -1.999, 1.087, 0.000),
            ("N2", -2.949, 0.139, -0.001),
            ("N3", -2.342, 2.364, 0.001),
            ("C4", -1.265, 3.177, 0.000),
        ],
    );
    let modern = with_modern_names(&legacy, &[(0, "C1'")]);
    let ring_centers = vec![
        ring_center(&legacy, &[4, 5, 7, 8, 10, 11]),
        ring_center(&legacy, &[1, 2, 3, 4, 11]),
    ];
    let donor_mask = boolean_mask(legacy.len(), &[1, 7, 9]);
    let acceptor_mask = boolean_mask(legacy.len(), &[1, 3, 6, 7, 9, 10]);
    StandardBase {
        kind: BaseKind::Guanine,
        legacy,
        modern,
        ring_centers,
        donor_mask,
        acceptor_mask,
    }
}

fn build_thymine() -> StandardBase {
    let legacy = template_structure(
        "T",
        &[
            ("C1*", -2.481, 5.354, 0.000),
            ("N1", -1.284, 4.500, 0.000),
            ("C2", -1.462, 3.135, 0.000),
            ("O2", -2.562, 2.608, 0.000),
            ("N3", -0.298, 2.407, 0.000),
            ("C4", 0.994, 2.897, 0.000),
            ("O4", 1.944, 2.119, 0.000),
            ("C5", 1.106, 4.338, 0.000),
            ("C5M", 2.466, 4.961, 0.001),
            ("C6", -0.024, 5.057, 0.000),
        ],
    );
    let modern = with_modern_names(&legacy, &[(0, "C1'"), (8, "C7")]);
    let ring_centers = vec![ring_center(&legacy, &[1, 2, 4, 5, 7, 9])];
    let donor_mask = boolean_mask(legacy.len(), &[1, 4]);
    let acceptor_mask = boolean_mask(legacy.len(), &[1, 3, 4, 6]);
    StandardBase {
        kind: BaseKind::Thymine,
        legacy,
        modern,
        ring_centers,
        donor_mask,
        acceptor_mask,
    }
}

fn build_uracil() -> StandardBase {
    let legacy = template_structure(
        "U",
        &[
            ("C1*", -2.481, 5.354, 0.000),
            ("N1", -1.284, 4.500, 0.000),
            ("C2", -1.462, 3.131, 0.000),
            ("O2", -2.563, 2.608, 0.000),
            ("N3", -0.302, 2.397, 0.000),
            ("C4", 0.989, 2.884, 0.000),
            ("O4", 1.935, 2.094, -0.001),
            ("C5", 1.089, 4.311, 0.000),
            ("C6", -0.024, 5.053, 0.000),
        ],
    );
    let modern = with_modern_names(&legacy, &[(0, "C1'")]);
    let ring_centers = vec![ring_center(&legacy, &[1, 2, 4, 5, 7, 8])];
    let donor_mask = boolean_mask(legacy.len(), &[1, 4]);
    let acceptor_mask = boolean_mask(legacy.len(), &[1, 3, 4, 6]);
    StandardBase {
        kind: BaseKind::Uracil,
        legacy,
        modern,
        ring_centers,
        donor_mask,
        acceptor_mask,
    }
}

fn template_structure(res_name: &str, atoms: &[(&str, f64, f64, f64)]) -> Structure {
    atoms
        .iter()
        .map(|&(name, x, y, z)| Atom::new(name, res_name, Point3::new(x, y, z)))
        .collect()
}

fn with_modern_names(legacy: &Structure, renames: &[(usize, &str)]) -> Structure {
    let mut modern = legacy.clone();
    for &(index, name) in renames {
        modern.atoms_mut()[index].name = name.to_string();
    }
    modern
}

fn ring_center(template: &Structure, member_ids: &[usize]) -> Point3<f64> {
    let sum = member_ids
        .iter()
        .map(|&id| template.atoms()[id].position.coords)
        .sum::<nalgebra::Vector3<f64>>();
    Point3::from(sum / member_ids.len() as f64)
}

fn boolean_mask(len: usize, true_ids: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; len];
    for &id in true_ids {
        mask[id] = true;
    }
    mask
}

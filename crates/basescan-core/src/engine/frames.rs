use crate::core::bases::{BaseKind, standard_base};
use crate::core::models::structure::Structure;
use crate::core::superposition::{Superposition, SuperpositionError, superimpose};
use nalgebra::{Point3, Vector3};
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

/// The pose of a matched base in structure coordinates.
///
/// Obtained by carrying the canonical frame (origin, unit axes, ring centers)
/// through the template superposition. The axes are re-normalized after the
/// transformation.
#[derive(Debug, Clone)]
pub struct ReferenceFrame {
    pub origin: Point3<f64>,
    pub x: Vector3<f64>,
    pub y: Vector3<f64>,
    pub z: Vector3<f64>,
    pub ring_centers: Vec<Point3<f64>>,
}

/// A base successfully matched against its standard template.
#[derive(Debug, Clone)]
pub struct MatchedBase {
    pub kind: BaseKind,
    /// The observed base atoms, or the transformed template when the residue
    /// is incomplete and emulated.
    pub atoms: Structure,
    /// Marks atoms that can act as hydrogen-bond donors.
    pub donor_mask: Vec<bool>,
    /// Marks atoms that can act as hydrogen-bond acceptors.
    pub acceptor_mask: Vec<bool>,
    /// Whether the base atoms include explicit hydrogens. Always `false` for
    /// emulated bases.
    pub contains_hydrogens: bool,
    pub frame: ReferenceFrame,
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("residue '{name}' is not a supported base type")]
    UnsupportedResidue { name: String },

    #[error("only {matched} template atoms matched; at least {required} required")]
    InsufficientAtoms { matched: usize, required: usize },

    #[error("superposition onto the standard base failed: {source}")]
    DegenerateFit {
        #[from]
        source: SuperpositionError,
    },
}

/// Matches one residue against its standard base and derives its reference
/// frame.
///
/// The residue is identified by name, matched to the naming variant with the
/// larger atom-name overlap, and superimposed template-onto-observed over the
/// atoms common to both. Complete residues keep their observed base atoms;
/// incomplete residues with at least `min_atoms_per_base` matched atoms are
/// emulated by the fitted template; anything smaller is rejected.
pub fn match_base(residue: &Structure, min_atoms_per_base: usize) -> Result<MatchedBase, MatchError> {
    let Some(first_atom) = residue.atoms().first() else {
        return Err(MatchError::InsufficientAtoms {
            matched: 0,
            required: min_atoms_per_base,
        });
    };
    let kind = BaseKind::from_residue_name(&first_atom.res_name).ok_or_else(|| {
        MatchError::UnsupportedResidue {
            name: first_atom.res_name.clone(),
        }
    })?;

    let base = standard_base(kind);
    let template = base.variant_for(residue);

    // Correspondence by atom name, in template order.
    let mut observed_points = Vec::new();
    let mut template_points = Vec::new();
    for template_atom in template.iter() {
        if let Some(observed) = residue.find_by_name(&template_atom.name) {
            observed_points.push(observed.position);
            template_points.push(template_atom.position);
        }
    }
    let matched = template_points.len();
    if matched < min_atoms_per_base {
        return Err(MatchError::InsufficientAtoms {
            matched,
            required: min_atoms_per_base,
        });
    }

    let superposition = superimpose(&observed_points, &template_points)?;

    let origin = superposition.apply_point(&Point3::origin());
    let frame = ReferenceFrame {
        origin,
        x: transformed_axis(&superposition, &origin, Vector3::x()),
        y: transformed_axis(&superposition, &origin, Vector3::y()),
        z: transformed_axis(&superposition, &origin, Vector3::z()),
        ring_centers: superposition.apply_points(base.ring_centers()),
    };

    let missing = template.len() - matched;
    if missing > 0 {
        warn!(
            residue = %first_atom.res_name,
            matched,
            template_atoms = template.len(),
            "Base is incomplete; emulating with the fitted standard template."
        );
        return Ok(MatchedBase {
            kind,
            atoms: superposition.apply(template),
            donor_mask: base.donor_mask().to_vec(),
            acceptor_mask: base.acceptor_mask().to_vec(),
            contains_hydrogens: false,
            frame,
        });
    }

    // The residue is complete: keep the observed base atoms (template-named
    // heavy atoms plus any explicit hydrogens), discarding the sugar and
    // phosphate backbone.
    let keep_mask: Vec<bool> = residue
        .iter()
        .map(|atom| template.contains_atom_name(&atom.name) || atom.is_hydrogen())
        .collect();
    let atoms = residue.masked(&keep_mask);

    let donor_names = masked_names(template, base.donor_mask());
    let acceptor_names = masked_names(template, base.acceptor_mask());
    let donor_mask: Vec<bool> = atoms
        .iter()
        .map(|atom| donor_names.contains(atom.name.as_str()))
        .collect();
    let acceptor_mask: Vec<bool> = atoms
        .iter()
        .map(|atom| acceptor_names.contains(atom.name.as_str()))
        .collect();
    let contains_hydrogens = atoms.iter().any(|atom| atom.is_hydrogen());

    Ok(MatchedBase {
        kind,
        atoms,
        donor_mask,
        acceptor_mask,
        contains_hydrogens,
        frame,
    })
}

fn transformed_axis(
    superposition: &Superposition,
    origin: &Point3<f64>,
    axis: Vector3<f64>,
) -> Vector3<f64> {
    (superposition.apply_point(&Point3::from(axis)) - origin).normalize()
}

fn masked_names<'a>(template: &'a Structure, mask: &[bool]) -> HashSet<&'a str> {
    template
        .iter()
        .zip(mask.iter())
        .filter(|(_, flagged)| **flagged)
        .map(|(atom, _)| atom.name.as_str())
        .collect()
}

use crate::core::hbond::find_hydrogen_bonds;
use crate::core::utils::geometry::{angle_between, distance};
use crate::engine::frames::{MatchedBase, ReferenceFrame};
use itertools::iproduct;
use nalgebra::Matrix3;
use thiserror::Error;

const MAX_ORIGIN_DISTANCE: f64 = 15.0;
const MAX_VERTICAL_SEPARATION: f64 = 2.5;
const MIN_NORMAL_ANGLE_DEGREES: f64 = 115.0;
// Stacking thresholds from Gabb et al. (1996).
const STACKING_CENTER_CUTOFF: f64 = 4.5;
const STACKING_MAX_NORMAL_ANGLE_DEGREES: f64 = 23.0;
const STACKING_MAX_OFFSET_ANGLE_DEGREES: f64 = 40.0;
const PLAUSIBLE_HBOND_CUTOFF: f64 = 4.0;
const MIN_FRAME_DETERMINANT: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("degenerate frame geometry in the vertical separation solve")]
    DegenerateFrame,
}

/// Applies the five sequential DSSR criteria to a candidate pair.
///
/// The tests short-circuit: the first failing criterion rejects the pair, and
/// the pair is accepted only when all of them hold. The order follows the
/// published procedure: origin distance, vertical separation, normal-vector
/// angle, absence of stacking, and hydrogen-bond presence.
pub fn is_base_pair(base1: &MatchedBase, base2: &MatchedBase) -> Result<bool, CriteriaError> {
    let frame1 = &base1.frame;
    let frame2 = &base2.frame;

    if distance(&frame1.origin, &frame2.origin) > MAX_ORIGIN_DISTANCE {
        return Ok(false);
    }

    if vertical_separation(frame1, frame2)? > MAX_VERTICAL_SEPARATION {
        return Ok(false);
    }

    if angle_between(&frame1.z, &frame2.z) < MIN_NORMAL_ANGLE_DEGREES.to_radians() {
        return Ok(false);
    }

    if is_stacked(frame1, frame2) {
        return Ok(false);
    }

    if base1.contains_hydrogens && base2.contains_hydrogens {
        let merged = base1.atoms.merged(&base2.atoms);
        let everything = vec![true; merged.len()];
        if find_hydrogen_bonds(&merged, &everything, &everything).is_empty() {
            return Ok(false);
        }
    } else if !has_plausible_hydrogen_bond(base1, base2) {
        return Ok(false);
    }

    Ok(true)
}

/// Distance from base 2's origin to the point where the line along base 1's
/// normal meets base 1's xy-plane.
///
/// The origin offset is expressed in the basis {x1, y1, -z1}; the third
/// coefficient is the signed offset along the normal.
fn vertical_separation(
    frame1: &ReferenceFrame,
    frame2: &ReferenceFrame,
) -> Result<f64, CriteriaError> {
    let basis = Matrix3::from_columns(&[frame1.x, frame1.y, -frame1.z]);
    if basis.determinant().abs() < MIN_FRAME_DETERMINANT {
        return Err(CriteriaError::DegenerateFrame);
    }
    let offset = frame2.origin - frame1.origin;
    let coefficients = basis
        .lu()
        .solve(&offset)
        .ok_or(CriteriaError::DegenerateFrame)?;
    let intercept = frame2.origin + coefficients[2] * frame1.z;
    Ok(distance(&frame2.origin, &intercept))
}

/// The Gabb stacking criteria: ring centers within 4.5 A, near-parallel base
/// planes, and a center-to-center vector close to either normal.
pub(crate) fn is_stacked(frame1: &ReferenceFrame, frame2: &ReferenceFrame) -> bool {
    let mut center_vectors = Vec::new();
    for (center1, center2) in iproduct!(frame1.ring_centers.iter(), frame2.ring_centers.iter()) {
        if distance(center1, center2) <= STACKING_CENTER_CUTOFF {
            center_vectors.push((center2 - center1).normalize());
        }
    }
    if center_vectors.is_empty() {
        return false;
    }

    if angle_between(&frame1.z, &frame2.z) > STACKING_MAX_NORMAL_ANGLE_DEGREES.to_radians() {
        return false;
    }

    let max_offset_angle = STACKING_MAX_OFFSET_ANGLE_DEGREES.to_radians();
    center_vectors.iter().any(|vector| {
        angle_between(&frame1.z, vector) <= max_offset_angle
            || angle_between(&frame2.z, vector) <= max_offset_angle
    })
}

/// Whether any donor heteroatom of one base lies within hydrogen-bonding
/// range of an acceptor heteroatom of the other, in either role assignment.
fn has_plausible_hydrogen_bond(base1: &MatchedBase, base2: &MatchedBase) -> bool {
    let roles = [(base1, base2), (base2, base1)];
    roles.iter().any(|(donor_base, acceptor_base)| {
        donor_base
            .atoms
            .iter()
            .zip(donor_base.donor_mask.iter())
            .filter(|(_, is_donor)| **is_donor)
            .any(|(donor, _)| {
                acceptor_base
                    .atoms
                    .iter()
                    .zip(acceptor_base.acceptor_mask.iter())
                    .filter(|(_, is_acceptor)| **is_acceptor)
                    .any(|(acceptor, _)| {
                        distance(&donor.position, &acceptor.position) <= PLAUSIBLE_HBOND_CUTOFF
                    })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bases::{BaseKind, standard_base};
    use crate::core::models::atom::Atom;
    use crate::core::models::structure::Structure;
    use crate::engine::frames::match_base;
    use nalgebra::{Point3, Vector3};

    /// 180 degree rotation about the x axis: the relationship between the
    /// standard frames of ideal Watson-Crick partners.
    fn flipped(structure: &Structure) -> Structure {
        let mut flipped = structure.clone();
        for atom in flipped.atoms_mut() {
            atom.position = Point3::new(atom.position.x, -atom.position.y, -atom.position.z);
        }
        flipped
    }

    fn translated(structure: &Structure, offset: Vector3<f64>) -> Structure {
        let mut moved = structure.clone();
        for atom in moved.atoms_mut() {
            atom.position += offset;
        }
        moved
    }

    fn adenine() -> Structure {
        standard_base(BaseKind::Adenine).modern().clone()
    }

    fn paired_thymine() -> Structure {
        flipped(standard_base(BaseKind::Thymine).modern())
    }

    fn matched(structure: &Structure) -> MatchedBase {
        match_base(structure, 3).unwrap()
    }

    fn plane_frame(origin: Point3<f64>, z: Vector3<f64>, centers: Vec<Point3<f64>>) -> ReferenceFrame {
        let x = if z.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let x = (x - z * z.dot(&x)).normalize();
        let y = z.cross(&x);
        ReferenceFrame {
            origin,
            x,
            y,
            z,
            ring_centers: centers,
        }
    }

    #[test]
    fn watson_crick_pair_passes_all_criteria() {
        let base1 = matched(&adenine());
        let base2 = matched(&paired_thymine());
        assert!(is_base_pair(&base1, &base2).unwrap());
    }

    #[test]
    fn watson_crick_pair_with_slight_propeller_offset_is_accepted() {
        let base1 = matched(&adenine());
        let base2 = matched(&translated(&paired_thymine(), Vector3::new(0.0, 0.0, 2.0)));
        assert!(is_base_pair(&base1, &base2).unwrap());
    }

    #[test]
    fn distant_origins_are_rejected() {
        let base1 = matched(&adenine());
        let base2 = matched(&translated(&paired_thymine(), Vector3::new(16.0, 0.0, 0.0)));
        assert!(!is_base_pair(&base1, &base2).unwrap());
    }

    #[test]
    fn excessive_vertical_separation_is_rejected() {
        let base1 = matched(&adenine());
        let base2 = matched(&translated(&paired_thymine(), Vector3::new(0.0, 0.0, 3.0)));
        assert!(!is_base_pair(&base1, &base2).unwrap());
    }

    #[test]
    fn parallel_normals_are_rejected() {
        // An unflipped partner faces the same way; real pairs face each other.
        let base1 = matched(&adenine());
        let base2 = matched(&translated(
            standard_base(BaseKind::Thymine).modern(),
            Vector3::new(0.0, 0.0, 1.0),
        ));
        assert!(!is_base_pair(&base1, &base2).unwrap());
    }

    #[test]
    fn vertical_separation_is_measured_along_the_first_normal() {
        let frame1 = plane_frame(Point3::origin(), Vector3::z(), vec![]);
        let frame2 = plane_frame(Point3::new(3.0, 4.0, 1.5), -Vector3::z(), vec![]);
        let separation = vertical_separation(&frame1, &frame2).unwrap();
        assert!((separation - 1.5).abs() < 1e-9);
    }

    #[test]
    fn stacked_bases_are_detected_and_rejected() {
        // Coplanar bases offset by ~3.4 A along the shared normal: the
        // hallmark of stacking, not pairing.
        let base1 = matched(&adenine());
        let base2 = matched(&translated(&adenine(), Vector3::new(0.0, 0.0, 3.4)));
        assert!(is_stacked(&base1.frame, &base2.frame));
        assert!(!is_base_pair(&base1, &base2).unwrap());
    }

    #[test]
    fn distant_ring_centers_do_not_stack() {
        let frame1 = plane_frame(Point3::origin(), Vector3::z(), vec![Point3::origin()]);
        let frame2 = plane_frame(
            Point3::new(10.0, 0.0, 0.0),
            Vector3::z(),
            vec![Point3::new(10.0, 0.0, 0.0)],
        );
        assert!(!is_stacked(&frame1, &frame2));
    }

    #[test]
    fn tilted_planes_do_not_stack() {
        // Normal angle of 30 degrees exceeds the 23 degree stacking limit.
        let tilted_z = Vector3::new(0.0, -0.5, 0.75_f64.sqrt());
        let frame1 = plane_frame(Point3::origin(), Vector3::z(), vec![Point3::origin()]);
        let frame2 = plane_frame(
            Point3::new(0.0, 0.0, 3.4),
            tilted_z,
            vec![Point3::new(0.0, 0.0, 3.4)],
        );
        assert!(!is_stacked(&frame1, &frame2));
    }

    #[test]
    fn lateral_center_offset_does_not_stack() {
        // Centers close enough, planes parallel, but the center-to-center
        // vector lies far from both normals.
        let frame1 = plane_frame(Point3::origin(), Vector3::z(), vec![Point3::origin()]);
        let frame2 = plane_frame(
            Point3::new(4.0, 0.0, 1.0),
            Vector3::z(),
            vec![Point3::new(4.0, 0.0, 1.0)],
        );
        assert!(!is_stacked(&frame1, &frame2));
    }

    #[test]
    fn plausibility_check_sees_donors_in_both_role_assignments() {
        let base1 = matched(&adenine());
        let base2 = matched(&paired_thymine());
        assert!(has_plausible_hydrogen_bond(&base1, &base2));
        assert!(has_plausible_hydrogen_bond(&base2, &base1));

        let far = matched(&translated(&paired_thymine(), Vector3::new(8.0, 0.0, 0.0)));
        assert!(!has_plausible_hydrogen_bond(&base1, &far));
    }

    #[test]
    fn explicit_hydrogens_pointing_at_partners_are_accepted() {
        let mut adenine_h = adenine();
        // Amino hydrogen aimed at the thymine O4 acceptor.
        adenine_h.push(Atom::new("H61", "A", Point3::new(1.7214, -0.0950, 0.0)));
        let mut thymine_h = paired_thymine();
        // Imino hydrogen aimed at the adenine N1 acceptor.
        thymine_h.push(Atom::new("H3", "T", Point3::new(-0.4266, -1.3852, 0.0)));

        let base1 = matched(&adenine_h);
        let base2 = matched(&thymine_h);
        assert!(base1.contains_hydrogens && base2.contains_hydrogens);
        assert!(is_base_pair(&base1, &base2).unwrap());
    }

    #[test]
    fn explicit_hydrogens_pointing_away_overrule_plausibility() {
        // Heteroatom distances alone would make this pair plausible, but the
        // explicit hydrogens point out of the base plane, so no geometric
        // hydrogen bond exists.
        let mut adenine_h = adenine();
        adenine_h.push(Atom::new("H61", "A", Point3::new(1.611, 0.909, 1.3)));
        let mut thymine_h = paired_thymine();
        thymine_h.push(Atom::new("H3", "T", Point3::new(-0.298, -2.407, -1.3)));

        let base1 = matched(&adenine_h);
        let base2 = matched(&thymine_h);
        assert!(base1.contains_hydrogens && base2.contains_hydrogens);
        assert!(!is_base_pair(&base1, &base2).unwrap());
    }
}

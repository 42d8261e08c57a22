use crate::core::models::structure::Structure;
use nalgebra::{Matrix3, Point3, Vector3};
use thiserror::Error;

const SVD_EPSILON: f64 = 1e-12;
const SVD_MAX_ITERATIONS: usize = 256;

#[derive(Debug, Error, PartialEq)]
pub enum SuperpositionError {
    #[error("point sets differ in length ({fixed} vs {mobile})")]
    LengthMismatch { fixed: usize, mobile: usize },

    #[error("cannot superimpose empty point sets")]
    EmptyPointSet,

    #[error("singular value decomposition did not converge")]
    SvdFailure,
}

/// A rigid transformation decomposed into a centering translation, a rotation,
/// and a restoring translation, applied in that order.
///
/// This is the result of [`superimpose`]: applying it to the mobile point set
/// reproduces the least-squares fit onto the fixed set, and applying it to any
/// other points carries them along with the same rigid motion.
#[derive(Debug, Clone)]
pub struct Superposition {
    /// Translation moving the mobile centroid to the origin.
    pub centering: Vector3<f64>,
    /// Proper rotation (determinant +1) about the origin.
    pub rotation: Matrix3<f64>,
    /// Translation moving the rotated points onto the fixed centroid.
    pub restoring: Vector3<f64>,
}

impl Superposition {
    pub fn apply_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotation * (point.coords + self.centering) + self.restoring)
    }

    pub fn apply_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|point| self.apply_point(point)).collect()
    }

    /// Returns a copy of `structure` with every atom position transformed.
    pub fn apply(&self, structure: &Structure) -> Structure {
        let mut transformed = structure.clone();
        for atom in transformed.atoms_mut() {
            atom.position = self.apply_point(&atom.position);
        }
        transformed
    }
}

/// Computes the least-squares rigid superposition (Kabsch algorithm) that maps
/// `mobile` onto `fixed`.
///
/// The two slices must be equally long and index-aligned: `mobile[i]`
/// corresponds to `fixed[i]`. Reflections are excluded; the returned rotation
/// is always proper.
pub fn superimpose(
    fixed: &[Point3<f64>],
    mobile: &[Point3<f64>],
) -> Result<Superposition, SuperpositionError> {
    if fixed.len() != mobile.len() {
        return Err(SuperpositionError::LengthMismatch {
            fixed: fixed.len(),
            mobile: mobile.len(),
        });
    }
    if fixed.is_empty() {
        return Err(SuperpositionError::EmptyPointSet);
    }

    let count = fixed.len() as f64;
    let fixed_centroid = fixed.iter().map(|p| p.coords).sum::<Vector3<f64>>() / count;
    let mobile_centroid = mobile.iter().map(|p| p.coords).sum::<Vector3<f64>>() / count;

    let mut covariance = Matrix3::zeros();
    for (f, m) in fixed.iter().zip(mobile.iter()) {
        let f_centered = f.coords - fixed_centroid;
        let m_centered = m.coords - mobile_centroid;
        covariance += m_centered * f_centered.transpose();
    }

    let svd = covariance
        .try_svd(true, true, SVD_EPSILON, SVD_MAX_ITERATIONS)
        .ok_or(SuperpositionError::SvdFailure)?;
    let u = svd.u.ok_or(SuperpositionError::SvdFailure)?;
    let v = svd.v_t.ok_or(SuperpositionError::SvdFailure)?.transpose();

    // Flip the smallest singular direction if the optimum would be a
    // reflection.
    let parity = (v * u.transpose()).determinant().signum();
    let correction = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, parity));
    let rotation = v * correction * u.transpose();

    Ok(Superposition {
        centering: -mobile_centroid,
        rotation,
        restoring: fixed_centroid,
    })
}

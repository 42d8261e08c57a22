use itertools::iproduct;
use nalgebra::Point3;
use std::collections::HashMap;

/// A uniform cell grid over a 3D point set for sub-quadratic proximity queries.
///
/// Points are bucketed into cubic cells of `cell_size` edge length. Contact
/// enumeration only compares points in adjacent cells, so the cell size must
/// be at least as large as the query cutoff for results to be exhaustive.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cell_size: f64,
    positions: Vec<Point3<f64>>,
    cells: HashMap<(i64, i64, i64), Vec<usize>>,
}

impl CellGrid {
    /// Builds a grid over `positions` with the given cell size.
    ///
    /// The cell size must be positive.
    pub fn new(positions: &[Point3<f64>], cell_size: f64) -> Self {
        assert!(cell_size > 0.0, "cell size must be positive");
        let mut cells: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
        for (index, position) in positions.iter().enumerate() {
            cells
                .entry(cell_coordinates(position, cell_size))
                .or_default()
                .push(index);
        }
        Self {
            cell_size,
            positions: positions.to_vec(),
            cells,
        }
    }

    /// Enumerates all index pairs `(i, j)` with `i < j` whose points lie within
    /// `cutoff` of each other (inclusive boundary).
    ///
    /// `cutoff` must not exceed the grid's cell size.
    pub fn contacts_within(&self, cutoff: f64) -> Vec<(usize, usize)> {
        assert!(
            cutoff <= self.cell_size,
            "cutoff exceeds cell size; contacts would be incomplete"
        );
        let cutoff_squared = cutoff * cutoff;
        let mut contacts = Vec::new();
        for (index, position) in self.positions.iter().enumerate() {
            let (cx, cy, cz) = cell_coordinates(position, self.cell_size);
            for (dx, dy, dz) in iproduct!(-1..=1, -1..=1, -1..=1) {
                let Some(bucket) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                    continue;
                };
                for &other in bucket {
                    if other <= index {
                        continue;
                    }
                    if (self.positions[other] - position).norm_squared() <= cutoff_squared {
                        contacts.push((index, other));
                    }
                }
            }
        }
        contacts
    }
}

fn cell_coordinates(position: &Point3<f64>, cell_size: f64) -> (i64, i64, i64) {
    (
        (position.x / cell_size).floor() as i64,
        (position.y / cell_size).floor() as i64,
        (position.z / cell_size).floor() as i64,
    )
}

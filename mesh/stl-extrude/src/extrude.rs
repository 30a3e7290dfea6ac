//! Occupancy grid to solid mesh.
//!
//! The grid is turned into a mesh in three passes:
//!
//! 1. **Column walls** - for every pair of neighbouring columns, runs of
//!    rows where exactly one side is filled become one YZ wall each.
//! 2. **Row walls** - the same for neighbouring rows, giving XZ walls.
//! 3. **Caps** - a row-major greedy rectangle decomposition of the filled
//!    cells. Each rectangle becomes a bottom face and a top face.
//!
//! Walls face the empty side. No wall is generated along the outer edge of
//! the grid; pad the grid (see [`OccupancyGrid::padded`]) when the solid
//! must be closed there.

// Grid indices become coordinates; grids are far below f32's exact range.
#![allow(clippy::cast_precision_loss)]

use nalgebra::Point3;
use stl_geometry::build_axis_face;
use stl_types::{AxisPlane, Facing, Mesh};
use tracing::{debug, info};

use crate::error::{ExtrudeError, ExtrudeResult};
use crate::grid::OccupancyGrid;
use crate::params::ExtrudeParams;

/// One rectangle of the cap decomposition, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapRect {
    /// First row covered.
    pub row: usize,
    /// First column covered.
    pub col: usize,
    /// Number of rows covered.
    pub rows: usize,
    /// Number of columns covered.
    pub cols: usize,
}

impl CapRect {
    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `(row, col)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row + self.rows && col >= self.col && col < self.col + self.cols
    }
}

/// The output of [`extrude`].
#[derive(Debug, Clone, Default)]
pub struct Extrusion {
    /// Walls first (column then row boundaries), then a bottom and top face
    /// per cap rectangle.
    pub mesh: Mesh,
    /// Number of two-triangle wall faces in `mesh`.
    pub wall_faces: usize,
    /// Cap rectangles in emission order.
    pub caps: Vec<CapRect>,
}

impl Extrusion {
    /// Number of cells covered by the caps.
    #[must_use]
    pub fn covered_cells(&self) -> usize {
        self.caps.iter().map(CapRect::area).sum()
    }
}

/// Extrude `grid` into a solid.
///
/// The grid is consumed: the cap pass clears each cell as it is covered.
///
/// # Errors
///
/// Returns [`ExtrudeError::UnsupportedStyle`] for any style other than
/// [`ExtrusionStyle::Extrude`](crate::ExtrusionStyle::Extrude), or
/// [`ExtrudeError::InvalidParams`] if `params` fails validation.
///
/// # Example
///
/// ```
/// use stl_extrude::{extrude, ExtrudeParams, OccupancyGrid};
///
/// // A single filled cell with an empty border all round.
/// let grid = OccupancyGrid::from_bitmap(b"000010000", 3, 3).unwrap();
/// let result = extrude(grid, &ExtrudeParams::default().with_depth(2.0)).unwrap();
///
/// assert_eq!(result.wall_faces, 4);
/// assert_eq!(result.caps.len(), 1);
/// assert_eq!(result.mesh.len(), 12);
/// assert!((result.mesh.signed_volume() - 2.0).abs() < 1e-6);
/// ```
pub fn extrude(mut grid: OccupancyGrid, params: &ExtrudeParams) -> ExtrudeResult<Extrusion> {
    if !params.style.is_implemented() {
        return Err(ExtrudeError::UnsupportedStyle(params.style));
    }
    params.validate()?;

    info!(
        width = grid.width(),
        height = grid.height(),
        filled = grid.filled_count(),
        depth = params.depth,
        base = params.base,
        "Starting extrusion"
    );

    let frame = Frame::new(params);
    let mut out = Extrusion::default();

    column_walls(&grid, &frame, &mut out);
    let column_faces = out.wall_faces;
    debug!(faces = column_faces, "Generated column-boundary walls");

    row_walls(&grid, &frame, &mut out);
    debug!(faces = out.wall_faces - column_faces, "Generated row-boundary walls");

    caps(&mut grid, &frame, &mut out);
    debug!(rects = out.caps.len(), "Generated caps");

    info!(
        triangles = out.mesh.len(),
        walls = out.wall_faces,
        caps = out.caps.len(),
        "Extrusion complete"
    );
    Ok(out)
}

/// Maps grid indices to output coordinates.
struct Frame {
    x_scale: f32,
    y_scale: f32,
    bottom: f32,
    top: f32,
}

impl Frame {
    fn new(params: &ExtrudeParams) -> Self {
        Self {
            x_scale: params.x_scale,
            y_scale: params.y_scale,
            bottom: params.bottom(),
            top: params.top(),
        }
    }

    fn x(&self, col: usize) -> f32 {
        col as f32 * self.x_scale
    }

    fn y(&self, row: usize) -> f32 {
        row as f32 * self.y_scale
    }
}

/// Facing of a wall between `near` (lower index) and `far` cells.
fn wall_facing(near_filled: bool) -> Facing {
    if near_filled {
        Facing::Positive
    } else {
        Facing::Negative
    }
}

fn column_walls(grid: &OccupancyGrid, frame: &Frame, out: &mut Extrusion) {
    let (width, height) = (grid.width(), grid.height());

    for col in 0..width.saturating_sub(1) {
        let x = frame.x(col + 1);
        let mut row = 0;
        while row < height {
            let left = grid.filled(row, col);
            if left == grid.filled(row, col + 1) {
                row += 1;
                continue;
            }

            let start = row;
            while row < height && grid.filled(row, col) == left && grid.filled(row, col + 1) != left {
                row += 1;
            }
            // `row` is now the first row past the run; it is examined next.

            out.mesh.push_face(build_axis_face(
                AxisPlane::Yz,
                Point3::new(x, frame.y(start), frame.bottom),
                Point3::new(x, frame.y(row), frame.top),
                wall_facing(left),
            ));
            out.wall_faces += 1;
        }
    }
}

fn row_walls(grid: &OccupancyGrid, frame: &Frame, out: &mut Extrusion) {
    let (width, height) = (grid.width(), grid.height());

    for row in 0..height.saturating_sub(1) {
        let y = frame.y(row + 1);
        let mut col = 0;
        while col < width {
            let near = grid.filled(row, col);
            if near == grid.filled(row + 1, col) {
                col += 1;
                continue;
            }

            let start = col;
            while col < width && grid.filled(row, col) == near && grid.filled(row + 1, col) != near {
                col += 1;
            }

            out.mesh.push_face(build_axis_face(
                AxisPlane::Xz,
                Point3::new(frame.x(start), y, frame.bottom),
                Point3::new(frame.x(col), y, frame.top),
                wall_facing(near),
            ));
            out.wall_faces += 1;
        }
    }
}

fn caps(grid: &mut OccupancyGrid, frame: &Frame, out: &mut Extrusion) {
    let (width, height) = (grid.width(), grid.height());

    for row in 0..height {
        let mut col = 0;
        while col < width {
            if !grid.filled(row, col) {
                col += 1;
                continue;
            }

            let start_col = col;
            while col < width && grid.filled(row, col) {
                col += 1;
            }

            let mut end_row = row + 1;
            while end_row < height && (start_col..col).all(|c| grid.filled(end_row, c)) {
                end_row += 1;
            }

            let rect = CapRect {
                row,
                col: start_col,
                rows: end_row - row,
                cols: col - start_col,
            };
            for r in rect.row..end_row {
                for c in rect.col..col {
                    grid.clear(r, c);
                }
            }

            let (x0, x1) = (frame.x(start_col), frame.x(col));
            let (y0, y1) = (frame.y(row), frame.y(end_row));
            out.mesh.push_face(build_axis_face(
                AxisPlane::Xy,
                Point3::new(x0, y0, frame.bottom),
                Point3::new(x1, y1, frame.bottom),
                Facing::Negative,
            ));
            out.mesh.push_face(build_axis_face(
                AxisPlane::Xy,
                Point3::new(x0, y0, frame.top),
                Point3::new(x1, y1, frame.top),
                Facing::Positive,
            ));
            out.caps.push(rect);
        }
    }
}

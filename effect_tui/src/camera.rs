//! Fixed-angle orthographic camera for the probability surface
//!
//! Data is first normalized into a unit cube centred on the origin, then
//! projected onto the screen plane. Elevation tilts the view up from the
//! hit-rate/resistance plane, azimuth rotates it about the probability axis.

use effect_core::config::ViewConfig;
use effect_core::ProbabilityGrid;

/// A point after projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Larger is closer to the viewer
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Degrees above the base plane
    pub elevation: f64,
    /// Degrees about the vertical axis
    pub azimuth: f64,
}

impl Camera {
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Camera {
            elevation,
            azimuth,
        }
    }

    pub fn from_config(view: &ViewConfig) -> Self {
        Camera::new(view.elevation, view.azimuth)
    }

    /// Rotate by the given deltas. Azimuth wraps to (-180, 180],
    /// elevation stops at straight up/down.
    pub fn rotate(&mut self, d_azimuth: f64, d_elevation: f64) {
        let mut azimuth = (self.azimuth + d_azimuth) % 360.0;
        if azimuth > 180.0 {
            azimuth -= 360.0;
        } else if azimuth <= -180.0 {
            azimuth += 360.0;
        }
        self.azimuth = azimuth;
        self.elevation = (self.elevation + d_elevation).clamp(-90.0, 90.0);
    }

    /// Project a normalized point `[x, y, z]` (z is up)
    pub fn project(&self, point: [f64; 3]) -> Projected {
        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        let (sin_az, cos_az) = az.sin_cos();
        let (sin_el, cos_el) = el.sin_cos();

        let right = [-sin_az, cos_az, 0.0];
        let up = [-sin_el * cos_az, -sin_el * sin_az, cos_el];
        let eye = [cos_el * cos_az, cos_el * sin_az, sin_el];

        Projected {
            x: dot(point, right),
            y: dot(point, up),
            depth: dot(point, eye),
        }
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Data extents used to normalize points into the unit cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

impl Bounds3 {
    pub fn of_grid(grid: &ProbabilityGrid) -> Self {
        Bounds3 {
            x: grid.hit_rate_bounds(),
            y: grid.resistance_bounds(),
            z: grid.probability_bounds(),
        }
    }

    /// Map into `[-0.5, 0.5]` per axis; a flat axis maps to 0
    pub fn normalize(&self, point: [f64; 3]) -> [f64; 3] {
        [
            unit(point[0], self.x),
            unit(point[1], self.y),
            unit(point[2], self.z),
        ]
    }
}

fn unit(value: f64, (lo, hi): (f64, f64)) -> f64 {
    let span = hi - lo;
    if span.abs() < f64::EPSILON || !span.is_finite() {
        0.0
    } else {
        (value - lo) / span - 0.5
    }
}

/// One quad of the surface, already projected
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub corners: [(f64, f64); 4],
    /// Mean probability of the four corners
    pub value: f64,
    pub depth: f64,
}

/// Project every grid cell, ordered far to near for painting
pub fn surface_facets(grid: &ProbabilityGrid, camera: &Camera) -> Vec<Facet> {
    let bounds = Bounds3::of_grid(grid);
    let (rows, cols) = grid.dim();
    let mut facets = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1));

    let vertex = |i: usize, j: usize| {
        let p = bounds.normalize([
            grid.hit_rates[[i, j]],
            grid.resistances[[i, j]],
            grid.probabilities[[i, j]],
        ]);
        (camera.project(p), grid.probabilities[[i, j]])
    };

    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let quad = [vertex(i, j), vertex(i, j + 1), vertex(i + 1, j + 1), vertex(i + 1, j)];
            facets.push(Facet {
                corners: quad.map(|(p, _)| (p.x, p.y)),
                value: quad.iter().map(|(_, v)| v).sum::<f64>() / 4.0,
                depth: quad.iter().map(|(p, _)| p.depth).sum::<f64>() / 4.0,
            });
        }
    }

    facets.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    facets
}

/// Axis edges from the low corner of the cube, with their end labels
pub fn axis_edges(camera: &Camera) -> [((f64, f64), (f64, f64)); 3] {
    let origin = camera.project([-0.5, -0.5, -0.5]);
    let ends = [[0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, 0.5]];
    ends.map(|end| {
        let p = camera.project(end);
        ((origin.x, origin.y), (p.x, p.y))
    })
}

/// Cool-warm diverging colour map: blue at 0, grey at 0.5, red at 1
pub fn coolwarm(t: f64) -> (u8, u8, u8) {
    const COOL: [f64; 3] = [59.0, 76.0, 192.0];
    const MID: [f64; 3] = [221.0, 221.0, 221.0];
    const WARM: [f64; 3] = [180.0, 4.0, 38.0];

    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    let (from, to, f) = if t < 0.5 {
        (COOL, MID, t * 2.0)
    } else {
        (MID, WARM, (t - 0.5) * 2.0)
    };
    let channel = |k: usize| (from[k] + (to[k] - from[k]) * f).round() as u8;
    (channel(0), channel(1), channel(2))
}

/// Position of `value` within `(lo, hi)` as 0..=1
pub fn colour_position(value: f64, (lo, hi): (f64, f64)) -> f64 {
    let span = hi - lo;
    if span.abs() < f64::EPSILON || !span.is_finite() {
        0.5
    } else {
        (value - lo) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use effect_core::sample_grid;

    #[test]
    fn test_front_view_projection() {
        // Looking down +x: y is screen right, z is screen up
        let camera = Camera::new(0.0, 0.0);
        let p = camera.project([0.5, 0.25, -0.5]);
        assert!((p.x - 0.25).abs() < 1e-12);
        assert!((p.y + 0.5).abs() < 1e-12);
        assert!((p.depth - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_top_view_projection() {
        let camera = Camera::new(90.0, 0.0);
        let p = camera.project([0.0, 0.0, 0.5]);
        assert!(p.x.abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!((p.depth - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_wraps_and_clamps() {
        let mut camera = Camera::new(25.0, -160.0);
        camera.rotate(-30.0, 80.0);
        assert!((camera.azimuth - 170.0).abs() < 1e-9);
        assert!((camera.elevation - 90.0).abs() < 1e-9);

        camera.rotate(20.0, -200.0);
        assert!((camera.azimuth + 170.0).abs() < 1e-9);
        assert!((camera.elevation + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_projection_within_unit_sphere() {
        let camera = Camera::new(25.0, -160.0);
        for corner in [
            [-0.5, -0.5, -0.5],
            [0.5, 0.5, 0.5],
            [0.5, -0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ] {
            let p = camera.project(corner);
            assert!(p.x.abs() <= 0.87);
            assert!(p.y.abs() <= 0.87);
        }
    }

    #[test]
    fn test_facets_sorted_far_to_near() {
        let grid = sample_grid(0.3, 0.0, 0.4);
        let facets = surface_facets(&grid, &Camera::new(25.0, -160.0));
        assert_eq!(facets.len(), 49 * 49);
        assert!(facets.windows(2).all(|w| w[0].depth <= w[1].depth));
    }

    #[test]
    fn test_flat_axis_normalizes_to_zero() {
        let bounds = Bounds3 {
            x: (0.0, 1.5),
            y: (0.2, 0.2),
            z: (0.0, 1.0),
        };
        let p = bounds.normalize([1.5, 0.2, 0.0]);
        assert_eq!(p, [0.5, 0.0, -0.5]);
    }

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(0.0), (59, 76, 192));
        assert_eq!(coolwarm(0.5), (221, 221, 221));
        assert_eq!(coolwarm(1.0), (180, 4, 38));
        assert_eq!(coolwarm(-3.0), coolwarm(0.0));
        assert_eq!(coolwarm(f64::NAN), coolwarm(0.5));
    }

    #[test]
    fn test_colour_position() {
        assert!((colour_position(0.5, (0.0, 1.0)) - 0.5).abs() < f64::EPSILON);
        assert!((colour_position(0.3, (0.3, 0.3)) - 0.5).abs() < f64::EPSILON);
    }
}

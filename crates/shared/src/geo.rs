//! World map geometry.
//!
//! The map is drawn into an 800x400 SVG viewport using a plain
//! equirectangular projection: longitude maps linearly to x, latitude to y,
//! with north at the top.

use serde::Serialize;

// Viewport dimensions in SVG user units
pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 400.0;

/// How far above the higher endpoint the arc control point sits.
pub const ARC_LIFT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Project a latitude/longitude pair into viewport coordinates.
pub fn project(lat: f64, lng: f64) -> Point {
    Point {
        x: (lng + 180.0) * (VIEW_WIDTH / 360.0),
        y: (90.0 - lat) * (VIEW_HEIGHT / 180.0),
    }
}

/// Inverse of [`project`]: viewport coordinates back to `(lat, lng)`.
pub fn unproject(p: Point) -> (f64, f64) {
    (
        90.0 - p.y * (180.0 / VIEW_HEIGHT),
        p.x * (360.0 / VIEW_WIDTH) - 180.0,
    )
}

/// Quadratic Bezier segment between two projected points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadCurve {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadCurve {
    /// SVG path data (`M x y Q cx cy x y`).
    pub fn to_path_data(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }
}

/// Build the arc between two points. The control point sits over the
/// horizontal midpoint, `ARC_LIFT` above whichever endpoint is higher, so the
/// arc always bows toward the top of the viewport.
pub fn curve(start: Point, end: Point) -> QuadCurve {
    let control = Point {
        x: (start.x + end.x) / 2.0,
        y: start.y.min(end.y) - ARC_LIFT,
    };
    QuadCurve { start, control, end }
}

/// Diagonal dot lattice covering the viewport. Odd rows are shifted right by
/// half a step. The map backdrop keeps only its land points.
pub fn lattice(step: f64) -> Vec<Point> {
    if step.is_nan() || step <= 0.0 {
        return Vec::new();
    }
    let cols = (VIEW_WIDTH / step) as usize;
    let rows = (VIEW_HEIGHT / step) as usize;
    let mut points = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        let offset = if row % 2 == 1 { step / 2.0 } else { 0.0 };
        let y = row as f64 * step + step / 2.0;
        for col in 0..cols {
            let x = col as f64 * step + step / 4.0 + offset;
            if x < VIEW_WIDTH {
                points.push(Point { x, y });
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_origin_is_viewport_center() {
        let p = project(0.0, 0.0);
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_corners() {
        let nw = project(90.0, -180.0);
        assert!((nw.x - 0.0).abs() < 1e-9);
        assert!((nw.y - 0.0).abs() < 1e-9);

        let se = project(-90.0, 180.0);
        assert!((se.x - VIEW_WIDTH).abs() < 1e-9);
        assert!((se.y - VIEW_HEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_project_is_deterministic() {
        let a = project(34.0522, -118.2437);
        let b = project(34.0522, -118.2437);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_los_angeles() {
        let p = project(34.0522, -118.2437);
        assert!((p.x - 137.2362).abs() < 1e-3);
        assert!((p.y - 124.3284).abs() < 1e-3);
    }

    #[test]
    fn test_unproject_inverts_project() {
        for (lat, lng) in [(34.0522, -118.2437), (-15.7942, -47.8822), (0.0, 0.0), (-90.0, 180.0)] {
            let (back_lat, back_lng) = unproject(project(lat, lng));
            assert!((back_lat - lat).abs() < 1e-9);
            assert!((back_lng - lng).abs() < 1e-9);
        }
    }

    #[test]
    fn test_curve_control_above_both_endpoints() {
        let pairs = [
            (project(61.2181, -149.9003), project(34.0522, -118.2437)),
            (project(-15.7942, -47.8822), project(38.7223, -9.1393)),
            (project(-90.0, -180.0), project(90.0, 180.0)),
            (project(10.0, 10.0), project(10.0, 20.0)),
        ];
        for (a, b) in pairs {
            let c = curve(a, b);
            assert!(c.control.y <= a.y.min(b.y));
            assert!((c.control.y - (a.y.min(b.y) - ARC_LIFT)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_curve_order_does_not_change_control() {
        let a = project(28.6139, 77.2090);
        let b = project(43.1332, 131.9113);
        assert_eq!(curve(a, b).control, curve(b, a).control);
    }

    #[test]
    fn test_path_data_format() {
        let c = curve(Point { x: 100.0, y: 200.0 }, Point { x: 300.0, y: 150.0 });
        assert_eq!(c.to_path_data(), "M 100 200 Q 200 100 300 150");
    }

    #[test]
    fn test_lattice_stays_inside_viewport() {
        let points = lattice(8.0);
        assert!(!points.is_empty());
        for p in &points {
            assert!(p.x >= 0.0 && p.x < VIEW_WIDTH);
            assert!(p.y >= 0.0 && p.y < VIEW_HEIGHT);
        }
    }

    #[test]
    fn test_lattice_offsets_odd_rows() {
        let points = lattice(100.0);
        let first_row: Vec<_> = points.iter().filter(|p| (p.y - 50.0).abs() < 1e-9).collect();
        let second_row: Vec<_> = points.iter().filter(|p| (p.y - 150.0).abs() < 1e-9).collect();
        assert!((second_row[0].x - first_row[0].x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_lattice_rejects_non_positive_step() {
        assert!(lattice(0.0).is_empty());
        assert!(lattice(-4.0).is_empty());
        assert!(lattice(f64::NAN).is_empty());
    }
}

//! Positioned points and Bezier control-point geometry.

use glam::DVec2;

/// A point in normalized 0-100 coordinates. Either coordinate may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Point {
    /// Create a point from optional coordinates.
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    /// Create a complete point.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Some(x), Some(y))
    }

    /// Whether both coordinates are present.
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// The coordinates as a vector, if the point is complete.
    pub fn to_vec2(&self) -> Option<DVec2> {
        Some(DVec2::new(self.x?, self.y?))
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::at(v.x, v.y)
    }
}

/// Bezier control point for `point`, leaning along the direction from
/// `previous` to `next`.
///
/// The handle has length `|next - previous| * smoothing` and points the
/// other way when `reverse` is set. At a local extremum in y the handle is
/// flattened so the curve does not bulge past the extremum. The result is
/// clamped componentwise between `point` and the neighbour it leans
/// toward (`next`, or `previous` when reversed), which rules out overshoot.
pub fn control_point(
    point: DVec2,
    previous: DVec2,
    next: DVec2,
    smoothing: f64,
    reverse: bool,
) -> DVec2 {
    let direction = next - previous;
    let angle = direction.y.atan2(direction.x) + if reverse { std::f64::consts::PI } else { 0.0 };
    let length = direction.length() * smoothing;
    let extremum = (point.y - previous.y) * (next.y - point.y) <= 0.0;

    let offset = DVec2::new(
        angle.cos() * length,
        if extremum { 0.0 } else { angle.sin() * length },
    );
    let limit = if reverse { previous } else { next };

    (point + offset).clamp(point.min(limit), point.max(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn point() -> DVec2 {
        DVec2::new(1.0, 2.0)
    }

    fn previous() -> DVec2 {
        DVec2::new(0.0, 1.0)
    }

    fn next() -> DVec2 {
        DVec2::new(3.0, 4.0)
    }

    fn between(value: DVec2, a: DVec2, b: DVec2) -> bool {
        let (lo, hi) = (a.min(b), a.max(b));
        value.x >= lo.x - EPSILON
            && value.x <= hi.x + EPSILON
            && value.y >= lo.y - EPSILON
            && value.y <= hi.y + EPSILON
    }

    #[test]
    fn test_completeness() {
        assert!(Point::at(5.0, 3.0).is_complete());
        assert!(!Point::new(None, Some(3.0)).is_complete());
        assert!(!Point::new(Some(5.0), None).is_complete());
        assert_eq!(Point::new(Some(5.0), None).to_vec2(), None);
    }

    #[test]
    fn test_control_clamped_between_point_and_next() {
        let control = control_point(point(), previous(), next(), 1.0, false);

        assert!(between(control, point(), next()));
    }

    #[test]
    fn test_zero_smoothing_returns_same_point() {
        let control = control_point(point(), previous(), next(), 0.0, false);

        assert!((control - point()).length() < EPSILON);
    }

    #[test]
    fn test_huge_smoothing_clamps_to_neighbour() {
        assert_eq!(control_point(point(), previous(), next(), 1e6, false), next());
        assert_eq!(control_point(point(), previous(), next(), 1e6, true), previous());
    }

    #[test]
    fn test_degenerate_neighbours_yield_same_point() {
        let control = control_point(point(), DVec2::ZERO, DVec2::ZERO, 1.0, false);

        assert_eq!(control, point());
    }

    #[test]
    fn test_peak_and_trough_have_no_y_offset() {
        let peak = control_point(
            point(),
            DVec2::new(0.0, 1.0),
            DVec2::new(2.0, 1.0),
            1.0,
            false,
        );
        let trough = control_point(
            point(),
            DVec2::new(0.0, 3.0),
            DVec2::new(2.0, 3.0),
            1.0,
            false,
        );

        assert_eq!(peak.y, point().y);
        assert_eq!(trough.y, point().y);
    }

    #[test]
    fn test_flat_segment_clamps_x_toward_limit() {
        let control = control_point(
            point(),
            DVec2::new(0.0, 2.0),
            DVec2::new(2.0, 2.0),
            1.0,
            false,
        );

        assert_eq!(control.y, 2.0);
        assert!((control.x - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_vertical_segment_keeps_x() {
        let control = control_point(
            point(),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 4.0),
            1.0,
            false,
        );

        assert!((control.x - 1.0).abs() < EPSILON);
        assert!(control.y >= 2.0 && control.y <= 4.0);
    }

    #[test]
    fn test_forward_and_backward_handles_oppose() {
        let forward = control_point(point(), previous(), next(), 1.0, false) - point();
        let backward = control_point(point(), previous(), next(), 1.0, true) - point();

        assert!(forward.dot(backward) <= EPSILON);
        assert!(between(forward + point(), point(), next()));
        assert!(between(backward + point(), previous(), point()));
    }

    #[test]
    fn test_negative_directions_stay_clamped() {
        let limit = DVec2::new(2.0, -1.0);
        let control = control_point(point(), DVec2::new(-2.0, 4.0), limit, 0.5, false);

        assert!(between(control, point(), limit));
    }
}

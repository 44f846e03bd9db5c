//! Path primitives and series path generation.
//!
//! A path is a sequence of drawing commands. [`SeriesPath`] turns the points
//! of one series into line, area and mask geometry; the result serializes to
//! SVG-style path data (`M x,y L x,y C x,y x,y x,y`).

use glam::DVec2;
use rcharts_core::profiling::profile_scope;

use crate::point::{Point, control_point};
use crate::rect::Rect;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(DVec2),
    /// Draw a line to a position.
    LineTo(DVec2),
    /// Draw a cubic Bezier curve.
    CubicTo {
        /// First control point
        control1: DVec2,
        /// Second control point
        control2: DVec2,
        /// End point
        to: DVec2,
    },
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(to) => write!(f, "M {}", Coord(*to))?,
                PathCommand::LineTo(to) => write!(f, "L {}", Coord(*to))?,
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => write!(
                    f,
                    "C {} {} {}",
                    Coord(*control1),
                    Coord(*control2),
                    Coord(*to)
                )?,
            }
        }
        Ok(())
    }
}

/// `x,y` coordinate pair.
struct Coord(DVec2);

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Draw a cubic Bezier curve.
    pub fn cubic_to(&mut self, control1: DVec2, control2: DVec2, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    /// Build the path.
    pub fn build(&mut self) -> Path {
        Path {
            commands: std::mem::take(&mut self.commands),
        }
    }
}

/// Path geometry for one series.
///
/// Only complete points contribute to line and area paths. Missing points
/// do not split the path; gaps are blanked by the [mask spans](Self::mask_spans)
/// instead.
#[derive(Debug, Clone, Default)]
pub struct SeriesPath {
    points: Vec<Point>,
    previous_points: Vec<Point>,
    origin: f64,
    smoothing: Option<f64>,
}

impl SeriesPath {
    /// Create a series path over `points`.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    /// Points of the series stacked beneath this one. An area closes along
    /// them instead of dropping to the origin.
    pub fn with_previous(mut self, previous_points: Vec<Point>) -> Self {
        self.previous_points = previous_points;
        self
    }

    /// Baseline position of the magnitude axis, in percent from the bottom.
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    /// Smoothing factor. `None` draws straight segments.
    pub fn with_smoothing(mut self, smoothing: Option<f64>) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Open path through the complete points.
    pub fn line_path(&self) -> Path {
        profile_scope!("line_path");

        let points = complete(&self.points);
        if points.len() < 2 {
            return Path::new();
        }

        let mut builder = PathBuilder::with_capacity(points.len());
        builder.move_to(points[0]);
        self.forward(&mut builder, &points);
        builder.build()
    }

    /// Closed outline for an area fill.
    ///
    /// Starts on the baseline under the first point, walks the series, drops
    /// back to the baseline under the last point and then returns along the
    /// previous series, if there is one.
    pub fn area_path(&self) -> Path {
        profile_scope!("area_path");

        let points = complete(&self.points);
        if points.len() < 2 {
            return Path::new();
        }
        let previous = complete(&self.previous_points);
        let baseline = 100.0 - self.origin;

        let mut builder = PathBuilder::with_capacity(points.len() + previous.len() + 3);
        builder.move_to(DVec2::new(points[0].x, baseline));
        builder.line_to(points[0]);
        self.forward(&mut builder, &points);
        builder.line_to(DVec2::new(points[points.len() - 1].x, baseline));

        if let Some(&last) = previous.last() {
            builder.line_to(last);
            self.backward(&mut builder, &previous);
        }

        tracing::trace!(
            points = points.len(),
            previous = previous.len(),
            "built area path"
        );
        builder.build()
    }

    /// Runs of consecutive complete points as rectangles spanning from the
    /// first to the last point of each run.
    pub fn mask_spans(&self) -> Vec<Rect> {
        let mut spans = Vec::new();
        let mut run: Vec<DVec2> = Vec::new();

        for point in &self.points {
            match point.to_vec2() {
                Some(v) => run.push(v),
                None => flush_span(&mut run, &mut spans),
            }
        }
        flush_span(&mut run, &mut spans);

        spans
    }

    fn forward(&self, builder: &mut PathBuilder, points: &[DVec2]) {
        match self.smoothing {
            None => {
                for &point in &points[1..] {
                    builder.line_to(point);
                }
            }
            Some(smoothing) => {
                for window in padded(points).windows(4) {
                    let (previous, current, next, subsequent) =
                        (window[0], window[1], window[2], window[3]);
                    builder.cubic_to(
                        control_point(current, previous, next, smoothing, false),
                        control_point(next, current, subsequent, smoothing, true),
                        next,
                    );
                }
            }
        }
    }

    /// Walks `points` from the last to the first, assuming the builder is
    /// already at the last point.
    fn backward(&self, builder: &mut PathBuilder, points: &[DVec2]) {
        match self.smoothing {
            None => {
                for &point in points.iter().rev().skip(1) {
                    builder.line_to(point);
                }
            }
            Some(smoothing) => {
                for window in padded(points).windows(4).rev() {
                    let (subsequent, next, current, previous) =
                        (window[3], window[2], window[1], window[0]);
                    builder.cubic_to(
                        control_point(next, subsequent, current, smoothing, false),
                        control_point(current, next, previous, smoothing, true),
                        current,
                    );
                }
            }
        }
    }
}

fn complete(points: &[Point]) -> Vec<DVec2> {
    points.iter().filter_map(Point::to_vec2).collect()
}

/// Repeats the first and last point so every segment has both neighbours.
fn padded(points: &[DVec2]) -> Vec<DVec2> {
    let mut padded = Vec::with_capacity(points.len() + 2);
    padded.push(points[0]);
    padded.extend_from_slice(points);
    padded.push(points[points.len() - 1]);
    padded
}

fn flush_span(run: &mut Vec<DVec2>, spans: &mut Vec<Rect>) {
    if run.is_empty() {
        return;
    }
    run.sort_by(|a, b| a.x.total_cmp(&b.x));
    let (first, last) = (run[0], run[run.len() - 1]);
    spans.push(Rect::from_pos_size(first, last - first));
    run.clear();
}

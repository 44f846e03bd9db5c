//! Line, area and scatter geometry for one series.

use glam::DVec2;
use rcharts_core::alloc::IndexMap;

use super::axes::Axes;
use super::axis::Axis;
use super::calculator::{Sign, View};
use super::composition::Composition;
use super::options::AxisName;
use crate::error::{LayoutError, LayoutResult};
use crate::path::{Path, SeriesPath};
use crate::point::Point;
use crate::rect::Rect;
use crate::value::{Caster, Value};

/// Axes a series is drawn against. Unset entries resolve to the chart's
/// category and magnitude axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisSelection {
    /// Magnitude axis.
    pub axis: Option<(AxisName, usize)>,
    /// Category axis.
    pub inline_axis: Option<(AxisName, usize)>,
}

impl AxisSelection {
    pub fn with_axis(mut self, name: AxisName, index: usize) -> Self {
        self.axis = Some((name, index));
        self
    }

    pub fn with_inline_axis(mut self, name: AxisName, index: usize) -> Self {
        self.inline_axis = Some((name, index));
        self
    }

    /// Resolve to `(inline, block)` axes.
    pub fn resolve<'a>(&self, axes: &'a Axes) -> LayoutResult<(&'a Axis, &'a Axis)> {
        let block = axes.resolve(self.axis, Axes::continuous)?;
        let inline = axes.resolve(self.inline_axis, Axes::discrete)?;
        Ok((inline, block))
    }
}

/// Geometry of a line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    pub path: Path,
    pub mask_spans: Vec<Rect>,
    /// Whether categories run along the x axis.
    pub horizontal: bool,
}

impl LineGeometry {
    /// Serialized path data.
    pub fn path_data(&self) -> String {
        self.path.to_string()
    }

    /// Mask regions: each span stretched across the whole plot on the
    /// magnitude axis, so a gap in the data blanks the full cross-section.
    pub fn mask_regions(&self) -> Vec<Rect> {
        mask_regions(&self.mask_spans, self.horizontal)
    }
}

/// Geometry of one signed half of an area series.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaGeometry {
    pub sign: Sign,
    /// Closed outline. Empty when the half has nothing to fill.
    pub path: Path,
    /// Spans where every series is present.
    pub mask_spans: Vec<Rect>,
    /// Baseline position on the magnitude axis.
    pub block_position: f64,
    pub horizontal: bool,
}

impl AreaGeometry {
    pub fn path_data(&self) -> String {
        self.path.to_string()
    }

    pub fn mask_regions(&self) -> Vec<Rect> {
        mask_regions(&self.mask_spans, self.horizontal)
    }
}

/// Geometry of a scatter series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGeometry {
    /// Marker centres for the complete points.
    pub points: Vec<DVec2>,
    /// Marker symbol box, centred on the origin.
    pub marker_box: Rect,
    /// The two strokes of the cross marker, inside the marker box.
    pub cross: [(DVec2, DVec2); 2],
}

/// Lays out one named series of a composition.
#[derive(Debug, Clone)]
pub struct SeriesLayout<'a> {
    composition: &'a Composition,
    name: String,
    index: usize,
    inline: &'a Axis,
    block: &'a Axis,
    smoothing: Option<f64>,
}

impl<'a> SeriesLayout<'a> {
    /// Resolve the series and its axes.
    pub fn new(
        composition: &'a Composition,
        name: &str,
        selection: AxisSelection,
    ) -> LayoutResult<Self> {
        let index = composition
            .series_names()
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| LayoutError::UnknownSeries(name.to_string()))?;
        let (inline, block) = selection.resolve(composition.axes())?;

        Ok(Self {
            composition,
            name: name.to_string(),
            index,
            inline,
            block,
            smoothing: composition.config().smoothing,
        })
    }

    /// Override the configured smoothing factor.
    pub fn with_smoothing(mut self, smoothing: Option<f64>) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the series among all series.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Palette colour class for this series.
    pub fn color_class(&self) -> Option<&'a str> {
        self.composition.config().palette.color_class_for(self.index)
    }

    /// Palette legend symbol for this series.
    pub fn symbol(&self) -> Option<&'a str> {
        self.composition.config().palette.symbol_for(self.index)
    }

    /// Straight or smoothed line through the series.
    pub fn line(&self) -> LayoutResult<LineGeometry> {
        let points = self.current_points(None)?;
        let path = SeriesPath::new(points).with_smoothing(self.smoothing);

        Ok(LineGeometry {
            path: path.line_path(),
            mask_spans: path.mask_spans(),
            horizontal: self.inline.is_horizontal(),
        })
    }

    /// Positive and negative halves of an area series.
    pub fn area(&self) -> LayoutResult<[AreaGeometry; 2]> {
        Ok([
            self.area_half(Sign::Positive)?,
            self.area_half(Sign::Negative)?,
        ])
    }

    /// One signed half of an area series.
    ///
    /// On a stacked magnitude axis the half closes along the stack beneath
    /// it; otherwise it closes along the baseline. Missing values sit on the
    /// baseline.
    pub fn area_half(&self, sign: Sign) -> LayoutResult<AreaGeometry> {
        let block_position = self.block_position();
        let series = self.values(Some(sign), false)?;
        let previous = if self.block.is_stacked() {
            self.values(Some(sign), true)?
        } else {
            series.clone()
        };

        let path = if series.values().flatten().all(|v| *v == 0.0) {
            Path::new()
        } else {
            let points = self.baseline_points(&series, block_position);
            let previous_points = if previous == series {
                Vec::new()
            } else {
                self.baseline_points(&previous, block_position)
            };
            SeriesPath::new(points)
                .with_previous(previous_points)
                .with_origin(block_position)
                .with_smoothing(self.smoothing)
                .area_path()
        };

        let mask = self.positioned(&self.composition.sum_complete());
        let mask_spans = SeriesPath::new(mask).mask_spans();

        tracing::trace!(series = %self.name, ?sign, commands = path.len(), "laid out area half");
        Ok(AreaGeometry {
            sign,
            path,
            mask_spans,
            block_position,
            horizontal: self.inline.is_horizontal(),
        })
    }

    /// Marker positions for the complete points.
    pub fn scatter(&self) -> LayoutResult<ScatterGeometry> {
        let marker = self.composition.config().marker;
        let total = marker.total_size();
        let points = self
            .current_points(None)?
            .iter()
            .filter_map(Point::to_vec2)
            .collect();

        Ok(ScatterGeometry {
            points,
            marker_box: Rect::new(-total / 2.0, -total / 2.0, total, total),
            cross: [
                (
                    DVec2::new(marker.margin, marker.margin),
                    DVec2::new(marker.size, marker.size),
                ),
                (
                    DVec2::new(marker.size, marker.margin),
                    DVec2::new(marker.margin, marker.size),
                ),
            ],
        })
    }

    /// Position of the baseline: zero, or the nearest domain edge when zero
    /// lies outside the domain.
    pub fn block_position(&self) -> f64 {
        let minimum = Caster::seconds(self.block.adjusted_minimum()).unwrap_or(0.0);
        self.block.position_of(minimum.max(0.0)).clamp(0.0, 100.0)
    }

    fn view(&self, sign: Option<Sign>, exclude_current: bool) -> View<'a> {
        let view = self.composition.signed(sign);
        if self.block.is_stacked() {
            view.stacked(exclude_current)
        } else {
            view
        }
    }

    fn values(
        &self,
        sign: Option<Sign>,
        exclude_current: bool,
    ) -> LayoutResult<IndexMap<Value, Option<f64>>> {
        self.view(sign, exclude_current).series(&self.name)
    }

    fn current_points(&self, sign: Option<Sign>) -> LayoutResult<Vec<Point>> {
        Ok(self.positioned(&self.values(sign, false)?))
    }

    /// Category position and flipped magnitude position; missing values
    /// stay missing.
    fn positioned(&self, values: &IndexMap<Value, Option<f64>>) -> Vec<Point> {
        values
            .iter()
            .map(|(key, value)| {
                Point::new(
                    self.inline.position_for(key),
                    value.map(|v| 100.0 - self.block.position_of(v)),
                )
            })
            .collect()
    }

    /// Like [`Self::positioned`], with missing values on the baseline.
    fn baseline_points(
        &self,
        values: &IndexMap<Value, Option<f64>>,
        block_position: f64,
    ) -> Vec<Point> {
        values
            .iter()
            .map(|(key, value)| {
                let position = value.map_or(block_position, |v| self.block.position_of(v));
                Point::new(self.inline.position_for(key), Some(100.0 - position))
            })
            .collect()
    }
}

fn mask_regions(spans: &[Rect], horizontal: bool) -> Vec<Rect> {
    spans
        .iter()
        .map(|span| {
            if horizontal {
                Rect::new(span.x, -50.0, span.width, 200.0)
            } else {
                Rect::new(-50.0, span.y, 200.0, span.height)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::data::{Entry, Graphable};
    use crate::chart::options::{AxisOptions, Options};
    use crate::path::PathCommand;
    use rcharts_core::LayoutConfig;

    fn two_series() -> Graphable {
        [
            ("a", Some(1.0), Some(2.0)),
            ("b", Some(3.0), None),
            ("c", Some(-2.0), Some(4.0)),
        ]
        .into_iter()
        .map(|(k, one, two)| {
            (
                Value::from(k),
                Entry::series([("one", one), ("two", two)]),
            )
        })
        .collect()
    }

    fn compose(options: Options) -> Composition {
        Composition::new(two_series(), &options, LayoutConfig::default())
    }

    #[test]
    fn test_line_geometry() {
        let composition = compose(Options::new());
        let layout = SeriesLayout::new(&composition, "one", AxisSelection::default()).unwrap();
        let line = layout.line().unwrap();

        assert!(line.horizontal);
        assert_eq!(line.path.len(), 3);
        assert!(line.path_data().starts_with("M 16.666"));
        assert_eq!(line.mask_spans.len(), 1);
        assert_eq!(layout.color_class(), Some("blue"));
    }

    #[test]
    fn test_line_mask_has_gap() {
        let composition = compose(Options::new());
        let line = SeriesLayout::new(&composition, "two", AxisSelection::default())
            .unwrap()
            .line()
            .unwrap();

        assert_eq!(line.mask_spans.len(), 2);
        assert_eq!(line.mask_regions()[0].y, -50.0);
        assert_eq!(line.mask_regions()[0].height, 200.0);
    }

    #[test]
    fn test_unknown_series_and_axis() {
        let composition = compose(Options::new());

        assert!(matches!(
            SeriesLayout::new(&composition, "nope", AxisSelection::default()),
            Err(LayoutError::UnknownSeries(_))
        ));
        assert!(matches!(
            SeriesLayout::new(
                &composition,
                "one",
                AxisSelection::default().with_axis(AxisName::Y, 4)
            ),
            Err(LayoutError::UnknownAxis { .. })
        ));
    }

    #[test]
    fn test_unstacked_area_drops_to_baseline() {
        let composition = compose(Options::new());
        let layout = SeriesLayout::new(&composition, "two", AxisSelection::default()).unwrap();
        let [positive, negative] = layout.area().unwrap();

        assert!(negative.path.is_empty());
        let commands = positive.path.commands();
        let baseline = 100.0 - positive.block_position;
        match commands.last() {
            Some(PathCommand::LineTo(to)) => assert_eq!(to.y, baseline),
            other => panic!("expected a drop to the baseline, got {other:?}"),
        }
        assert_eq!(commands.len(), 5);
    }

    #[test]
    fn test_stacked_area_closes_along_previous_series() {
        let options = Options::new().with(AxisName::Y, AxisOptions::new().with_stacked(true));
        let composition = compose(options);
        let layout = SeriesLayout::new(&composition, "two", AxisSelection::default()).unwrap();
        let positive = layout.area_half(Sign::Positive).unwrap();

        // forward: M + L + 2 L, drop, then 3 points back along "one"
        assert_eq!(positive.path.len(), 8);
        assert_eq!(positive.mask_spans.len(), 2);
    }

    #[test]
    fn test_block_position_sits_on_zero() {
        let composition = compose(Options::new());
        let layout = SeriesLayout::new(&composition, "one", AxisSelection::default()).unwrap();
        let block = composition.axes().continuous().unwrap();

        assert!((layout.block_position() - block.position_of(0.0)).abs() < 1e-9);
    }

    #[test]
    fn test_negative_area_stays_inside_the_plot() {
        let graphable: Graphable = [("a", -10.0), ("b", -2.0)]
            .into_iter()
            .map(|(k, v)| (Value::from(k), Entry::series([("s", Some(v))])))
            .collect();
        let composition = Composition::new(graphable, &Options::new(), LayoutConfig::default());
        let block = composition.axes().continuous().unwrap();
        let layout = SeriesLayout::new(&composition, "s", AxisSelection::default()).unwrap();
        let [positive, negative] = layout.area().unwrap();

        // zero lies above a domain of -10..-2
        assert!(block.position_of(0.0) > 100.0);
        assert_eq!(negative.block_position, 100.0);
        assert!(positive.path.is_empty());
        assert!(!negative.path.is_empty());
        for command in negative.path.commands() {
            match command {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    assert!((0.0..=100.0).contains(&to.y), "{to:?} leaves the plot");
                }
                other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn test_scatter_markers() {
        let composition = compose(Options::new());
        let scatter = SeriesLayout::new(&composition, "two", AxisSelection::default())
            .unwrap()
            .scatter()
            .unwrap();

        assert_eq!(scatter.points.len(), 2);
        assert_eq!(scatter.marker_box, Rect::new(-6.0, -6.0, 12.0, 12.0));
        assert_eq!(scatter.cross[0].0, DVec2::new(2.0, 2.0));
    }
}

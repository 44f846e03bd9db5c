//! Grid rules: one line per axis tick.
//!
//! Full rules span the plot. Short rules are tick marks reaching into the
//! axis gutter, measured in absolute units rather than percent.

use std::fmt;

use super::axis::Axis;
use crate::rect::Percentage;
use crate::value::Value;

/// One end coordinate of a rule line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// Percent of the plot.
    Percent(Percentage),
    /// Absolute offset into the gutter.
    Absolute(f64),
}

impl Coordinate {
    pub const MIN: Coordinate = Coordinate::Percent(Percentage::MIN);
    pub const MAX: Coordinate = Coordinate::Percent(Percentage::MAX);

    pub fn percent(value: f64) -> Self {
        Coordinate::Percent(Percentage(value))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Percent(percentage) => write!(f, "{percentage}"),
            Coordinate::Absolute(value) => write!(f, "{value}"),
        }
    }
}

/// How rules are drawn for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RuleStyle {
    /// Draw tick marks into the gutter instead of full-width lines.
    pub short: bool,
    /// Gutter width; short rules cover half of it.
    pub gutter: f64,
}

impl RuleStyle {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn short(gutter: f64) -> Self {
        Self {
            short: true,
            gutter,
        }
    }
}

/// A positioned rule line.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: Coordinate,
    pub x2: Coordinate,
    pub y1: Coordinate,
    pub y2: Coordinate,
    /// Offset of the rule's container. Short rules of the first horizontal
    /// axis hang below the plot; those of secondary vertical axes sit to
    /// its right.
    pub container: (Option<Percentage>, Option<Percentage>),
    pub emphasis: bool,
    pub value: Value,
}

/// Rule geometry for a tick at `position` on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleLayout {
    pub horizontal_axis: bool,
    pub axis_index: usize,
    pub style: RuleStyle,
}

impl RuleLayout {
    pub fn new(horizontal_axis: bool, axis_index: usize, style: RuleStyle) -> Self {
        Self {
            horizontal_axis,
            axis_index,
            style,
        }
    }

    pub fn for_axis(axis: &Axis, style: RuleStyle) -> Self {
        Self::new(axis.is_horizontal(), axis.index(), style)
    }

    /// Lay out one rule.
    pub fn rule(&self, position: f64, value: Value, emphasis: bool) -> Rule {
        let across = Coordinate::percent(100.0 - position);
        let along = Coordinate::percent(position);

        let (x1, x2, y1, y2) = if self.horizontal_axis {
            (along, along, self.start(), self.finish())
        } else {
            (self.start(), self.finish(), across, across)
        };

        Rule {
            x1,
            x2,
            y1,
            y2,
            container: self.container(),
            emphasis,
            value,
        }
    }

    fn half_gutter(&self, primary_sign: f64) -> Coordinate {
        let sign = if self.axis_index == 0 {
            primary_sign
        } else {
            -primary_sign
        };
        Coordinate::Absolute(self.style.gutter / 2.0 * sign)
    }

    fn start(&self) -> Coordinate {
        if !self.style.short || self.horizontal_axis {
            return Coordinate::MIN;
        }
        self.half_gutter(-1.0)
    }

    fn finish(&self) -> Coordinate {
        if !self.style.short {
            return Coordinate::MAX;
        }
        if !self.horizontal_axis {
            return Coordinate::MIN;
        }
        self.half_gutter(1.0)
    }

    fn container(&self) -> (Option<Percentage>, Option<Percentage>) {
        if !self.style.short {
            return (None, None);
        }
        let x = (!self.horizontal_axis && self.axis_index > 0).then_some(Percentage::MAX);
        let y = (self.horizontal_axis && self.axis_index == 0).then_some(Percentage::MAX);
        (x, y)
    }
}

/// One rule per tick of `axis`, emphasised where `emphasis` holds.
pub fn axis_rules(axis: &Axis, style: RuleStyle, emphasis: impl Fn(&Value) -> bool) -> Vec<Rule> {
    let layout = RuleLayout::for_axis(axis, style);
    axis.ticks()
        .iter()
        .map(|tick| layout.rule(tick.position, tick.value.clone(), emphasis(&tick.value)))
        .collect()
}

//! Bar geometry for one category.
//!
//! A category gets a band centred on its tick, covering
//! `100 / categories x bar_spacing_factor` percent of the category axis.
//! Inside the band each series gets a segment; stacked axes pile segments of
//! the same sign on top of each other.

use super::axis::Axis;
use super::composition::Composition;
use super::series::AxisSelection;
use crate::error::LayoutResult;
use crate::rect::Rect;

/// One bar.
///
/// The rect is relative to the category band, in percent of the band on the
/// category axis and of the plot on the magnitude axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub series: String,
    /// Index of the series within the category, for palette lookup.
    pub series_index: usize,
    pub value: Option<f64>,
    pub rect: Rect,
    pub color_class: Option<String>,
}

/// A category band with its bars.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBars {
    pub index: usize,
    /// The band, in percent of the plot.
    pub band: Rect,
    pub segments: Vec<BarSegment>,
}

/// Lay out the bars of the category at `index`.
///
/// `names` restricts the bars to these series; empty means all series of the
/// category.
pub fn category_bars(
    composition: &Composition,
    index: usize,
    names: &[&str],
    selection: AxisSelection,
) -> LayoutResult<CategoryBars> {
    let (inline, block) = selection.resolve(composition.axes())?;
    let config = composition.config();
    let categories = composition.data().len().max(1);

    let band = band_rect(
        inline.position_at(index).unwrap_or(0.0),
        (100.0 / categories as f64) * config.bar_spacing_factor,
        inline.is_horizontal(),
    );

    let Some((_, entry)) = composition.category(index) else {
        return Ok(CategoryBars {
            index,
            band,
            segments: Vec::new(),
        });
    };

    let all_names = entry.names();
    let selected: Vec<(&str, Option<f64>)> = all_names
        .iter()
        .filter(|name| names.is_empty() || names.contains(name))
        .map(|name| (*name, entry.get(name)))
        .collect();

    let inline_size = 100.0 / if block.is_stacked() { 1.0 } else { selected.len().max(1) as f64 };

    let segments = selected
        .iter()
        .enumerate()
        .map(|(position, (name, value))| {
            let series_index = all_names.iter().position(|n| n == name).unwrap_or(position);
            let inline_index = if block.is_stacked() { 0 } else { position };
            let magnitude = value.unwrap_or(0.0);
            let base = stacked_base(block, &selected, position);

            BarSegment {
                series: name.to_string(),
                series_index,
                value: *value,
                rect: segment_rect(block, inline_size, inline_index, base, magnitude),
                color_class: config
                    .palette
                    .color_class_for(series_index)
                    .map(String::from),
            }
        })
        .collect();

    Ok(CategoryBars {
        index,
        band,
        segments,
    })
}

/// Lay out every category.
pub fn all_category_bars(
    composition: &Composition,
    names: &[&str],
    selection: AxisSelection,
) -> LayoutResult<Vec<CategoryBars>> {
    (0..composition.data().len())
        .map(|index| category_bars(composition, index, names, selection))
        .collect()
}

fn band_rect(inline_position: f64, inline_size: f64, horizontal: bool) -> Rect {
    if horizontal {
        Rect::new(inline_position - inline_size / 2.0, 0.0, inline_size, 100.0)
    } else {
        Rect::new(0.0, 100.0 - (inline_position + inline_size / 2.0), 100.0, inline_size)
    }
}

/// Sum of the preceding same-signed values on a stacked axis.
fn stacked_base(block: &Axis, selected: &[(&str, Option<f64>)], position: usize) -> f64 {
    if !block.is_stacked() || position == 0 {
        return 0.0;
    }
    let positive = selected[position].1.unwrap_or(0.0) > 0.0;
    selected[..position]
        .iter()
        .filter_map(|(_, value)| *value)
        .filter(|v| if positive { *v > 0.0 } else { *v < 0.0 })
        .sum()
}

fn segment_rect(
    block: &Axis,
    inline_size: f64,
    inline_index: usize,
    base: f64,
    magnitude: f64,
) -> Rect {
    let horizontal = block.is_horizontal();
    let block_size = block.length_between(0.0, magnitude);
    // the edge nearest the origin of the block axis
    let offset = if (horizontal && magnitude > 0.0) || (!horizontal && magnitude < 0.0) {
        0.0
    } else {
        magnitude
    };
    let block_position = block.position_of(base + offset);
    let inline_position = inline_size * inline_index as f64;

    if horizontal {
        Rect::new(block_position, inline_position, block_size, inline_size)
    } else {
        Rect::new(inline_position, 100.0 - block_position, inline_size, block_size)
    }
}

/// Layout configuration for one chart.
///
/// Passed explicitly to whichever component needs it; there is no global
/// default table to mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Number of intervals a continuous axis aims for.
    pub target_tick_count: usize,
    /// Share of a category slot covered by its bars.
    pub bar_spacing_factor: f64,
    /// Smoothing factor for line and area paths (`None` = straight lines).
    pub smoothing: Option<f64>,
    /// Scatter marker geometry.
    pub marker: MarkerConfig,
    /// Series colour classes and symbols.
    pub palette: SeriesPalette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            target_tick_count: 10,
            bar_spacing_factor: 0.6,
            smoothing: None,
            marker: MarkerConfig::default(),
            palette: SeriesPalette::default(),
        }
    }
}

impl LayoutConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target tick count.
    pub fn with_target_tick_count(mut self, count: usize) -> Self {
        self.target_tick_count = count.max(1);
        self
    }

    /// Set the bar spacing factor.
    pub fn with_bar_spacing_factor(mut self, factor: f64) -> Self {
        self.bar_spacing_factor = factor;
        self
    }

    /// Enable curve smoothing.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    /// Set the scatter marker geometry.
    pub fn with_marker(mut self, marker: MarkerConfig) -> Self {
        self.marker = marker;
        self
    }

    /// Set the series palette.
    pub fn with_palette(mut self, palette: SeriesPalette) -> Self {
        self.palette = palette;
        self
    }
}

/// Scatter marker geometry, in percent units of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerConfig {
    pub size: f64,
    pub margin: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            size: 10.0,
            margin: 2.0,
        }
    }
}

impl MarkerConfig {
    /// Full edge length of the marker box.
    pub fn total_size(&self) -> f64 {
        self.size + self.margin
    }
}

/// Colour classes and legend symbols assigned to series by index.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPalette {
    pub color_classes: Vec<String>,
    pub symbols: Vec<String>,
}

impl Default for SeriesPalette {
    fn default() -> Self {
        Self {
            color_classes: ["blue", "red", "green", "orange", "purple"]
                .into_iter()
                .map(String::from)
                .collect(),
            symbols: ["●", "■", "◆", "▲", "▼"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SeriesPalette {
    /// Create a palette from explicit colour classes and symbols.
    pub fn new(
        color_classes: impl IntoIterator<Item = impl Into<String>>,
        symbols: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            color_classes: color_classes.into_iter().map(Into::into).collect(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Colour class for the series at `index`, cycling through the palette.
    pub fn color_class_for(&self, index: usize) -> Option<&str> {
        cycle(&self.color_classes, index)
    }

    /// Symbol for the series at `index`, cycling through the palette.
    pub fn symbol_for(&self, index: usize) -> Option<&str> {
        cycle(&self.symbols, index)
    }
}

fn cycle(items: &[String], index: usize) -> Option<&str> {
    if items.is_empty() {
        return None;
    }
    items.get(index % items.len()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let palette = SeriesPalette::default();

        assert_eq!(palette.color_class_for(1), Some("red"));
        assert_eq!(palette.color_class_for(6), Some("red"));
        assert_eq!(palette.symbol_for(1), Some("■"));
    }

    #[test]
    fn test_empty_palette() {
        let palette = SeriesPalette::new(Vec::<String>::new(), Vec::<String>::new());

        assert_eq!(palette.color_class_for(0), None);
    }

    #[test]
    fn test_target_tick_count_never_zero() {
        let config = LayoutConfig::new().with_target_tick_count(0);

        assert_eq!(config.target_tick_count, 1);
    }
}

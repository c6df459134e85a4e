// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::category::Category;

use plotters::style::RGBColor;

macro_rules! hexcolour {
    ($colour:expr) => {
        Rgb(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

pub const BINS: usize = 100;
pub const ALPHA: f64 = 0.7;
pub const X_LABEL: &str = "Time (μs)";
pub const Y_LABEL: &str = "Frequency";

// 18x5 inches at 100 dpi
pub const WIDTH: u32 = 1800;
pub const HEIGHT: u32 = 500;

const NAMED: &[(&str, Rgb)] = &[
    ("blue", hexcolour!(0x0000FF)),
    ("green", hexcolour!(0x008000)),
    ("red", hexcolour!(0xFF0000)),
    ("black", hexcolour!(0x000000)),
    ("orange", hexcolour!(0xFFA500)),
    ("purple", hexcolour!(0x800080)),
];

/// A 24-bit colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for RGBColor {
    fn from(rgb: Rgb) -> Self {
        RGBColor(rgb.0, rgb.1, rgb.2)
    }
}

/// Accepts `#RRGGBB` or one of a few colour names.
pub fn parse_colour(value: &str) -> Option<Rgb> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(|v| hexcolour!(v));
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, colour)| *colour)
}

fn named(name: &str) -> Rgb {
    parse_colour(name).unwrap_or(Rgb(0, 0, 0))
}

/// Display settings for one histogram panel.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramConfig {
    bins: usize,
    colour: Rgb,
    alpha: f64,
    title: String,
    x_label: String,
    y_label: String,
}

impl HistogramConfig {
    pub fn new(colour: Rgb, title: impl AsRef<str>) -> Self {
        Self {
            bins: BINS,
            colour,
            alpha: ALPHA,
            title: title.as_ref().to_owned(),
            x_label: X_LABEL.to_owned(),
            y_label: Y_LABEL.to_owned(),
        }
    }

    /// The stock panel for a category.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Market => Self::new(named("blue"), "Market Orders (μs)"),
            Category::Modify => Self::new(named("green"), "Modify Orders (μs)"),
            Category::Delete => Self::new(named("red"), "Delete Orders (μs)"),
        }
    }

    pub fn set_bins(&mut self, bins: usize) {
        self.bins = bins;
    }

    pub fn set_colour(&mut self, colour: Rgb) {
        self.colour = colour;
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    pub fn set_title(&mut self, title: impl AsRef<str>) {
        self.title = title.as_ref().to_owned();
    }

    pub fn set_x_label(&mut self, label: impl AsRef<str>) {
        self.x_label = label.as_ref().to_owned();
    }

    pub fn set_y_label(&mut self, label: impl AsRef<str>) {
        self.y_label = label.as_ref().to_owned();
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn colour(&self) -> Rgb {
        self.colour
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }
}

/// Canvas size of the whole figure, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colours() {
        assert_eq!(parse_colour("#0000ff"), Some(Rgb(0, 0, 255)));
        assert_eq!(parse_colour("#12AB34"), Some(Rgb(0x12, 0xAB, 0x34)));
        assert_eq!(parse_colour("Green"), Some(Rgb(0, 128, 0)));
        assert_eq!(parse_colour("#fff"), None);
        assert_eq!(parse_colour("#gggggg"), None);
        assert_eq!(parse_colour("teal"), None);
    }

    #[test]
    fn stock_panels() {
        let market = HistogramConfig::for_category(Category::Market);
        assert_eq!(market.bins(), 100);
        assert_eq!(market.colour(), Rgb(0, 0, 255));
        assert_eq!(market.alpha(), 0.7);
        assert_eq!(market.title(), "Market Orders (μs)");
        assert_eq!(market.x_label(), "Time (μs)");
        assert_eq!(market.y_label(), "Frequency");

        let modify = HistogramConfig::for_category(Category::Modify);
        assert_eq!(modify.colour(), Rgb(0, 128, 0));
        assert_eq!(modify.title(), "Modify Orders (μs)");

        let delete = HistogramConfig::for_category(Category::Delete);
        assert_eq!(delete.colour(), Rgb(255, 0, 0));
        assert_eq!(delete.title(), "Delete Orders (μs)");
    }

    #[test]
    fn overrides() {
        let mut config = HistogramConfig::for_category(Category::Market);
        config.set_bins(10);
        config.set_alpha(0.5);
        config.set_title("x");
        config.set_colour(Rgb(1, 2, 3));
        assert_eq!(config.bins(), 10);
        assert_eq!(config.alpha(), 0.5);
        assert_eq!(config.title(), "x");
        assert_eq!(config.colour(), Rgb(1, 2, 3));
        assert_eq!(config.x_label(), "Time (μs)");
    }
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::category::Category;
use crate::error::{Error, Result};
use crate::render::{self, parse_colour, FigureSize, HistogramConfig};

use serde_derive::*;
use std::path::{Path, PathBuf};

fn default_bins() -> usize {
    render::BINS
}

fn default_alpha() -> f64 {
    render::ALPHA
}

fn default_width() -> u32 {
    render::WIDTH
}

fn default_height() -> u32 {
    render::HEIGHT
}

fn default_x_label() -> String {
    render::X_LABEL.to_owned()
}

fn default_y_label() -> String {
    render::Y_LABEL.to_owned()
}

/// Display configuration. Every field has a default, so an absent file and an
/// empty file describe the same figure.
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    market: Panel,
    #[serde(default)]
    modify: Panel,
    #[serde(default)]
    delete: Panel,
    #[serde(skip)]
    directory: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    /// Parse and validate TOML `content`. `path` is only used in errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate().map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let general = &self.general;
        if general.bins == 0 {
            return Err("bins must be at least 1".to_owned());
        }
        if !(0.0..=1.0).contains(&general.alpha) {
            return Err(format!("alpha must be within 0.0 and 1.0: {}", general.alpha));
        }
        if general.width == 0 || general.height == 0 {
            return Err("width and height must be non-zero".to_owned());
        }
        for panel in &[&self.market, &self.modify, &self.delete] {
            if let Some(colour) = &panel.color {
                if parse_colour(colour).is_none() {
                    return Err(format!("unknown colour: {}", colour));
                }
            }
        }
        Ok(())
    }

    /// Directory the input files are read from, the working directory unless
    /// overridden.
    pub fn directory(&self) -> &Path {
        self.directory.as_deref().unwrap_or_else(|| Path::new("."))
    }

    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = Some(directory.into());
    }

    pub fn figure_size(&self) -> FigureSize {
        FigureSize {
            width: self.general.width,
            height: self.general.height,
        }
    }

    fn panel(&self, category: Category) -> &Panel {
        match category {
            Category::Market => &self.market,
            Category::Modify => &self.modify,
            Category::Delete => &self.delete,
        }
    }

    /// The resolved display settings for the category's panel.
    pub fn histogram(&self, category: Category) -> HistogramConfig {
        let mut config = HistogramConfig::for_category(category);
        config.set_bins(self.general.bins);
        config.set_alpha(self.general.alpha);
        config.set_x_label(&self.general.x_label);
        config.set_y_label(&self.general.y_label);

        let panel = self.panel(category);
        if let Some(colour) = panel.color.as_deref().and_then(parse_colour) {
            config.set_colour(colour);
        }
        if let Some(title) = &panel.title {
            config.set_title(title);
        }
        config
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "default_bins")]
    bins: usize,
    #[serde(default = "default_alpha")]
    alpha: f64,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default = "default_x_label")]
    x_label: String,
    #[serde(default = "default_y_label")]
    y_label: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            alpha: default_alpha(),
            width: default_width(),
            height: default_height(),
            x_label: default_x_label(),
            y_label: default_y_label(),
        }
    }
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Panel {
    color: Option<String>,
    title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgb;
    use std::io::Write;

    fn parse(content: &str) -> Result<Config> {
        Config::parse(Path::new("test.toml"), content)
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.directory(), Path::new("."));
        assert_eq!(config.figure_size(), FigureSize::default());
        for category in &[Category::Market, Category::Modify, Category::Delete] {
            assert_eq!(
                config.histogram(*category),
                HistogramConfig::for_category(*category)
            );
        }
    }

    #[test]
    fn empty_file_matches_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.histogram(Category::Market).bins(), 100);
        assert_eq!(config.histogram(Category::Market).alpha(), 0.7);
        assert_eq!(
            config.histogram(Category::Modify),
            HistogramConfig::for_category(Category::Modify)
        );
    }

    #[test]
    fn overrides() {
        let config = parse(
            r##"
            [general]
            bins = 50
            alpha = 0.5
            width = 1200

            [delete]
            color = "#112233"
            title = "Cancels"
            "##,
        )
        .unwrap();

        assert_eq!(config.figure_size().width, 1200);
        assert_eq!(config.figure_size().height, 500);

        let delete = config.histogram(Category::Delete);
        assert_eq!(delete.bins(), 50);
        assert_eq!(delete.alpha(), 0.5);
        assert_eq!(delete.colour(), Rgb(0x11, 0x22, 0x33));
        assert_eq!(delete.title(), "Cancels");

        let market = config.histogram(Category::Market);
        assert_eq!(market.bins(), 50);
        assert_eq!(market.title(), "Market Orders (μs)");
    }

    #[test]
    fn rejects_invalid() {
        assert!(matches!(parse("[general]\nbins = 0"), Err(Error::Config { .. })));
        assert!(matches!(parse("[general]\nalpha = 1.5"), Err(Error::Config { .. })));
        assert!(matches!(parse("[general]\nheight = 0"), Err(Error::Config { .. })));
        assert!(matches!(parse("[market]\ncolor = \"teal\""), Err(Error::Config { .. })));
        assert!(matches!(parse("[unknown]\nx = 1"), Err(Error::Config { .. })));
        assert!(matches!(parse("bins = "), Err(Error::Config { .. })));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[modify]\ncolor = \"purple\"\n").unwrap();
        file.flush().unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.histogram(Category::Modify).colour(), Rgb(0x80, 0, 0x80));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from_file(dir.path().join("missing.toml")),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn directory_override() {
        let mut config = Config::default();
        config.set_directory("/tmp/latency");
        assert_eq!(config.directory(), Path::new("/tmp/latency"));
    }
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{Error, Result};
use crate::histogram::Histogram;
use crate::render::config::{FigureSize, HistogramConfig};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

const FONT: &str = "sans-serif";
const CAPTION_SIZE: u32 = 22;
const LABEL_SIZE: u32 = 16;

fn render_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// One histogram panel: a dataset binned against its own range, plus the
/// style it is drawn with.
pub struct Panel {
    config: HistogramConfig,
    histogram: Histogram,
}

impl Panel {
    pub fn new(values: &[f64], config: HistogramConfig) -> Self {
        let histogram = Histogram::new(values, config.bins());
        Self { config, histogram }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Number of bars which will actually be drawn.
    pub fn bars(&self) -> usize {
        self.histogram.counts().iter().filter(|c| **c > 0).count()
    }

    fn draw(&self, area: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
        let histogram = &self.histogram;
        let y_max = histogram.highest_count().max(1);

        let mut chart = ChartBuilder::on(area)
            .caption(self.config.title(), (FONT, CAPTION_SIZE))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(histogram.span(), 0_u64..y_max)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(self.config.x_label())
            .y_desc(self.config.y_label())
            .label_style((FONT, LABEL_SIZE))
            .axis_desc_style((FONT, LABEL_SIZE))
            .draw()
            .map_err(render_error)?;

        let colour: RGBColor = self.config.colour().into();
        let alpha = self.config.alpha();
        chart
            .draw_series(histogram.iter().filter(|bin| bin.count() > 0).map(|bin| {
                Rectangle::new(
                    [(bin.low(), 0), (bin.high(), bin.count())],
                    colour.mix(alpha).filled(),
                )
            }))
            .map_err(render_error)?;

        Ok(())
    }
}

/// A rendered figure as packed 8-bit RGB pixels, row major.
#[derive(Clone, Debug)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The pixel at `(x, y)` as `(r, g, b)`, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 3 * (y as usize * self.width as usize + x as usize);
        match self.pixels.get(i..i + 3)? {
            [r, g, b] => Some((*r, *g, *b)),
            _ => None,
        }
    }

    /// Pixels packed as `0x00RRGGBB`, the layout expected by window buffers.
    pub fn to_rgb32(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(3)
            .map(|p| (p[0] as u32) << 16 | (p[1] as u32) << 8 | p[2] as u32)
            .collect()
    }
}

/// A single canvas holding one panel per dataset, laid out left to right in
/// the order they were added.
pub struct Figure {
    size: FigureSize,
    panels: Vec<Panel>,
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Self {
            size,
            panels: Vec::new(),
        }
    }

    pub fn add_panel(&mut self, values: &[f64], config: HistogramConfig) {
        self.panels.push(Panel::new(values, config));
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn draw(&self) -> Result<Frame> {
        let font: &'static [u8] = dejavu::sans_mono::regular();
        register_font(FONT, FontStyle::Normal, font)
            .map_err(|_| Error::Render("failed to load embedded font".to_owned()))?;

        let FigureSize { width, height } = self.size;
        let mut pixels = vec![0_u8; 3 * width as usize * height as usize];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let areas = root.split_evenly((1, self.panels.len().max(1)));
            for (area, panel) in areas.iter().zip(self.panels.iter()) {
                panel.draw(area)?;
            }

            root.present().map_err(render_error)?;
        }

        Ok(Frame {
            width,
            height,
            pixels,
        })
    }
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Draws the side-by-side histogram figure and hands it to a viewer.

mod config;
mod figure;
mod viewer;

pub use config::*;
pub use figure::{Figure, Frame, Panel};
pub use viewer::{Viewer, Window};

use crate::error::Result;
use crate::Stage;

/// Build one panel per `(values, config)` pair, draw the figure and block in
/// the viewer until it is dismissed.
pub fn render<'a, I>(panels: I, size: FigureSize, viewer: &mut dyn Viewer) -> Result<()>
where
    I: IntoIterator<Item = (&'a [f64], HistogramConfig)>,
{
    let mut figure = Figure::new(size);
    for (values, config) in panels {
        debug!(
            "panel {:?}: {} values in {} bins",
            config.title(),
            values.len(),
            config.bins()
        );
        figure.add_panel(values, config);
    }

    let frame = figure.draw()?;

    debug!("stage: {:?}", Stage::AwaitClose);
    viewer.show(&frame)
}

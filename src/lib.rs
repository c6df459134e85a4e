// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

pub mod logger;

mod category;
mod config;
mod dataset;
mod error;
mod histogram;
mod options;
mod reader;
pub mod render;

pub use crate::category::Category;
pub use crate::config::Config;
pub use crate::dataset::{ns_to_us, Dataset};
pub use crate::error::{Error, Result};
pub use crate::histogram::{Bin, Histogram};
pub use crate::options::Options;
pub use crate::reader::{parse_line, read_times};

use crate::render::Viewer;
use strum::IntoEnumIterator;

/// Stages of a run, in order. Any stage may move to `Failed`; a failure
/// while reading ends the run before anything is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    ReadFiles,
    ConvertUnits,
    Render,
    AwaitClose,
    Exit,
    Failed,
}

/// Read all three category files in fixed order, failing on the first
/// missing file or malformed line.
pub fn load(config: &Config) -> Result<Vec<Dataset>> {
    let mut datasets = Vec::new();
    for category in Category::iter() {
        let dataset = Dataset::load(category, config.directory())?;
        info!("{}: {} samples", category, dataset.len());
        datasets.push(dataset);
    }
    Ok(datasets)
}

/// Drive a full run: read, convert to microseconds, draw, and block in the
/// viewer until it is closed.
pub fn run(config: &Config, viewer: &mut dyn Viewer) -> Result<()> {
    debug!("stage: {:?}", Stage::Init);
    match execute(config, viewer) {
        Ok(()) => {
            debug!("stage: {:?}", Stage::Exit);
            Ok(())
        }
        Err(e) => {
            debug!("stage: {:?} ({})", Stage::Failed, e);
            Err(e)
        }
    }
}

fn execute(config: &Config, viewer: &mut dyn Viewer) -> Result<()> {
    debug!("stage: {:?}", Stage::ReadFiles);
    let datasets = load(config)?;

    debug!("stage: {:?}", Stage::ConvertUnits);
    let micros: Vec<(Category, Vec<f64>)> = datasets
        .iter()
        .map(|dataset| (dataset.category(), dataset.to_micros()))
        .collect();

    debug!("stage: {:?}", Stage::Render);
    let panels = micros
        .iter()
        .map(|(category, values)| (&values[..], config.histogram(*category)));
    render::render(panels, config.figure_size(), viewer)
}

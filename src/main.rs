// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

#[macro_use]
extern crate latency_histogram;

use latency_histogram::logger::Logger;
use latency_histogram::render::Window;
use latency_histogram::{Config, Options};

fn main() {
    let options = Options::parse();

    Logger::new()
        .label("latency-histogram")
        .level(Logger::level_for_verbosity(options.verbosity))
        .init()
        .expect("failed to initialize logger");

    let mut config = match options.config {
        Some(ref path) => match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => fatal!("{}", e),
        },
        None => Config::default(),
    };
    if let Some(directory) = options.directory {
        config.set_directory(directory);
    }

    if let Err(e) = latency_histogram::run(&config, &mut Window::default()) {
        fatal!("{}", e);
    }
}

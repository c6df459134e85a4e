// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{App, Arg, ArgMatches};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Command line options. Every option is optional; with none given the three
/// fixed files are read from the working directory and drawn with the stock
/// styles.
#[derive(Debug, Default, PartialEq)]
pub struct Options {
    pub config: Option<String>,
    pub directory: Option<String>,
    pub verbosity: u64,
}

pub fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .author("Brian Martin <bmartin@twitter.com>")
        .about("Side-by-side histograms of market, modify and delete order latencies")
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML display configuration")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("directory")
                .long("directory")
                .value_name("DIR")
                .help("directory holding the *_times.txt files")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("verbosity (stacking)")
                .multiple(true),
        )
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches.value_of("config").map(str::to_owned),
            directory: matches.value_of("directory").map(str::to_owned),
            verbosity: matches.occurrences_of("verbose"),
        }
    }

    pub fn parse() -> Self {
        Self::from_matches(&app().get_matches())
    }
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure which can abort a run. All of them are fatal: nothing is
/// retried and nothing is drawn once one of these has been returned.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        source: std::io::Error,
    },
    #[error("{}:{line}: invalid latency sample {content:?}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        source: ParseIntError,
    },
    #[error("bad config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
    #[error("failed to draw figure: {0}")]
    Render(String),
    #[error("viewer failed: {0}")]
    Viewer(String),
}

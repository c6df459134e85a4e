// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::category::Category;
use crate::error::Result;
use crate::reader::read_times;

use std::path::Path;

const NANOS_PER_MICRO: f64 = 1000.0;

/// Convert a nanosecond sample to fractional microseconds.
pub fn ns_to_us(ns: u64) -> f64 {
    ns as f64 / NANOS_PER_MICRO
}

/// The samples read for a single category, in nanoseconds and in file order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    category: Category,
    samples: Vec<u64>,
}

impl Dataset {
    pub fn new(category: Category, samples: Vec<u64>) -> Self {
        Self { category, samples }
    }

    /// Load the category's fixed file from `directory`.
    pub fn load(category: Category, directory: &Path) -> Result<Self> {
        let samples = read_times(directory.join(category.filename()))?;
        Ok(Self::new(category, samples))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// A new sequence with every sample converted to microseconds.
    pub fn to_micros(&self) -> Vec<f64> {
        self.samples.iter().copied().map(ns_to_us).collect()
    }
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// equal-width histogram over the observed range of a single dataset

use std::ops::Range;

/// A single bin: `[low, high)`, or `[low, high]` for the final bin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bin {
    low: f64,
    high: f64,
    count: u64,
}

impl Bin {
    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Frequency counts over `bins` equal-width intervals which span the
/// minimum and maximum of the values it was built from. Bin edges are never
/// shared between histograms.
#[derive(Clone, Debug)]
pub struct Histogram {
    low: f64,
    high: f64,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bin `values` into `bins` intervals. An empty input spans `[0, 1]` and
    /// a single distinct value `v` spans `[v - 0.5, v + 0.5]`.
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero.
    pub fn new(values: &[f64], bins: usize) -> Self {
        assert!(bins > 0, "histogram requires at least one bin");

        let (low, high) = range(values);
        let mut counts = vec![0; bins];
        let width = (high - low) / bins as f64;

        for value in values {
            let value = *value;
            let mut index = if value >= high {
                bins - 1
            } else {
                (((value - low) / width) as usize).min(bins - 1)
            };
            // the division can round across an edge, settle against the
            // edges themselves so each bin keeps its lower edge
            if index > 0 && value < edge(low, high, bins, index) {
                index -= 1;
            } else if index + 1 < bins && value >= edge(low, high, bins, index + 1) {
                index += 1;
            }
            counts[index] += 1;
        }

        Self { low, high, counts }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// The full span covered by the bins.
    pub fn span(&self) -> Range<f64> {
        self.low..self.high
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of values binned.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single bin count, zero when empty.
    pub fn highest_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lower edge of the bin at `index`; `edge(bins())` is the upper edge of
    /// the final bin.
    pub fn edge(&self, index: usize) -> f64 {
        edge(self.low, self.high, self.bins(), index)
    }

    pub fn iter(&self) -> impl Iterator<Item = Bin> + '_ {
        self.counts.iter().enumerate().map(move |(i, count)| Bin {
            low: self.edge(i),
            high: self.edge(i + 1),
            count: *count,
        })
    }
}

fn edge(low: f64, high: f64, bins: usize, index: usize) -> f64 {
    if index == 0 {
        low
    } else if index >= bins {
        high
    } else {
        (low * (bins - index) as f64 + high * index as f64) / bins as f64
    }
}

fn range(values: &[f64]) -> (f64, f64) {
    let mut iter = values.iter().copied();
    let first = match iter.next() {
        Some(v) => v,
        None => return (0.0, 1.0),
    };
    let (min, max) = iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar records and their angular offsets.

extern crate alloc;

use alloc::vec::Vec;

/// One bar of a polar bar chart, in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRecord {
    /// Angular position.
    pub p: f64,
    /// Angular width.
    pub w: f64,
    /// Radial base.
    pub b: f64,
    /// Radial length, measured from the base.
    pub s: f64,
}

impl BarRecord {
    /// Creates a bar record.
    pub fn new(p: f64, w: f64, b: f64, s: f64) -> Self {
        Self { p, w, b, s }
    }
}

/// Angular offset added to each bar's position.
#[derive(Clone, Debug, PartialEq)]
pub enum AngularOffset {
    /// The same offset for every bar.
    Shared(f64),
    /// One offset per bar, by index.
    ///
    /// Bars past the end of the list get a `NaN` offset, which blanks them.
    PerBar(Vec<f64>),
}

impl Default for AngularOffset {
    fn default() -> Self {
        Self::Shared(0.0)
    }
}

impl AngularOffset {
    /// Returns the offset for the bar at `index`.
    pub fn at(&self, index: usize) -> f64 {
        match self {
            Self::Shared(v) => *v,
            Self::PerBar(values) => values.get(index).copied().unwrap_or(f64::NAN),
        }
    }
}

impl From<f64> for AngularOffset {
    fn from(value: f64) -> Self {
        Self::Shared(value)
    }
}

impl From<Vec<f64>> for AngularOffset {
    fn from(values: Vec<f64>) -> Self {
        Self::PerBar(values)
    }
}

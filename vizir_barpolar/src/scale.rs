// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales for the radial axis.
//!
//! A radial axis maps data values to distances from the plot centre. Two distances are
//! exposed, matching the two capabilities the bar layout consumes:
//! - `c2p`: the distance in pixels, used for bar outlines, and
//! - `c2g`: the distance in linearized data units (log units for a log scale), measured from
//!   the start of the domain, used together with [`ScaleCartesian`] for label placement.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::{CartesianAxis, RadialAxis};

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Continuous log scale.
    Log(ScaleLogSpec),
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLogSpec> for ScaleSpec {
    fn from(value: ScaleLogSpec) -> Self {
        Self::Log(value)
    }
}

impl ScaleSpec {
    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleContinuous {
        match self {
            Self::Linear(s) => ScaleContinuous::Linear(s.instantiate(range)),
            Self::Log(s) => ScaleContinuous::Log(s.instantiate(range)),
        }
    }
}

/// A continuous scale instance.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }

    /// Maps a value into the space in which the scale is linear.
    ///
    /// This is the identity for linear scales and the logarithm for log scales.
    pub fn linearize(&self, x: f64) -> f64 {
        match self {
            Self::Linear(_) => x,
            Self::Log(s) => s.log_base(x),
        }
    }

    /// Returns tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(count),
        }
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_min(),
            Self::Log(s) => s.domain_min(),
        }
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_max(),
            Self::Log(s) => s.domain_max(),
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(&first), Some(&last)) if ticks.len() >= 2 => (first, last),
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range, respecting `nice`.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(DEFAULT_TICK_COUNT), range)
    }
}

/// Tick count used when resolving a nice domain without an explicit count.
const DEFAULT_TICK_COUNT: usize = 5;

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A log-scale mapping from a positive domain to a range.
///
/// Values outside the log domain (zero, negative, `NaN`) map to `NaN`, which the bar layout
/// treats as "not drawable".
#[derive(Clone, Copy, Debug)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

/// Specification for a log scale (domain + base, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLogSpec {
    /// Domain in data units (must be positive).
    pub domain: (f64, f64),
    /// Log base (default 10).
    pub base: f64,
}

impl ScaleLog {
    /// Creates a new log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NAN;
        }
        if self.base == 10.0 {
            // Exact at powers of ten, which keeps tick bounds stable.
            return x.log10();
        }
        x.ln() / self.base.ln()
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns powers of `base` that fall within the domain, capped by `count`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut min, mut max) = self.domain;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        if min <= 0.0 || !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }
        let min_e = self.log_base(min).ceil();
        let max_e = self.log_base(max).floor();
        let mut out = Vec::new();
        let mut e = min_e;
        while e <= max_e {
            out.push(self.base.powf(e));
            if count != 0 && out.len() >= count {
                break;
            }
            e += 1.0;
        }
        out
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl ScaleLogSpec {
    /// Creates a new log scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain, base: 10.0 }
    }

    /// Sets the log base.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLog {
        ScaleLog::new(self.domain, range).with_base(self.base)
    }
}

/// A radial axis of a polar plot with a given outer radius in pixels.
///
/// The start of the domain sits at the centre and the end of the domain at `radius`.
#[derive(Clone, Copy, Debug)]
pub struct RadialScale {
    scale: ScaleContinuous,
    radius: f64,
}

impl RadialScale {
    /// Creates a radial scale from a spec and the outer radius in pixels.
    pub fn new(spec: impl Into<ScaleSpec>, radius: f64) -> Self {
        Self {
            scale: spec.into().instantiate((0.0, radius)),
            radius,
        }
    }

    /// Returns the underlying continuous scale (data to pixel radius).
    pub fn scale(&self) -> ScaleContinuous {
        self.scale
    }

    /// Returns the outer radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Pixels per linearized data unit.
    pub fn pixels_per_unit(&self) -> f64 {
        let span = self.scale.linearize(self.scale.domain_max())
            - self.scale.linearize(self.scale.domain_min());
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        self.radius / span
    }

    /// Cartesian `(x, y)` axes matching this radial scale, for a plot centred at `center`.
    ///
    /// Feeding `c2g` distances through these axes lands on the same pixels as `c2p`.
    pub fn cartesian_axes(&self, center: Point) -> (ScaleCartesian, ScaleCartesian) {
        let k = self.pixels_per_unit();
        (
            ScaleCartesian::new(center.x, k),
            ScaleCartesian::new(center.y, -k),
        )
    }
}

impl RadialAxis for RadialScale {
    fn c2p(&self, v: f64) -> f64 {
        self.scale.map(v)
    }

    fn c2g(&self, v: f64) -> f64 {
        self.scale.linearize(v) - self.scale.linearize(self.scale.domain_min())
    }
}

/// An affine pixel axis: `origin + factor * v`.
///
/// A negative `factor` flips the axis, which is how the y axis grows upward on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleCartesian {
    /// Pixel position of the value `0`.
    pub origin: f64,
    /// Pixels per unit.
    pub factor: f64,
}

impl ScaleCartesian {
    /// Creates a new cartesian axis.
    pub fn new(origin: f64, factor: f64) -> Self {
        Self { origin, factor }
    }
}

impl CartesianAxis for ScaleCartesian {
    fn c2p(&self, v: f64) -> f64 {
        self.origin + self.factor * v
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn log_scale_rejects_non_positive_values() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert!(s.map(0.0).is_nan());
        assert!(s.map(-5.0).is_nan());
        assert!(s.map(f64::NAN).is_nan());
    }

    #[test]
    fn log_ticks_are_powers_inside_the_domain() {
        let s = ScaleLog::new((2.0, 5000.0), (0.0, 1.0));
        let ticks = s.ticks(0);
        assert_eq!(ticks.len(), 3, "{ticks:?}");
        for (t, want) in ticks.iter().zip([10.0, 100.0, 1000.0]) {
            assert!((t - want).abs() < 1e-9, "{ticks:?}");
        }
    }

    #[test]
    fn nice_linear_domain_expands_to_ticks() {
        let spec = ScaleLinearSpec::new((0.3, 9.2)).with_nice(true);
        assert_eq!(spec.resolved_domain(5), (0.0, 10.0));
        assert_eq!(ScaleLinearSpec::new((0.3, 9.2)).resolved_domain(5), (0.3, 9.2));
    }

    #[test]
    fn radial_scale_pixels_and_geometry_agree() {
        let radial = RadialScale::new(ScaleLinearSpec::new((0.0, 10.0)), 100.0);
        assert_eq!(radial.c2p(5.0), 50.0);
        assert_eq!(radial.c2g(5.0), 5.0);

        let (x, y) = radial.cartesian_axes(Point::new(200.0, 150.0));
        assert_eq!(x.c2p(radial.c2g(5.0)), 250.0);
        assert_eq!(y.c2p(radial.c2g(5.0)), 100.0);
    }

    #[test]
    fn log_radial_scale_measures_from_the_domain_start() {
        let radial = RadialScale::new(ScaleLogSpec::new((1.0, 1000.0)), 90.0);
        assert!((radial.c2p(100.0) - 60.0).abs() < 1e-9);
        assert!((radial.c2g(100.0) - 2.0).abs() < 1e-9);
        assert!((radial.pixels_per_unit() - 30.0).abs() < 1e-9);
        assert!(radial.c2p(0.0).is_nan());
    }
}

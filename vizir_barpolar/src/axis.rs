// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis capabilities consumed by the bar layout.
//!
//! The layout never owns an axis; it only asks for projections. Out-of-domain values must
//! project to a non-finite number (typically `NaN`) so the layout can blank the bar.

use vizir_polar::{VertexAngles, deg2rad};

/// Radial axis projections.
pub trait RadialAxis {
    /// Data value to distance from the centre in pixels.
    fn c2p(&self, v: f64) -> f64;

    /// Data value to distance from the centre in the unscaled units shared with the
    /// cartesian label axes.
    fn c2g(&self, v: f64) -> f64;
}

/// Angular axis projection.
pub trait AngularAxis {
    /// Data value to a math angle in radians (counterclockwise from +x, before the y flip).
    fn c2g(&self, v: f64) -> f64;
}

/// One cartesian pixel axis of the plot, used to place labels.
pub trait CartesianAxis {
    /// Unscaled coordinate to pixel coordinate.
    fn c2p(&self, v: f64) -> f64;
}

/// Lookup of the two polygon vertices bracketing an angle (radians).
///
/// [`vizir_polar::enclosing_vertex_angles`] is the usual implementation.
pub type EnclosingVerticesFn = fn(f64, &VertexAngles) -> (f64, f64);

/// A plain function is used as both radial projections.
impl<F: Fn(f64) -> f64> RadialAxis for F {
    fn c2p(&self, v: f64) -> f64 {
        self(v)
    }

    fn c2g(&self, v: f64) -> f64 {
        self(v)
    }
}

impl<F: Fn(f64) -> f64> AngularAxis for F {
    fn c2g(&self, v: f64) -> f64 {
        self(v)
    }
}

impl<F: Fn(f64) -> f64> CartesianAxis for F {
    fn c2p(&self, v: f64) -> f64 {
        self(v)
    }
}

/// Units of angular data values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngularUnit {
    /// Values are degrees.
    #[default]
    Degrees,
    /// Values are radians.
    Radians,
}

/// Direction in which increasing angular values turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngularDirection {
    /// Mathematical orientation.
    #[default]
    Counterclockwise,
    /// Compass orientation.
    Clockwise,
}

/// A linear angular axis: `rotation + direction * value`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngularScale {
    /// Units of data values.
    pub unit: AngularUnit,
    /// Angle (degrees, counterclockwise from +x) at which the value `0` sits.
    pub rotation: f64,
    /// Turning direction.
    pub direction: AngularDirection,
}

impl AngularScale {
    /// Degrees, no rotation, counterclockwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// A compass layout: `0` points up and values turn clockwise.
    pub fn compass() -> Self {
        Self::new()
            .with_rotation(90.0)
            .with_direction(AngularDirection::Clockwise)
    }

    /// Sets the unit of data values.
    pub fn with_unit(mut self, unit: AngularUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the turning direction.
    pub fn with_direction(mut self, direction: AngularDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl AngularAxis for AngularScale {
    fn c2g(&self, v: f64) -> f64 {
        let rad = match self.unit {
            AngularUnit::Degrees => deg2rad(v),
            AngularUnit::Radians => v,
        };
        let dir = match self.direction {
            AngularDirection::Counterclockwise => 1.0,
            AngularDirection::Clockwise => -1.0,
        };
        deg2rad(self.rotation) + dir * rad
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn default_angular_scale_is_degrees_counterclockwise() {
        let s = AngularScale::new();
        assert_eq!(s.c2g(180.0), PI);
        assert_eq!(s.c2g(0.0), 0.0);
    }

    #[test]
    fn compass_puts_north_up_and_east_right() {
        let s = AngularScale::compass();
        assert_eq!(s.c2g(0.0), FRAC_PI_2);
        assert!(s.c2g(90.0).abs() < 1e-12);
    }

    #[test]
    fn radian_values_pass_through() {
        let s = AngularScale::new()
            .with_unit(AngularUnit::Radians)
            .with_rotation(180.0);
        assert_eq!(s.c2g(1.0), PI + 1.0);
    }

    #[test]
    fn closures_are_axes() {
        let double = |v: f64| 2.0 * v;
        assert_eq!(RadialAxis::c2p(&double, 3.0), 6.0);
        assert_eq!(RadialAxis::c2g(&double, 3.0), 6.0);
        assert_eq!(AngularAxis::c2g(&double, 1.5), 3.0);
        assert_eq!(CartesianAxis::c2p(&double, -1.0), -2.0);
    }
}

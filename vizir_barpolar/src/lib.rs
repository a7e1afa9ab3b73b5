// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar bar chart layout for `VizIR`.
//!
//! Given bar records (angular position and width, radial base and length) and the axes of a
//! polar plot, this crate computes per bar:
//! - the absolute angular and radial extents in data units,
//! - the same extents projected to pixels/radians,
//! - an outline path (a ring slice, or a polygon slice on polygonal grids), and
//! - a label anchor in pixels.
//!
//! Axes are consumed through the [`RadialAxis`], [`AngularAxis`] and [`CartesianAxis`]
//! traits; [`RadialScale`], [`AngularScale`] and [`ScaleCartesian`] are ready-made
//! implementations. Geometry comes from `vizir_polar`.

#![no_std]

extern crate alloc;

mod axis;
mod bar;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod scale;

pub use axis::{
    AngularAxis, AngularDirection, AngularScale, AngularUnit, CartesianAxis,
    EnclosingVerticesFn, RadialAxis,
};
pub use bar::{AngularOffset, BarRecord};
pub use layout::{BarLayout, BarPolarLayout, GridShape, PathStrategy};
pub use scale::{
    RadialScale, ScaleCartesian, ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleLog,
    ScaleLogSpec, ScaleSpec,
};

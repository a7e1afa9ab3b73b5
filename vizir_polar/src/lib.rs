// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar geometry for `VizIR` charts.
//!
//! This crate is the geometry kernel under polar marks:
//! - **Angles**: degree/radian conversion, wrapping, shortest deltas and sector containment.
//! - **Shapes**: arc, pie-slice sector and ring (annulus) outlines, including full circles.
//! - **Polygonal grids**: the same ring outlines when the angular axis is drawn as a polygon.
//!
//! Sector bounds are degrees, angles handed to the path builders are radians. Outputs are
//! [`PolarPath`]s, which print as SVG path data and convert to `kurbo::BezPath`.
//!
//! Every function is total: degenerate numeric input produces a (possibly `NaN`-laden) path
//! rather than a panic, so callers filter invalid data before building shapes.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;

mod angle;
mod path;
mod polygon;
mod shape;

pub use angle::{
    angle_delta, angle_dist, deg2rad, is_angle_inside_sector, is_full_circle, is_pt_inside_sector,
    rad2deg, wrap180, wrap360,
};
pub use path::{PathCommand, PolarPath};
pub use polygon::{
    GeometryError, VertexAngles, enclosing_vertex_angles, path_polygon, path_polygon_annulus,
    polygon_ray_intersection,
};
pub use shape::{PolarShape, path_annulus, path_arc, path_sector};

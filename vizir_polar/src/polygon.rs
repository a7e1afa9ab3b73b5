// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths for polygonal angular grids.
//!
//! A polar plot can draw its angular grid as straight edges between fixed vertex angles
//! instead of a circle. Shapes on such a grid follow the polygon: a "radius" `r` then names
//! the polygon whose vertices sit at distance `r` from the centre.
//!
//! Vertex angles are in radians and are expected in counterclockwise order; clip sectors are
//! in degrees, like every other sector in this crate.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::angle::{
    angle_delta, angle_dist, deg2rad, is_angle_inside_sector, is_full_circle, rad2deg,
    sector_bounds, sorted, wrap360,
};
use crate::path::PolarPath;

/// Errors returned when building [`VertexAngles`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon needs at least three vertices.
    TooFewVertices {
        /// Number of vertices provided.
        count: usize,
    },
    /// A vertex angle is `NaN` or infinite.
    NonFiniteVertex {
        /// Position of the offending angle.
        index: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            Self::NonFiniteVertex { index } => write!(f, "vertex angle {index} is not finite"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Corner angles (radians) of a polygonal angular grid.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexAngles {
    angles: Vec<f64>,
}

impl VertexAngles {
    /// Validates a list of vertex angles in radians.
    pub fn new(angles: impl Into<Vec<f64>>) -> Result<Self, GeometryError> {
        let angles = angles.into();
        if angles.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: angles.len(),
            });
        }
        if let Some(index) = angles.iter().position(|a| !a.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index });
        }
        Ok(Self { angles })
    }

    /// A regular polygon with `count` corners, the first at `rotation` radians.
    pub fn regular(count: usize, rotation: f64) -> Result<Self, GeometryError> {
        let step = core::f64::consts::TAU / count as f64;
        Self::new(
            (0..count)
                .map(|i| rotation + step * i as f64)
                .collect::<Vec<_>>(),
        )
    }

    /// Returns the angles in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    fn at(&self, index: isize) -> f64 {
        let n = self.angles.len() as isize;
        self.angles[index.rem_euclid(n) as usize]
    }
}

/// Finds the two polygon vertices bracketing angle `a` (radians).
///
/// The low vertex is the one reached by the smallest strictly positive turn towards `a`; the
/// high vertex is its successor. A vertex exactly at `a` is therefore returned as the high one.
pub fn enclosing_vertex_angles(a: f64, vertex_angles: &VertexAngles) -> (f64, f64) {
    let i0 = index_of_min(vertex_angles.as_slice(), |v| {
        let delta = angle_delta(v, a);
        if delta > 0.0 { delta } else { f64::INFINITY }
    })
    .unwrap_or(0);
    let i0 = i0 as isize;
    (vertex_angles.at(i0), vertex_angles.at(i0 + 1))
}

/// Intersects the ray from the centre at angle `a` with the polygon edge `v0 → v1` at radius `r`.
///
/// Angles are in radians; the result is in y-up coordinates relative to the centre. When the
/// ray misses the edge line (parallel, or a zero radius) the vertex nearest to `a` is returned.
pub fn polygon_ray_intersection(r: f64, v0: f64, v1: f64, a: f64) -> Point {
    let p0 = vertex(r, v0).to_vec2();
    let p1 = vertex(r, v1).to_vec2();
    let dir = Vec2::new(a.cos(), a.sin());
    let edge = p1 - p0;
    let t = p0.cross(edge) / dir.cross(edge);
    if t.is_finite() {
        (dir * t).to_point()
    } else if angle_dist(v0, a) <= angle_dist(v1, a) {
        p0.to_point()
    } else {
        p1.to_point()
    }
}

/// Outline of the polygon at radius `r`, clipped to `sector` (degrees), around `(cx, cy)`.
///
/// A full-circle sector yields the closed polygon through every vertex; otherwise the outline
/// is the clipped wedge, closed through the centre. The wedge covers the narrower arc between
/// the two sector bounds, as in [`is_angle_inside_sector`](crate::is_angle_inside_sector).
pub fn path_polygon(
    r: f64,
    sector: [f64; 2],
    vertex_angles: &VertexAngles,
    cx: f64,
    cy: f64,
) -> PolarPath {
    let mut path = PolarPath::new();
    path.polygon(to_screen(polygon(r, sector, vertex_angles), cx, cy));
    path
}

/// Ring slice between the polygons at radii `r0` and `r1` (either order), clipped to `sector`
/// (degrees), around `(cx, cy)`.
///
/// The outer boundary is emitted in reverse so that, under a nonzero fill rule, the inner
/// polygon is cut out of the outer one.
pub fn path_polygon_annulus(
    r0: f64,
    r1: f64,
    sector: [f64; 2],
    vertex_angles: &VertexAngles,
    cx: f64,
    cy: f64,
) -> PolarPath {
    let (r_inner, r_outer) = sorted([r0, r1]);
    let mut outer = polygon(r_outer, sector, vertex_angles);
    outer.reverse();
    let inner = polygon(r_inner, sector, vertex_angles);

    let mut path = PolarPath::new();
    path.polygon(to_screen(outer, cx, cy));
    path.polygon(to_screen(inner, cx, cy));
    path
}

fn vertex(r: f64, a: f64) -> Point {
    Point::new(r * a.cos(), r * a.sin())
}

fn to_screen(points: Vec<Point>, cx: f64, cy: f64) -> impl Iterator<Item = Point> {
    points.into_iter().map(move |p| Point::new(cx + p.x, cy - p.y))
}

fn polygon(r: f64, sector: [f64; 2], vertex_angles: &VertexAngles) -> Vec<Point> {
    if is_full_circle(sector) {
        vertex_angles
            .as_slice()
            .iter()
            .map(|&a| vertex(r, a))
            .collect()
    } else {
        clipped_polygon(r, sector, vertex_angles)
    }
}

/// Wedge of the polygon at radius `r` between the two sector rays, ending at the centre.
fn clipped_polygon(r: f64, sector: [f64; 2], vertex_angles: &VertexAngles) -> Vec<Point> {
    let (s0, s1) = sector_bounds(sector);
    let a0 = deg2rad(s0);
    let a1 = deg2rad(s1);
    let angles = vertex_angles.as_slice();
    let n = angles.len() as isize;
    let inside = |v: f64| is_angle_inside_sector(v, sector);
    let turn_deg = |from: f64, to: f64| wrap360(rad2deg(to - from));

    let first = index_of_min(angles, |v| {
        if inside(v) { turn_deg(a0, v) } else { f64::INFINITY }
    });
    let last = index_of_min(angles, |v| {
        if inside(v) { turn_deg(v, a1) } else { f64::INFINITY }
    });

    let mut points = Vec::new();
    match (first, last) {
        (Some(first), Some(last)) => {
            let (first, last) = (first as isize, last as isize);
            let at = |i: isize| vertex_angles.at(i);
            points.push(polygon_ray_intersection(r, at(first - 1), at(first), a0));
            for k in 0..n {
                let i = first + k;
                points.push(vertex(r, at(i)));
                if i.rem_euclid(n) == last {
                    break;
                }
            }
            points.push(polygon_ray_intersection(r, at(last), at(last + 1), a1));
        }
        _ => {
            // The whole sector sits between two neighbouring vertices.
            let (v0, v1) = enclosing_vertex_angles(a0, vertex_angles);
            points.push(polygon_ray_intersection(r, v0, v1, a0));
            points.push(polygon_ray_intersection(r, v0, v1, a1));
        }
    }
    points.push(Point::ZERO);
    points
}

fn index_of_min(values: &[f64], key: impl Fn(f64) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        let k = key(v);
        if !k.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, b)| k < b) {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}

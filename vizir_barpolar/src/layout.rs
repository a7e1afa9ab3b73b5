// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-bar layout for polar bar charts.
//!
//! Each bar is laid out independently: its angular and radial extents are derived from the
//! record, projected through the axes and turned into an outline. The result is a separate
//! [`BarLayout`] per input record, in input order, which callers join back to their data by
//! index.
//!
//! Bars that cannot be drawn (non-finite projections, zero radial or angular extent) are kept
//! with the `M0,0Z` placeholder outline, so that a retained renderer can keep one node per
//! datum while axes are rescaled.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use vizir_polar::{
    PolarPath, VertexAngles, angle_delta, enclosing_vertex_angles, is_full_circle, path_annulus,
    path_polygon_annulus, rad2deg, wrap360,
};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::{AngularAxis, CartesianAxis, EnclosingVerticesFn, RadialAxis};
use crate::bar::{AngularOffset, BarRecord};

/// Shape of the angular grid that bar outlines follow.
#[derive(Clone, Debug)]
pub enum GridShape {
    /// A circle: bars are annulus slices.
    Circular,
    /// A polygon through the given vertex angles (radians).
    Polygonal {
        /// Polygon corners.
        vertex_angles: VertexAngles,
        /// Lookup of the corners bracketing an angle.
        enclosing: EnclosingVerticesFn,
    },
}

/// How bar outlines are built for one plot.
///
/// Chosen once per plot and shared by every bar.
#[derive(Clone, Debug)]
pub struct PathStrategy {
    center: Point,
    grid: GridShape,
}

impl PathStrategy {
    /// Annulus slices around `center`.
    pub fn circular(center: Point) -> Self {
        Self {
            center,
            grid: GridShape::Circular,
        }
    }

    /// Polygon-following slices around `center`.
    pub fn polygonal(center: Point, vertex_angles: VertexAngles) -> Self {
        Self {
            center,
            grid: GridShape::Polygonal {
                vertex_angles,
                enclosing: enclosing_vertex_angles,
            },
        }
    }

    /// Polygonal when vertex angles are given, circular otherwise.
    pub fn for_grid(center: Point, vertex_angles: Option<VertexAngles>) -> Self {
        match vertex_angles {
            Some(vertex_angles) => Self::polygonal(center, vertex_angles),
            None => Self::circular(center),
        }
    }

    /// Replaces the bracketing-vertex lookup. Has no effect on a circular grid.
    ///
    /// The lookup must return finite angles; a bar whose lookup yields `NaN` or an infinity
    /// gets the `M0,0Z` placeholder outline.
    pub fn with_enclosing_vertices(mut self, f: EnclosingVerticesFn) -> Self {
        if let GridShape::Polygonal { enclosing, .. } = &mut self.grid {
            *enclosing = f;
        }
        self
    }

    /// Moves the plot centre.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Returns the plot centre in pixels.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the grid shape.
    pub fn grid(&self) -> &GridShape {
        &self.grid
    }

    /// Outline of the slice between pixel radii `r0..r1` and angles `a0..a1` (radians).
    ///
    /// On a polygonal grid the span is read the short way round, and the outline follows the
    /// edges from the low bracketing vertex of the start to the high bracketing vertex of the
    /// end. If the bracketing lookup returns a non-finite angle the result is
    /// [`PolarPath::empty`].
    pub fn path(&self, r0: f64, r1: f64, a0: f64, a1: f64) -> PolarPath {
        let Point { x: cx, y: cy } = self.center;
        match &self.grid {
            GridShape::Circular => path_annulus(r0, r1, a0, a1, cx, cy),
            GridShape::Polygonal {
                vertex_angles,
                enclosing,
            } => {
                if is_full_circle([rad2deg(a0), rad2deg(a1)]) {
                    return path_polygon_annulus(r0, r1, [0.0, 360.0], vertex_angles, cx, cy);
                }
                let (a0, a1) = if angle_delta(a0, a1) > 0.0 {
                    (a0, a1)
                } else {
                    (a1, a0)
                };
                let va0 = enclosing(a0, vertex_angles).0;
                let va1 = enclosing(a1, vertex_angles).1;
                let apex = a0 + angle_delta(a0, a1) / 2.0;
                let clip = [wrap360(rad2deg(a0)), wrap360(rad2deg(a1))];
                match VertexAngles::new([va0, apex, va1]) {
                    Ok(bar_vertices) => {
                        path_polygon_annulus(r0, r1, clip, &bar_vertices, cx, cy)
                    }
                    Err(_) => PolarPath::empty(),
                }
            }
        }
    }
}

/// Layout of one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    /// Index of the source record.
    pub index: usize,
    /// Angular start, after the offset (data units).
    pub p0: f64,
    /// Angular end (data units).
    pub p1: f64,
    /// Radial start (data units).
    pub s0: f64,
    /// Radial end (data units).
    pub s1: f64,
    /// Radial start in pixels.
    pub rp0: f64,
    /// Radial end in pixels.
    pub rp1: f64,
    /// Angular start in radians.
    pub thetag0: f64,
    /// Angular end in radians.
    pub thetag1: f64,
    /// Label anchor at the middle of the outer edge, in pixels. `None` for degenerate bars.
    pub ct: Option<Point>,
    /// Bar outline.
    pub path: PolarPath,
}

impl BarLayout {
    /// Returns `true` if the bar could not be drawn and carries the placeholder outline.
    pub fn is_degenerate(&self) -> bool {
        self.ct.is_none()
    }
}

/// Lays out polar bars against a set of axes.
pub struct BarPolarLayout<'a> {
    radial: &'a dyn RadialAxis,
    angular: &'a dyn AngularAxis,
    x: &'a dyn CartesianAxis,
    y: &'a dyn CartesianAxis,
    offset: AngularOffset,
    strategy: PathStrategy,
}

impl core::fmt::Debug for BarPolarLayout<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarPolarLayout")
            .field("radial", &"<axis>")
            .field("angular", &"<axis>")
            .field("x", &"<axis>")
            .field("y", &"<axis>")
            .field("offset", &self.offset)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl<'a> BarPolarLayout<'a> {
    /// Creates a layout on a circular grid centred at the origin, with no angular offset.
    ///
    /// `x` and `y` receive `radial.c2g` distances projected on the cartesian axes and place
    /// the label anchors.
    pub fn new(
        radial: &'a dyn RadialAxis,
        angular: &'a dyn AngularAxis,
        x: &'a dyn CartesianAxis,
        y: &'a dyn CartesianAxis,
    ) -> Self {
        Self {
            radial,
            angular,
            x,
            y,
            offset: AngularOffset::default(),
            strategy: PathStrategy::circular(Point::ZERO),
        }
    }

    /// Sets the angular offset (one value for all bars, or one per bar).
    pub fn with_offset(mut self, offset: impl Into<AngularOffset>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Sets the plot centre in pixels.
    pub fn with_center(mut self, center: Point) -> Self {
        self.strategy = self.strategy.with_center(center);
        self
    }

    /// Switches to a polygonal angular grid.
    pub fn with_vertex_angles(mut self, vertex_angles: VertexAngles) -> Self {
        self.strategy = PathStrategy::polygonal(self.strategy.center(), vertex_angles);
        self
    }

    /// Replaces the whole path strategy.
    pub fn with_strategy(mut self, strategy: PathStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the path strategy in use.
    pub fn strategy(&self) -> &PathStrategy {
        &self.strategy
    }

    /// Lays out every bar, in input order.
    pub fn layout(&self, bars: &[BarRecord]) -> Vec<BarLayout> {
        bars.iter()
            .enumerate()
            .map(|(index, bar)| self.layout_bar(index, bar))
            .collect()
    }

    /// Lays out the bar at `index`.
    ///
    /// Bars do not depend on each other, so this can be called in any order.
    pub fn layout_bar(&self, index: usize, bar: &BarRecord) -> BarLayout {
        let p0 = bar.p + self.offset.at(index);
        let p1 = p0 + bar.w;
        let s0 = bar.b;
        let s1 = s0 + bar.s;

        let rp0 = self.radial.c2p(s0);
        let rp1 = self.radial.c2p(s1);
        let thetag0 = self.angular.c2g(p0);
        let thetag1 = self.angular.c2g(p1);

        let drawable = rp0.is_finite()
            && rp1.is_finite()
            && thetag0.is_finite()
            && thetag1.is_finite()
            && rp0 != rp1
            && thetag0 != thetag1;

        let (ct, path) = if drawable {
            let rg1 = self.radial.c2g(s1);
            let theta_mid = (thetag0 + thetag1) / 2.0;
            let ct = Point::new(
                self.x.c2p(rg1 * theta_mid.cos()),
                self.y.c2p(rg1 * theta_mid.sin()),
            );
            (Some(ct), self.strategy.path(rp0, rp1, thetag0, thetag1))
        } else {
            (None, PolarPath::empty())
        };

        BarLayout {
            index,
            p0,
            p1,
            s0,
            s1,
            rp0,
            rp1,
            thetag0,
            thetag1,
            ct,
            path,
        }
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc, sector and annulus paths.
//!
//! Angles are in radians and may come in either order; the shape always spans from the smaller
//! to the larger one. Coordinates follow screen conventions (y grows downward), so the polar
//! point `(r, a)` around `(cx, cy)` lands at `(r·cos(a) + cx, cy − r·sin(a))`.

use core::f64::consts::PI;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::angle::{is_full_circle, rad2deg, sorted};
use crate::path::PolarPath;

/// The kind of polar shape to outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolarShape {
    /// An open arc at `radius`.
    Arc {
        /// Arc radius.
        radius: f64,
    },
    /// A pie slice: the arc at `radius`, closed through the centre.
    Sector {
        /// Outer radius.
        radius: f64,
    },
    /// A ring slice between two radii (either order).
    Annulus {
        /// Inner radius.
        r0: f64,
        /// Outer radius.
        r1: f64,
    },
}

impl PolarShape {
    /// Builds the outline spanning angles `a0..a1` (radians) around `center`.
    pub fn path(&self, a0: f64, a1: f64, center: Point) -> PolarPath {
        let is_circle = is_full_circle([rad2deg(a0), rad2deg(a1)]);
        let (a_start, a_end) = sorted([a0, a1]);
        // Arc commands cannot encode a whole turn, so circles are drawn as two halves.
        let a_mid = a_start + PI;

        let pt = |r: f64, a: f64| Point::new(r * a.cos() + center.x, center.y - r * a.sin());
        let large_arc = (a_end - a_start).abs() > PI;

        let mut path = PolarPath::new();
        let arc = |path: &mut PolarPath, r: f64, a: f64, sweep: bool| {
            path.arc_to(r, large_arc, sweep, pt(r, a));
        };

        match (*self, is_circle) {
            (Self::Arc { radius } | Self::Sector { radius }, true) => {
                path.move_to(pt(radius, a_start));
                arc(&mut path, radius, a_mid, false);
                arc(&mut path, radius, a_end, false);
                path.close();
            }
            (Self::Annulus { r0, r1 }, true) => {
                let (r_inner, r_outer) = sorted([r0, r1]);
                path.move_to(pt(r_inner, a_start));
                arc(&mut path, r_inner, a_mid, false);
                arc(&mut path, r_inner, a_end, false);
                path.close();
                path.move_to(pt(r_outer, a_start));
                arc(&mut path, r_outer, a_mid, true);
                arc(&mut path, r_outer, a_end, true);
                path.close();
            }
            (Self::Arc { radius }, false) => {
                path.move_to(pt(radius, a_start));
                arc(&mut path, radius, a_end, false);
            }
            (Self::Sector { radius }, false) => {
                path.move_to(pt(radius, a_start));
                arc(&mut path, radius, a_end, false);
                path.line_to(center);
                path.close();
            }
            (Self::Annulus { r0, r1 }, false) => {
                let (r_inner, r_outer) = sorted([r0, r1]);
                path.move_to(pt(r_inner, a_start));
                path.line_to(pt(r_outer, a_start));
                arc(&mut path, r_outer, a_end, false);
                path.line_to(pt(r_inner, a_end));
                arc(&mut path, r_inner, a_start, true);
                path.close();
            }
        }
        path
    }
}

/// Open arc of radius `r` from `a0` to `a1` (radians) around `(cx, cy)`.
pub fn path_arc(r: f64, a0: f64, a1: f64, cx: f64, cy: f64) -> PolarPath {
    PolarShape::Arc { radius: r }.path(a0, a1, Point::new(cx, cy))
}

/// Pie slice of radius `r` from `a0` to `a1` (radians) around `(cx, cy)`.
pub fn path_sector(r: f64, a0: f64, a1: f64, cx: f64, cy: f64) -> PolarPath {
    PolarShape::Sector { radius: r }.path(a0, a1, Point::new(cx, cy))
}

/// Ring slice between radii `r0` and `r1` from `a0` to `a1` (radians) around `(cx, cy)`.
pub fn path_annulus(r0: f64, r1: f64, a0: f64, a1: f64, cx: f64, cy: f64) -> PolarPath {
    PolarShape::Annulus { r0, r1 }.path(a0, a1, Point::new(cx, cy))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;
    use std::string::ToString;

    use core::f64::consts::{FRAC_PI_2, TAU};

    use super::*;
    use crate::path::PathCommand;

    fn approx_pt(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn quarter_annulus_has_two_arcs_and_closes() {
        let path = path_annulus(2.0, 5.0, 0.0, FRAC_PI_2, 0.0, 0.0);
        let s = path.to_string();
        assert!(s.starts_with('M'), "{s}");
        assert!(s.ends_with('Z'), "{s}");
        assert_eq!(s.matches('A').count(), 2, "{s}");
        assert_eq!(path.subpath_count(), 1);
        assert!(s.starts_with("M2,0L5,0A5,5 0,0,0 "), "{s}");
    }

    #[test]
    fn annulus_ignores_radius_and_angle_order() {
        let a = path_annulus(2.0, 5.0, 0.0, FRAC_PI_2, 10.0, 20.0);
        let b = path_annulus(5.0, 2.0, FRAC_PI_2, 0.0, 10.0, 20.0);
        assert_eq!(a, b);
    }

    #[test]
    fn full_circle_annulus_is_two_closed_loops() {
        let path = path_annulus(1.0, 3.0, 0.0, TAU, 0.0, 0.0);
        assert_eq!(path.subpath_count(), 2);
        assert_eq!(path.arc_count(), 4);
        let closes = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count();
        assert_eq!(closes, 2);

        let sweeps: Vec<bool> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo { sweep, .. } => Some(*sweep),
                _ => None,
            })
            .collect();
        assert_eq!(sweeps, [false, false, true, true]);
    }

    #[test]
    fn full_circle_arc_is_split_in_halves() {
        let path = path_arc(4.0, 0.0, TAU, 0.0, 0.0);
        let cmds = path.commands();
        assert_eq!(cmds.len(), 4);
        approx_pt(
            match cmds[1] {
                PathCommand::ArcTo { to, .. } => to,
                _ => panic!("expected arc"),
            },
            Point::new(-4.0, 0.0),
        );
        assert!(matches!(cmds[3], PathCommand::Close));
    }

    #[test]
    fn arc_is_open_and_sector_closes_at_centre() {
        let arc = path_arc(10.0, 0.0, FRAC_PI_2, 50.0, 50.0);
        assert!(!arc.to_string().ends_with('Z'));
        assert_eq!(arc.commands().len(), 2);

        let sector = path_sector(10.0, 0.0, FRAC_PI_2, 50.0, 50.0);
        let cmds = sector.commands();
        assert_eq!(cmds.len(), 4);
        assert_eq!(cmds[2], PathCommand::LineTo(Point::new(50.0, 50.0)));
        assert_eq!(cmds[3], PathCommand::Close);
    }

    #[test]
    fn y_axis_points_down() {
        let arc = path_arc(10.0, 0.0, FRAC_PI_2, 0.0, 0.0);
        let PathCommand::ArcTo { to, .. } = arc.commands()[1] else {
            panic!("expected arc");
        };
        approx_pt(to, Point::new(0.0, -10.0));
    }

    #[test]
    fn large_arc_flag_tracks_half_turn() {
        let small = path_arc(1.0, 0.0, 3.0, 0.0, 0.0);
        let large = path_arc(1.0, 0.0, 3.5, 0.0, 0.0);
        assert!(matches!(
            small.commands()[1],
            PathCommand::ArcTo {
                large_arc: false,
                ..
            }
        ));
        assert!(matches!(
            large.commands()[1],
            PathCommand::ArcTo {
                large_arc: true,
                ..
            }
        ));
    }

    #[test]
    fn non_finite_input_does_not_panic() {
        let path = path_annulus(f64::NAN, 1.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(path.subpath_count(), 1);
    }
}

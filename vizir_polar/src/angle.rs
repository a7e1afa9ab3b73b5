// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle conversion, wrapping and sector containment.
//!
//! Two unit conventions meet here:
//! - sector bounds (`[f64; 2]`) are in **degrees**, and
//! - angles fed to trig functions are in **radians**.
//!
//! Every function states which one it expects.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Converts degrees to radians.
pub fn deg2rad(deg: f64) -> f64 {
    deg / 180.0 * PI
}

/// Converts radians to degrees.
pub fn rad2deg(rad: f64) -> f64 {
    rad / PI * 180.0
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap360(deg: f64) -> f64 {
    let out = deg % 360.0;
    if out < 0.0 {
        let shifted = out + 360.0;
        // A remainder like `-1e-20` rounds back up to exactly 360.
        if shifted >= 360.0 { 0.0 } else { shifted }
    } else {
        out
    }
}

/// Wraps an angle in degrees into `(-180, 180]`.
///
/// Values already inside `[-180, 180]` are returned unchanged, so `wrap180(180.0) == 180.0`
/// (and `-180` is preserved as well).
pub fn wrap180(deg: f64) -> f64 {
    if deg.abs() > 180.0 {
        deg - (deg / 360.0).round() * 360.0
    } else {
        deg
    }
}

/// Returns `true` if the sector (in degrees) spans exactly one full turn.
///
/// This is an exact comparison: a span of `359.999` is not a full circle.
pub fn is_full_circle(sector: [f64; 2]) -> bool {
    (sector[1] - sector[0]).abs() == 360.0
}

/// Signed shortest angular difference from `a` to `b`, in radians.
///
/// The result lies in `(-π, π]`.
pub fn angle_delta(a: f64, b: f64) -> f64 {
    let d = b - a;
    d.sin().atan2(d.cos())
}

/// Unsigned shortest angular distance between `a` and `b`, in radians (`[0, π]`).
pub fn angle_dist(a: f64, b: f64) -> f64 {
    angle_delta(a, b).abs()
}

/// Returns `true` if angle `a` (radians) lies inside `sector` (degrees, either order).
///
/// Bounds are inclusive. Sectors crossing 0° are handled by shifting the upper bound by a turn,
/// which is why the angle is tested against both of its aliases in `[0, 720)`.
///
/// Only the bounds modulo 360 matter, in either order. The two wrapped bounds split the turn
/// into two arcs and the narrower one is the sector, so `[350, 10]`, `[10, -10]` and
/// `[710, 370]` all describe the 20° span crossing 0°. A sector of exactly half a turn runs
/// counterclockwise from the smaller wrapped bound. Spans wider than half a turn (other than
/// a full circle) cannot be expressed.
pub fn is_angle_inside_sector(a: f64, sector: [f64; 2]) -> bool {
    if is_full_circle(sector) {
        return true;
    }

    let (s0, s1) = sector_bounds(sector);
    let a0 = wrap360(rad2deg(a));
    let a1 = a0 + 360.0;

    (a0 >= s0 && a0 <= s1) || (a1 >= s0 && a1 <= s1)
}

/// Resolves a sector into `lower <= upper` bounds with `lower` in `[0, 360)` and
/// `upper - lower <= 180`.
pub(crate) fn sector_bounds(sector: [f64; 2]) -> (f64, f64) {
    let (lo, hi) = sorted([wrap360(sector[0]), wrap360(sector[1])]);
    if hi - lo > 180.0 {
        (hi, lo + 360.0)
    } else {
        (lo, hi)
    }
}

/// Returns `true` if the polar point `(r, a)` lies inside the radial range and sector.
///
/// `a` is in radians, `sector` in degrees. Both ranges may be given in either order and are
/// inclusive at both ends.
pub fn is_pt_inside_sector(r: f64, a: f64, r_range: [f64; 2], sector: [f64; 2]) -> bool {
    if !is_angle_inside_sector(a, sector) {
        return false;
    }
    let (r0, r1) = sorted(r_range);
    r >= r0 && r <= r1
}

/// Returns the pair in ascending order.
pub(crate) fn sorted(pair: [f64; 2]) -> (f64, f64) {
    if pair[0] < pair[1] {
        (pair[0], pair[1])
    } else {
        (pair[1], pair[0])
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const SAMPLES: [f64; 12] = [
        -1080.5, -720.0, -361.0, -360.0, -180.0, -0.5, 0.0, 45.0, 359.999, 360.0, 540.0, 1e6,
    ];

    #[test]
    fn wrap360_stays_in_half_open_turn() {
        for d in SAMPLES {
            let w = wrap360(d);
            assert!((0.0..360.0).contains(&w), "wrap360({d}) = {w}");
        }
        assert_eq!(wrap360(-1e-20), 0.0);
        assert_eq!(wrap360(-90.0), 270.0);
        assert_eq!(wrap360(360.0), 0.0);
    }

    #[test]
    fn wrap360_is_periodic() {
        for d in [0.0, 12.5, 90.0, 271.0] {
            for k in [-3.0, -1.0, 1.0, 2.0] {
                assert_eq!(wrap360(d), wrap360(d + 360.0 * k), "d = {d}, k = {k}");
            }
        }
    }

    #[test]
    fn wrap180_stays_in_half_open_interval() {
        for d in [-1080.5, -720.0, -361.0, -0.5, 0.0, 45.0, 179.0, 359.999, 360.0, 1e6] {
            let w = wrap180(d);
            assert!(w > -180.0 && w <= 180.0, "wrap180({d}) = {w}");
        }
        assert_eq!(wrap180(270.0), -90.0);
        assert_eq!(wrap180(-270.0), 90.0);
        assert_eq!(wrap180(181.0), -179.0);
    }

    #[test]
    fn wrap180_preserves_the_180_boundary() {
        assert_eq!(wrap180(180.0), 180.0);
        assert_eq!(wrap180(-180.0), -180.0);
        // Half turns beyond the boundary round away from zero.
        assert_eq!(wrap180(540.0), -180.0);
    }

    #[test]
    fn conversions_round_trip() {
        for x in [0.0, 1.0, -2.5, 90.0, 180.0, 1234.5] {
            assert!((rad2deg(deg2rad(x)) - x).abs() < 1e-9, "deg round trip {x}");
            assert!((deg2rad(rad2deg(x)) - x).abs() < 1e-12, "rad round trip {x}");
        }
        assert_eq!(deg2rad(180.0), PI);
        assert_eq!(rad2deg(PI), 180.0);
    }

    #[test]
    fn angle_delta_is_antisymmetric() {
        let pairs = [(0.0, 1.0), (3.0, -3.0), (0.25, 6.0), (-2.0, 2.5)];
        for (a, b) in pairs {
            assert!(
                (angle_delta(a, b) + angle_delta(b, a)).abs() < 1e-12,
                "delta({a}, {b})"
            );
        }
        assert!((angle_delta(3.0, -3.0) - (2.0 * PI - 6.0)).abs() < 1e-12, "wraps forward");
        assert!((angle_dist(-2.0, 2.0) - (2.0 * PI - 4.0)).abs() < 1e-12, "shortest way");
    }

    #[test]
    fn full_circle_is_exact() {
        assert!(is_full_circle([0.0, 360.0]));
        assert!(is_full_circle([90.0, -270.0]));
        assert!(!is_full_circle([0.0, 359.999]));
        assert!(!is_full_circle([0.0, 720.0]));
    }

    #[test]
    fn full_circle_sector_contains_everything() {
        for a in [-10.0, 0.0, 1.0, PI, 100.0] {
            assert!(is_angle_inside_sector(a, [-45.0, 315.0]), "a = {a}");
        }
    }

    #[test]
    fn wrapping_sector_contains_angles_across_zero() {
        let sector = [350.0, 10.0];
        assert!(is_angle_inside_sector(0.0, sector));
        assert!(is_angle_inside_sector(deg2rad(355.0), sector));
        assert!(is_angle_inside_sector(deg2rad(5.0), sector));
        assert!(!is_angle_inside_sector(deg2rad(180.0), sector));

        let inverted = [10.0, -10.0];
        assert!(is_angle_inside_sector(0.0, inverted));
        assert!(!is_angle_inside_sector(deg2rad(90.0), inverted));

        let negative = [-10.0, 10.0];
        assert!(is_angle_inside_sector(deg2rad(-5.0), negative));
        assert!(is_angle_inside_sector(deg2rad(9.0), negative));
        assert!(!is_angle_inside_sector(deg2rad(11.0), negative));
    }

    #[test]
    fn sector_is_the_narrower_arc_between_its_bounds() {
        assert!(is_angle_inside_sector(deg2rad(45.0), [90.0, 0.0]));
        assert!(!is_angle_inside_sector(deg2rad(180.0), [90.0, 0.0]));
        assert!(is_angle_inside_sector(deg2rad(45.0), [0.0, 90.0]));
        assert!(is_angle_inside_sector(0.0, [10.0, 350.0]));
        assert!(!is_angle_inside_sector(deg2rad(180.0), [10.0, 350.0]));
        // Half a turn starts at the smaller wrapped bound.
        assert!(is_angle_inside_sector(deg2rad(90.0), [180.0, 0.0]));
        assert!(!is_angle_inside_sector(deg2rad(270.0), [180.0, 0.0]));
    }

    #[test]
    fn sectors_equal_modulo_a_turn_agree() {
        let same = [
            [350.0, 10.0],
            [10.0, 350.0],
            [710.0, 370.0],
            [-10.0, 10.0],
            [10.0, -370.0],
        ];
        let wide = [[200.0, 10.0], [10.0, 200.0], [-160.0, 370.0]];
        for deg in [0.0, 5.0, 9.0, 11.0, 100.0, 180.0, 190.0, 270.0, 355.0] {
            let a = deg2rad(deg);
            let want = is_angle_inside_sector(a, same[0]);
            for sector in same {
                assert_eq!(is_angle_inside_sector(a, sector), want, "{deg}° in {sector:?}");
            }
            let want = is_angle_inside_sector(a, wide[0]);
            for sector in wide {
                assert_eq!(is_angle_inside_sector(a, sector), want, "{deg}° in {sector:?}");
            }
        }
        assert!(is_angle_inside_sector(0.0, [710.0, 370.0]));
        assert!(!is_angle_inside_sector(deg2rad(100.0), [200.0, 10.0]));
        assert!(is_angle_inside_sector(deg2rad(270.0), [10.0, 200.0]));
    }

    #[test]
    fn point_inside_sector_accepts_inverted_radial_range() {
        assert!(is_pt_inside_sector(5.0, 0.0, [10.0, 2.0], [-10.0, 10.0]));
        assert!(is_pt_inside_sector(2.0, 0.0, [10.0, 2.0], [-10.0, 10.0]));
        assert!(!is_pt_inside_sector(11.0, 0.0, [10.0, 2.0], [-10.0, 10.0]));
        assert!(!is_pt_inside_sector(5.0, PI, [10.0, 2.0], [-10.0, 10.0]));
    }
}

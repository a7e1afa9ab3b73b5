// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path descriptions produced by the polar path builders.
//!
//! A [`PolarPath`] is a short list of absolute `M`/`L`/`A`/`Z` commands. It formats as an SVG
//! path string (so it can be handed to any SVG-speaking surface unchanged) and converts to a
//! [`kurbo::BezPath`] for renderers that only understand lines and curves.

use core::fmt;

use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};
use smallvec::SmallVec;

/// One absolute path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M`: start a new subpath.
    MoveTo(Point),
    /// `L`: straight segment.
    LineTo(Point),
    /// `A`: circular arc (equal radii, no x-axis rotation).
    ArcTo {
        /// Arc radius, as given (SVG consumers use its magnitude).
        radius: f64,
        /// Selects the major arc between the two end points.
        large_arc: bool,
        /// SVG sweep flag (`true` is clockwise on screen).
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// `Z`: close the current subpath.
    Close,
}

/// The boundary of one polar shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PolarPath {
    commands: SmallVec<[PathCommand; 8]>,
}

impl PolarPath {
    /// Creates a path with no commands.
    pub(crate) fn new() -> Self {
        Self {
            commands: SmallVec::new(),
        }
    }

    /// The zero-area placeholder path, `M0,0Z`.
    ///
    /// Degenerate or invalid shapes are rendered with this path instead of being dropped, so
    /// the caller's one-path-per-datum correspondence survives.
    pub fn empty() -> Self {
        let mut path = Self::new();
        path.move_to(Point::ZERO);
        path.close();
        path
    }

    /// Returns `true` if this is exactly the [`PolarPath::empty`] placeholder.
    pub fn is_empty_sentinel(&self) -> bool {
        matches!(
            &self.commands[..],
            [PathCommand::MoveTo(p), PathCommand::Close] if *p == Point::ZERO
        )
    }

    /// Returns the commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of subpaths (`M` commands).
    pub fn subpath_count(&self) -> usize {
        self.count(|c| matches!(c, PathCommand::MoveTo(_)))
    }

    /// Number of arc (`A`) commands.
    pub fn arc_count(&self) -> usize {
        self.count(|c| matches!(c, PathCommand::ArcTo { .. }))
    }

    fn count(&self, f: impl Fn(&PathCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| f(c)).count()
    }

    pub(crate) fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub(crate) fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
    }

    pub(crate) fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Appends a closed polyline as its own subpath. Does nothing for an empty slice.
    pub(crate) fn polygon(&mut self, points: impl IntoIterator<Item = Point>) {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return;
        };
        self.move_to(first);
        for p in points {
            self.line_to(p);
        }
        self.close();
    }

    /// Converts the path into a [`BezPath`], flattening arcs into cubic segments.
    ///
    /// Arcs that cannot be represented (coincident end points, zero radius) become straight
    /// segments.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut out = BezPath::new();
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    out.move_to(p);
                    start = p;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    out.line_to(p);
                    current = p;
                }
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let svg_arc = SvgArc {
                        from: current,
                        to,
                        radii: Vec2::new(radius.abs(), radius.abs()),
                        x_rotation: 0.0,
                        large_arc,
                        sweep,
                    };
                    match Arc::from_svg_arc(&svg_arc) {
                        Some(arc) => out.extend(arc.append_iter(tolerance)),
                        None => out.line_to(to),
                    }
                    current = to;
                }
                PathCommand::Close => {
                    out.close_path();
                    current = start;
                }
            }
        }
        out
    }
}

/// Writes a coordinate, printing negative zero as `0`.
fn num(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    write!(f, "{}", v + 0.0)
}

fn point(f: &mut fmt::Formatter<'_>, p: Point) -> fmt::Result {
    num(f, p.x)?;
    f.write_str(",")?;
    num(f, p.y)
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo(p) => {
                f.write_str("M")?;
                point(f, p)
            }
            Self::LineTo(p) => {
                f.write_str("L")?;
                point(f, p)
            }
            Self::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                f.write_str("A")?;
                point(f, Point::new(radius, radius))?;
                write!(f, " 0,{},{} ", u8::from(large_arc), u8::from(sweep))?;
                point(f, to)
            }
            Self::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PolarPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::Shape;

    use super::*;

    #[test]
    fn empty_path_prints_the_sentinel() {
        let path = PolarPath::empty();
        assert_eq!(path.to_string(), "M0,0Z");
        assert!(path.is_empty_sentinel());
        assert_eq!(path.subpath_count(), 1);
    }

    #[test]
    fn commands_use_svg_syntax() {
        let mut path = PolarPath::new();
        path.move_to(Point::new(1.5, -0.0));
        path.arc_to(2.0, false, true, Point::new(0.0, 2.0));
        path.line_to(Point::new(-3.0, 4.25));
        path.close();
        assert_eq!(path.to_string(), "M1.5,0A2,2 0,0,1 0,2L-3,4.25Z");
        assert!(!path.is_empty_sentinel());
        assert_eq!(path.arc_count(), 1);
    }

    #[test]
    fn polygon_skips_empty_input() {
        let mut path = PolarPath::new();
        path.polygon([]);
        assert!(path.commands().is_empty());
        path.polygon([Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
        assert_eq!(path.to_string(), "M0,0L1,0L0,1Z");
    }

    #[test]
    fn bez_path_follows_the_arc() {
        // Quarter circle of radius 10 around the origin, counterclockwise on screen.
        let mut path = PolarPath::new();
        path.move_to(Point::new(10.0, 0.0));
        path.arc_to(10.0, false, false, Point::new(0.0, -10.0));
        path.line_to(Point::ZERO);
        path.close();

        let bez = path.to_bez_path(0.01);
        let bounds = bez.bounding_box();
        assert!((bounds.x0 - 0.0).abs() < 1e-3, "{bounds:?}");
        assert!((bounds.x1 - 10.0).abs() < 1e-3, "{bounds:?}");
        assert!((bounds.y0 + 10.0).abs() < 1e-3, "{bounds:?}");
        assert!((bounds.y1 - 0.0).abs() < 1e-3, "{bounds:?}");
        let area = bez.area().abs();
        let quarter = core::f64::consts::PI * 100.0 / 4.0;
        assert!((area - quarter).abs() < 0.05, "area {area}");
    }
}

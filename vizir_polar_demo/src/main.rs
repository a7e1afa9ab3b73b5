// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar bar chart demo for `vizir_barpolar`.
//!
//! Draws the same wind rose twice, once on a circular grid with a linear radial axis and once
//! on an octagonal grid with a log radial axis, and writes `vizir_polar_demo.svg`.

mod svg;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use vizir_barpolar::{
    AngularAxis, AngularScale, BarLayout, BarPolarLayout, BarRecord, RadialAxis, RadialScale,
    ScaleLinearSpec, ScaleLogSpec, ScaleSpec,
};
use vizir_polar::{VertexAngles, path_arc, path_polygon};

const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
const SECTOR_WIDTH: f64 = 360.0 / 8.0;
const RADIUS: f64 = 140.0;

/// Share of observations per direction, one row per wind speed band.
const BANDS: [(&str, [f64; 8]); 3] = [
    ("0-5 m/s", [6.0, 4.0, 3.5, 2.0, 5.0, 7.5, 9.0, 5.5]),
    ("5-10 m/s", [4.0, 2.5, 1.5, 0.0, 3.0, 6.0, 8.5, 4.0]),
    ("10+ m/s", [1.5, 0.5, 0.5, 0.0, 1.0, 3.5, 6.0, 2.0]),
];

fn band_color(band: usize) -> Color {
    match band {
        0 => css::STEEL_BLUE,
        1 => css::GOLD,
        _ => css::TOMATO,
    }
}

/// Stacks the bands per direction: each bar starts where the previous band ended, the first
/// one at `floor`.
fn wind_records(floor: f64) -> Vec<(usize, BarRecord)> {
    let mut base = [floor; 8];
    let mut records = Vec::new();
    for (band, (_, values)) in BANDS.iter().enumerate() {
        for (dir, &value) in values.iter().enumerate() {
            let p = dir as f64 * SECTOR_WIDTH;
            records.push((band, BarRecord::new(p, SECTOR_WIDTH, base[dir], value)));
            base[dir] += value;
        }
    }
    records
}

fn main() {
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(Rect::new(0.0, 0.0, 760.0, 400.0));

    let circular = wind_rose(
        &mut scene,
        "circular grid, linear radius",
        Point::new(190.0, 210.0),
        ScaleLinearSpec::new((0.0, 25.0)).into(),
        0.0,
        None,
    );
    let octagon = match VertexAngles::regular(DIRECTIONS.len(), FRAC_PI_2) {
        Ok(vertices) => vertices,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            return;
        }
    };
    let polygonal = wind_rose(
        &mut scene,
        "octagonal grid, log radius",
        Point::new(570.0, 210.0),
        ScaleLogSpec::new((1.0, 100.0)).into(),
        1.0,
        Some(octagon),
    );

    for (name, layouts) in [("circular", &circular), ("polygonal", &polygonal)] {
        let blank = layouts.iter().filter(|b| b.is_degenerate()).count();
        println!("{name}: {} bars, {blank} degenerate", layouts.len());
    }

    std::fs::write("vizir_polar_demo.svg", scene.to_svg_string())
        .expect("write vizir_polar_demo.svg");
    println!("wrote vizir_polar_demo.svg");
}

fn wind_rose(
    scene: &mut svg::SvgScene,
    title: &str,
    center: Point,
    radial_spec: ScaleSpec,
    floor: f64,
    grid: Option<VertexAngles>,
) -> Vec<BarLayout> {
    let radial = RadialScale::new(radial_spec, RADIUS);
    let angular = AngularScale::compass();
    let (x, y) = radial.cartesian_axes(center);

    draw_grid(scene, &radial, &angular, center, grid.as_ref());

    let mut layout = BarPolarLayout::new(&radial, &angular, &x, &y)
        .with_center(center)
        .with_offset(-SECTOR_WIDTH / 2.0);
    if let Some(vertex_angles) = grid {
        layout = layout.with_vertex_angles(vertex_angles);
    }

    let records = wind_records(floor);
    let bars: Vec<BarRecord> = records.iter().map(|(_, r)| *r).collect();
    let layouts = layout.layout(&bars);
    for ((band, _), bar) in records.iter().zip(&layouts) {
        scene.push_path(
            &bar.path,
            band_color(*band).with_alpha(0.85),
            css::WHITE,
            1.0,
        );
    }

    // Label the outermost band with the total share.
    let outer = records.len() - DIRECTIONS.len();
    for bar in &layouts[outer..] {
        if let Some(ct) = bar.ct {
            let anchor = ct + (ct - center).normalize() * 10.0;
            scene.push_text(anchor, format!("{}", bar.s1 - floor), 10.0, css::DARK_GRAY);
        }
    }

    scene.push_text(
        Point::new(center.x, center.y - RADIUS - 40.0),
        title,
        14.0,
        css::BLACK,
    );
    for (i, (name, _)) in BANDS.iter().enumerate() {
        let pos = Point::new(center.x - 60.0 + 60.0 * i as f64, center.y + RADIUS + 30.0);
        scene.push_text(pos, *name, 10.0, band_color(i));
    }

    layouts
}

fn draw_grid(
    scene: &mut svg::SvgScene,
    radial: &RadialScale,
    angular: &AngularScale,
    center: Point,
    grid: Option<&VertexAngles>,
) {
    let grid_stroke = css::BLACK.with_alpha(40.0 / 255.0);
    for tick in radial.scale().ticks(5) {
        let r = radial.c2p(tick);
        if r.is_nan() || r <= 0.0 {
            continue;
        }
        let ring = match grid {
            Some(vertex_angles) => {
                path_polygon(r, [0.0, 360.0], vertex_angles, center.x, center.y)
            }
            None => path_arc(r, 0.0, TAU, center.x, center.y),
        };
        scene.push_path(&ring, Color::TRANSPARENT, grid_stroke, 1.0);
        scene.push_text(
            Point::new(center.x + 4.0, center.y - r - 6.0),
            format!("{tick}"),
            8.0,
            css::GRAY,
        );
    }

    for (i, name) in DIRECTIONS.iter().enumerate() {
        let a = angular.c2g(i as f64 * SECTOR_WIDTH);
        let dir = Vec2::new(a.cos(), -a.sin());
        scene.push_line(center, center + dir * RADIUS, grid_stroke);
        scene.push_text(center + dir * (RADIUS + 14.0), *name, 11.0, css::BLACK);
    }
}

//! Test drawing builders.
//!
//! `create_mixed_drawing()` produces one instance of every entity kind the
//! analysis distinguishes, laid out on a grid, plus a few unsupported
//! annotations.

#![allow(dead_code)]

use dxf_cutting_metrics::entities::*;
use dxf_cutting_metrics::types::{Vector2, Vector3};
use dxf_cutting_metrics::Drawing;
use std::f64::consts::PI;

/// A closed axis-aligned rectangle as a lightweight polyline
pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> LwPolyline {
    let mut poly = LwPolyline::from_points(vec![
        Vector2::new(x, y),
        Vector2::new(x + width, y),
        Vector2::new(x + width, y + height),
        Vector2::new(x, y + height),
    ]);
    poly.close();
    poly
}

/// A slot: two straight sides joined by semicircular ends (bulge 1)
pub fn slot(x: f64, y: f64, length: f64, width: f64) -> LwPolyline {
    let mut poly = LwPolyline::new();
    poly.add_point(Vector2::new(x, y));
    poly.add_point_with_bulge(Vector2::new(x + length, y), 1.0);
    poly.add_point(Vector2::new(x + length, y + width));
    poly.add_point_with_bulge(Vector2::new(x, y + width), 1.0);
    poly.close();
    poly
}

/// Expected cutting length of [`slot`]
pub fn slot_length(length: f64, width: f64) -> f64 {
    2.0 * length + PI * width
}

/// Every measurable kind once, plus unsupported annotations, on a 25-unit grid.
///
/// Returns the drawing and the expected total cutting length.
pub fn create_mixed_drawing() -> (Drawing, f64) {
    let mut drawing = Drawing::new("mixed.dxf");
    let sp = 25.0;
    let mut expected = 0.0;

    // Row 1 - basic geometry
    drawing.add_entity(Point::from_coords(0.0, 0.0, 0.0));

    drawing.add_entity(Line::from_coords(sp, 0.0, 0.0, sp + 3.0, 4.0, 0.0));
    expected += 5.0;

    drawing.add_entity(EntityType::from(Circle::from_coords(2.0 * sp, 0.0, 0.0, 5.0)).on_layer("HOLES"));
    expected += 10.0 * PI;

    drawing.add_entity(Arc::from_coords(3.0 * sp, 0.0, 0.0, 5.0, 0.0, 180.0));
    expected += 5.0 * PI;

    // Row 2 - polylines
    drawing.add_entity(EntityType::from(rectangle(0.0, sp, 10.0, 10.0)).on_layer("OUTLINE"));
    expected += 40.0;

    let mut heavy = Polyline::from_points(vec![
        Vector3::new(sp, sp, 0.0),
        Vector3::new(sp + 6.0, sp, 0.0),
        Vector3::new(sp + 6.0, sp + 8.0, 0.0),
    ]);
    heavy.set_closed(true);
    drawing.add_entity(EntityType::from(heavy).on_layer("OUTLINE"));
    expected += 24.0;

    drawing.add_entity(slot(2.0 * sp, sp, 10.0, 4.0));
    expected += slot_length(10.0, 4.0);

    // Row 3 - free-form curves
    let spline = Spline::from_control_points(
        1,
        vec![
            Vector3::new(0.0, 2.0 * sp, 0.0),
            Vector3::new(3.0, 2.0 * sp + 4.0, 0.0),
        ],
    );
    drawing.add_entity(spline);
    expected += 5.0;

    let ellipse = Ellipse::from_center_axes(
        Vector3::new(sp, 2.0 * sp, 0.0),
        Vector3::new(10.0, 0.0, 0.0),
        0.5,
    );
    expected += ellipse.ramanujan_circumference();
    drawing.add_entity(ellipse);

    // Annotations
    drawing.add_entity(EntityType::unsupported("TEXT"));
    drawing.add_entity(EntityType::unsupported("DIMENSION").on_layer("DIMS"));
    drawing.add_entity(EntityType::unsupported("HATCH"));

    (drawing, expected)
}

/// `count` circles of varying radius spread over several layers
pub fn create_hole_pattern(count: usize) -> Drawing {
    let layers = ["0", "HOLES", "SLOTS", ""];
    let mut drawing = Drawing::new("pattern.dxf");
    for i in 0..count {
        let x = (i % 50) as f64 * 12.0;
        let y = (i / 50) as f64 * 12.0;
        let radius = 1.0 + (i % 5) as f64;
        let entity: EntityType = match i % 4 {
            0 => Circle::from_coords(x, y, 0.0, radius).into(),
            1 => Line::from_coords(x, y, 0.0, x + radius, y, 0.0).into(),
            2 => slot(x, y, radius, 1.0).into(),
            _ => Arc::from_coords(x, y, 0.0, radius, 30.0, 300.0).into(),
        };
        drawing.add_entity(entity.on_layer(layers[i % layers.len()]));
    }
    drawing
}

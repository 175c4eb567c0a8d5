//! Shape generation for 2D primitives
//!
//! Builds the whole frame as one CPU-side triangle list from a render
//! snapshot; the pipeline uploads and draws it in a single pass.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors, rgba};
use crate::consts::*;
use crate::sim::{GamePhase, Obstacle, RenderSnapshot};
use crate::{is_road_lane, lane_band, lane_center};

/// Append a filled axis-aligned rectangle (two triangles)
pub fn rect(out: &mut Vec<Vertex>, x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) {
    let (x2, y2) = (x + width, y + height);
    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x2, y, color));
    out.push(Vertex::new(x2, y2, color));

    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x2, y2, color));
    out.push(Vertex::new(x, y2, color));
}

/// Append a filled quad from four counter-clockwise corners
pub fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

/// Append a filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = i as f32 / segments as f32 * TAU;
        let theta2 = (i + 1) as f32 / segments as f32 * TAU;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Lane bands with dashed center stripes on the road lanes
pub fn road(out: &mut Vec<Vertex>) {
    for lane in 0..LANE_COUNT {
        let (bottom, _) = lane_band(lane);
        if is_road_lane(lane) {
            rect(out, 0.0, bottom, WINDOW_WIDTH, LANE_HEIGHT, colors::ROAD);

            // Dashed stripe: 20 px dash every 40 px along the lane center
            let stripe_y = lane_center(lane) - 1.5;
            let mut x = 0.0;
            while x < WINDOW_WIDTH {
                rect(out, x, stripe_y, 20.0, 3.0, colors::LANE_STRIPE);
                x += 40.0;
            }
        } else {
            rect(out, 0.0, bottom, WINDOW_WIDTH, LANE_HEIGHT, colors::GRASS);
        }
    }
}

/// One vehicle: body, cabin, window, and two wheels
pub fn vehicle(out: &mut Vec<Vertex>, car: &Obstacle) {
    let (bottom, _) = lane_band(car.lane);
    let body = rgba(car.color);
    let (x, w) = (car.x, car.width);

    // Body occupies the middle of the band
    rect(out, x, bottom + LANE_HEIGHT * 0.3, w, LANE_HEIGHT * 0.4, body);

    // Cabin tapers toward the roof
    quad(
        out,
        [
            Vec2::new(x + w * 0.2, bottom + LANE_HEIGHT * 0.7),
            Vec2::new(x + w * 0.8, bottom + LANE_HEIGHT * 0.7),
            Vec2::new(x + w * 0.7, bottom + LANE_HEIGHT * 0.9),
            Vec2::new(x + w * 0.3, bottom + LANE_HEIGHT * 0.9),
        ],
        body,
    );

    rect(
        out,
        x + w * 0.3,
        bottom + LANE_HEIGHT * 0.7,
        w * 0.4,
        LANE_HEIGHT * 0.2,
        colors::CAR_WINDOW,
    );

    let wheel_y = bottom + LANE_HEIGHT * 0.2;
    circle(out, Vec2::new(x + w * 0.2, wheel_y), LANE_HEIGHT * 0.1, colors::WHEEL, 16);
    circle(out, Vec2::new(x + w * 0.8, wheel_y), LANE_HEIGHT * 0.1, colors::WHEEL, 16);
}

/// The player figure: head, shirt, pants, arms, eyes
pub fn player_figure(out: &mut Vec<Vertex>, pos: Vec2) {
    let s = PLAYER_SIZE;

    circle(out, Vec2::new(pos.x, pos.y + s * 0.3), s * 0.25, colors::SKIN, 24);

    rect(out, pos.x - s * 0.25, pos.y - s * 0.15, s * 0.5, s * 0.5, colors::SHIRT);

    rect(out, pos.x - s * 0.2, pos.y - s * 0.5, s * 0.15, s * 0.35, colors::PANTS);
    rect(out, pos.x + s * 0.05, pos.y - s * 0.5, s * 0.15, s * 0.35, colors::PANTS);

    rect(out, pos.x - s * 0.4, pos.y, s * 0.15, s * 0.25, colors::SKIN);
    rect(out, pos.x + s * 0.25, pos.y, s * 0.15, s * 0.25, colors::SKIN);

    circle(out, Vec2::new(pos.x - s * 0.1, pos.y + s * 0.35), s * 0.03, colors::EYE, 8);
    circle(out, Vec2::new(pos.x + s * 0.1, pos.y + s * 0.35), s * 0.03, colors::EYE, 8);
}

/// Build the full frame for a snapshot
///
/// The lane field is the backdrop on every screen; vehicles and the player
/// appear only during play.
pub fn scene(snap: &RenderSnapshot) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(1024);
    road(&mut out);

    if snap.phase == GamePhase::Playing {
        for car in snap.obstacles {
            vehicle(&mut out, car);
        }
        player_figure(&mut out, snap.player);
    }

    out
}

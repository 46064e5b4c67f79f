/*
 * Renderer Module
 *
 * This module handles the rendering of the carrying simulation.
 * Draw order is layering only: base first, then objects with their
 * remaining-carrier labels, followers colored by state, the leader with
 * its heading nose, the throw cursor, and the recall circle while the
 * command is held.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui::{self, UiStats};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(rgb(0.35, 0.78, 0.47));

    let sim = &model.sim;

    // Base: outline first, then the fill
    draw.ellipse()
        .xy(sim.base.position)
        .radius(sim.base.radius + 3.0)
        .color(BLACK);
    draw.ellipse()
        .xy(sim.base.position)
        .radius(sim.base.radius)
        .color(GREEN);

    // Objects with their remaining-carrier count above
    for obj in &sim.objects {
        draw.ellipse()
            .xy(obj.position)
            .radius(obj.radius)
            .color(BLACK);
        draw.text(&obj.remaining().to_string())
            .x_y(obj.position.x, obj.position.y + obj.radius + 10.0)
            .color(WHITE)
            .font_size(16);
    }

    // Followers, colored by state
    for follower in &sim.followers {
        draw.ellipse()
            .xy(follower.position)
            .radius(follower.radius)
            .color(follower.display_color())
            .stroke(BLACK)
            .stroke_weight(1.0);
    }

    // Leader with a nose showing the heading
    draw.ellipse()
        .xy(sim.leader.position)
        .radius(sim.leader.radius)
        .color(BLUE);
    let nose = sim.leader.position + sim.leader.heading * sim.leader.radius;
    draw.ellipse().xy(nose).radius(5.0).color(YELLOW);

    // Throw cursor, clamped to throw range from the leader
    let cursor = sim.command_point(model.input.pointer, &model.params);
    draw.ellipse().xy(cursor).radius(5.0).color(BLACK);

    // Recall circle outline while the command is held
    if model.input.recall_held {
        draw.ellipse()
            .xy(cursor)
            .radius(model.params.recall_radius)
            .no_fill()
            .stroke(BLACK)
            .stroke_weight(1.0);
    }

    // Draw debug info if enabled
    if model.params.show_debug {
        let stats = UiStats {
            followers: sim.followers.len(),
            objects: sim.objects.len(),
            deliveries: sim.deliveries,
        };
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), &stats);
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

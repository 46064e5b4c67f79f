/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides controls for adjusting
 * simulation parameters, and parameter change detection is handled by
 * the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Live entity counts shown in the panel
pub struct UiStats {
    pub followers: usize,
    pub objects: usize,
    pub deliveries: usize,
}

// Update the UI and return whether the simulation should be rebuilt,
// whether a world parameter changed, and whether a speed changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    stats: &UiStats,
) -> (bool, bool, bool) {
    let mut should_reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("World Setup", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.initial_followers,
                        SimulationParams::get_count_range(),
                    )
                    .text("Starting Followers"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.initial_objects,
                        SimulationParams::get_count_range(),
                    )
                    .text("Starting Objects"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.required_max,
                        SimulationParams::get_required_range(),
                    )
                    .text("Max Carriers Needed"),
                );
                ui.horizontal(|ui| {
                    ui.label("World Seed");
                    ui.add(egui::DragValue::new(&mut params.seed).speed(1.0));
                });

                if ui.button("Restart Simulation").clicked() {
                    should_reset = true;
                }
            });

            ui.collapsing("Movement", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.leader_speed, SimulationParams::get_speed_range())
                        .text("Leader Speed"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.follower_speed,
                        SimulationParams::get_speed_range(),
                    )
                    .text("Follower Speed"),
                );
                ui.add(
                    egui::Slider::new(&mut params.carry_speed, SimulationParams::get_speed_range())
                        .text("Carry Speed"),
                );
            });

            ui.collapsing("Command Ranges", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.throw_limit, SimulationParams::get_reach_range())
                        .text("Throw Limit"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.throw_proximity,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Throw Proximity"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.detect_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Detection Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.recall_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Recall Radius"),
                );
            });

            ui.collapsing("Population", |ui| {
                ui.checkbox(&mut params.enable_population_cap, "Cap Follower Population");
                ui.add(
                    egui::Slider::new(&mut params.max_followers, SimulationParams::get_cap_range())
                        .text("Max Followers"),
                );

                ui.separator();

                ui.label(format!("Followers: {}", stats.followers));
                ui.label(format!("Objects Remaining: {}", stats.objects));
                ui.label(format!("Delivered: {}", stats.deliveries));
                ui.label(format!("FPS: {:.1}", debug_info.fps));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (world_changed, speeds_changed) = params.detect_changes();

    (should_reset, world_changed, speeds_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    stats: &UiStats,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Followers: {}", stats.followers),
        format!("Objects Remaining: {}", stats.objects),
        format!("Delivered: {}", stats.deliveries),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}

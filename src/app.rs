/*
 * Application Module
 *
 * This module defines the main application model and update logic.
 * It wires the window and its event callbacks, owns the simulation
 * alongside the parameters and input state, and advances the world by
 * exactly one fixed simulation step per update.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input::{self, InputState};
use crate::params::SimulationParams;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui::{self, UiStats};
use crate::{WIN_HEIGHT, WIN_WIDTH};

// Main model for the application
pub struct Model {
    pub sim: Simulation,
    pub params: SimulationParams,
    pub input: InputState,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Create the main window
    let window_id = app
        .new_window()
        .title("Carriers")
        .size(WIN_WIDTH as u32, WIN_HEIGHT as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .key_released(input::key_released)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters and the world
    let params = SimulationParams::default();
    let sim = Simulation::new(&params);

    Model {
        sim,
        params,
        input: InputState::default(),
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let stats = UiStats {
        followers: model.sim.followers.len(),
        objects: model.sim.objects.len(),
        deliveries: model.sim.deliveries,
    };

    // Update UI and check what changed
    let (should_reset, world_changed, speeds_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info, &stats);

    // An explicit restart is a brand new world, so it draws a fresh seed.
    // Editing the seed slider instead keeps the rebuild deterministic.
    if should_reset {
        model.params.reroll_seed(&mut rand::thread_rng());
    }

    // A changed world parameter or an explicit restart rebuilds the world
    if should_reset || world_changed {
        model.sim = Simulation::new(&model.params);
    }

    // Push changed speeds onto the live entities
    if speeds_changed {
        model.sim.leader.speed = model.params.leader_speed;
        for follower in &mut model.sim.followers {
            follower.speed = model.params.follower_speed;
        }
    }

    // Snapshot the frame's input; this also clears the latched edge events
    // so a click during pause does not fire on resume
    let frame_input = model.input.take_frame();

    if !model.params.pause_simulation {
        model.sim.step(&frame_input, &model.params);
    }
}

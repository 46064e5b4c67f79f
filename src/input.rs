/*
 * Input Module
 *
 * This module handles user input events for the carrying simulation.
 * Event callbacks accumulate into an InputState on the model; once per
 * update the app takes a FrameInput snapshot, which clears the latched
 * edge events (throw, rally) while level inputs (movement keys, recall
 * button) persist until released.
 *
 * Controls:
 * - WASD / arrows: move the leader
 * - Left click: throw a nearby follower at the cursor
 * - Right button (held): recall circle at the cursor
 * - Space: rally idle followers back into formation
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

#[derive(Default)]
pub struct InputState {
    pub pointer: Vec2,
    pub recall_held: bool,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    throw_pressed: bool,
    rally_pressed: bool,
}

impl InputState {
    // Digital movement vector; the leader normalizes it
    pub fn movement(&self) -> Vec2 {
        vec2(
            (self.right as i32 - self.left as i32) as f32,
            (self.up as i32 - self.down as i32) as f32,
        )
    }

    // Snapshot the frame's input and clear the edge-triggered events
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            movement: self.movement(),
            pointer: self.pointer,
            throw_pressed: self.throw_pressed,
            rally_pressed: self.rally_pressed,
            recall_held: self.recall_held,
        };
        self.throw_pressed = false;
        self.rally_pressed = false;
        frame
    }
}

// One frame's worth of input, as consumed by Simulation::step
#[derive(Clone, Copy, Default)]
pub struct FrameInput {
    pub movement: Vec2,
    pub pointer: Vec2,
    pub throw_pressed: bool,
    pub rally_pressed: bool,
    pub recall_held: bool,
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::W | Key::Up => model.input.up = true,
        Key::S | Key::Down => model.input.down = true,
        Key::A | Key::Left => model.input.left = true,
        Key::D | Key::Right => model.input.right = true,
        Key::Space => model.input.rally_pressed = true,
        _ => {}
    }
}

// Key released event handler
pub fn key_released(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::W | Key::Up => model.input.up = false,
        Key::S | Key::Down => model.input.down = false,
        Key::A | Key::Left => model.input.left = false,
        Key::D | Key::Right => model.input.right = false,
        _ => {}
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.input.pointer = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the UI are not game commands
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }
    match button {
        MouseButton::Left => model.input.throw_pressed = true,
        MouseButton::Right => model.input.recall_held = true,
        _ => {}
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Right {
        model.input.recall_held = false;
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

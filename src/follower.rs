/*
 * Follower Module
 *
 * This module defines the Follower struct and its state machine.
 * A follower is always in exactly one of four states:
 * - Idle: standing free, waiting to be rallied or assigned work
 * - Following: trailing a fixed distance behind the leader
 * - Thrown: flying toward a throw target, shrinking in flight
 * - Carrying: assigned to an object; its position is written by the
 *   object's cooperative-carry update, never by the follower itself
 *
 * The tagged enum makes the invalid flag combinations of a boolean-flag
 * design (e.g. thrown while carrying) unrepresentable.
 */

use nannou::prelude::*;

use crate::geometry;
use crate::leader::Leader;
use crate::object::ObjectId;
use crate::{FLIGHT_SHRINK, FOLLOWER_RADIUS, MIN_FLIGHT_RADIUS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FollowerState {
    Idle,
    Following,
    Thrown,
    Carrying,
}

#[derive(Clone)]
pub struct Follower {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub state: FollowerState,
    // Handle of the object this follower is carrying; Some iff Carrying
    pub held_object: Option<ObjectId>,
    // Landing point while Thrown; Some implies Thrown
    pub throw_target: Option<Vec2>,
}

impl Follower {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            radius: FOLLOWER_RADIUS,
            speed,
            state: FollowerState::Idle,
            held_object: None,
            throw_target: None,
        }
    }

    // Per-frame state update. Idle followers hold position, and Carrying
    // followers are driven by their object's update instead.
    pub fn update(&mut self, leader: &Leader) {
        match self.state {
            FollowerState::Following => {
                if let Some(step) =
                    geometry::step_toward(self.position, leader.follow_anchor(), self.speed)
                {
                    self.position += step;
                }
            }
            FollowerState::Thrown => {
                if let Some(target) = self.throw_target {
                    if let Some(step) = geometry::step_toward(self.position, target, self.speed) {
                        self.position += step;
                        self.radius = (self.radius * FLIGHT_SHRINK).max(MIN_FLIGHT_RADIUS);
                    } else {
                        self.land();
                    }
                } else {
                    // A thrown follower always has a target; recover anyway
                    self.land();
                }
            }
            FollowerState::Idle | FollowerState::Carrying => {}
        }
    }

    // Launch toward a (pre-clamped) target
    pub fn throw_at(&mut self, target: Vec2) {
        self.state = FollowerState::Thrown;
        self.throw_target = Some(target);
    }

    // Arrival at the throw target: restore the nominal radius and become
    // eligible for new work on the next frame
    fn land(&mut self) {
        self.throw_target = None;
        self.radius = FOLLOWER_RADIUS;
        self.state = FollowerState::Idle;
    }

    // Force this follower back into formation, dropping any task or flight.
    // Returns the object handle it was carrying so the caller can release
    // the assignment slot.
    pub fn return_to_formation(&mut self) -> Option<ObjectId> {
        let released = self.held_object.take();
        self.throw_target = None;
        self.radius = FOLLOWER_RADIUS;
        self.state = FollowerState::Following;
        released
    }

    pub fn display_color(&self) -> Rgb<u8> {
        match self.state {
            FollowerState::Idle => rgb(150, 150, 150),
            FollowerState::Following => rgb(220, 40, 40),
            FollowerState::Thrown => rgb(235, 200, 60),
            FollowerState::Carrying => rgb(235, 140, 40),
        }
    }
}

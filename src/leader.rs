/*
 * Leader Module
 *
 * The player-controlled unit. The leader moves at a fixed speed per frame
 * and remembers the last nonzero movement direction as its heading, which
 * followers trail behind and the renderer uses for the nose indicator.
 */

use nannou::prelude::*;

use crate::{FOLLOW_OFFSET, LEADER_RADIUS};

#[derive(Clone)]
pub struct Leader {
    pub position: Vec2,
    pub heading: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl Leader {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            heading: vec2(1.0, 0.0),
            speed,
            radius: LEADER_RADIUS,
        }
    }

    // Move in the direction of the (digital) input vector. Zero input leaves
    // both position and heading untouched - there is no deceleration.
    pub fn steer(&mut self, input: Vec2) {
        if input.length_squared() > 0.0 {
            let dir = input.normalize();
            self.position += dir * self.speed;
            self.heading = dir;
        }
    }

    // The trailing-formation point followers move toward
    pub fn follow_anchor(&self) -> Vec2 {
        self.position - self.heading * FOLLOW_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_input_is_a_no_op() {
        let mut leader = Leader::new(vec2(10.0, -4.0), 5.0);
        leader.steer(Vec2::ZERO);
        assert_eq!(leader.position, vec2(10.0, -4.0));
        assert_eq!(leader.heading, vec2(1.0, 0.0));
    }

    #[test]
    fn nonzero_input_normalizes_and_updates_heading() {
        let mut leader = Leader::new(Vec2::ZERO, 5.0);
        leader.steer(vec2(0.0, 2.0));
        assert_eq!(leader.position, vec2(0.0, 5.0));
        assert_eq!(leader.heading, vec2(0.0, 1.0));

        // Diagonal input still moves at exactly `speed` units
        leader.steer(vec2(1.0, 1.0));
        let moved = leader.position.distance(vec2(0.0, 5.0));
        assert!((moved - 5.0).abs() < 1e-4);
    }

    #[test]
    fn follow_anchor_sits_behind_the_heading() {
        let mut leader = Leader::new(vec2(100.0, 0.0), 5.0);
        leader.heading = vec2(1.0, 0.0);
        assert_eq!(leader.follow_anchor(), vec2(100.0 - FOLLOW_OFFSET, 0.0));
    }
}

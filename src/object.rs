/*
 * Carryable Object Module
 *
 * A carryable object is a task entity that needs a threshold number of
 * followers before it moves. Below the threshold it stays put while its
 * assignees walk over to it; at the threshold the object and every assignee
 * displace together toward the base; within arrival distance of the base it
 * is delivered, its crew is released back into formation, and the caller
 * spawns replacement followers.
 *
 * Objects reference their crew by index into the follower collection
 * (followers are never destroyed, so indices stay valid), and followers
 * reference objects by stable ObjectId - no mutual direct references.
 */

use nannou::prelude::*;

use crate::base::Base;
use crate::follower::{Follower, FollowerState};
use crate::geometry;
use crate::OBJECT_RADIUS;

// Stable handle for an object; survives removal of other objects
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ObjectId(pub u32);

#[derive(Clone)]
pub struct CarryObject {
    pub id: ObjectId,
    pub position: Vec2,
    pub radius: f32,
    // Number of carriers needed before the object moves, fixed at creation
    pub required: usize,
    // Monotonic: once delivered the object leaves the active set for good
    pub delivered: bool,
    // Indices of assigned followers, unique membership
    pub assigned: Vec<usize>,
}

impl CarryObject {
    pub fn new(id: ObjectId, position: Vec2, required: usize) -> Self {
        Self {
            id,
            position,
            radius: OBJECT_RADIUS,
            required,
            delivered: false,
            assigned: Vec::new(),
        }
    }

    pub fn can_accept_follower(&self) -> bool {
        !self.delivered && self.assigned.len() < self.required
    }

    // Callers must check can_accept_follower first; claiming past capacity
    // is a contract violation, not a runtime error
    pub fn claim(&mut self, follower: usize) {
        debug_assert!(self.can_accept_follower());
        debug_assert!(!self.assigned.contains(&follower));
        self.assigned.push(follower);
    }

    // Releasing a follower that is not assigned is a no-op
    pub fn release(&mut self, follower: usize) {
        self.assigned.retain(|&idx| idx != follower);
    }

    // Carriers still missing, shown as the object's label
    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.assigned.len())
    }

    // Per-frame cooperative-carry update. Returns true on the frame the
    // object is delivered so the caller can trigger the spawner.
    pub fn update(&mut self, followers: &mut [Follower], base: &Base, carry_speed: f32) -> bool {
        if self.delivered || self.assigned.is_empty() {
            return false;
        }

        if self.assigned.len() < self.required {
            // Gather phase: assignees walk over while the object waits
            for &idx in &self.assigned {
                let follower = &mut followers[idx];
                if let Some(step) =
                    geometry::step_toward(follower.position, self.position, follower.speed)
                {
                    follower.position += step;
                }
            }
            return false;
        }

        match geometry::step_toward(self.position, base.position, carry_speed) {
            Some(step) => {
                // Identical displacement keeps the crew visually locked on
                self.position += step;
                for &idx in &self.assigned {
                    followers[idx].position += step;
                }
                false
            }
            None => {
                self.delivered = true;
                for &idx in &self.assigned {
                    followers[idx].held_object = None;
                    followers[idx].state = FollowerState::Following;
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crew(count: usize, position: Vec2) -> Vec<Follower> {
        (0..count).map(|_| Follower::new(position, 5.0)).collect()
    }

    #[test]
    fn capacity_is_enforced_by_the_accept_check() {
        let mut obj = CarryObject::new(ObjectId(0), Vec2::ZERO, 2);
        assert!(obj.can_accept_follower());
        obj.claim(0);
        assert!(obj.can_accept_follower());
        obj.claim(1);
        // A third claim attempt must be rejected here
        assert!(!obj.can_accept_follower());
        assert_eq!(obj.assigned.len(), 2);
    }

    #[test]
    fn releasing_an_absent_follower_is_a_no_op() {
        let mut obj = CarryObject::new(ObjectId(0), Vec2::ZERO, 2);
        obj.claim(4);
        obj.release(7);
        assert_eq!(obj.assigned, vec![4]);
        obj.release(4);
        assert!(obj.assigned.is_empty());
    }

    #[test]
    fn below_threshold_the_crew_gathers_and_the_object_waits() {
        let base = Base::new(vec2(1000.0, 0.0));
        let mut followers = crew(1, vec2(40.0, 0.0));
        followers[0].state = FollowerState::Carrying;
        let mut obj = CarryObject::new(ObjectId(0), Vec2::ZERO, 2);
        obj.claim(0);

        assert!(!obj.update(&mut followers, &base, 4.0));
        assert_eq!(obj.position, Vec2::ZERO);
        assert_eq!(followers[0].position, vec2(35.0, 0.0));
    }

    #[test]
    fn at_threshold_the_object_and_crew_move_together() {
        let base = Base::new(vec2(100.0, 0.0));
        let mut followers = crew(2, vec2(0.0, 10.0));
        let mut obj = CarryObject::new(ObjectId(0), Vec2::ZERO, 2);
        obj.claim(0);
        obj.claim(1);

        assert!(!obj.update(&mut followers, &base, 4.0));
        assert_eq!(obj.position, vec2(4.0, 0.0));
        assert_eq!(followers[0].position, vec2(4.0, 10.0));
        assert_eq!(followers[1].position, vec2(4.0, 10.0));
        assert!(!obj.delivered);
    }

    #[test]
    fn delivery_releases_the_crew() {
        let base = Base::new(vec2(100.0, 0.0));
        let mut followers = crew(1, vec2(97.0, 0.0));
        followers[0].state = FollowerState::Carrying;
        followers[0].held_object = Some(ObjectId(0));
        let mut obj = CarryObject::new(ObjectId(0), vec2(97.0, 0.0), 1);
        obj.claim(0);

        assert!(obj.update(&mut followers, &base, 4.0));
        assert!(obj.delivered);
        assert_eq!(followers[0].state, FollowerState::Following);
        assert_eq!(followers[0].held_object, None);

        // Delivered objects never update again
        assert!(!obj.update(&mut followers, &base, 4.0));
    }

    #[test]
    fn an_unclaimed_object_does_nothing() {
        let base = Base::new(vec2(100.0, 0.0));
        let mut followers = crew(0, Vec2::ZERO);
        let mut obj = CarryObject::new(ObjectId(0), Vec2::ZERO, 1);
        assert!(!obj.update(&mut followers, &base, 4.0));
        assert_eq!(obj.position, Vec2::ZERO);
    }
}

/*
 * Simulation Module
 *
 * This module owns every entity collection and runs the canonical frame
 * order. One call to step() advances the world by exactly one fixed step;
 * nothing here is integrated by elapsed time, so the frame rate of the
 * pacing layer directly sets the simulation speed - that coupling is a
 * preserved behavior, not an oversight.
 *
 * Frame order:
 * 1. Leader movement from the input vector
 * 2. Rally / throw commands (edge events)
 * 3. Task assignment: free followers claim the nearest eligible object
 * 4. Per-follower state updates
 * 5. Per-object carry updates (deliveries spawn replacements, delivered
 *    objects are removed only after the pass)
 * 6. Recall circle while the command is held
 * 7. Pairwise overlap resolution
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::base::{Base, Spawner};
use crate::follower::{Follower, FollowerState};
use crate::geometry;
use crate::input::FrameInput;
use crate::leader::Leader;
use crate::object::{CarryObject, ObjectId};
use crate::params::SimulationParams;
use crate::{OVERLAP_TOLERANCE, SEPARATION_PUSH, SPAWN_MARGIN, WIN_HEIGHT, WIN_WIDTH};

pub struct Simulation {
    pub leader: Leader,
    pub followers: Vec<Follower>,
    pub objects: Vec<CarryObject>,
    pub base: Base,
    pub spawner: Spawner,
    pub deliveries: usize,
    rng: StdRng,
    next_object_id: u32,
}

impl Simulation {
    pub fn new(params: &SimulationParams) -> Self {
        Self::from_seed(params, params.seed)
    }

    // Build a world from an explicit seed; a fixed seed reproduces the base
    // position, object placements and required-counts exactly
    pub fn from_seed(params: &SimulationParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = Base::new(random_field_position(&mut rng));

        let mut sim = Self {
            leader: Leader::new(Vec2::ZERO, params.leader_speed),
            followers: Vec::new(),
            objects: Vec::new(),
            base,
            spawner: Spawner,
            deliveries: 0,
            rng,
            next_object_id: 0,
        };

        for _ in 0..params.initial_objects {
            sim.spawn_object(params);
        }
        let Self {
            spawner,
            base,
            followers,
            rng,
            ..
        } = &mut sim;
        spawner.spawn_followers(
            base,
            followers,
            rng,
            params.initial_followers,
            params.follower_speed,
        );
        sim
    }

    fn spawn_object(&mut self, params: &SimulationParams) {
        let position = random_field_position(&mut self.rng);
        let required = self
            .rng
            .gen_range(params.required_min..=params.required_max);
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        self.objects.push(CarryObject::new(id, position, required));
    }

    // Advance the world by one fixed step
    pub fn step(&mut self, input: &FrameInput, params: &SimulationParams) {
        self.leader.steer(input.movement);

        if input.rally_pressed {
            self.rally();
        }
        if input.throw_pressed {
            self.throw_follower(input.pointer, params);
        }

        self.assign_tasks(params);
        self.update_followers();
        self.update_objects(params);

        if input.recall_held {
            self.apply_recall(input.pointer, params);
        }

        self.resolve_overlaps();
    }

    // The recall circle's center: the pointer, clamped to throw range
    pub fn command_point(&self, pointer: Vec2, params: &SimulationParams) -> Vec2 {
        geometry::clamp_to_range(self.leader.position, pointer, params.throw_limit)
    }

    // Rally command: idle followers snap to the leader and fall in.
    // Overlap resolution spreads the resulting pile over the next frames.
    fn rally(&mut self) {
        for follower in &mut self.followers {
            if follower.state == FollowerState::Idle {
                follower.position = self.leader.position;
                follower.state = FollowerState::Following;
            }
        }
    }

    // Throw command: the first follower in formation close enough to the
    // leader is launched at the clamped pointer position
    fn throw_follower(&mut self, pointer: Vec2, params: &SimulationParams) {
        let target = self.command_point(pointer, params);
        let leader_position = self.leader.position;
        if let Some(follower) = self.followers.iter_mut().find(|f| {
            f.state == FollowerState::Following
                && f.position.distance(leader_position) <= params.throw_proximity
        }) {
            follower.throw_at(target);
        }
    }

    // Match free followers to the nearest unclaimed eligible object in
    // detection range. First-encountered object wins distance ties, so the
    // stable scan order over the object vector is the tie-break.
    fn assign_tasks(&mut self, params: &SimulationParams) {
        for idx in 0..self.followers.len() {
            match self.followers[idx].state {
                FollowerState::Thrown | FollowerState::Carrying => continue,
                FollowerState::Idle | FollowerState::Following => {}
            }

            let position = self.followers[idx].position;
            let mut nearest: Option<(usize, f32)> = None;
            for (obj_idx, obj) in self.objects.iter().enumerate() {
                if !obj.can_accept_follower() {
                    continue;
                }
                let dist = position.distance(obj.position);
                if dist <= params.detect_radius
                    && nearest.map_or(true, |(_, best)| dist < best)
                {
                    nearest = Some((obj_idx, dist));
                }
            }

            if let Some((obj_idx, _)) = nearest {
                self.objects[obj_idx].claim(idx);
                let follower = &mut self.followers[idx];
                follower.state = FollowerState::Carrying;
                follower.held_object = Some(self.objects[obj_idx].id);
                follower.throw_target = None;
            }
        }
    }

    fn update_followers(&mut self) {
        let Self {
            leader, followers, ..
        } = self;
        for follower in followers.iter_mut() {
            follower.update(leader);
        }
    }

    // Run every object's carry update in stable order; a delivery spawns
    // that object's required-count in replacements at the base. Delivered
    // objects are only removed once the whole pass is done.
    fn update_objects(&mut self, params: &SimulationParams) {
        for idx in 0..self.objects.len() {
            let delivered = {
                let Self {
                    objects,
                    followers,
                    base,
                    ..
                } = self;
                objects[idx].update(followers, base, params.carry_speed)
            };

            if delivered {
                self.deliveries += 1;
                let mut count = self.objects[idx].required;
                if params.enable_population_cap {
                    count = count.min(params.max_followers.saturating_sub(self.followers.len()));
                }
                let Self {
                    spawner,
                    base,
                    followers,
                    rng,
                    ..
                } = self;
                spawner.spawn_followers(base, followers, rng, count, params.follower_speed);
            }
        }
        self.objects.retain(|obj| !obj.delivered);
    }

    // Continuous recall: every frame the command is held, followers inside
    // the circle are forced back into formation, dropping any carry slot
    // or throw in progress
    fn apply_recall(&mut self, pointer: Vec2, params: &SimulationParams) {
        let center = self.command_point(pointer, params);
        for idx in 0..self.followers.len() {
            if self.followers[idx].position.distance(center) <= params.recall_radius {
                if let Some(id) = self.followers[idx].return_to_formation() {
                    if let Some(obj) = self.objects.iter_mut().find(|obj| obj.id == id) {
                        obj.release(idx);
                    }
                }
            }
        }
    }

    // Push apart every overlapping pair of followers. Single pass, no
    // iteration to convergence: residual overlap dissipates over the next
    // frames as a soft constraint.
    fn resolve_overlaps(&mut self) {
        for i in 0..self.followers.len() {
            for j in (i + 1)..self.followers.len() {
                let a = self.followers[i].position;
                let b = self.followers[j].position;
                let limit = self.followers[i].radius + self.followers[j].radius - OVERLAP_TOLERANCE;
                if a.distance(b) < limit {
                    let angle = geometry::angle_to(a, b);
                    let push = vec2(angle.cos(), angle.sin()) * SEPARATION_PUSH;
                    self.followers[i].position = a - push;
                    self.followers[j].position = b + push;
                }
            }
        }
    }
}

// Uniform position inside the window, away from the edges
fn random_field_position(rng: &mut StdRng) -> Vec2 {
    let x = rng.gen_range((-WIN_WIDTH / 2.0 + SPAWN_MARGIN)..(WIN_WIDTH / 2.0 - SPAWN_MARGIN));
    let y = rng.gen_range((-WIN_HEIGHT / 2.0 + SPAWN_MARGIN)..(WIN_HEIGHT / 2.0 - SPAWN_MARGIN));
    vec2(x, y)
}

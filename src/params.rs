/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the carrying simulation. These parameters can
 * be modified through the UI. It also provides methods for parameter change
 * detection so the app knows when to rebuild the world or push new speeds
 * onto live entities.
 */

use rand::Rng;

pub struct SimulationParams {
    // Movement
    pub leader_speed: f32,
    pub follower_speed: f32,
    pub carry_speed: f32,
    // Command ranges
    pub throw_limit: f32,
    pub throw_proximity: f32,
    pub detect_radius: f32,
    pub recall_radius: f32,
    // World setup
    pub initial_followers: usize,
    pub initial_objects: usize,
    pub required_min: usize,
    pub required_max: usize,
    pub seed: u64,
    // Population control: deliveries spawn unbounded by default (the cap
    // only clips spawn batches, it never removes live followers)
    pub enable_population_cap: bool,
    pub max_followers: usize,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    initial_followers: usize,
    initial_objects: usize,
    required_min: usize,
    required_max: usize,
    seed: u64,
    leader_speed: f32,
    follower_speed: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            leader_speed: 5.0,
            follower_speed: 5.0,
            carry_speed: 4.0,
            throw_limit: 200.0,
            throw_proximity: 50.0,
            detect_radius: 50.0,
            recall_radius: 100.0,
            initial_followers: 5,
            initial_objects: 10,
            required_min: 1,
            required_max: 3,
            seed: 7,
            enable_population_cap: false,
            max_followers: 50,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            initial_followers: self.initial_followers,
            initial_objects: self.initial_objects,
            required_min: self.required_min,
            required_max: self.required_max,
            seed: self.seed,
            leader_speed: self.leader_speed,
            follower_speed: self.follower_speed,
        });
    }

    // Check what changed since the last snapshot.
    // Returns (world_changed, speeds_changed): a world change requires
    // rebuilding the simulation, a speed change only needs to be pushed
    // onto the live entities.
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut world_changed = false;
        let mut speeds_changed = false;

        if let Some(prev) = &self.previous_values {
            if self.initial_followers != prev.initial_followers
                || self.initial_objects != prev.initial_objects
                || self.required_min != prev.required_min
                || self.required_max != prev.required_max
                || self.seed != prev.seed
            {
                world_changed = true;
            }

            if self.leader_speed != prev.leader_speed
                || self.follower_speed != prev.follower_speed
            {
                speeds_changed = true;
            }
        }

        (world_changed, speeds_changed)
    }

    // Draw a fresh seed for an interactive restart. Editing the seed field
    // directly stays deterministic through the detect_changes path.
    pub fn reroll_seed<R: Rng>(&mut self, rng: &mut R) {
        self.seed = rng.gen();
    }

    // Get parameter ranges for UI sliders
    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        1.0..=10.0
    }

    pub fn get_reach_range() -> std::ops::RangeInclusive<f32> {
        50.0..=400.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=200.0
    }

    pub fn get_count_range() -> std::ops::RangeInclusive<usize> {
        0..=50
    }

    pub fn get_required_range() -> std::ops::RangeInclusive<usize> {
        1..=5
    }

    pub fn get_cap_range() -> std::ops::RangeInclusive<usize> {
        5..=500
    }
}

/*
 * Base and Spawner Module
 *
 * The base is the delivery destination and the origin for new followers.
 * The spawner places fresh followers in a random ring around the base;
 * it keeps no state of its own and works on whatever collections the
 * simulation hands it.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::follower::Follower;
use crate::{BASE_RADIUS, SPAWN_RING};

#[derive(Clone)]
pub struct Base {
    pub position: Vec2,
    pub radius: f32,
}

impl Base {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            radius: BASE_RADIUS,
        }
    }
}

pub struct Spawner;

impl Spawner {
    // Create `count` idle followers at uniformly random angles within the
    // spawn ring around the base
    pub fn spawn_followers<R: Rng>(
        &self,
        base: &Base,
        followers: &mut Vec<Follower>,
        rng: &mut R,
        count: usize,
        speed: f32,
    ) {
        for _ in 0..count {
            let angle = rng.gen_range(0.0..TAU);
            let dist = rng.gen_range(0.0..SPAWN_RING);
            let position = base.position + vec2(angle.cos(), angle.sin()) * dist;
            followers.push(Follower::new(position, speed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::follower::FollowerState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawned_followers_land_inside_the_ring() {
        let base = Base::new(vec2(120.0, -80.0));
        let mut followers = Vec::new();
        let mut rng = StdRng::seed_from_u64(11);
        Spawner.spawn_followers(&base, &mut followers, &mut rng, 20, 5.0);

        assert_eq!(followers.len(), 20);
        for follower in &followers {
            assert!(follower.position.distance(base.position) <= SPAWN_RING);
            assert_eq!(follower.state, FollowerState::Idle);
            assert_eq!(follower.speed, 5.0);
        }
    }

    #[test]
    fn spawning_is_reproducible_for_a_fixed_seed() {
        let base = Base::new(Vec2::ZERO);
        let mut first = Vec::new();
        let mut second = Vec::new();
        Spawner.spawn_followers(&base, &mut first, &mut StdRng::seed_from_u64(7), 8, 5.0);
        Spawner.spawn_followers(&base, &mut second, &mut StdRng::seed_from_u64(7), 8, 5.0);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.position, b.position);
        }
    }
}

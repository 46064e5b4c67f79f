/*
 * Geometry Module
 *
 * Shared vector helpers for the simulation. Every normalize-and-move in the
 * game goes through step_toward, which refuses to move inside the arrival
 * threshold so a near-zero distance never produces a NaN direction.
 */

use nannou::prelude::*;

use crate::ARRIVE_DISTANCE;

// Clamp a point to a maximum distance from an origin, along the same direction
pub fn clamp_to_range(origin: Vec2, point: Vec2, limit: f32) -> Vec2 {
    let offset = point - origin;
    let dist = offset.length();
    if dist > limit {
        origin + offset / dist * limit
    } else {
        point
    }
}

// Displacement of one fixed step toward a target, or None once within
// the arrival distance
pub fn step_toward(from: Vec2, to: Vec2, speed: f32) -> Option<Vec2> {
    let offset = to - from;
    let dist = offset.length();
    if dist > ARRIVE_DISTANCE {
        Some(offset / dist * speed)
    } else {
        None
    }
}

// Angle of the line from one point to another
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_limit_is_unchanged() {
        let point = clamp_to_range(vec2(0.0, 0.0), vec2(120.0, 0.0), 200.0);
        assert_eq!(point, vec2(120.0, 0.0));
    }

    #[test]
    fn clamp_outside_limit_lands_on_the_circle() {
        let point = clamp_to_range(vec2(0.0, 0.0), vec2(500.0, 0.0), 200.0);
        assert_eq!(point, vec2(200.0, 0.0));

        let diagonal = clamp_to_range(vec2(10.0, 10.0), vec2(310.0, 410.0), 100.0);
        let dist = diagonal.distance(vec2(10.0, 10.0));
        assert!((dist - 100.0).abs() < 1e-3);
    }

    #[test]
    fn step_toward_stops_inside_arrival_distance() {
        assert!(step_toward(vec2(0.0, 0.0), vec2(3.0, 0.0), 5.0).is_none());
        assert!(step_toward(vec2(0.0, 0.0), vec2(0.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn step_toward_moves_at_full_speed() {
        let step = step_toward(vec2(0.0, 0.0), vec2(0.0, 100.0), 5.0).unwrap();
        assert_eq!(step, vec2(0.0, 5.0));
        let diagonal = step_toward(vec2(0.0, 0.0), vec2(30.0, 40.0), 5.0).unwrap();
        assert!((diagonal.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn angle_to_follows_atan2_convention() {
        assert_eq!(angle_to(vec2(0.0, 0.0), vec2(10.0, 0.0)), 0.0);
        let up = angle_to(vec2(0.0, 0.0), vec2(0.0, 10.0));
        assert!((up - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}

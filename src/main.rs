/*
 * Leader/Follower Carrying Simulation
 *
 * A controllable leader directs a roster of followers to locate,
 * cooperatively carry, and deliver scattered objects to a home base,
 * which spawns more followers on every delivery.
 */

use carriers::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}

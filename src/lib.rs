/*
 * Leader/Follower Carrying Simulation - Module Definitions
 *
 * This file defines the module structure for the carrying simulation.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use base::{Base, Spawner};
pub use follower::{Follower, FollowerState};
pub use leader::Leader;
pub use object::{CarryObject, ObjectId};
pub use params::SimulationParams;
pub use input::{FrameInput, InputState};
pub use debug::DebugInfo;
pub use simulation::Simulation;
pub use app::Model;

// Define modules
pub mod geometry;
pub mod leader;
pub mod follower;
pub mod object;
pub mod base;
pub mod simulation;
pub mod params;
pub mod input;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;

// Window dimensions
pub const WIN_WIDTH: f32 = 800.0;
pub const WIN_HEIGHT: f32 = 600.0;

// Entity sizes
pub const LEADER_RADIUS: f32 = 20.0;
pub const FOLLOWER_RADIUS: f32 = 10.0;
pub const OBJECT_RADIUS: f32 = 15.0;
pub const BASE_RADIUS: f32 = 30.0;

// Movement thresholds
pub const FOLLOW_OFFSET: f32 = 37.0;
pub const ARRIVE_DISTANCE: f32 = 5.0;

// Thrown followers shrink each frame to fake an arc, down to a floor
pub const FLIGHT_SHRINK: f32 = 0.95;
pub const MIN_FLIGHT_RADIUS: f32 = 2.0;

// Placement
pub const SPAWN_RING: f32 = 30.0;
pub const SPAWN_MARGIN: f32 = 50.0;

// Overlap resolution
pub const OVERLAP_TOLERANCE: f32 = 1.0;
pub const SEPARATION_PUSH: f32 = 2.0;

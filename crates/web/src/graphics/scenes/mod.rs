// =============================================================================
// Aarohan Web - Decorative Scenes
// =============================================================================
// Table of Contents:
// 1. Scenes
// 2. Shared Camera
// =============================================================================

pub mod cube;
pub mod infinity;
pub mod logo;
pub mod rubiks;

pub use cube::CubeScene;
pub use infinity::InfinityScene;
pub use logo::LogoScene;
pub use rubiks::RubiksScene;

use glam::{Mat4, Vec2, Vec3};

/// Transparent clear so the page background shows through.
pub const CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Camera looking at the origin from `distance` along +Z.
pub fn camera(distance: f32) -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, Vec3::Y)
}

/// Small tilt following the pointer.
pub fn parallax(pointer: Vec2, strength: f32) -> Mat4 {
    Mat4::from_rotation_y(pointer.x * strength) * Mat4::from_rotation_x(-pointer.y * strength)
}

// =============================================================================
// Aarohan Web - Decorative Graphics
// =============================================================================
// Table of Contents:
// 1. Lifecycle (animation loop, GPU resources, managed surface)
// 2. Geometry and Shading
// 3. Scenes and 2-D Decorations
// =============================================================================

pub mod animation;
pub mod resources;
pub mod surface;

pub mod mesh;
pub mod program;

pub mod cursor;
pub mod particles;
pub mod scenes;

pub use cursor::CustomCursor;
pub use particles::ParticleField;
pub use scenes::{CubeScene, InfinityScene, LogoScene, RubiksScene};
pub use surface::{GlSurface, Scene, SceneBuilder, StaticFallback};

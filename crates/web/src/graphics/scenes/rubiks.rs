// =============================================================================
// Aarohan Web - Rubik's Cube Scene
// =============================================================================
// Table of Contents:
// 1. Move Schedule
// 2. Puzzle State
// 3. Scene
// =============================================================================
//
// 27 cubies, each with its own orientation. A layer twists 90° on a fixed
// cycle; when a twist finishes it is baked into the cubies of that layer so
// the puzzle really scrambles over time.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use web_sys::WebGlRenderingContext as GL;

use super::{camera, parallax, CLEAR};
use crate::error::GraphicsError;
use crate::graphics::animation::FrameClock;
use crate::graphics::mesh::{cube, ease_in_out, Mesh, Rgb};
use crate::graphics::program::{projection, GpuMesh, MeshProgram};
use crate::graphics::resources::GpuResources;
use crate::graphics::surface::Scene;

const CUBIE_SIZE: f32 = 0.94;
const VERTICES_PER_CUBIE: i32 = 36;

/// Seconds a twist takes.
pub const TWIST_SECONDS: f64 = 0.6;
/// Seconds from the start of one twist to the start of the next.
pub const MOVE_PERIOD: f64 = 1.5;

/// Sticker colours in face order +X, -X, +Y, -Y, +Z, -Z.
const STICKERS: [Rgb; 6] = [
    [0.80, 0.10, 0.12],
    [0.98, 0.45, 0.05],
    [0.96, 0.96, 0.96],
    [0.98, 0.84, 0.10],
    [0.05, 0.60, 0.25],
    [0.05, 0.28, 0.75],
];
const PLASTIC: Rgb = [0.06, 0.06, 0.07];

// -----------------------------------------------------------------------------
// 1. Move Schedule
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// One quarter turn of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub axis: Axis,
    /// Layer coordinate along `axis`: -1, 0 or 1.
    pub layer: i8,
    /// +1 counter-clockwise, -1 clockwise (looking down the axis).
    pub direction: i8,
}

/// Cycle of moves the scene plays.
pub const MOVES: [Move; 6] = [
    Move { axis: Axis::Y, layer: 1, direction: 1 },
    Move { axis: Axis::X, layer: 1, direction: -1 },
    Move { axis: Axis::Z, layer: -1, direction: 1 },
    Move { axis: Axis::Y, layer: -1, direction: -1 },
    Move { axis: Axis::X, layer: 0, direction: 1 },
    Move { axis: Axis::Z, layer: 1, direction: -1 },
];

impl Move {
    fn rotation(self, angle: f32) -> Mat4 {
        Mat4::from_axis_angle(self.axis.unit(), angle * self.direction as f32)
    }
}

// -----------------------------------------------------------------------------
// 2. Puzzle State
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct Cubie {
    /// Grid position in the solved state.
    pub home: Vec3,
    /// Accumulated rotation from baked moves.
    pub orientation: Mat4,
}

impl Cubie {
    /// Where the cubie sits now.
    pub fn position(&self) -> Vec3 {
        self.orientation.transform_point3(self.home)
    }

    fn in_layer(&self, mv: Move) -> bool {
        mv.axis.component(self.position()).round() as i8 == mv.layer
    }
}

/// A twist in progress: which move and how far through it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveTwist {
    pub mv: Move,
    pub angle: f32,
}

/// Cubie orientations plus the move clock.
#[derive(Clone, Debug)]
pub struct PuzzleState {
    pub cubies: Vec<Cubie>,
    moves_baked: u64,
}

impl Default for PuzzleState {
    fn default() -> Self {
        let mut cubies = Vec::with_capacity(27);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    cubies.push(Cubie {
                        home: Vec3::new(x as f32, y as f32, z as f32),
                        orientation: Mat4::IDENTITY,
                    });
                }
            }
        }
        Self {
            cubies,
            moves_baked: 0,
        }
    }
}

impl PuzzleState {
    pub fn moves_baked(&self) -> u64 {
        self.moves_baked
    }

    /// Advance to `elapsed` seconds. Returns the twist to draw, if any.
    pub fn update(&mut self, elapsed: f64) -> Option<ActiveTwist> {
        let started = (elapsed / MOVE_PERIOD).floor().max(0.0) as u64;
        let into_move = elapsed - started as f64 * MOVE_PERIOD;

        // Moves whose twist has fully played out
        let finished = if into_move >= TWIST_SECONDS { started + 1 } else { started };
        while self.moves_baked < finished {
            let mv = MOVES[(self.moves_baked % MOVES.len() as u64) as usize];
            self.bake(mv);
            self.moves_baked += 1;
        }

        (into_move < TWIST_SECONDS).then(|| {
            let mv = MOVES[(started % MOVES.len() as u64) as usize];
            let progress = ease_in_out((into_move / TWIST_SECONDS) as f32);
            ActiveTwist {
                mv,
                angle: progress * FRAC_PI_2,
            }
        })
    }

    fn bake(&mut self, mv: Move) {
        let turn = mv.rotation(FRAC_PI_2);
        for cubie in self.cubies.iter_mut().filter(|c| c.in_layer(mv)) {
            cubie.orientation = snap(turn * cubie.orientation);
        }
    }

    /// Model matrix for cubie `index`, including any twist in progress.
    pub fn cubie_model(&self, index: usize, twist: Option<ActiveTwist>) -> Mat4 {
        let cubie = &self.cubies[index];
        match twist {
            Some(t) if cubie.in_layer(t.mv) => t.mv.rotation(t.angle) * cubie.orientation,
            _ => cubie.orientation,
        }
    }
}

/// Quarter-turn rotations only contain -1, 0 and 1; rounding stops drift.
fn snap(m: Mat4) -> Mat4 {
    Mat4::from_cols_array(&m.to_cols_array().map(f32::round))
}

/// Geometry for every cubie, in `PuzzleState` order.
fn puzzle_mesh(state: &PuzzleState) -> Mesh {
    let mut mesh = Mesh::default();
    for cubie in &state.cubies {
        let h = cubie.home;
        let colors = [
            if h.x > 0.5 { STICKERS[0] } else { PLASTIC },
            if h.x < -0.5 { STICKERS[1] } else { PLASTIC },
            if h.y > 0.5 { STICKERS[2] } else { PLASTIC },
            if h.y < -0.5 { STICKERS[3] } else { PLASTIC },
            if h.z > 0.5 { STICKERS[4] } else { PLASTIC },
            if h.z < -0.5 { STICKERS[5] } else { PLASTIC },
        ];
        mesh.extend(&cube(h, CUBIE_SIZE, colors));
    }
    mesh
}

// -----------------------------------------------------------------------------
// 3. Scene
// -----------------------------------------------------------------------------

pub struct RubiksScene {
    program: MeshProgram,
    cubies: GpuMesh,
    state: PuzzleState,
    projection: Mat4,
}

impl RubiksScene {
    pub fn build(resources: &mut GpuResources) -> Result<Box<dyn Scene>, GraphicsError> {
        let program = MeshProgram::new(resources)?;
        let state = PuzzleState::default();
        let cubies = GpuMesh::upload(resources, &puzzle_mesh(&state), GL::TRIANGLES)?;
        Ok(Box::new(Self {
            program,
            cubies,
            state,
            projection: Mat4::IDENTITY,
        }))
    }
}

impl Scene for RubiksScene {
    fn resize(&mut self, _gl: &GL, width: u32, height: u32) {
        self.projection = projection(width, height);
    }

    fn frame(&mut self, gl: &GL, clock: &FrameClock) {
        let t = clock.time.elapsed as f32;
        let twist = self.state.update(clock.time.elapsed);
        let view_proj = self.projection
            * camera(8.0)
            * parallax(clock.pointer, 0.3)
            * Mat4::from_rotation_x(0.5)
            * Mat4::from_rotation_y(t * 0.35);

        self.program.begin_frame(gl, CLEAR);
        for index in 0..self.state.cubies.len() {
            let mvp = view_proj * self.state.cubie_model(index, twist);
            self.program.draw_range(
                gl,
                &self.cubies,
                &mvp,
                1.0,
                index as i32 * VERTICES_PER_CUBIE,
                VERTICES_PER_CUBIE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_count(state: &PuzzleState, mv: Move) -> usize {
        state.cubies.iter().filter(|c| c.in_layer(mv)).count()
    }

    #[test]
    fn every_layer_has_nine_cubies() {
        let mut state = PuzzleState::default();
        assert_eq!(state.cubies.len(), 27);
        for step in 0..20 {
            state.update(step as f64 * MOVE_PERIOD + TWIST_SECONDS + 0.01);
            for mv in MOVES {
                assert_eq!(layer_count(&state, mv), 9);
            }
        }
    }

    #[test]
    fn twist_in_progress_then_baked() {
        let mut state = PuzzleState::default();
        let twist = state.update(TWIST_SECONDS / 2.0).unwrap();
        assert_eq!(twist.mv, MOVES[0]);
        assert!((twist.angle - FRAC_PI_2 / 2.0).abs() < 1e-5);
        assert_eq!(state.moves_baked(), 0);

        assert!(state.update(TWIST_SECONDS + 0.1).is_none());
        assert_eq!(state.moves_baked(), 1);
    }

    #[test]
    fn four_quarter_turns_restore_a_layer() {
        let mut state = PuzzleState::default();
        let mv = MOVES[0];
        for _ in 0..4 {
            state.bake(mv);
        }
        assert!(state.cubies.iter().all(|c| c.orientation == Mat4::IDENTITY));
    }

    #[test]
    fn positions_stay_on_the_grid() {
        let mut state = PuzzleState::default();
        state.update(100.0);
        for cubie in &state.cubies {
            let p = cubie.position();
            assert_eq!(p, p.round());
            assert!(p.abs().max_element() <= 1.0);
        }
    }

    #[test]
    fn skipped_frames_bake_every_missed_move() {
        let mut state = PuzzleState::default();
        state.update(10.0 * MOVE_PERIOD + TWIST_SECONDS + 0.01);
        assert_eq!(state.moves_baked(), 11);
    }

    #[test]
    fn mesh_has_one_block_per_cubie() {
        let mesh = puzzle_mesh(&PuzzleState::default());
        assert_eq!(mesh.vertex_count() as i32, 27 * VERTICES_PER_CUBIE);
    }
}

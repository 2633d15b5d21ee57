pub mod area;
pub mod components;
pub mod config;
pub mod driver;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod simulation;
pub mod systems;

pub use area::*;
pub use components::*;
pub use config::*;
pub use driver::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;
pub use simulation::*;
pub use systems::*;

/// Advance the game by one frame.
///
/// Velocities are in pixels per frame, so there is no time step. Only the
/// signs of the ball velocity ever change.
pub fn step(sim: &mut Simulation, controls: &Controls, mode: Mode) {
    // Clear events at start of frame
    sim.events.clear();

    // 1-2. Move paddles (left by keys or AI, right by keys)
    move_paddles(sim, controls, mode);

    // 3. Move ball
    move_ball(&mut sim.ball);

    // 4-5. Bounce off walls, then paddles
    check_walls(&mut sim.ball, &sim.config, &mut sim.events);
    check_paddles(&mut sim.ball, &sim.left, &sim.right, &sim.config, &mut sim.events);

    // 6-7. Score and serve if the ball left the court
    check_scoring(&mut sim.ball, &mut sim.score, &sim.config, &mut sim.events);

    // 8. High score
    sim.score.update_high();
}

//! Quantum Leap entry point
//!
//! On the web the game is driven from JS through `platform::web::WebGame`.
//! Natively this runs a scripted headless playthrough of the built-in level,
//! optionally under the step mode named by the first argument.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Quantum Leap (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let mut sim = quantum_leap::Simulation::with_defaults();
    // Optional first argument: "fixed" or "frame"
    if let Some(name) = std::env::args().nth(1) {
        match quantum_leap::StepMode::from_str(&name) {
            Some(mode) => {
                if let Err(e) = sim.set_step_mode(mode) {
                    log::error!("{}", e);
                }
            }
            None => log::warn!("Unknown step mode '{}', keeping {}", name, sim.step_mode().as_str()),
        }
    }
    if demo::play(&mut sim) {
        println!("Level cleared in {} ticks", sim.state().time_ticks);
    } else {
        log::warn!("Scripted run did not reach the goal");
    }
    println!("{}", sim.snapshot().to_json());

    log::info!("{:?}", sim.restart());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is WebGame, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use quantum_leap::Simulation;

    /// One host frame at 60 Hz
    const FRAME: f32 = 1.0 / 60.0;

    fn frames(sim: &mut Simulation, count: usize) {
        for _ in 0..count {
            for event in sim.step(FRAME) {
                log::info!("tick {}: {:?}", sim.state().time_ticks, event);
            }
        }
    }

    fn walk_right(sim: &mut Simulation, count: usize) {
        sim.set_move_right(true);
        frames(sim, count);
        sim.set_move_right(false);
    }

    fn leap(sim: &mut Simulation, x: f32, y: f32) {
        log::info!("{:?}", sim.enter_superposition());
        log::info!("ghosts: {:?}", sim.state().superposition.candidates);
        log::info!("{:?}", sim.select_at(x, y));
    }

    /// Walk, long-leap onto the middle platform, high-leap onto the goal ledge
    pub fn play(sim: &mut Simulation) -> bool {
        frames(sim, 1);
        walk_right(sim, 30);
        leap(sim, 465.0, 415.0);
        frames(sim, 12);
        walk_right(sim, 14);
        leap(sim, 635.0, 255.0);
        frames(sim, 15);

        sim.set_move_right(true);
        for _ in 0..60 {
            if sim.state().is_won() {
                break;
            }
            frames(sim, 1);
        }
        sim.set_move_right(false);

        sim.state().is_won()
    }
}

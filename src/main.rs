//! Asteroid Drift entry point
//!
//! Headless demo: a scripted host thread starts a game, flies the ship through a
//! short routine of key presses and asks the loop to stop after a few seconds.
//!
//! Usage: `asteroid-drift [settings.json]`

use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use asteroid_drift::Settings;
use asteroid_drift::audio::LogAudio;
use asteroid_drift::host::{ChannelHost, Runner, ShutdownSignal};
use asteroid_drift::input::{Action, SharedInput};
use asteroid_drift::render::LogRenderer;
use asteroid_drift::sim::GameState;

/// How long the demo plays before the host asks it to stop
const DEMO_LENGTH: Duration = Duration::from_secs(5);

/// How long the scripted host holds each key
const KEY_HOLD: Duration = Duration::from_millis(100);

/// Key chords the scripted host plays in a loop once the game is running
const ROUTINE: [&[Action]; 4] = [
    &[Action::ThrustForward, Action::Fire],
    &[Action::RotateRight, Action::Fire],
    &[Action::ThrustBackward],
    &[Action::RotateLeft, Action::Fire],
];

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Asteroid Drift starting (seed {})", seed);

    let input = SharedInput::new();
    let shutdown = ShutdownSignal::new();
    let (host, ended) = ChannelHost::new();
    let script = spawn_demo_host(input.clone(), shutdown.clone(), ended);

    let mut runner = Runner::new(
        GameState::new(seed, settings),
        input,
        LogRenderer::new(),
        LogAudio::new(),
        host,
        shutdown,
    );
    runner.run();

    if script.join().is_err() {
        log::warn!("Demo host thread panicked");
    }

    if let Some(frame) = runner.last_frame() {
        match serde_json::to_string(frame) {
            Ok(json) => log::info!("Final frame: {}", json),
            Err(e) => log::warn!("Could not serialize final frame: {}", e),
        }
    }
    log::info!(
        "Done: {} frames presented, {} sounds played",
        runner.renderer().frames_presented(),
        runner.audio().cues_played()
    );
}

/// Plays the part of a window shell: forwards "key presses" and waits for the
/// game to end, requesting shutdown if it runs past the demo length
fn spawn_demo_host(
    input: SharedInput,
    shutdown: ShutdownSignal,
    ended: Receiver<()>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        hold(&input, &[Action::Confirm]);
        input.set_override(true);

        let deadline = Instant::now() + DEMO_LENGTH;
        for chord in ROUTINE.iter().cycle() {
            if Instant::now() >= deadline {
                break;
            }
            hold(&input, chord);
            match ended.try_recv() {
                Ok(()) => {
                    log::info!("Game ended on its own");
                    return;
                }
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Game loop went away without an end notice");
                    return;
                }
                Err(TryRecvError::Empty) => {}
            }
        }

        log::info!("Demo time is up, requesting shutdown");
        shutdown.request();
        if ended.recv().is_err() {
            log::warn!("Game loop went away without an end notice");
        }
    })
}

/// Press every key of `chord` for one hold period
fn hold(input: &SharedInput, chord: &[Action]) {
    for &action in chord {
        input.press(action);
    }
    thread::sleep(KEY_HOLD);
    for &action in chord {
        input.release(action);
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

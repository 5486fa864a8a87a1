//! Hosting shell and the fixed-rate game loop
//!
//! The host owns the process: it feeds input from its own thread, may ask the
//! game to stop through a [`ShutdownSignal`], and gets exactly one
//! [`HostShell::game_ended`] call once the loop is done.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::audio::{self, AudioSink};
use crate::input::{self, InputSource};
use crate::render::{Frame, RenderSink};
use crate::sim::{GameState, tick};

/// Host errors
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    /// Nobody is listening for the notice any more
    #[error("Host disconnected")]
    Disconnected,

    /// Host-specific failure
    #[error("Host error: {0}")]
    Other(String),
}

/// Receiver side of the game's lifecycle
pub trait HostShell {
    /// Called once after the last tick
    fn game_ended(&mut self) -> Result<(), HostError>;
}

/// Cross-thread request to stop the game loop
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal(Arc<AtomicBool>);

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Host that forwards the end-of-game notice over a channel
#[derive(Debug)]
pub struct ChannelHost {
    tx: mpsc::Sender<()>,
}

impl ChannelHost {
    pub fn new() -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl HostShell for ChannelHost {
    fn game_ended(&mut self) -> Result<(), HostError> {
        self.tx.send(()).map_err(|_| HostError::Disconnected)
    }
}

/// Single simulation stepper: polls input, ticks, presents, plays cues
pub struct Runner<I, R, A, H> {
    state: GameState,
    input: I,
    renderer: R,
    audio: A,
    host: H,
    shutdown: ShutdownSignal,
    last_frame: Option<Frame>,
    finished: bool,
}

impl<I, R, A, H> Runner<I, R, A, H>
where
    I: InputSource,
    R: RenderSink,
    A: AudioSink,
    H: HostShell,
{
    pub fn new(
        state: GameState,
        input: I,
        renderer: R,
        audio: A,
        host: H,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self {
            state,
            input,
            renderer,
            audio,
            host,
            shutdown,
            last_frame: None,
            finished: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one tick with `dt` seconds of elapsed time. Returns false once the
    /// game has ended; later calls do nothing.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }
        if self.shutdown.is_requested() || self.state.exit_requested {
            self.finish();
            return false;
        }

        let input = input::poll(&self.input);
        tick(&mut self.state, &input, dt);

        let frame = Frame::capture(&self.state);
        self.renderer.present(&frame);
        audio::play_events(&mut self.audio, &self.state.events);
        self.last_frame = Some(frame);
        true
    }

    /// Step at the configured tick interval until the game ends
    pub fn run(&mut self) {
        let interval = self.state.settings.tick_interval();
        let mut last: Option<Instant> = None;
        log::info!("Game loop started ({} ms ticks)", interval.as_millis());

        loop {
            let now = Instant::now();
            let dt = last.map_or(interval, |t| now.duration_since(t));
            last = Some(now);

            if !self.step(dt.as_secs_f32()) {
                break;
            }
            std::thread::sleep(interval.saturating_sub(now.elapsed()));
        }
    }

    /// Stop forwarding input and tell the host, once
    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.input.shutdown();
        if let Err(e) = self.host.game_ended() {
            log::warn!("Could not notify host of game end: {}", e);
        }
        log::info!(
            "Game loop stopped after {} ticks, score {}",
            self.state.time_ticks,
            self.state.score.value()
        );
    }
}

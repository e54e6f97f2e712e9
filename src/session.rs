//! Frame loop orchestration
//!
//! A [`Session`] owns one game plus its collaborators (surface, audio,
//! input, restart control) and drives one update+render cycle per frame.

use glam::Vec2;

use crate::audio::{AudioBackend, AudioManager, SoundEffect};
use crate::input::InputState;
use crate::renderer::{RenderSurface, draw_frame};
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GameState, tick};
use crate::ui::RestartControl;

/// Whether the loop should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Source of display frame timestamps
pub trait FrameClock {
    /// Timestamp (ms) of the next display frame
    fn next_frame(&mut self) -> f64;
}

/// Clock advancing by a fixed step per frame
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub now_ms: f64,
    pub step_ms: f64,
}

impl FixedClock {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            step_ms,
        }
    }
}

impl FrameClock for FixedClock {
    fn next_frame(&mut self) -> f64 {
        self.now_ms += self.step_ms;
        self.now_ms
    }
}

/// One play session
pub struct Session<R: RenderSurface, A: AudioBackend> {
    state: GameState,
    input: InputState,
    restart: RestartControl,
    audio: AudioManager<A>,
    surface: R,
    /// Whether the frame loop is scheduled
    running: bool,
}

impl<R: RenderSurface, A: AudioBackend> Session<R, A> {
    /// Start a session at time `now_ms`. Unplayable settings are rejected.
    pub fn new(
        settings: &Settings,
        surface: R,
        audio: A,
        now_ms: f64,
    ) -> Result<Self, SettingsError> {
        if let Err(e) = settings.validate() {
            log::warn!("Refusing to start session: {}", e);
            return Err(e);
        }
        let seed = settings.effective_seed();
        let bounds = Vec2::new(settings.width, settings.height);
        log::info!(
            "Session started: {}x{} arena, seed {}",
            bounds.x,
            bounds.y,
            seed
        );

        Ok(Self {
            state: GameState::new(bounds, settings.tuning.clone(), seed, now_ms),
            input: InputState::default(),
            restart: RestartControl::default(),
            audio: AudioManager::new(audio, &settings.audio),
            surface,
            running: true,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    pub fn restart_control(&self) -> &RestartControl {
        &self.restart
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn key_down(&mut self, code: &str) {
        self.input.key_down(code);
    }

    pub fn key_up(&mut self, code: &str) {
        self.input.key_up(code);
    }

    /// Run one frame: spawn, update, react to events, render.
    ///
    /// Returns [`LoopControl::Stop`] once the game is over; no further frames
    /// do anything until a restart.
    pub fn frame(&mut self, now_ms: f64) -> LoopControl {
        if !self.running {
            return LoopControl::Stop;
        }

        // Arrivals join before the tick iterates the alien list
        self.state.poll_spawner(now_ms);
        tick(&mut self.state, &self.input, now_ms);
        self.dispatch_events();
        draw_frame(&mut self.surface, &self.state);

        if self.state.is_playing() {
            LoopControl::Continue
        } else {
            self.running = false;
            LoopControl::Stop
        }
    }

    /// Click the restart control. Returns whether a new run started.
    pub fn click_restart(&mut self, now_ms: f64) -> bool {
        if !self.restart.activate() {
            return false;
        }
        if !self.state.restart(now_ms) {
            return false;
        }
        self.dispatch_events();
        self.running = true;
        true
    }

    /// Drive frames from `clock` until the game ends or `max_frames` elapse.
    ///
    /// `controls` sees the state before each frame and may update the held
    /// keys. Returns the number of frames run.
    pub fn run(
        &mut self,
        clock: &mut impl FrameClock,
        max_frames: Option<u64>,
        mut controls: impl FnMut(&GameState, &mut InputState),
    ) -> u64 {
        let mut frames = 0;
        loop {
            if max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            controls(&self.state, &mut self.input);
            let control = self.frame(clock.next_frame());
            frames += 1;
            if control == LoopControl::Stop {
                break;
            }
        }
        frames
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Shot => self.audio.play(SoundEffect::Shoot),
                GameEvent::GameOver { .. } => {
                    self.audio.play(SoundEffect::Loss);
                    self.restart.show();
                }
                GameEvent::Restarted => self.restart.hide(),
                GameEvent::AlienDestroyed { .. } | GameEvent::DifficultyUp { .. } => {}
            }
        }
    }
}

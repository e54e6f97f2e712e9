//! Sound effect dispatch
//!
//! Playback is fire-and-forget: backend failures are logged and dropped so a
//! missing audio device never stalls the simulation.

use thiserror::Error;

use crate::settings::AudioSettings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    Shoot,
    /// Run lost
    Loss,
}

impl SoundEffect {
    /// Asset identifier for backends that play files
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "sounds/shoot.mp3",
            SoundEffect::Loss => "sounds/loss.mp3",
        }
    }
}

/// Playback failure reported by a backend
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio device unavailable")]
    Unavailable,
}

/// Something that can play a sound at a given volume
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
}

/// Backend that only logs what it would play
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::debug!("Playing {} at volume {:.2}", effect.asset(), volume);
        Ok(())
    }
}

/// Backend that records every request (tests, headless runs)
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
}

impl AudioBackend for RecordingAudio {
    fn play(&mut self, effect: SoundEffect, _volume: f32) -> Result<(), AudioError> {
        self.played.push(effect);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &AudioSettings) -> Self {
        Self {
            backend,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Volume handed to the backend; zero means skip playback
    fn effective_volume(&self) -> f32 {
        if self.muted {
            return 0.0;
        }
        self.master_volume * self.sfx_volume
    }

    /// Play a sound effect, swallowing backend errors
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        if let Err(e) = self.backend.play(effect, vol) {
            log::warn!("Could not play {:?}: {}", effect, e);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenAudio {
        attempts: usize,
    }

    impl AudioBackend for BrokenAudio {
        fn play(&mut self, _effect: SoundEffect, _volume: f32) -> Result<(), AudioError> {
            self.attempts += 1;
            Err(AudioError::Unavailable)
        }
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut audio = AudioManager::new(BrokenAudio { attempts: 0 }, &AudioSettings::default());
        audio.play(SoundEffect::Shoot);
        audio.play(SoundEffect::Loss);
        assert_eq!(audio.backend().attempts, 2);
    }

    fn manager(settings: AudioSettings) -> AudioManager<RecordingAudio> {
        AudioManager::new(RecordingAudio::default(), &settings)
    }

    #[test]
    fn test_muted_or_silent_skips_backend() {
        let mut muted = manager(AudioSettings {
            muted: true,
            ..Default::default()
        });
        muted.play(SoundEffect::Shoot);
        assert!(muted.backend().played.is_empty());

        let mut silent = manager(AudioSettings {
            sfx_volume: 0.0,
            ..Default::default()
        });
        silent.play(SoundEffect::Shoot);
        assert!(silent.backend().played.is_empty());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut loud = manager(AudioSettings {
            master_volume: 3.0,
            sfx_volume: 2.0,
            muted: false,
        });
        assert_eq!(loud.effective_volume(), 1.0);
        loud.play(SoundEffect::Loss);
        assert_eq!(loud.backend().played, vec![SoundEffect::Loss]);
    }
}

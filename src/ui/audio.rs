use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// SFX PATH MAPPING
// ═══════════════════════════════════════════════════════════════════════

fn sfx_path(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Click => "audio/sfx/click.ogg",
        SoundCue::Coins => "audio/sfx/coins.ogg",
        SoundCue::Negative => "audio/sfx/negative.ogg",
        SoundCue::Chicken => "audio/sfx/chicken.ogg",
        SoundCue::Sheep => "audio/sfx/sheep.ogg",
        SoundCue::Cow => "audio/sfx/cow.ogg",
        SoundCue::ThrowSpear => "audio/sfx/throw_spear.ogg",
    }
}

// ═══════════════════════════════════════════════════════════════════════
// AMBIENT VOICES — an animal that calls out every now and then
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug)]
pub struct AmbientVoice {
    pub cue: SoundCue,
    pub min_interval: f32,
    pub max_interval: f32,
    pub volume: f32,
    pub timer: Timer,
}

impl AmbientVoice {
    fn next_delay(&self) -> Duration {
        let (low, high) = if self.min_interval < self.max_interval {
            (self.min_interval, self.max_interval)
        } else {
            (self.max_interval, self.min_interval + f32::EPSILON)
        };
        Duration::from_secs_f32(rand::thread_rng().gen_range(low..high).max(0.1))
    }
}

fn play(commands: &mut Commands, asset_server: &AssetServer, cue: SoundCue, volume: f32) {
    commands.spawn((
        AudioPlayer::new(asset_server.load(sfx_path(cue))),
        PlaybackSettings::DESPAWN.with_volume(bevy::audio::Volume::new(volume)),
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Listen for PlaySfxEvent and spawn one-shot audio sources that auto-despawn.
pub fn handle_play_sfx(
    mut events: EventReader<PlaySfxEvent>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    for event in events.read() {
        play(&mut commands, &asset_server, event.cue, 1.0);
    }
}

/// Starts or retunes the ambient voice on an entity.
pub fn handle_ambient_requests(
    mut events: EventReader<AmbientSoundEvent>,
    mut commands: Commands,
) {
    for event in events.read() {
        let Some(mut entity) = commands.get_entity(event.entity) else {
            continue;
        };
        let mut voice = AmbientVoice {
            cue: event.cue,
            min_interval: event.min_interval,
            max_interval: event.max_interval,
            volume: event.volume,
            timer: Timer::default(),
        };
        voice.timer = Timer::new(voice.next_delay(), TimerMode::Once);
        entity.insert(voice);
    }
}

pub fn tick_ambient_voices(
    time: Res<Time>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut voices: Query<&mut AmbientVoice>,
) {
    for mut voice in &mut voices {
        voice.timer.tick(time.delta());
        if !voice.timer.finished() {
            continue;
        }
        play(&mut commands, &asset_server, voice.cue, voice.volume);
        let delay = voice.next_delay();
        voice.timer = Timer::new(delay, TimerMode::Once);
    }
}

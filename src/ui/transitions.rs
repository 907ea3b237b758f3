use bevy::color::Mix;
use bevy::prelude::*;
use crate::shared::*;

/// How long a lighting transition takes before it reports back.
const TRANSITION_SECS: f32 = 1.5;
/// How long an awaited entity animation takes before it reports back.
const ANIMATION_SECS: f32 = 0.6;

/// Marker for the full-screen sky tint overlay
#[derive(Component)]
pub struct SkyTintOverlay;

/// Resource that drives the tint toward the current time of day
#[derive(Resource)]
pub struct SkyTint {
    pub from: Srgba,
    pub target: Srgba,
    /// 0.0 at `from`, 1.0 at `target`
    pub progress: f32,
}

impl Default for SkyTint {
    fn default() -> Self {
        Self {
            from: tint_for(TimeOfDay::Day),
            target: tint_for(TimeOfDay::Day),
            progress: 1.0,
        }
    }
}

impl SkyTint {
    pub fn current(&self) -> Srgba {
        self.from.mix(&self.target, self.progress)
    }
}

fn tint_for(time: TimeOfDay) -> Srgba {
    match time {
        TimeOfDay::Morning => Srgba::new(1.0, 0.75, 0.5, 0.15),
        TimeOfDay::Day => Srgba::new(1.0, 1.0, 1.0, 0.0),
        TimeOfDay::Evening => Srgba::new(0.9, 0.45, 0.3, 0.3),
        TimeOfDay::Night => Srgba::new(0.05, 0.05, 0.2, 0.6),
    }
}

/// Tickets waiting on a timer before their completion is reported.
#[derive(Resource, Default)]
pub struct PendingCompletions {
    transitions: Vec<(Ticket, Timer)>,
    animations: Vec<(Ticket, Timer)>,
}

/// Spawn the tint overlay (always present, transparent by day)
pub fn spawn_sky_overlay(mut commands: Commands) {
    commands.spawn((
        SkyTintOverlay,
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::NONE),
        GlobalZIndex(-1),
        PickingBehavior::IGNORE,
    ));
}

pub fn start_transitions(
    mut events: EventReader<PlayTransitionEvent>,
    mut tint: ResMut<SkyTint>,
    mut pending: ResMut<PendingCompletions>,
) {
    for event in events.read() {
        tint.from = tint.current();
        tint.target = tint_for(event.to);
        tint.progress = 0.0;
        pending
            .transitions
            .push((event.ticket, Timer::from_seconds(TRANSITION_SECS, TimerMode::Once)));
    }
}

pub fn start_animations(
    mut events: EventReader<PlayAnimationEvent>,
    mut pending: ResMut<PendingCompletions>,
) {
    for event in events.read() {
        if let Some(clip) = event.clip {
            debug!("[Ui] {:?} plays clip {}", event.entity, clip);
        }
        if let Some(ticket) = event.ticket {
            pending
                .animations
                .push((ticket, Timer::from_seconds(ANIMATION_SECS, TimerMode::Once)));
        }
    }
}

/// Animate the tint overlay
pub fn update_sky_tint(
    time: Res<Time>,
    mut tint: ResMut<SkyTint>,
    mut query: Query<&mut BackgroundColor, With<SkyTintOverlay>>,
) {
    if tint.progress >= 1.0 {
        return;
    }
    tint.progress = (tint.progress + time.delta_secs() / TRANSITION_SECS).min(1.0);

    let color = Color::Srgba(tint.current());
    for mut bg in &mut query {
        *bg = BackgroundColor(color);
    }
}

pub fn finish_pending(
    time: Res<Time>,
    mut pending: ResMut<PendingCompletions>,
    mut transitions: EventWriter<TransitionFinishedEvent>,
    mut animations: EventWriter<AnimationFinishedEvent>,
) {
    let delta = time.delta();
    let pending = &mut *pending;

    pending.transitions.retain_mut(|(ticket, timer)| {
        if timer.tick(delta).finished() {
            transitions.send(TransitionFinishedEvent { ticket: *ticket });
            false
        } else {
            true
        }
    });
    pending.animations.retain_mut(|(ticket, timer)| {
        if timer.tick(delta).finished() {
            animations.send(AnimationFinishedEvent { ticket: *ticket });
            false
        } else {
            true
        }
    });
}

use bevy::prelude::*;
use std::collections::VecDeque;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct PromptBoxRoot;

/// One modal prompt waiting for the player.
#[derive(Debug, Clone)]
pub enum Prompt {
    Dialog { ticket: Ticket, text: String },
    Confirm { ticket: Ticket, text: String },
    GameOver { ticket: Ticket, text: String, fatal: bool },
}

impl Prompt {
    fn text(&self) -> &str {
        match self {
            Prompt::Dialog { text, .. }
            | Prompt::Confirm { text, .. }
            | Prompt::GameOver { text, .. } => text,
        }
    }

    fn controls(&self) -> &'static str {
        match self {
            Prompt::Dialog { .. } => "[Space] Continue",
            Prompt::Confirm { .. } => "[Y] Yes    [N] No",
            Prompt::GameOver { fatal: true, .. } => "[Enter] Restart",
            Prompt::GameOver { fatal: false, .. } => "[Enter] Continue",
        }
    }
}

/// Prompts are shown one at a time, oldest first.
#[derive(Resource, Debug, Default)]
pub struct PromptQueue {
    queue: VecDeque<Prompt>,
}

impl PromptQueue {
    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENT LISTENER — queue every prompt request
// ═══════════════════════════════════════════════════════════════════════

pub fn queue_prompts(
    mut dialogs: EventReader<ShowDialogEvent>,
    mut confirmations: EventReader<ShowConfirmationEvent>,
    mut game_overs: EventReader<ShowGameOverEvent>,
    mut prompts: ResMut<PromptQueue>,
) {
    for event in dialogs.read() {
        prompts.queue.push_back(Prompt::Dialog {
            ticket: event.ticket,
            text: event.text.clone(),
        });
    }
    for event in confirmations.read() {
        prompts.queue.push_back(Prompt::Confirm {
            ticket: event.ticket,
            text: event.text.clone(),
        });
    }
    for event in game_overs.read() {
        prompts.queue.push_back(Prompt::GameOver {
            ticket: event.ticket,
            text: event.text.clone(),
            fatal: event.fatal,
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN — rebuilt whenever the front prompt changes
// ═══════════════════════════════════════════════════════════════════════

pub fn sync_prompt_box(
    mut commands: Commands,
    prompts: Res<PromptQueue>,
    existing: Query<Entity, With<PromptBoxRoot>>,
) {
    if !prompts.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn_recursive();
    }
    let Some(prompt) = prompts.queue.front() else {
        return;
    };

    commands
        .spawn((
            PromptBoxRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.3)),
            GlobalZIndex(50),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(520.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(20.0)),
                        row_gap: Val::Px(14.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.98, 0.94, 0.85, 0.95)),
                    BorderColor(Color::srgb(0.45, 0.3, 0.15)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(prompt.text()),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.25, 0.18, 0.1)),
                        TextLayout::new_with_justify(JustifyText::Center),
                    ));
                    panel.spawn((
                        Text::new(prompt.controls()),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.45, 0.35, 0.25)),
                    ));
                });
        });
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT — answer the front prompt
// ═══════════════════════════════════════════════════════════════════════

pub fn answer_prompt(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut prompts: ResMut<PromptQueue>,
    mut dismissed: EventWriter<DialogDismissedEvent>,
    mut answered: EventWriter<ConfirmationAnsweredEvent>,
    mut acknowledged: EventWriter<GameOverAcknowledgedEvent>,
) {
    let Some(prompt) = prompts.queue.front() else {
        return;
    };
    let confirm = keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::Enter);

    let answered_now = match *prompt {
        Prompt::Dialog { ticket, .. } if confirm => {
            dismissed.send(DialogDismissedEvent { ticket });
            true
        }
        Prompt::Confirm { ticket, .. } => {
            if keyboard.just_pressed(KeyCode::KeyY) {
                answered.send(ConfirmationAnsweredEvent {
                    ticket,
                    accepted: true,
                });
                true
            } else if keyboard.just_pressed(KeyCode::KeyN) || keyboard.just_pressed(KeyCode::Escape) {
                answered.send(ConfirmationAnsweredEvent {
                    ticket,
                    accepted: false,
                });
                true
            } else {
                false
            }
        }
        Prompt::GameOver { ticket, .. } if confirm => {
            acknowledged.send(GameOverAcknowledgedEvent { ticket });
            true
        }
        _ => false,
    };

    if answered_now {
        prompts.queue.pop_front();
    }
}

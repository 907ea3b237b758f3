use bevy::color::Alpha;
use bevy::prelude::*;
use crate::economy::{format_delta, format_money};
use crate::shared::*;
use super::input::{hotkey_label, SlotCursor};

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS — used to query and update HUD elements
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HudMoneyText;

#[derive(Component)]
pub struct HudMenuText;

#[derive(Component)]
pub struct HudGuideText;

#[derive(Component)]
pub struct HudCursorText;

/// A floating money amount rising from the farm.
#[derive(Component)]
pub struct FloatingAmount {
    pub timer: Timer,
}

/// Last balance published by the economy domain.
#[derive(Resource, Debug, Default)]
pub struct HudMoney {
    pub amount: i64,
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(12.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            PickingBehavior::IGNORE,
        ))
        .with_children(|parent| {
            parent.spawn((
                HudMoneyText,
                Text::new(""),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.2)),
            ));
            parent.spawn((
                HudGuideText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.9, 1.0)),
            ));
            parent.spawn((
                HudCursorText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.7)),
            ));
            parent.spawn((
                HudMenuText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn update_money_display(
    mut events: EventReader<MoneyDisplayEvent>,
    mut money: ResMut<HudMoney>,
    menu: Res<MenuState>,
    mut query: Query<&mut Text, With<HudMoneyText>>,
) {
    for event in events.read() {
        money.amount = event.amount;
    }
    if !money.is_changed() && !menu.is_changed() {
        return;
    }
    for mut text in &mut query {
        **text = if menu.money_visible {
            format_money(money.amount)
        } else {
            String::new()
        };
    }
}

fn button_line(menu: &MenuState, buttons: &[MenuButton]) -> String {
    buttons
        .iter()
        .map(|button| {
            let label = format!("[{}] {:?}", hotkey_label(*button), button);
            if menu.is_enabled(*button) {
                label
            } else {
                format!("({})", label)
            }
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn update_menu_text(menu: Res<MenuState>, mut query: Query<&mut Text, With<HudMenuText>>) {
    if !menu.is_changed() {
        return;
    }
    let mut lines = Vec::new();
    if menu.home_visible {
        lines.push(button_line(&menu, &MenuButton::HOME));
        lines.push(button_line(&menu, &MenuButton::LAND));
        lines.push(button_line(&menu, &MenuButton::CATTLE));
        lines.push(button_line(&menu, &MenuButton::CROP));
    }
    if menu.skip_day_visible {
        lines.push(button_line(&menu, &[MenuButton::SkipDay]));
    }
    if !lines.is_empty() {
        lines.push("[Tab] Next spot   [Enter] Use spot".to_string());
    }
    for mut text in &mut query {
        **text = lines.join("\n");
    }
}

pub fn update_guide_text(
    mut guides: EventReader<GuideEvent>,
    mut shots: EventReader<CameraShotEvent>,
    mut query: Query<&mut Text, With<HudGuideText>>,
) {
    for shot in shots.read() {
        debug!(
            "[Ui] Camera to {:?} looking at {:?} (lerp {})",
            shot.position, shot.target, shot.lerp_speed
        );
    }
    let Some(guide) = guides.read().last() else {
        return;
    };
    for mut text in &mut query {
        **text = match (guide.visible, guide.side) {
            (false, _) => String::new(),
            (true, GuideSide::Left) => "<< Farmer".to_string(),
            (true, GuideSide::Right) => "Farmer >>".to_string(),
        };
    }
}

/// Describes the slot under the keyboard cursor and the size of its press
/// volume.
pub fn update_cursor_text(
    cursor: Res<SlotCursor>,
    slots: Query<(&InteractiveSlot, &Transform, Option<&SlotExtent>)>,
    mut query: Query<&mut Text, With<HudCursorText>>,
) {
    if !cursor.is_changed() {
        return;
    }
    let line = cursor
        .hovered
        .and_then(|entity| slots.get(entity).ok())
        .map(|(slot, transform, extent)| {
            let size = extent.copied().unwrap_or_default().0;
            let action = match slot.hint() {
                Some(hint) => format!("Place {:?}", hint),
                None => "Harvest".to_string(),
            };
            format!(
                "> {} at ({:.0}, {:.0}), {:.0} x {:.0} m",
                action, transform.translation.x, transform.translation.z, size.x, size.z
            )
        })
        .unwrap_or_default();
    for mut text in &mut query {
        **text = line.clone();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FLOATING AMOUNTS — spawn, rise, despawn
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_floating_amounts(mut commands: Commands, mut events: EventReader<FloatingAmountEvent>) {
    for event in events.read() {
        let color = if event.amount >= 0 {
            Color::srgb(0.3, 0.9, 0.3)
        } else {
            Color::srgb(0.95, 0.3, 0.25)
        };
        // Top-down projection of the farm onto the screen.
        let left = SCREEN_WIDTH / 2.0 + event.position.x * 20.0;
        let top = SCREEN_HEIGHT / 2.0 + event.position.z * 20.0;
        commands.spawn((
            FloatingAmount {
                timer: Timer::from_seconds(1.2, TimerMode::Once),
            },
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(top),
                ..default()
            },
            Text::new(format_delta(event.amount)),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(color),
            PickingBehavior::IGNORE,
        ));
    }
}

pub fn update_floating_amounts(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FloatingAmount, &mut Node, &mut TextColor)>,
) {
    for (entity, mut floating, mut node, mut color) in &mut query {
        floating.timer.tick(time.delta());
        if floating.timer.finished() {
            commands.entity(entity).despawn_recursive();
            continue;
        }
        if let Val::Px(top) = node.top {
            node.top = Val::Px(top - 30.0 * time.delta_secs());
        }
        color.0.set_alpha(1.0 - floating.timer.fraction());
    }
}

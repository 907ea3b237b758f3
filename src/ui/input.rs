use bevy::prelude::*;
use crate::shared::*;
use super::prompts::PromptQueue;

/// Keyboard stand-ins for the menu buttons.
const HOTKEYS: [(KeyCode, MenuButton, &str); 13] = [
    (KeyCode::KeyC, MenuButton::Crop, "C"),
    (KeyCode::KeyA, MenuButton::Cattle, "A"),
    (KeyCode::KeyL, MenuButton::Land, "L"),
    (KeyCode::KeyF, MenuButton::CattlePen, "F"),
    (KeyCode::KeyG, MenuButton::Cropland, "G"),
    (KeyCode::Digit1, MenuButton::Chicken, "1"),
    (KeyCode::Digit2, MenuButton::Cow, "2"),
    (KeyCode::Digit3, MenuButton::Sheep, "3"),
    (KeyCode::Digit4, MenuButton::Corn, "4"),
    (KeyCode::Digit5, MenuButton::Grape, "5"),
    (KeyCode::Digit6, MenuButton::Strawberry, "6"),
    (KeyCode::Digit7, MenuButton::Tomato, "7"),
    (KeyCode::KeyN, MenuButton::SkipDay, "N"),
];

pub fn hotkey_label(button: MenuButton) -> &'static str {
    HOTKEYS
        .iter()
        .find(|(_, b, _)| *b == button)
        .map(|(_, _, label)| *label)
        .unwrap_or("?")
}

/// The slot the keyboard cursor is on.
#[derive(Resource, Debug, Default)]
pub struct SlotCursor {
    pub hovered: Option<Entity>,
}

/// Number keys and letters press menu buttons while no prompt is open.
pub fn menu_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    prompts: Res<PromptQueue>,
    mut actions: EventWriter<MenuActionEvent>,
) {
    if prompts.is_open() {
        return;
    }
    for (key, button, _) in HOTKEYS {
        if keyboard.just_pressed(key) {
            actions.send(MenuActionEvent { button });
        }
    }
}

/// Keyboard hit-testing: Tab hovers the next armed slot, Enter presses it.
pub fn slot_cursor_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    prompts: Res<PromptQueue>,
    mut cursor: ResMut<SlotCursor>,
    slots: Query<(Entity, &InteractiveSlot)>,
    mut hovers: EventWriter<SlotHoverEvent>,
    mut presses: EventWriter<SlotPressedEvent>,
) {
    if prompts.is_open() {
        return;
    }

    let mut armed: Vec<Entity> = slots
        .iter()
        .filter(|(_, slot)| slot.is_interactive())
        .map(|(entity, _)| entity)
        .collect();
    armed.sort();

    // The hovered slot may have been disarmed or despawned since.
    if let Some(hovered) = cursor.hovered {
        if !armed.contains(&hovered) {
            cursor.hovered = None;
        }
    }

    if keyboard.just_pressed(KeyCode::Tab) && !armed.is_empty() {
        let next = match cursor.hovered.and_then(|h| armed.iter().position(|e| *e == h)) {
            Some(i) => armed[(i + 1) % armed.len()],
            None => armed[0],
        };
        if let Some(previous) = cursor.hovered {
            hovers.send(SlotHoverEvent {
                slot: previous,
                hovered: false,
            });
        }
        hovers.send(SlotHoverEvent {
            slot: next,
            hovered: true,
        });
        cursor.hovered = Some(next);
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        if let Some(slot) = cursor.hovered.take() {
            presses.send(SlotPressedEvent { slot });
        }
    }
}

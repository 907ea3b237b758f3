//! Stand-in collaborators so the binary is playable: a prompt box answered
//! from the keyboard, HUD text for money and menus, keyboard hit-testing,
//! sounds, and timed completion of lighting transitions and animations.

mod audio;
mod hud;
mod input;
mod prompts;
mod transitions;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<prompts::PromptQueue>()
            .init_resource::<hud::HudMoney>()
            .init_resource::<input::SlotCursor>()
            .init_resource::<transitions::SkyTint>()
            .init_resource::<transitions::PendingCompletions>();

        // ─── OVERLAYS — always present ───
        app.add_systems(Startup, (transitions::spawn_sky_overlay, hud::spawn_hud));

        // ─── PROMPTS ───
        app.add_systems(
            Update,
            (
                prompts::queue_prompts,
                prompts::answer_prompt,
                prompts::sync_prompt_box,
            )
                .chain(),
        );

        // ─── HUD ───
        app.add_systems(
            Update,
            (
                hud::update_money_display,
                hud::update_menu_text,
                hud::update_guide_text,
                hud::update_cursor_text,
                hud::spawn_floating_amounts,
                hud::update_floating_amounts,
            ),
        );

        // ─── INPUT ───
        app.add_systems(
            Update,
            (input::menu_hotkeys, input::slot_cursor_input).before(prompts::answer_prompt),
        );

        // ─── TRANSITIONS & ANIMATIONS ───
        app.add_systems(
            Update,
            (
                transitions::start_transitions,
                transitions::start_animations,
                transitions::update_sky_tint,
                transitions::finish_pending,
            )
                .chain(),
        );

        // ─── AUDIO ───
        app.add_systems(
            Update,
            (
                audio::handle_play_sfx,
                audio::handle_ambient_requests,
                audio::tick_ambient_voices,
            )
                .chain(),
        );
    }
}

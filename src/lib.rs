//! Garden Makeover library crate: re-exports the game modules for
//! integration testing.
//!
//! The binary crate (`main.rs`) is the actual game entry point and adds the
//! keyboard/HUD stand-ins in `ui`. This library crate exposes the domain
//! modules so that `tests/` integration tests can drive the game headless,
//! without a window or GPU.

pub mod shared;
pub mod data;
pub mod economy;
pub mod placement;
pub mod farming;
pub mod daycycle;
pub mod levels;
pub mod context;

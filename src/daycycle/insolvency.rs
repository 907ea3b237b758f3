//! Rent-day failure flavor text.

use bevy::prelude::*;
use rand::Rng;

pub const INSOLVENCY_MESSAGES: [&str; 5] = [
    "The landlord came by with a very long face.\nThere was no rent for him.",
    "Your savings ran dry\nbefore the rent did.",
    "The bank took the farm.\nThe chickens are not happy about it.",
    "Rent day came\nand the wallet was empty.",
    "Even the sheep could tell\nthe numbers didn't add up.",
];

/// How the insolvency message is chosen. Tests pin it with `Fixed`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessagePicker {
    #[default]
    Random,
    Fixed(usize),
}

impl MessagePicker {
    /// Index into a pool of `len` messages. `len` must be non-zero.
    pub fn pick(&self, len: usize) -> usize {
        match *self {
            MessagePicker::Random => rand::thread_rng().gen_range(0..len),
            MessagePicker::Fixed(index) => index % len,
        }
    }

    pub fn message(&self) -> &'static str {
        INSOLVENCY_MESSAGES[self.pick(INSOLVENCY_MESSAGES.len())]
    }
}

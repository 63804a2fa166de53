// Dispatcher Module - Event-to-notification routing
//
// Maps one lifecycle event at a time to at most one desktop
// notification.

pub mod core;
pub mod lookup;

pub use core::Dispatcher;
pub use lookup::{sound_for, subtitle_for};

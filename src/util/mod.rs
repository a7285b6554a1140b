//! Pure helpers behind the visual effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! `typewriter` paces the hero headline, `particles` lays out the decorative
//! dot field, `scroll` wraps the handful of window/element scroll calls.
//! Everything except `scroll` runs fine off-wasm, which is where the tests
//! live.

pub mod particles;
pub mod scroll;
pub mod typewriter;

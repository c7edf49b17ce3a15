//! Hero card carousel with scroll-jacking.
//!
//! The controller is a DOM-free state machine. [`dom`] adapts it to the
//! browser and [`HeroHandle`] shares one instance across the app.

mod config;
mod controller;
pub mod dom;
mod handle;
mod input;
mod renderer;
mod state;
mod timers;

#[cfg(test)]
mod testing;

pub use config::HeroConfig;
pub use handle::HeroHandle;
pub use input::HeroInput;

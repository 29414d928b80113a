pub mod animation;
pub mod cli;
pub mod config;
pub mod core;
pub mod input;
pub mod pose;
pub mod script;
pub mod simulation;

pub use animation::{AnimationError, AnimationState, KeyColor, KeyCommand, LidCommand};

pub mod ai;
pub mod card;
pub mod command;
pub mod game;
pub mod renderer;
pub mod session;

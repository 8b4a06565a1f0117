pub mod board;
pub mod clock;
pub mod config;
pub mod game;
pub mod input;
pub mod prompt;
pub mod render;
pub mod scores;
pub mod session;
pub mod snake;
pub mod term;

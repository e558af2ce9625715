pub mod board;
pub mod drag;
pub mod task;
pub mod team;

pub mod board;
pub mod play;
pub mod validate;

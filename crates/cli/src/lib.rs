pub mod commands;
pub mod hexarg;

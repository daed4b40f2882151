pub mod clock;
pub mod commands;
pub mod records;
pub mod state;

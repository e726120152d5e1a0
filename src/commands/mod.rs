pub mod command_file;

pub use command_file::{parse_command_file, validate_command_file, CommandDocument};

mod command;
mod config;
mod constant;
mod error;
mod file_io;
mod generator;

pub use command::{format_delete, format_get, format_set, Command, Endpoint, Op};
pub use config::{ConfigLayer, GenConfig};
pub use constant::*;
pub use error::{GenError, Result};
pub use file_io::BufWriterWithPos;
pub use generator::{write_commands, Generator, Summary};

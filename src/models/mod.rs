pub mod appointment;
pub mod dates;
pub mod enums;
pub mod history;
pub mod payload;

pub use appointment::*;
pub use enums::*;
pub use history::*;
pub use payload::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Unrecognized timestamp: {0}")]
    InvalidTimestamp(String),
}

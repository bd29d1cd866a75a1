mod command;
pub mod contact;

pub use command::*;

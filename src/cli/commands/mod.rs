pub mod env;
pub mod parity;

mod command_result;

pub use command_result::*;

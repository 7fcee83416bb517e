mod env;
mod log;

pub use env::*;
pub use log::*;

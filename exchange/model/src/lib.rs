#[doc(hidden)]
pub mod model {
    pub use crate::*;
}

mod account;
mod common;
mod market;
mod order;

pub use account::*;
pub use common::*;
pub use market::*;
pub use order::*;

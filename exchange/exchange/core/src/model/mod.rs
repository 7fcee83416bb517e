mod context;
mod credential;
mod error;
mod exchange;

pub use context::*;
pub use credential::*;
pub use error::*;
pub use exchange::*;

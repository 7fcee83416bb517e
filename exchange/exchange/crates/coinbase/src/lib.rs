pub mod advanced;
mod auth;
mod cache;
mod config;
mod exchange;
pub mod legacy;
mod order;
pub mod symbol;
#[cfg(test)]
mod testing;
mod trade;
mod urls;

pub use auth::*;
pub use cache::*;
pub use config::*;
pub use exchange::*;
pub use order::*;
pub use trade::*;
pub use urls::*;

//! Client for the legacy `/v2` API family, used for account lookup, fiat
//! currency listing, prices and bank deposits.

mod account;
mod client;
mod currencies;
mod deposit;
mod prices;

pub use account::*;
pub use client::*;
pub use currencies::*;
pub use deposit::*;
pub use prices::*;

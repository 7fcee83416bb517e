use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Exchanges the scheduler can be pointed at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum ExchangeKind {
    Coinbase,
}

impl ExchangeKind {
    pub fn ticker(&self) -> &'static str {
        self.into()
    }
}

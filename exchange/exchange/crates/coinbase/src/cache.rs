use crate::advanced::{AdvancedAccount, AdvancedTradeApi};
use dca_exchange_core::model::{parse_f64, ExchangeError, RequestContext, Result};
use dca_model::Account;
use std::collections::HashMap;
use tracing::debug;

/// Page size requested when scanning for an account.
pub const ACCOUNTS_PAGE_SIZE: u32 = 100;

/// Currency code to account, filled lazily on first lookup.
///
/// Entries are never refreshed on their own: balances are whatever they were
/// when the account was first seen, until [`AccountCache::invalidate`] or
/// [`AccountCache::clear`] is called.
#[derive(Debug, Clone, Default)]
pub struct AccountCache {
    accounts: HashMap<String, Account>,
}

impl AccountCache {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self, currency: &str) -> Option<&Account> {
        self.accounts.get(currency)
    }
    pub fn len(&self) -> usize {
        self.accounts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
    pub fn invalidate(&mut self, currency: &str) -> Option<Account> {
        self.accounts.remove(currency)
    }
    pub fn clear(&mut self) {
        self.accounts.clear()
    }

    /// Returns the cached account for `currency`, or walks the account listing
    /// page by page until it finds one.
    pub async fn account_for<A: AdvancedTradeApi + ?Sized>(
        &mut self,
        ctx: &RequestContext,
        api: &A,
        currency: &str,
    ) -> Result<Account> {
        if let Some(account) = self.accounts.get(currency) {
            return Ok(account.clone());
        }
        let mut cursor = String::new();
        loop {
            let page = api.list_accounts(ctx, ACCOUNTS_PAGE_SIZE, &cursor).await?;
            debug!(currency, accounts = page.accounts.len(), has_next = page.has_next, "scanned accounts page");
            if let Some(found) = page.accounts.iter().find(|a| a.currency == currency) {
                let account = parse_account(found)?;
                self.accounts.insert(currency.to_string(), account.clone());
                return Ok(account);
            }
            if !page.has_next || page.cursor.is_empty() || page.cursor == cursor {
                return Err(ExchangeError::no_wallet(currency));
            }
            cursor = page.cursor;
        }
    }
}

fn parse_account(account: &AdvancedAccount) -> Result<Account> {
    Ok(Account {
        id: account.uuid.clone(),
        currency: account.currency.clone(),
        available: parse_f64("available_balance", &account.available_balance.value)?,
        hold: parse_f64("hold", &account.hold.value)?,
    })
}

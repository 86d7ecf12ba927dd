// Token Metadata Store
// Mapping from token identifier to its locator string. The locator is an
// opaque pointer to off-ledger metadata; no length ceiling is imposed.

use indexmap::IndexMap;

use crate::error::{LedgerError, LedgerResult};
use crate::types::TokenId;

/// Per-token locator storage
#[derive(Clone, Debug, Default)]
pub struct MetadataStore {
    locators: IndexMap<TokenId, String>,
}

impl MetadataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the locator for a newly issued token
    ///
    /// # Returns
    /// - `Err(EmptyLocator)` if the locator is empty
    pub fn set(&mut self, id: TokenId, locator: String) -> LedgerResult<()> {
        if locator.is_empty() {
            return Err(LedgerError::EmptyLocator);
        }
        self.locators.insert(id, locator);
        Ok(())
    }

    /// Get the locator for a live token
    ///
    /// # Returns
    /// - `Err(NotFound)` if the token was never issued or has been retired
    pub fn get(&self, id: TokenId) -> LedgerResult<&str> {
        self.locators
            .get(&id)
            .map(String::as_str)
            .ok_or(LedgerError::NotFound)
    }

    /// Replace the locator of a live token
    ///
    /// # Returns
    /// - `Err(NotFound)` if the token is not currently live
    /// - `Err(EmptyLocator)` if the locator is empty
    pub fn update(&mut self, id: TokenId, locator: String) -> LedgerResult<()> {
        if locator.is_empty() {
            return Err(LedgerError::EmptyLocator);
        }
        let entry = self.locators.get_mut(&id).ok_or(LedgerError::NotFound)?;
        *entry = locator;
        Ok(())
    }

    /// Remove the locator entry; removing an absent id is a no-op
    pub fn remove(&mut self, id: TokenId) {
        self.locators.shift_remove(&id);
    }

    /// Whether the id has a live locator entry
    pub fn contains(&self, id: TokenId) -> bool {
        self.locators.contains_key(&id)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

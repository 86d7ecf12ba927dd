// Observable Ledger Events
// Events are buffered inside the ledger and drained by the embedder
// (an indexer, UI feed, or test harness).

use serde::{Deserialize, Serialize};

use crate::types::{Identity, TokenId};

/// Event emitted by a successful state transition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum LedgerEvent {
    /// A token was issued
    Issued {
        holder: Identity,
        id: TokenId,
        locator: String,
    },

    /// A token was retired (burned)
    Retired { holder: Identity, id: TokenId },

    /// The administrator changed
    AdminTransferred {
        previous: Identity,
        current: Identity,
    },
}

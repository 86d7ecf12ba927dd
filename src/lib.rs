// Media Token Issuance Ledger
// Sequential issuance-and-lifecycle ledger layered on an injected base
// ownership ledger.
//
// Features:
// - Unique sequential identifiers (never reused, not even after burn)
// - Single transferable administrator gating issuance and locator updates
// - Per-token metadata locators, mutable while the token is live
// - Atomic batch issuance bounded at 100 entries
// - Owner/approved-operator retirement delegated to the base ledger
// - Buffered events for external indexers
//
// Module Structure:
// - error: Error codes and types
// - types: Identity and identifier types, protocol constants
// - config: Variant naming configuration (video license / hash-lock media)
// - events: Observable event types
// - access: Administrator access gate
// - sequencer: Identifier allocation
// - metadata: Locator storage
// - base: Base ownership ledger trait and in-memory implementation
// - ledger: Issuance and retirement orchestration
// - service: Mutex-guarded shared handle

mod access;
mod base;
mod config;
mod error;
mod events;
mod ledger;
mod metadata;
mod sequencer;
mod service;
mod types;

pub use access::*;
pub use base::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use ledger::*;
pub use metadata::*;
pub use sequencer::*;
pub use service::*;
pub use types::*;

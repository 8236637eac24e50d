//! Application layer for the Quicks data stack.
//!
//! Adapts the one-shot repository fetches into observable
//! `{records, loading, error}` state for a reactive UI shell, and provides
//! the wiring from configuration down to the Firestore-backed repositories.

pub mod bootstrap;
pub mod conversations;
pub mod fetch;
pub mod tasks;

pub use bootstrap::AppContext;
pub use conversations::ConversationsService;
pub use fetch::FetchState;
pub use tasks::TasksService;

//! Storage layer for the Quicks data stack.
//!
//! Implements the core repository traits against the Firestore REST API:
//! connection configuration, a thin `documents.list` client, wire value
//! decoding, and one repository per collection.

pub mod conversation_repository;
pub mod firestore;
pub mod firestore_repository;
pub mod task_repository;

pub use crate::conversation_repository::FirestoreConversationRepository;
pub use crate::firestore::client::FirestoreClient;
pub use crate::firestore::config::FirestoreConfig;
pub use crate::task_repository::FirestoreTaskRepository;

//! Firestore REST adapter: configuration, client, wire value decoding.

pub mod client;
pub mod config;
pub mod value;

pub use client::{Document, FirestoreClient};
pub use config::FirestoreConfig;

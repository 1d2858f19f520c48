//! itemstore_client - typed client and CLI for the itemstore API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod smoke;

pub use client::ItemstoreClient;
pub use error::{ClientError, Result};

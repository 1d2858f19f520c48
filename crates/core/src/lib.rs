//! Core domain for the itemstore API.
//!
//! Everything in this crate is pure: data types, validation, and the
//! repository contract. Storage backends and HTTP live in the `itemstore`
//! crate; the CLI client lives in `itemstore_client`.

pub mod item;
pub mod serde;
pub mod storage;

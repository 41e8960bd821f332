//! Browser-independent logic behind the bazaar marketplace widgets.
//!
//! The Leptos components in `bz-leptos-ui` and the `bz` CLI both build on
//! this crate, so upload rules and compression behave the same everywhere.

pub mod accept;
pub mod compression;
pub mod config;
pub mod listing;
pub mod upload;
pub mod validation;

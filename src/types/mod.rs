//! Common types used across the KuCoin client library.

pub mod common;

pub use common::*;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gt-core operations.

use thiserror::Error;

/// All possible errors that can occur in gt-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid priority: '{0}'\n  hint: valid priorities are: P0, P1, P2, P3")]
    InvalidPriority(String),

    #[error("unexpected tracker response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for gt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gt-core: domain logic for the ghtask issue front end.
//!
//! The remote tracker is the source of truth, so this crate holds no state.
//! It models the issues returned by the tracker, derives priority from
//! labels, and turns a fetched collection into colored terminal rows.
//! Nothing here spawns processes or touches the terminal directly; callers
//! pass terminal capabilities in through [`listing::RenderOptions`].

pub mod error;
pub mod filter;
pub mod issue;
pub mod listing;
pub mod palette;
pub mod width;

pub use error::{Error, Result};
pub use filter::{Filter, FilterSet};
pub use issue::{Issue, IssueDetail, Label, Priority, ACTIVE_LABEL, INBOX_LABEL};
pub use listing::RenderOptions;

//! Claim export normalization and multi-select filtering for LARP
//! registration data.
//!
//! [`data`] turns raw registration exports into canonical records and
//! evaluates filter snapshots against them; [`state`] owns the filter
//! selections on behalf of a table UI.

pub mod data;
pub mod state;

// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for heat map construction.

/// Errors returned when converting or laying out heat map data.
///
/// Degenerate value ranges and palette lookup misses are *not* errors: the
/// color scale collapses to a single bucket and palette lookups fall back to
/// the default palette. Out-of-range settings are silently clamped. The only
/// failure a caller must handle is missing data, in which case prior output
/// should be cleared and no layout performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// The input table has no category column, no named value columns, or no
    /// categories left after filtering out undefined entries.
    MissingData,
}

impl core::fmt::Display for ChartError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingData => f.write_str("table has no category column or value columns"),
        }
    }
}

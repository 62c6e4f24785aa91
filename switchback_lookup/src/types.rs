// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for case lookup: the scan direction.

/// Scan direction for a case lookup over a stack's entries.
///
/// Passed to the direction-parameterized operations of
/// [`CaseLookup`](crate::lookup::CaseLookup); the `first_*`/`last_*`
/// conveniences fix it for the common calls.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Scan from the first (bottom-most) element.
    FromFirst,
    /// Scan from the last (top-most) element.
    FromLast,
}

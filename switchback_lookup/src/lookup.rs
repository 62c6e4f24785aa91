// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup implementation.
//!
//! ## Overview
//!
//! Scans a stack's entries in a chosen [`Direction`] for the first element
//! holding a given case, short-circuiting at the match. Absence is the only
//! non-result: every operation returns `Option`, nothing panics and nothing
//! is mutated.
//!
//! ## Selection
//!
//! - Exactly one winning element or none; the winner is the first match in
//!   scan order.
//! - No ordering is imposed beyond the collection's own entry order.
//! - Cost is O(k) to the match position, O(n) when nothing matches.
//!
//! ## See Also
//!
//! [`path`](crate::path) for building case selectors and
//! [`adapters`](crate::adapters) for host-container integration.

use alloc::boxed::Box;

use crate::path::CasePath;
use crate::types::Direction;

/// Ordered, id-addressed read access to a stack-like collection.
///
/// This is the protocol the lookup operations consume. Implementations must
/// uphold two invariants for the duration of a borrow:
///
/// - [`entries`](Self::entries) yields each live entry exactly once, in the
///   collection's own order (front → back), with ids unique among them.
/// - [`element`](Self::element) resolves exactly the ids that `entries`
///   yields.
///
/// The `stack_adapter` feature provides the implementation for the
/// Switchback stack container; any other host container can implement this
/// directly.
pub trait Entries {
    /// Stable element identifier type.
    type Id: Copy + Eq;
    /// Element type stored in the collection.
    type Element;

    /// Iterate live entries front → back. The iterator must be double-ended
    /// so lookups can scan from either end without materializing anything.
    fn entries<'a>(
        &'a self,
    ) -> Box<dyn DoubleEndedIterator<Item = (Self::Id, &'a Self::Element)> + 'a>;

    /// Borrow the element with `id`, or `None` if no live entry has it.
    fn element(&self, id: Self::Id) -> Option<&Self::Element>;
}

/// First/last case lookup over any [`Entries`] implementor.
///
/// ## Usage
///
/// - Build a [`CasePath`] for the variant of interest (usually with
///   [`case_path!`](crate::case_path)).
/// - Call a `first_*`/`last_*` convenience, or the direction-parameterized
///   core (`id_for`, `state_for`, `entry_for`) when the direction is itself
///   data.
///
/// All operations are read-only and return `None` when no element holds the
/// requested case (or the collection is empty); there is no error condition.
pub trait CaseLookup: Entries {
    /// Project the case's payload at `id`, or `None` when the element is
    /// gone or currently holds a different case.
    fn case<C>(&self, id: Self::Id, path: &CasePath<Self::Element, C>) -> Option<&C> {
        self.element(id).and_then(|element| path.extract(element))
    }

    /// The identifier of the first element holding the case when scanning in
    /// `direction`, or `None` if no element matches.
    fn id_for<C>(
        &self,
        path: &CasePath<Self::Element, C>,
        direction: Direction,
    ) -> Option<Self::Id> {
        match direction {
            Direction::FromFirst => self
                .entries()
                .find(|&(_, element)| path.matches(element))
                .map(|(id, _)| id),
            Direction::FromLast => self
                .entries()
                .rev()
                .find(|&(_, element)| path.matches(element))
                .map(|(id, _)| id),
        }
    }

    /// The payload of the first element holding the case when scanning in
    /// `direction`, or `None` if no element matches.
    fn state_for<C>(
        &self,
        path: &CasePath<Self::Element, C>,
        direction: Direction,
    ) -> Option<&C> {
        self.entry_for(path, direction).map(|(_, state)| state)
    }

    /// Identifier and payload of the first element holding the case when
    /// scanning in `direction`, or `None` if no element matches.
    ///
    /// Locates the id first, then projects at that id. Under a shared borrow
    /// the collection cannot change in between, so a scan-time match always
    /// projects; a misbehaving [`Entries`] implementation degrades to `None`,
    /// never to a panic.
    fn entry_for<C>(
        &self,
        path: &CasePath<Self::Element, C>,
        direction: Direction,
    ) -> Option<(Self::Id, &C)> {
        let id = self.id_for(path, direction)?;
        let state = self.case(id, path)?;
        Some((id, state))
    }

    /// Identifier of the first (bottom-most) element holding the case.
    fn first_id<C>(&self, path: &CasePath<Self::Element, C>) -> Option<Self::Id> {
        self.id_for(path, Direction::FromFirst)
    }

    /// Payload of the first (bottom-most) element holding the case.
    fn first_state<C>(&self, path: &CasePath<Self::Element, C>) -> Option<&C> {
        self.state_for(path, Direction::FromFirst)
    }

    /// Identifier and payload of the first (bottom-most) element holding the
    /// case.
    fn first_entry<C>(&self, path: &CasePath<Self::Element, C>) -> Option<(Self::Id, &C)> {
        self.entry_for(path, Direction::FromFirst)
    }

    /// Identifier of the last (top-most) element holding the case.
    fn last_id<C>(&self, path: &CasePath<Self::Element, C>) -> Option<Self::Id> {
        self.id_for(path, Direction::FromLast)
    }

    /// Payload of the last (top-most) element holding the case.
    fn last_state<C>(&self, path: &CasePath<Self::Element, C>) -> Option<&C> {
        self.state_for(path, Direction::FromLast)
    }

    /// Identifier and payload of the last (top-most) element holding the
    /// case.
    fn last_entry<C>(&self, path: &CasePath<Self::Element, C>) -> Option<(Self::Id, &C)> {
        self.entry_for(path, Direction::FromLast)
    }
}

impl<T: Entries + ?Sized> CaseLookup for T {}

// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for the Switchback stack container.
//!
//! ## Feature
//!
//! Enable with `stack_adapter`.
//!
//! ## Notes
//!
//! [`Stack`] already satisfies the entry protocol invariants: its iteration
//! order is push order, its ids are unique and never recycled, and
//! [`Stack::get`] resolves exactly the live ids. The impl is a thin bridge,
//! after which every [`CaseLookup`](crate::lookup::CaseLookup) operation is
//! available on the stack directly.

use alloc::boxed::Box;

use switchback_stack::{ElementId, Stack};

use crate::lookup::Entries;

impl<E> Entries for Stack<E> {
    type Id = ElementId;
    type Element = E;

    fn entries<'a>(
        &'a self,
    ) -> Box<dyn DoubleEndedIterator<Item = (ElementId, &'a E)> + 'a> {
        Box::new(self.iter())
    }

    fn element(&self, id: ElementId) -> Option<&E> {
        self.get(id)
    }
}

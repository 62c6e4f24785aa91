// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=switchback_lookup --heading-base-level=0

//! Switchback Lookup: first/last case queries over navigation stacks.
//!
//! ## Overview
//!
//! A navigation stack holds elements of one enum type, each entry under a
//! stable id. This crate answers one question about such a stack: which
//! element is the first — or last — one currently holding a given case, and
//! what are its id and payload?
//!
//! It does not own or mutate the stack. Instead, feed it any collection
//! implementing [`Entries`](crate::lookup::Entries) (ordered, id-addressed
//! read access) and select cases with a
//! [`CasePath`](crate::path::CasePath); the
//! [`CaseLookup`](crate::lookup::CaseLookup) extension then provides the
//! queries on the collection itself.
//!
//! ## Operations
//!
//! - `first_id` / `last_id`: the matching element's identifier.
//! - `first_state` / `last_state`: the matching element's payload.
//! - `first_entry` / `last_entry`: both at once.
//! - `id_for` / `state_for` / `entry_for`: the same lookups with the scan
//!   [`Direction`](crate::types::Direction) as a parameter.
//!
//! Every operation is a single short-circuiting scan from the chosen end.
//! "Not found" is `None`, never an error: an empty stack and a stack without
//! a matching case are the same outcome to a caller.
//!
//! ## Workflow
//!
//! 1) Build a selector — [`case_path!`](crate::case_path) for payload-carrying
//!    tuple variants, [`CasePath::new`](crate::path::CasePath::new) for other
//!    shapes.
//! 2) Query — call a `first_*`/`last_*` convenience, or the
//!    direction-parameterized core when the direction is itself data.
//! 3) Act on `Option` — default, skip, or assert, as the call site demands.
//!
//! ## Minimal example
//!
//! ```
//! use switchback_lookup::case_path;
//! use switchback_lookup::lookup::{CaseLookup, Entries};
//! #
//! # // Minimal host collection for demonstration.
//! # struct Screens(Vec<(u32, Screen)>);
//! # impl Entries for Screens {
//! #     type Id = u32;
//! #     type Element = Screen;
//! #     fn entries<'a>(
//! #         &'a self,
//! #     ) -> Box<dyn DoubleEndedIterator<Item = (u32, &'a Screen)> + 'a> {
//! #         Box::new(self.0.iter().map(|(id, e)| (*id, e)))
//! #     }
//! #     fn element(&self, id: u32) -> Option<&Screen> {
//! #         self.0.iter().find(|(eid, _)| *eid == id).map(|(_, e)| e)
//! #     }
//! # }
//! #
//! enum Screen {
//!     Home,
//!     Detail(u32),
//! }
//!
//! # let screens = Screens(vec![
//! #     (0, Screen::Home),
//! #     (1, Screen::Detail(7)),
//! #     (2, Screen::Detail(9)),
//! # ]);
//! let detail = case_path!(Screen::Detail);
//! assert_eq!(screens.first_entry(&detail), Some((1, &7)));
//! assert_eq!(screens.last_state(&detail), Some(&9));
//! assert_eq!(screens.first_id(&case_path!(Screen::Detail)), Some(1));
//! ```
//!
//! Stacks from the `switchback_stack` crate implement the protocol via the
//! `stack_adapter` feature; see [`adapters`](crate::adapters).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod lookup;
pub mod path;
pub mod types;

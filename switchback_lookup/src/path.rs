// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case selectors: test an enum element for one variant and project its
//! payload.
//!
//! ## Overview
//!
//! A [`CasePath`] identifies a single variant of a tagged-union element type
//! `E` and knows how to project that variant's payload `C` out of a matching
//! element. It is an explicit projection function rather than any form of
//! reflection, so it works for any element type, including ones the caller
//! does not own.
//!
//! For the common single-payload tuple variant, [`case_path!`](crate::case_path)
//! writes the projection for you:
//!
//! ```
//! use switchback_lookup::case_path;
//! use switchback_lookup::path::CasePath;
//!
//! enum Screen {
//!     Home,
//!     Detail(u32),
//! }
//!
//! let detail: CasePath<Screen, u32> = case_path!(Screen::Detail);
//! assert_eq!(detail.extract(&Screen::Detail(7)), Some(&7));
//! assert_eq!(detail.extract(&Screen::Home), None);
//! ```

/// A selector for one case of a tagged-union element type.
///
/// Holds the projection function for a single variant: given an element, it
/// yields the variant's payload when the element currently is that variant,
/// and `None` otherwise. An element is exactly one variant at a time, so at
/// most one `CasePath` of a family can match it.
///
/// Construct with [`CasePath::new`] or the [`case_path!`](crate::case_path)
/// macro. Payload-less variants can be selected by projecting `&()`:
///
/// ```
/// use switchback_lookup::path::CasePath;
///
/// enum Screen {
///     Home,
///     Detail(u32),
/// }
///
/// let home: CasePath<Screen, ()> = CasePath::new(|e| match e {
///     Screen::Home => Some(&()),
///     _ => None,
/// });
/// assert!(home.matches(&Screen::Home));
/// assert!(!home.matches(&Screen::Detail(3)));
/// ```
pub struct CasePath<E, C> {
    extract: fn(&E) -> Option<&C>,
}

impl<E, C> CasePath<E, C> {
    /// Create a selector from an explicit projection function.
    pub const fn new(extract: fn(&E) -> Option<&C>) -> Self {
        Self { extract }
    }

    /// Project the payload out of `element`, or `None` when its current
    /// variant is a different case.
    pub fn extract<'a>(&self, element: &'a E) -> Option<&'a C> {
        (self.extract)(element)
    }

    /// Whether `element` currently holds this case.
    pub fn matches(&self, element: &E) -> bool {
        self.extract(element).is_some()
    }
}

// Manual impls: a projection fn pointer is always copyable and printable,
// independent of `E` and `C`.
impl<E, C> Clone for CasePath<E, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, C> Copy for CasePath<E, C> {}

impl<E, C> core::fmt::Debug for CasePath<E, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CasePath").finish_non_exhaustive()
    }
}

/// Build a [`CasePath`] for a single-payload tuple variant.
///
/// `case_path!(Screen::Detail)` expands to a selector that matches
/// `Screen::Detail(payload)` and projects `&payload`. For other variant
/// shapes (struct variants, multiple fields, no payload), write the
/// projection by hand with [`CasePath::new`].
#[macro_export]
macro_rules! case_path {
    ($variant:path) => {
        $crate::path::CasePath::new(|element| match element {
            $variant(value) => ::core::option::Option::Some(value),
            _ => ::core::option::Option::None,
        })
    };
}

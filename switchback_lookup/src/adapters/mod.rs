// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with host stack containers.
//!
//! Enabled via feature flags to keep the core small and dependency-free.

#[cfg(feature = "stack_adapter")]
pub mod stack;

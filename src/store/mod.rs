// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory data layer.

pub mod memory;

pub use memory::MemoryStore;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise Tracker: a minimal exercise-logging web API.
//!
//! This crate provides the backend API for creating users, logging
//! exercises against them, and retrieving date-filtered exercise logs.

pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use store::MemoryStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: MemoryStore,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-lifetime store for users and their exercise logs.
//!
//! Provides typed operations for:
//! - Users (creation, listing, lookup)
//! - Exercises (per-user append-only logs)
//!
//! A single `RwLock` guards both collections so the create-user and
//! add-exercise read-modify-write sequences stay atomic. Readers may run
//! concurrently with each other but not with a writer.

use crate::error::AppError;
use crate::id::IdGenerator;
use crate::models::{Exercise, User};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct StoreInner {
    /// Users in insertion order.
    users: Vec<User>,
    /// Per-user exercise logs in insertion order, keyed by user id.
    exercises: HashMap<String, Vec<Exercise>>,
}

/// Shared in-memory store.
///
/// Cloning hands out another handle to the same underlying collections,
/// so the store can be stored in `AppState` and passed to handlers as an
/// explicit dependency.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
    ids: IdGenerator,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create a user with a fresh id and an empty exercise log.
    ///
    /// The caller is expected to have validated `username` already; the
    /// store enforces only the id-uniqueness invariant, regenerating on
    /// the off chance a token is already taken.
    pub fn create_user(&self, username: &str) -> Result<User, AppError> {
        let mut inner = self.inner.write().expect("store lock poisoned");

        let id = loop {
            let candidate = self.ids.generate()?;
            if !inner.exercises.contains_key(&candidate) {
                break candidate;
            }
        };

        let user = User {
            id: id.clone(),
            username: username.to_string(),
        };
        inner.users.push(user.clone());
        inner.exercises.insert(id, Vec::new());

        Ok(user)
    }

    /// All users in insertion order.
    pub fn list_users(&self) -> Vec<User> {
        self.inner.read().expect("store lock poisoned").users.clone()
    }

    /// Look up a user by id.
    pub fn find_user(&self, id: &str) -> Option<User> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Append an exercise to a user's log and return the stored record.
    pub fn add_exercise(&self, user_id: &str, exercise: Exercise) -> Result<Exercise, AppError> {
        let mut inner = self.inner.write().expect("store lock poisoned");

        let log = inner
            .exercises
            .get_mut(user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        log.push(exercise.clone());

        Ok(exercise)
    }

    /// Full exercise log for a user, in insertion order.
    ///
    /// Returns an empty sequence for unknown users; the handler layer is
    /// responsible for resolving the user first.
    pub fn exercises_for(&self, user_id: &str) -> Vec<Exercise> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .exercises
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

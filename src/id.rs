// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Opaque user id generation.

use crate::error::AppError;
use ring::rand::{SecureRandom, SystemRandom};

/// Random bytes per id; hex encoding doubles this to the token length.
const ID_BYTES: usize = 4;

/// Generates short opaque id tokens from the system CSPRNG.
///
/// The generator itself makes no uniqueness guarantee; collisions are a
/// probabilistic property of the 32 bits of entropy per token and must be
/// handled by the caller.
#[derive(Clone)]
pub struct IdGenerator {
    rng: SystemRandom,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Produce a fresh 8-character lowercase hex token.
    pub fn generate(&self) -> Result<String, AppError> {
        let mut buf = [0u8; ID_BYTES];
        self.rng
            .fill(&mut buf)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("system RNG unavailable")))?;
        Ok(hex::encode(buf))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

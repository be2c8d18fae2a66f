//! New filename generation for renamed skins.
//!
//! Random names come straight from the operating system's secure random source.
//! Collisions with existing files are not this module's concern; the renamer
//! checks targets before it uses them.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::Result;
use crate::models::{NamingMode, PackConfig};

/// Characters a random name is drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random bytes at or above this value are rejected so every symbol is equally likely.
const REJECTION_BOUND: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Produce `length` characters from [`ALPHABET`] using `rng`.
///
/// A failing random source is returned as [`PackError::RandomSource`](crate::PackError::RandomSource)
/// and never retried.
pub fn random_stem<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    let mut stem = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while stem.len() < length {
        rng.try_fill_bytes(&mut buf)?;
        for byte in buf.iter().copied().filter(|b| *b < REJECTION_BOUND) {
            if stem.len() == length {
                break;
            }
            stem.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
        }
    }

    Ok(stem)
}

/// Picks the next filename for a skin according to the configured naming mode.
pub struct NameGenerator<R: RngCore = OsRng> {
    mode: NamingMode,
    length: usize,
    extension: String,
    rng: R,
}

impl NameGenerator<OsRng> {
    pub fn from_config(config: &PackConfig) -> Self {
        Self::with_rng(config, OsRng)
    }
}

impl<R: RngCore> NameGenerator<R> {
    pub fn with_rng(config: &PackConfig, rng: R) -> Self {
        Self {
            mode: config.naming,
            length: config.name_length,
            extension: config.extension().to_string(),
            rng,
        }
    }

    /// Whether asking again can give a different name.
    pub fn is_random(&self) -> bool {
        self.mode == NamingMode::Random
    }

    /// Filename for the skin that would become number `index` (1-based).
    pub fn name_for(&mut self, index: usize) -> Result<String> {
        let stem = match self.mode {
            NamingMode::Random => random_stem(&mut self.rng, self.length)?,
            NamingMode::Sequential => index.to_string(),
        };
        Ok(format!("{}.{}", stem, self.extension))
    }
}

//! Cache geometry: `(s, E, b)` as used by set-associative cache simulators.
//!
//! A cache with `s` set-index bits, `E` lines per set and `b` block-offset
//! bits has `2^s` sets of `E` lines, each line holding `2^b` bytes.
//! `E = 1` is a direct-mapped cache.

use serde::{Deserialize, Serialize};

use crate::error::WavefrontError;

/// Largest accepted set-index bit count.
pub const MAX_SET_BITS: u32 = 24;
/// Largest accepted block-offset bit count.
pub const MAX_BLOCK_BITS: u32 = 16;
/// Largest accepted associativity.
pub const MAX_ASSOCIATIVITY: u32 = 1024;

/// Immutable `(set_bits, associativity, block_bits)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheGeometry {
    pub set_bits: u32,
    pub associativity: u32,
    pub block_bits: u32,
}

impl CacheGeometry {
    /// Build a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`WavefrontError::InvalidGeometry`] if any field is out of
    /// range (see [`CacheGeometry::validate`]).
    pub fn new(set_bits: u32, associativity: u32, block_bits: u32) -> Result<Self, WavefrontError> {
        let geometry = Self {
            set_bits,
            associativity,
            block_bits,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Direct-mapped cache (`E = 1`).
    ///
    /// # Errors
    ///
    /// Same as [`CacheGeometry::new`].
    pub fn direct_mapped(set_bits: u32, block_bits: u32) -> Result<Self, WavefrontError> {
        Self::new(set_bits, 1, block_bits)
    }

    /// Check field ranges. Geometries read from YAML bypass [`CacheGeometry::new`]
    /// and must go through this before use.
    ///
    /// # Errors
    ///
    /// Returns [`WavefrontError::InvalidGeometry`] naming the offending field.
    pub fn validate(&self) -> Result<(), WavefrontError> {
        if self.set_bits > MAX_SET_BITS {
            return Err(WavefrontError::InvalidGeometry {
                field: "set_bits",
                value: self.set_bits,
                reason: "must be at most 24",
            });
        }
        if self.associativity == 0 {
            return Err(WavefrontError::InvalidGeometry {
                field: "associativity",
                value: self.associativity,
                reason: "must be at least 1",
            });
        }
        if self.associativity > MAX_ASSOCIATIVITY {
            return Err(WavefrontError::InvalidGeometry {
                field: "associativity",
                value: self.associativity,
                reason: "must be at most 1024",
            });
        }
        if self.block_bits > MAX_BLOCK_BITS {
            return Err(WavefrontError::InvalidGeometry {
                field: "block_bits",
                value: self.block_bits,
                reason: "must be at most 16",
            });
        }
        Ok(())
    }

    /// Number of sets, `2^s`.
    pub fn sets(&self) -> usize {
        1usize << self.set_bits
    }

    /// Bytes per line, `2^b`.
    pub fn line_bytes(&self) -> usize {
        1usize << self.block_bits
    }

    /// Total number of lines, `2^s * E`.
    pub fn lines(&self) -> usize {
        self.sets() * self.associativity as usize
    }

    /// Total capacity in bytes, `2^s * E * 2^b`.
    pub fn capacity_bytes(&self) -> usize {
        self.lines() * self.line_bytes()
    }

    pub fn is_direct_mapped(&self) -> bool {
        self.associativity == 1
    }
}

impl Default for CacheGeometry {
    /// 32 sets, direct-mapped, 32-byte lines (1 KiB).
    fn default() -> Self {
        Self {
            set_bits: 5,
            associativity: 1,
            block_bits: 5,
        }
    }
}

impl std::fmt::Display for CacheGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "s={} E={} b={} ({} sets x {} lines x {} B = {} B)",
            self.set_bits,
            self.associativity,
            self.block_bits,
            self.sets(),
            self.associativity,
            self.line_bytes(),
            self.capacity_bytes()
        )
    }
}

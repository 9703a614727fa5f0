//! Sensor-board occupancy snapshots
//!
//! A board with per-square presence sensors can only report whether a square
//! is occupied, never which piece sits on it. Snapshots are 64-bit sets with
//! a1 = bit 0 through h8 = bit 63, the same indexing shakmaty uses.

use std::fmt;

use shakmaty::{Bitboard, Square};

use crate::error::{Error, Result};

/// Length in bytes of one occupancy frame on the wire.
pub const FRAME_LEN: usize = 8;

/// An immutable set of squares sensed as occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy(Bitboard);

impl Occupancy {
    pub const EMPTY: Occupancy = Occupancy(Bitboard(0));

    /// Both back ranks and both pawn ranks occupied.
    pub const STARTING: Occupancy = Occupancy(Bitboard(0xFFFF_0000_0000_FFFF));

    /// Decodes one wire frame.
    ///
    /// The board transmits MSB-first starting at h8, so wire bit i is square
    /// 63 - i; interpreting the frame as a big-endian u64 realizes exactly
    /// that mapping.
    pub fn from_frame(frame: [u8; FRAME_LEN]) -> Self {
        Occupancy(Bitboard(u64::from_be_bytes(frame)))
    }

    /// Decodes a frame from an unvalidated byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let frame: [u8; FRAME_LEN] = bytes
            .try_into()
            .map_err(|_| Error::MalformedFrame(bytes.len()))?;
        Ok(Self::from_frame(frame))
    }

    pub fn contains(self, square: Square) -> bool {
        self.0.contains(square)
    }

    pub fn count(self) -> usize {
        self.0.count()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Occupied squares in ascending square order (a1 first).
    pub fn squares(self) -> impl Iterator<Item = Square> {
        self.0.into_iter()
    }

    /// Squares occupied here but not in `other`.
    pub fn minus(self, other: Occupancy) -> Occupancy {
        Occupancy(self.0 & !other.0)
    }

    /// Squares occupied in both.
    pub fn intersect(self, other: Occupancy) -> Occupancy {
        Occupancy(self.0 & other.0)
    }

    /// Squares occupied in either.
    pub fn union(self, other: Occupancy) -> Occupancy {
        Occupancy(self.0 | other.0)
    }

    pub fn with(self, square: Square) -> Occupancy {
        Occupancy(self.0 | Bitboard::from_square(square))
    }

    pub fn without(self, square: Square) -> Occupancy {
        Occupancy(self.0 & !Bitboard::from_square(square))
    }
}

impl From<Bitboard> for Occupancy {
    fn from(bitboard: Bitboard) -> Self {
        Occupancy(bitboard)
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", u64::from(self.0))
    }
}

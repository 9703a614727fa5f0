//! Byte-stream framing for sensor boards
//!
//! Boards report their state as fixed 8-byte frames, one bit per square,
//! MSB-first from h8 down to a1. Transports deliver bytes in arbitrary
//! chunks, so partial frames are buffered until 8 bytes accumulate.

use crate::occupancy::{Occupancy, FRAME_LEN};

/// Reassembles complete occupancy frames from arbitrary byte chunks.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    buf: Vec<u8>,
}

impl FrameAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a chunk of transport bytes, draining every completed frame.
    ///
    /// Bytes beyond the last complete frame stay buffered for the next call.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Occupancy> {
        self.buf.extend_from_slice(bytes);

        let complete = self.buf.len() - self.buf.len() % FRAME_LEN;
        let frames = self.buf[..complete]
            .chunks_exact(FRAME_LEN)
            .filter_map(|chunk| Occupancy::from_bytes(chunk).ok())
            .collect();
        self.buf.drain(..complete);

        frames
    }

    /// Number of buffered bytes still waiting for a complete frame.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

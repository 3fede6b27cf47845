//! Sequential single-bit input/output abstractions consumed by the codec.
//!
//! The encoder and decoder only ever see the `BitSink` and `BitSource` traits;
//! the concrete medium behind them (memory buffer, file, network) is
//! irrelevant to the core and the codec never inspects byte boundaries
//! directly.
//!
//! The crate-wide packing convention, fixed here once for every producer and
//! consumer of packed bytes: bits fill each byte most-significant-bit first
//! (`bitvec`'s `Msb0` order), and the final partial byte is padded with 0
//! bits. The decoder treats an unterminated trailing codeword as padding, so
//! this padding is transparent on the read side.

use bitvec::prelude::*;

//==================================================================================
// 1. Traits
//==================================================================================

/// Accepts single bits in order.
pub trait BitSink {
    fn write_bit(&mut self, bit: bool);
}

/// Yields single bits on demand and signals exhaustion.
pub trait BitSource {
    /// Returns `true` while at least one more bit is available.
    fn has_next(&self) -> bool;

    /// Pulls the next bit, or `None` once the source is exhausted.
    fn next_bit(&mut self) -> Option<bool>;
}

//==================================================================================
// 2. In-Memory Adapters
//==================================================================================

impl BitSink for BitVec<u8, Msb0> {
    fn write_bit(&mut self, bit: bool) {
        self.push(bit);
    }
}

/// Packs an accumulated bit buffer into plain bytes, zero-padding the final
/// partial byte. This is the only sanctioned way to turn a `BitSink` buffer
/// into a byte payload.
pub fn pack_bits(mut bits: BitVec<u8, Msb0>) -> Vec<u8> {
    // The bits past `len()` in the last element are not guaranteed to be
    // zero; force them before exposing the raw buffer.
    bits.set_uninitialized(false);
    bits.into_vec()
}

/// A draining reader over a packed `Msb0` byte buffer.
pub struct SliceBitSource<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> SliceBitSource<'a> {
    /// Reads every bit of `bytes`, including any trailing padding bits.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: bytes.view_bits::<Msb0>(),
            pos: 0,
        }
    }

    /// Reads from an existing bit slice, e.g. to stop short of padding.
    pub fn from_bits(bits: &'a BitSlice<u8, Msb0>) -> Self {
        Self { bits, pos: 0 }
    }

    /// The number of bits not yet pulled.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }
}

impl BitSource for SliceBitSource<'_> {
    fn has_next(&self) -> bool {
        self.pos < self.bits.len()
    }

    fn next_bit(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.pos)?;
        self.pos += 1;
        Some(*bit)
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

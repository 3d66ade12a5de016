//! The shared buffer engine.
//!
//! Every capacity of [`FixedStr`](crate::FixedStr) routes its mutations and
//! comparisons through this module, which operates on a borrowed buffer slice
//! plus cached [`State`]. Keeping the engine non-generic means the machine
//! code exists once no matter how many capacities a program instantiates.
//!
//! Invariants maintained by every mutating routine:
//! - `state.used < buf.len()`
//! - `buf[state.used] == TERMINATOR`
//!
//! Bytes past the terminator are never zeroed; they are simply outside the
//! content view.

use core::cmp::Ordering;

/// Terminator byte kept at `buf[used]` at all times.
pub(crate) const TERMINATOR: u8 = 0;

/// Sentinel byte returned by indexed reads when the position is out of range.
///
/// Recomputed per access; never stored in any buffer.
pub const ERROR_MARKER: u8 = b'?';

/// Cached engine state carried by each capacity binder alongside its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct State {
    /// Number of content bytes before the terminator.
    pub(crate) used: usize,
    /// Sticky diagnostic: some mutation since the last `reset` dropped bytes.
    pub(crate) truncated: bool,
}

impl State {
    pub(crate) const fn new() -> Self {
        Self {
            used: 0,
            truncated: false,
        }
    }
}

/// Borrowed view of one binder's buffer and cached state.
///
/// The engine never owns or allocates storage; the binder hands it a buffer
/// of at least one byte for the duration of a single call.
#[derive(Debug)]
pub(crate) struct Engine<'a> {
    buf: &'a mut [u8],
    state: &'a mut State,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(buf: &'a mut [u8], state: &'a mut State) -> Self {
        debug_assert!(!buf.is_empty(), "a buffer must hold at least a terminator");
        debug_assert!(state.used < buf.len());
        Self { buf, state }
    }

    /// Content bytes the buffer can hold; one slot is reserved for the
    /// terminator.
    fn usable(&self) -> usize {
        self.buf.len() - 1
    }

    /// Positions addressable by indexed access.
    pub(crate) fn in_bounds(&self, pos: usize) -> bool {
        pos < self.usable()
    }

    /// Appends one byte, keeping the terminator in place.
    ///
    /// Returns `false` when the buffer is full: the byte is dropped and the
    /// truncation diagnostic is set. Whether a dropped byte is an error is
    /// the caller's policy decision, not the engine's.
    pub(crate) fn append(&mut self, byte: u8) -> bool {
        if self.state.used < self.usable() {
            self.buf[self.state.used] = byte;
            self.state.used += 1;
            self.buf[self.state.used] = TERMINATOR;
            true
        } else {
            self.state.truncated = true;
            false
        }
    }

    /// Appends every byte of `seq`, truncating once the buffer fills.
    ///
    /// Returns the number of dropped bytes.
    pub(crate) fn extend(&mut self, seq: impl Iterator<Item = u8>) -> usize {
        let mut dropped = 0;
        for byte in seq {
            if !self.append(byte) {
                dropped += 1;
            }
        }
        dropped
    }

    /// Resets then appends: the uniform normalization behind assignment and
    /// every constructor form. Returns the number of dropped bytes.
    pub(crate) fn assign(&mut self, seq: impl Iterator<Item = u8>) -> usize {
        self.reset();
        self.extend(seq)
    }

    /// Empties the content: used length 0, terminator at position 0, unused
    /// bytes left as they were.
    pub(crate) fn reset(&mut self) {
        self.state.used = 0;
        self.buf[0] = TERMINATOR;
        self.state.truncated = false;
    }
}

/// Ordinal, position-by-position comparison of content bytes against any
/// operand's byte sequence.
///
/// The first differing byte decides. When one side ends with the prefixes
/// matching, the longer side is ordinally greater.
pub(crate) fn compare(lhs: &[u8], mut rhs: impl Iterator<Item = u8>) -> Ordering {
    let mut lhs = lhs.iter().copied();
    loop {
        match (lhs.next(), rhs.next()) {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => {}
                decided => return decided,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Exchanges content between two engines of possibly different capacities.
///
/// Each destination receives as much of the other's former content as its
/// capacity allows; the remainder is dropped and the shortchanged side's
/// truncation diagnostic is set. Content loss on swap is documented
/// truncation, never a fault, regardless of overflow policy.
///
/// One canonical routine: the side with the greater used length performs the
/// exchange, the other delegates with the arguments flipped, so the result
/// is identical no matter which side initiates.
pub(crate) fn swap(longer: Engine<'_>, shorter: Engine<'_>) {
    if longer.state.used < shorter.state.used {
        return swap(shorter, longer);
    }
    let from_longer = longer.state.used;
    let from_shorter = shorter.state.used;
    // The shorter content always fits the longer side's buffer, because
    // from_shorter <= from_longer <= longer.usable().
    let kept = from_longer.min(shorter.usable());

    for pos in 0..from_shorter {
        core::mem::swap(&mut longer.buf[pos], &mut shorter.buf[pos]);
    }
    shorter.buf[from_shorter..kept].copy_from_slice(&longer.buf[from_shorter..kept]);

    longer.state.used = from_shorter;
    longer.buf[from_shorter] = TERMINATOR;
    shorter.state.used = kept;
    shorter.buf[kept] = TERMINATOR;
    if kept < from_longer {
        shorter.state.truncated = true;
    }
}

//! The per-capacity value type.
//!
//! [`FixedStr`] supplies storage and nothing else clever: a `[u8; C]` buffer
//! and the cached engine state live inline in the value, and every operation
//! forwards to [`crate::engine`]. Capacity is part of the type; content moves
//! between capacities by copying, never by aliasing storage.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use bstr::BStr;

use crate::{
    CapacityError,
    engine::{self, Engine, State, TERMINATOR},
    operand::{ByteSeq, Operand, sealed},
};

/// A fixed-capacity, stack-resident byte string.
///
/// `C` is the total buffer size, terminator slot included, so up to `C - 1`
/// content bytes are usable. `C` must be at least 1; a capacity-0 string is
/// rejected at compile time.
///
/// Content that does not fit is silently dropped and recorded in the
/// [`truncated`](Self::truncated) diagnostic. The `strict-overflow` cargo
/// feature turns the silent drop into a panic for the infallible mutating
/// functions; the `try_*` functions report [`CapacityError`] under either
/// policy.
///
/// ```
/// use fixstr::FixedStr;
///
/// let mut s = FixedStr::<6>::from("hello");
/// assert_eq!(s.as_bytes(), b"hello");
/// s.push(b'!'); // full: dropped
/// assert_eq!(s.as_bytes(), b"hello");
/// assert!(s.truncated());
/// ```
#[derive(Clone)]
pub struct FixedStr<const C: usize> {
    buf: [u8; C],
    state: State,
}

impl<const C: usize> FixedStr<C> {
    /// Creates an empty string.
    #[must_use]
    pub const fn new() -> Self {
        const {
            assert!(C >= 1, "capacity must leave room for the terminator");
        }
        Self {
            buf: [TERMINATOR; C],
            state: State::new(),
        }
    }

    fn engine(&mut self) -> Engine<'_> {
        Engine::new(&mut self.buf, &mut self.state)
    }

    #[cfg_attr(not(feature = "strict-overflow"), allow(unused_variables))]
    fn enforce_overflow_policy(dropped: usize) {
        #[cfg(feature = "strict-overflow")]
        assert!(dropped == 0, "fixed string capacity {C} exceeded");
    }

    /// Number of content bytes currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.state.used
    }

    /// `true` when no content is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.state.used == 0
    }

    /// `true` when no further byte can be appended.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.state.used == C - 1
    }

    /// Total buffer size, terminator slot included. Fixed for the lifetime
    /// of the value.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Greatest number of content bytes this capacity can hold: `C - 1`.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        C - 1
    }

    /// `true` when some mutation since the last [`clear`](Self::clear) or
    /// assignment dropped bytes for lack of room.
    ///
    /// Purely diagnostic: the content itself is always valid and terminated.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.state.truncated
    }

    /// The stored content, terminator excluded.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.state.used]
    }

    /// The stored content plus the trailing NUL, for interfaces that expect
    /// C-style strings. The terminator is maintained across every mutation.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.state.used]
    }

    /// The content as `&str`, when it happens to be valid UTF-8.
    ///
    /// Content is plain bytes; nothing in this type enforces UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Iterates over the content bytes.
    #[must_use]
    pub fn bytes(&self) -> ByteSeq<'_> {
        ByteSeq::from_slice(self.as_bytes())
    }

    /// Appends one byte. Dropped silently when full (or panics under
    /// `strict-overflow`).
    pub fn push(&mut self, byte: u8) {
        let accepted = self.engine().append(byte);
        Self::enforce_overflow_policy(usize::from(!accepted));
    }

    /// Appends one `char` as its UTF-8 bytes, subject to the same
    /// truncation rule.
    pub fn push_char(&mut self, ch: char) {
        self.append(ch);
    }

    /// Appends one byte, reporting instead of truncating.
    ///
    /// # Errors
    ///
    /// [`CapacityError`] when the string is full; the byte is dropped.
    pub fn try_push(&mut self, byte: u8) -> Result<(), CapacityError> {
        if self.engine().append(byte) {
            Ok(())
        } else {
            Err(CapacityError {
                capacity: C,
                dropped: 1,
            })
        }
    }

    /// Appends every byte of `seq`, truncating once full (or panicking
    /// under `strict-overflow`).
    pub fn append(&mut self, seq: impl Operand) {
        let dropped = self.engine().extend(seq.byte_seq());
        Self::enforce_overflow_policy(dropped);
    }

    /// Appends every byte of `seq` that fits, reporting any drop.
    ///
    /// # Errors
    ///
    /// [`CapacityError`] when bytes were dropped; everything that fit was
    /// appended.
    pub fn try_append(&mut self, seq: impl Operand) -> Result<(), CapacityError> {
        match self.engine().extend(seq.byte_seq()) {
            0 => Ok(()),
            dropped => Err(CapacityError {
                capacity: C,
                dropped,
            }),
        }
    }

    /// Replaces the content with `seq`, truncating to fit (or panicking
    /// under `strict-overflow`). Every constructor form routes through here.
    pub fn assign(&mut self, seq: impl Operand) {
        let dropped = self.engine().assign(seq.byte_seq());
        Self::enforce_overflow_policy(dropped);
    }

    /// Replaces the content with `seq`, reporting any drop.
    ///
    /// # Errors
    ///
    /// [`CapacityError`] when `seq` exceeded the usable capacity; the
    /// leading `C - 1` bytes were kept.
    pub fn try_assign(&mut self, seq: impl Operand) -> Result<(), CapacityError> {
        match self.engine().assign(seq.byte_seq()) {
            0 => Ok(()),
            dropped => Err(CapacityError {
                capacity: C,
                dropped,
            }),
        }
    }

    /// Empties the content and clears the truncation diagnostic.
    ///
    /// Capacity is untouched and slack bytes are not zeroed; they are simply
    /// outside the content view.
    pub fn clear(&mut self) {
        self.engine().reset();
    }

    /// Ordinal three-way comparison against any operand.
    ///
    /// The first differing byte decides; with one side a prefix of the
    /// other, the longer side is greater. All relational operators are
    /// defined in terms of this result.
    #[must_use]
    pub fn compare(&self, rhs: impl Operand) -> Ordering {
        engine::compare(self.as_bytes(), rhs.byte_seq())
    }

    /// The byte at `pos`, or [`ERROR_MARKER`](crate::ERROR_MARKER) when
    /// `pos` is outside the usable range `0..C - 1`.
    ///
    /// Reads never fault. Positions past the current length but inside the
    /// usable range read whatever the buffer holds there, exactly like a raw
    /// character array.
    #[must_use]
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.get(pos).unwrap_or(crate::ERROR_MARKER)
    }

    /// The byte at `pos`, or `None` outside the usable range.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<u8> {
        (pos < C - 1).then(|| self.buf[pos])
    }

    /// Mutable access to the byte at `pos`, sharing the bounds predicate of
    /// [`get`](Self::get). The terminator slot is never reachable; writes
    /// past the current length do not extend the content.
    #[must_use]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut u8> {
        (pos < C - 1).then(|| &mut self.buf[pos])
    }

    /// Exchanges content with `other`, which may have a different capacity.
    ///
    /// Each side receives as much of the other's former content as its own
    /// capacity allows; the excess is dropped for good and the shortchanged
    /// side's [`truncated`](Self::truncated) diagnostic is set. Both
    /// capacities are unchanged, and the result does not depend on which
    /// side the call is made from. Content loss here is documented
    /// truncation, not a fault, under either overflow policy.
    pub fn swap_with<const M: usize>(&mut self, other: &mut FixedStr<M>) {
        engine::swap(self.engine(), other.engine());
    }
}

impl<const C: usize> Default for FixedStr<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> From<&str> for FixedStr<C> {
    fn from(value: &str) -> Self {
        let mut s = Self::new();
        s.assign(value);
        s
    }
}

impl<const C: usize> From<&[u8]> for FixedStr<C> {
    fn from(value: &[u8]) -> Self {
        let mut s = Self::new();
        s.assign(value);
        s
    }
}

impl<const C: usize> From<u8> for FixedStr<C> {
    fn from(value: u8) -> Self {
        let mut s = Self::new();
        s.assign(value);
        s
    }
}

impl<const C: usize> From<char> for FixedStr<C> {
    fn from(value: char) -> Self {
        let mut s = Self::new();
        s.assign(value);
        s
    }
}

/// Cross-capacity copy: content is copied up to the destination's capacity,
/// never reinterpreted through the source's storage.
impl<const C: usize, const M: usize> From<&FixedStr<M>> for FixedStr<C> {
    fn from(value: &FixedStr<M>) -> Self {
        let mut s = Self::new();
        s.assign(value);
        s
    }
}

impl<const C: usize> sealed::Sealed for FixedStr<C> {}
impl<const C: usize> Operand for FixedStr<C> {
    fn byte_seq(&self) -> ByteSeq<'_> {
        self.bytes()
    }
}

impl<const C: usize, T: Operand> PartialEq<T> for FixedStr<C> {
    fn eq(&self, other: &T) -> bool {
        self.compare(other).is_eq()
    }
}

impl<const C: usize> Eq for FixedStr<C> {}

impl<const C: usize, T: Operand> PartialOrd<T> for FixedStr<C> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<const C: usize> Ord for FixedStr<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Hashes the content only, so equal content hashes alike at any capacity.
impl<const C: usize> Hash for FixedStr<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<'a, const C: usize> IntoIterator for &'a FixedStr<C> {
    type Item = u8;
    type IntoIter = ByteSeq<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes()
    }
}

/// Truncating sink: formatting into a full string drops the overflow rather
/// than failing the formatter.
impl<const C: usize> fmt::Write for FixedStr<C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl<const C: usize> fmt::Display for FixedStr<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl<const C: usize> fmt::Debug for FixedStr<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedStr")
            .field("content", &BStr::new(self.as_bytes()))
            .field("capacity", &C)
            .finish()
    }
}

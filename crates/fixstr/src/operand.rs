//! Uniform byte-sequence view over heterogeneous operands.
//!
//! Append, assignment, comparison, and the constructor family all accept "a
//! sequence of characters" in several spellings: a single byte, a `char`, a
//! string or byte slice, a null-terminated sequence, or another fixed string
//! of any capacity. [`Operand`] normalizes them all to one small by-value
//! iterator so the engine sees exactly one shape.

pub(crate) mod sealed {
    /// Closes [`Operand`](super::Operand) to the operand set the engine
    /// understands.
    pub trait Sealed {}
}

/// A value usable as the right-hand side of append, assignment, comparison,
/// and construction.
///
/// Sealed: implemented for `u8`, `char`, `str`, `[u8]`, [`core::ffi::CStr`],
/// [`FixedStr`](crate::FixedStr) of any capacity, and references to those.
pub trait Operand: sealed::Sealed {
    /// The operand's content as a plain byte sequence.
    fn byte_seq(&self) -> ByteSeq<'_>;
}

/// Iterator over an operand's bytes.
///
/// Slice-backed for slice-like operands; for `u8` and `char` the bytes live
/// inline in the iterator itself.
#[derive(Debug, Clone)]
pub struct ByteSeq<'a>(Repr<'a>);

#[derive(Debug, Clone)]
enum Repr<'a> {
    Slice(core::slice::Iter<'a, u8>),
    Inline { buf: [u8; 4], pos: u8, len: u8 },
}

impl<'a> ByteSeq<'a> {
    pub(crate) fn from_slice(bytes: &'a [u8]) -> Self {
        Self(Repr::Slice(bytes.iter()))
    }

    fn inline(buf: [u8; 4], len: u8) -> Self {
        debug_assert!(len <= 4);
        Self(Repr::Inline { buf, pos: 0, len })
    }
}

impl Iterator for ByteSeq<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match &mut self.0 {
            Repr::Slice(iter) => iter.next().copied(),
            Repr::Inline { buf, pos, len } => {
                if pos < len {
                    let byte = buf[usize::from(*pos)];
                    *pos += 1;
                    Some(byte)
                } else {
                    None
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.0 {
            Repr::Slice(iter) => iter.len(),
            Repr::Inline { pos, len, .. } => usize::from(len - pos),
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ByteSeq<'_> {}

impl sealed::Sealed for u8 {}
impl Operand for u8 {
    fn byte_seq(&self) -> ByteSeq<'_> {
        ByteSeq::inline([*self, 0, 0, 0], 1)
    }
}

impl sealed::Sealed for char {}
impl Operand for char {
    /// A `char` contributes its UTF-8 bytes, compared ordinally like any
    /// other bytes. No further Unicode awareness is offered.
    #[allow(clippy::cast_possible_truncation)] // len_utf8 is at most 4
    fn byte_seq(&self) -> ByteSeq<'_> {
        let mut buf = [0u8; 4];
        let len = self.encode_utf8(&mut buf).len();
        ByteSeq::inline(buf, len as u8)
    }
}

impl sealed::Sealed for str {}
impl Operand for str {
    fn byte_seq(&self) -> ByteSeq<'_> {
        ByteSeq::from_slice(self.as_bytes())
    }
}

impl sealed::Sealed for [u8] {}
impl Operand for [u8] {
    fn byte_seq(&self) -> ByteSeq<'_> {
        ByteSeq::from_slice(self)
    }
}

impl sealed::Sealed for core::ffi::CStr {}
impl Operand for core::ffi::CStr {
    /// The null-terminated form: content runs up to, and excludes, the nul.
    fn byte_seq(&self) -> ByteSeq<'_> {
        ByteSeq::from_slice(self.to_bytes())
    }
}

impl<T: Operand + ?Sized> sealed::Sealed for &T {}
impl<T: Operand + ?Sized> Operand for &T {
    fn byte_seq(&self) -> ByteSeq<'_> {
        (**self).byte_seq()
    }
}

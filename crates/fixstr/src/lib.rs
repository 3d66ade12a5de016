//! Fixed-capacity, stack-resident byte strings.
//!
//! [`FixedStr<C>`] stores up to `C - 1` content bytes plus a NUL terminator
//! in a `[u8; C]` held by value: no heap, no growth, predictable footprint.
//! Built for targets where allocation is off the table (embedded, realtime,
//! early boot).
//!
//! The defining contract is that capacity is a hard ceiling, never an error:
//! append and assignment silently drop what does not fit and record a
//! [`truncated`](FixedStr::truncated) diagnostic. Callers that want overflow
//! to be loud can use the `try_*` functions ([`CapacityError`]) or enable
//! the `strict-overflow` cargo feature, which turns overflow on the
//! infallible surface into a panic.
//!
//! Comparison is ordinal (raw byte values, no locale, no Unicode) and works
//! against heterogeneous right-hand sides: bytes, chars, slices,
//! null-terminated sequences, and other fixed strings of any capacity.
//!
//! ```
//! use fixstr::{FixedStr, fixed_str};
//!
//! let mut greeting = fixed_str!(6, "hello");
//! assert_eq!(greeting.as_bytes(), b"hello");
//! assert!(greeting.is_full());
//!
//! // Capacity 6 means five usable bytes: the tail of an over-long
//! // assignment is dropped.
//! greeting.assign("helloworld");
//! assert_eq!(greeting.as_bytes(), b"hello");
//! assert!(greeting.truncated());
//!
//! // Swaps work across capacities; each side keeps what fits.
//! let mut wide = FixedStr::<16>::from("0123456789");
//! greeting.swap_with(&mut wide);
//! assert_eq!(greeting.as_bytes(), b"01234");
//! assert_eq!(wide.as_bytes(), b"hello");
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod engine;
mod error;
mod fixed;
mod operand;

#[cfg(feature = "serde")]
mod serde;


pub use engine::ERROR_MARKER;
pub use error::CapacityError;
pub use fixed::FixedStr;
pub use operand::{ByteSeq, Operand};

/// Macro to declare a [`FixedStr`] of a given capacity, optionally assigning
/// initial content (subject to the usual truncation rule).
///
/// ```rust
/// use fixstr::{FixedStr, fixed_str};
///
/// let empty = fixed_str!(8);
/// assert_eq!(empty, FixedStr::<8>::new());
///
/// let s = fixed_str!(8, "buffers");
/// assert_eq!(s.as_bytes(), b"buffers");
/// ```
#[macro_export]
macro_rules! fixed_str {
    ( $cap:expr ) => {
        $crate::FixedStr::<{ $cap }>::new()
    };
    ( $cap:expr, $content:expr ) => {{
        let mut s = $crate::FixedStr::<{ $cap }>::new();
        s.assign($content);
        s
    }};
}

//! Optional serde support.
//!
//! Content serializes as plain bytes. Deserialization rejects over-long
//! input with a length error instead of truncating: silently shortening
//! persisted data on the way back in would hide corruption.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::FixedStr;

impl<const C: usize> Serialize for FixedStr<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct ContentVisitor<const C: usize>;

impl<'de, const C: usize> de::Visitor<'de> for ContentVisitor<C> {
    type Value = FixedStr<C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at most {} content bytes", C - 1)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        let mut s = FixedStr::new();
        s.try_assign(v)
            .map_err(|_| E::invalid_length(v.len(), &self))?;
        Ok(s)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut s = FixedStr::new();
        while let Some(byte) = seq.next_element::<u8>()? {
            s.try_push(byte)
                .map_err(|_| de::Error::invalid_length(s.len() + 1, &self))?;
        }
        Ok(s)
    }
}

impl<'de, const C: usize> Deserialize<'de> for FixedStr<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(ContentVisitor)
    }
}

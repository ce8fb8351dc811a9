//! Decoding typed values from a response declared to have no body.
//!
//! [`EmptyDecoder`] drives a type's `Deserialize` implementation against a
//! deserializer that holds no data. Only "nothing" types succeed:
//! [`Empty`](crate::Empty), `()`, and unit structs. Anything that asks for
//! data fails with [`EmptyDecodeError::NotEmpty`].

use serde::de::{self, DeserializeOwned, Visitor};
use serde::forward_to_deserialize_any;

use crate::clients::errors::EmptyDecodeError;

/// Produces values of "nothing" types without reading a body.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyDecoder;

impl EmptyDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decodes a `T` from no input.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDecodeError::NotEmpty`] if `T` requires data.
    pub fn decode<T>(&self) -> Result<T, EmptyDecodeError>
    where
        T: DeserializeOwned,
    {
        T::deserialize(NothingDeserializer)
    }
}

struct NothingDeserializer;

impl<'de> de::Deserializer<'de> for NothingDeserializer {
    type Error = EmptyDecodeError;

    fn deserialize_any<V>(self, _visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(EmptyDecodeError::NotEmpty)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option newtype_struct seq tuple tuple_struct map struct
        enum identifier
    }
}

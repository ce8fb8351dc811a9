//! The [`Empty`] sentinel for bodiless requests and responses.

use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny};
use serde::ser::{self, Impossible, Serialize};

/// Marker meaning "no parameters" or "no body".
///
/// `Empty` serializes as a unit struct, which the query encoder skips, and
/// deserializes successfully from any input by discarding it. Use it as the
/// parameter type of operations without parameters and as the result type of
/// operations whose response carries no body.
///
/// # Example
///
/// ```rust
/// use restlike::Empty;
///
/// let decoded: Empty = serde_json::from_str(r#"{"ignored": true}"#).unwrap();
/// assert_eq!(decoded, Empty);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Empty;

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}

/// Returns `true` if `value` serializes as nothing: `()`, a unit struct such
/// as [`Empty`], or `None`, possibly behind newtype wrappers.
pub(crate) fn is_nothing<T>(value: &T) -> bool
where
    T: Serialize + ?Sized,
{
    value.serialize(NothingCheck).unwrap_or(false)
}

/// Stops at the first compound value.
#[derive(Debug)]
struct HasData;

impl fmt::Display for HasData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value carries data")
    }
}

impl std::error::Error for HasData {}

impl ser::Error for HasData {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Self
    }
}

struct NothingCheck;

impl ser::Serializer for NothingCheck {
    type Ok = bool;
    type Error = HasData;

    type SerializeSeq = Impossible<bool, HasData>;
    type SerializeTuple = Impossible<bool, HasData>;
    type SerializeTupleStruct = Impossible<bool, HasData>;
    type SerializeTupleVariant = Impossible<bool, HasData>;
    type SerializeMap = Impossible<bool, HasData>;
    type SerializeStruct = Impossible<bool, HasData>;
    type SerializeStructVariant = Impossible<bool, HasData>;

    fn serialize_bool(self, _v: bool) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_i8(self, _v: i8) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_i16(self, _v: i16) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_i32(self, _v: i32) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_i64(self, _v: i64) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_u8(self, _v: u8) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_u16(self, _v: u16) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_u32(self, _v: u32) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_u64(self, _v: u64) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_f32(self, _v: f32) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_f64(self, _v: f64) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_char(self, _v: char) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_str(self, _v: &str) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_none(self) -> Result<bool, HasData> {
        Ok(true)
    }

    fn serialize_some<T>(self, value: &T) -> Result<bool, HasData>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<bool, HasData> {
        Ok(true)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<bool, HasData> {
        Ok(true)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<bool, HasData> {
        Ok(false)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<bool, HasData>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<bool, HasData>
    where
        T: Serialize + ?Sized,
    {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, HasData> {
        Err(HasData)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, HasData> {
        Err(HasData)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, HasData> {
        Err(HasData)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, HasData> {
        Err(HasData)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, HasData> {
        Err(HasData)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, HasData> {
        Err(HasData)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, HasData> {
        Err(HasData)
    }
}

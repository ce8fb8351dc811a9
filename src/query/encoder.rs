//! A [`serde::Serializer`] that flattens values into query items.
//!
//! The encoder threads a [`QueryKeyPath`] through the serde data model.
//! Structs, maps, and struct variants push a [`KeySegment::Field`]; sequences,
//! tuples, and tuple variants push a [`KeySegment::Index`]. Every scalar leaf
//! is rendered to text and appended under the rendered path.

use serde::ser::{
    self, Impossible, Serialize, SerializeMap, SerializeSeq, SerializeStruct,
    SerializeStructVariant, SerializeTuple, SerializeTupleStruct, SerializeTupleVariant,
};

use crate::query::{KeySegment, QueryEncodeError, QueryItem, QueryKeyPath};

/// Flattens typed values into ordered [`QueryItem`]s.
///
/// The encoder is stateless; two calls with equal input produce identical
/// output in the same order.
///
/// # Top-level values
///
/// The value passed to [`encode`](Self::encode) must be a record (struct or
/// map), an `Option` of one, or "nothing" (`()`, `None`, or
/// [`Empty`](crate::Empty)). Nothing yields no items. A bare scalar or
/// sequence has no key to name its items and fails with
/// [`QueryEncodeError::Unsupported`].
///
/// # Example
///
/// ```rust
/// use restlike::query::{QueryItem, QueryItemEncoder};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Page {
///     limit: u32,
///     cursor: Option<String>,
/// }
///
/// let items = QueryItemEncoder::new()
///     .encode(&Page { limit: 50, cursor: None })
///     .unwrap();
///
/// assert_eq!(items, vec![QueryItem::new("limit", "50")]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryItemEncoder;

impl QueryItemEncoder {
    /// Creates a new encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Flattens `value` into query items in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`QueryEncodeError::Unsupported`] if the value contains bytes,
    /// a non-scalar map key, or is a bare scalar or sequence at the top level.
    /// Returns [`QueryEncodeError::Custom`] if a `Serialize` implementation
    /// fails.
    pub fn encode<T>(&self, value: &T) -> Result<Vec<QueryItem>, QueryEncodeError>
    where
        T: Serialize + ?Sized,
    {
        let mut items = Vec::new();
        value.serialize(ItemSerializer::new(&mut items, QueryKeyPath::root()))?;
        Ok(items)
    }
}

const fn unsupported(kind: &'static str) -> QueryEncodeError {
    QueryEncodeError::Unsupported { kind }
}

/// Serializes one value located at `path`.
struct ItemSerializer<'a> {
    items: &'a mut Vec<QueryItem>,
    path: QueryKeyPath,
}

impl<'a> ItemSerializer<'a> {
    fn new(items: &'a mut Vec<QueryItem>, path: QueryKeyPath) -> Self {
        Self { items, path }
    }

    fn emit(self, value: String) -> Result<(), QueryEncodeError> {
        if self.path.is_root() {
            return Err(unsupported("a top-level scalar"));
        }
        self.items.push(QueryItem::new(self.path.render(), value));
        Ok(())
    }

    fn sequence(self) -> Result<SeqEncoder<'a>, QueryEncodeError> {
        if self.path.is_root() {
            return Err(unsupported("a top-level sequence"));
        }
        Ok(SeqEncoder {
            items: self.items,
            path: self.path,
            index: 0,
        })
    }

    fn variant_path(&self, variant: &'static str) -> QueryKeyPath {
        self.path.child(KeySegment::Field(variant.to_string()))
    }
}

impl<'a> ser::Serializer for ItemSerializer<'a> {
    type Ok = ();
    type Error = QueryEncodeError;

    type SerializeSeq = SeqEncoder<'a>;
    type SerializeTuple = SeqEncoder<'a>;
    type SerializeTupleStruct = SeqEncoder<'a>;
    type SerializeTupleVariant = SeqEncoder<'a>;
    type SerializeMap = MapEncoder<'a>;
    type SerializeStruct = StructEncoder<'a>;
    type SerializeStructVariant = StructEncoder<'a>;

    fn serialize_bool(self, v: bool) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<(), Self::Error> {
        self.emit(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<(), Self::Error> {
        self.emit(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), Self::Error> {
        Err(unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<(), Self::Error> {
        self.emit(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        let path = self.variant_path(variant);
        value.serialize(ItemSerializer::new(self.items, path))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        self.sequence()
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        self.sequence()
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        self.sequence()
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        let path = self.variant_path(variant);
        Ok(SeqEncoder {
            items: self.items,
            path,
            index: 0,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(MapEncoder {
            items: self.items,
            path: self.path,
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(StructEncoder {
            items: self.items,
            path: self.path,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        let path = self.variant_path(variant);
        Ok(StructEncoder {
            items: self.items,
            path,
        })
    }
}

/// Encodes sequences, tuples, and tuple variants.
struct SeqEncoder<'a> {
    items: &'a mut Vec<QueryItem>,
    path: QueryKeyPath,
    index: usize,
}

impl SeqEncoder<'_> {
    fn element<T>(&mut self, value: &T) -> Result<(), QueryEncodeError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path.child(KeySegment::Index(self.index));
        self.index += 1;
        value.serialize(ItemSerializer::new(&mut *self.items, path))
    }
}

impl SerializeSeq for SeqEncoder<'_> {
    type Ok = ();
    type Error = QueryEncodeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeTuple for SeqEncoder<'_> {
    type Ok = ();
    type Error = QueryEncodeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeTupleStruct for SeqEncoder<'_> {
    type Ok = ();
    type Error = QueryEncodeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeTupleVariant for SeqEncoder<'_> {
    type Ok = ();
    type Error = QueryEncodeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Encodes structs and struct variants in field declaration order.
struct StructEncoder<'a> {
    items: &'a mut Vec<QueryItem>,
    path: QueryKeyPath,
}

impl StructEncoder<'_> {
    fn field<T>(&mut self, key: &'static str, value: &T) -> Result<(), QueryEncodeError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path.child(KeySegment::Field(key.to_string()));
        value.serialize(ItemSerializer::new(&mut *self.items, path))
    }
}

impl SerializeStruct for StructEncoder<'_> {
    type Ok = ();
    type Error = QueryEncodeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeStructVariant for StructEncoder<'_> {
    type Ok = ();
    type Error = QueryEncodeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Encodes maps in iteration order.
///
/// Keys must be string-like scalars; they become [`KeySegment::Field`]s.
struct MapEncoder<'a> {
    items: &'a mut Vec<QueryItem>,
    path: QueryKeyPath,
    pending_key: Option<String>,
}

impl SerializeMap for MapEncoder<'_> {
    type Ok = ();
    type Error = QueryEncodeError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.pending_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| <QueryEncodeError as ser::Error>::custom("map value without a key"))?;
        let path = self.path.child(KeySegment::Field(key));
        value.serialize(ItemSerializer::new(&mut *self.items, path))
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Renders a map key to text.
struct MapKeySerializer;

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = QueryEncodeError;

    type SerializeSeq = Impossible<String, QueryEncodeError>;
    type SerializeTuple = Impossible<String, QueryEncodeError>;
    type SerializeTupleStruct = Impossible<String, QueryEncodeError>;
    type SerializeTupleVariant = Impossible<String, QueryEncodeError>;
    type SerializeMap = Impossible<String, QueryEncodeError>;
    type SerializeStruct = Impossible<String, QueryEncodeError>;
    type SerializeStructVariant = Impossible<String, QueryEncodeError>;

    fn serialize_bool(self, v: bool) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String, Self::Error> {
        Err(unsupported("a floating point map key"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String, Self::Error> {
        Err(unsupported("a floating point map key"))
    }

    fn serialize_char(self, v: char) -> Result<String, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, Self::Error> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, Self::Error> {
        Err(unsupported("a byte map key"))
    }

    fn serialize_none(self) -> Result<String, Self::Error> {
        Err(unsupported("an empty map key"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String, Self::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, Self::Error> {
        Err(unsupported("an empty map key"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, Self::Error> {
        Err(unsupported("an empty map key"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, Self::Error> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, Self::Error>
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
    ) -> Result<String, Self::Error>
    where
        T: Serialize + ?Sized,
    {
        Err(unsupported("a non-scalar map key"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Err(unsupported("a non-scalar map key"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Err(unsupported("a non-scalar map key"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Err(unsupported("a non-scalar map key"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(unsupported("a non-scalar map key"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Err(unsupported("a non-scalar map key"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Err(unsupported("a non-scalar map key"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(unsupported("a non-scalar map key"))
    }
}

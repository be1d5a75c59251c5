/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Field representations shared by every schema model.
//!
//! Optional, non-nullable fields are plain `Option<T>` skipped when `None`.
//! Fields that the schema marks as both optional and nullable need a third
//! state, which is what [`Nullable`] provides.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Unknown keys preserved on a model
pub type AdditionalProperties = BTreeMap<String, Value>;

/// A field that can be absent, explicitly `null`, or carry a value
///
/// Use it together with
/// `#[serde(default, skip_serializing_if = "Nullable::is_unset")]` so that an
/// unset field disappears from the serialized object while an explicit
/// `null` survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The key was not present
    Unset,
    /// The key was present with a `null` value
    Null,
    /// The key was present with a value
    Present(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Unset
    }
}

impl<T> Nullable<T> {
    /// True when the key was absent
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    /// True when the key carried an explicit `null`
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// True when the key carried a value
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    /// Borrows the value, if any
    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Takes the value, collapsing `Unset` and `Null` into `None`
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the contained value, keeping `Unset` and `Null` as they are
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Unset => Nullable::Unset,
            Nullable::Null => Nullable::Null,
            Nullable::Present(v) => Nullable::Present(f(v)),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    /// `None` becomes an explicit `null`
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Present(v),
            None => Nullable::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Present(v) => v.serialize(serializer),
            // Unset is normally skipped by the field attribute
            Nullable::Null | Nullable::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

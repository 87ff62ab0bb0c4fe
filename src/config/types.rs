//! Typed configuration fields.
//!
//! A [`Field`] is a named slot with a static type, a default and an optional
//! live value. The aggregate walks its fields through the closed [`FieldRef`] /
//! [`FieldMut`] views, one variant per supported value type.

use super::codec::Codec;
use serde::Serialize;
use std::path::PathBuf;

/// A single configuration parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    /// Location in the INI file as `section.name`. Empty for command-line-only fields.
    pub key: &'static str,
    /// Whether the INI file must provide this key.
    pub required: bool,
    pub default: T,
    /// Live value, absent until set by the argument parser or the INI file.
    pub value: Option<T>,
}

impl<T: Codec> Field<T> {
    pub fn new(key: &'static str, default: T) -> Self {
        Self {
            key,
            required: false,
            default,
            value: None,
        }
    }

    pub fn required(key: &'static str, default: T) -> Self {
        Self {
            required: true,
            ..Self::new(key, default)
        }
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The live value if present, else the default.
    pub fn value_or_default(&self) -> &T {
        self.value.as_ref().unwrap_or(&self.default)
    }

    /// Set the value from its string form. Leaves the field untouched and
    /// returns `false` if the string does not convert.
    pub fn set_from_str(&mut self, s: &str) -> bool {
        match T::parse(s) {
            Some(v) => {
                self.value = Some(v);
                true
            }
            None => false,
        }
    }

    /// String form of the live value, `None` if unset.
    pub fn value_string(&self) -> Option<String> {
        self.value.as_ref().map(|v| v.format())
    }

    pub fn default_string(&self) -> String {
        self.default.format()
    }
}

/// Read-only view of a field, tagged by value type.
#[derive(Debug, Clone, Copy)]
pub enum FieldRef<'a> {
    Text(&'a Field<String>),
    Bool(&'a Field<bool>),
    Unsigned(&'a Field<u64>),
    Path(&'a Field<PathBuf>),
}

/// Mutable view of a field, tagged by value type.
#[derive(Debug)]
pub enum FieldMut<'a> {
    Text(&'a mut Field<String>),
    Bool(&'a mut Field<bool>),
    Unsigned(&'a mut Field<u64>),
    Path(&'a mut Field<PathBuf>),
}

macro_rules! dispatch {
    ($view:expr, $f:ident => $body:expr) => {
        match $view {
            Self::Text($f) => $body,
            Self::Bool($f) => $body,
            Self::Unsigned($f) => $body,
            Self::Path($f) => $body,
        }
    };
}

impl FieldRef<'_> {
    pub fn key(&self) -> &'static str {
        dispatch!(self, f => f.key)
    }

    pub fn is_required(&self) -> bool {
        dispatch!(self, f => f.required)
    }

    pub fn has_value(&self) -> bool {
        dispatch!(self, f => f.has_value())
    }

    pub fn value_string(&self) -> Option<String> {
        dispatch!(self, f => f.value_string())
    }

    pub fn default_string(&self) -> String {
        dispatch!(self, f => f.default_string())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldRef::Text(_) => "string",
            FieldRef::Bool(_) => "bool",
            FieldRef::Unsigned(_) => "unsigned",
            FieldRef::Path(_) => "path",
        }
    }

    /// Serializable description of this field.
    pub fn describe(&self, name: &'static str) -> FieldSnapshot {
        FieldSnapshot {
            name,
            key: self.key(),
            kind: self.type_name(),
            required: self.is_required(),
            default: self.default_string(),
            value: self.value_string(),
        }
    }
}

impl FieldMut<'_> {
    pub fn key(&self) -> &'static str {
        dispatch!(self, f => f.key)
    }

    pub fn is_required(&self) -> bool {
        dispatch!(self, f => f.required)
    }

    pub fn has_value(&self) -> bool {
        dispatch!(self, f => f.has_value())
    }

    pub fn set_from_str(&mut self, s: &str) -> bool {
        dispatch!(self, f => f.set_from_str(s))
    }
}

/// Reflection view of one field, as exposed to scripting and debug output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSnapshot {
    pub name: &'static str,
    pub key: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

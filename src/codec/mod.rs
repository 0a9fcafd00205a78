//! Field codec for the controller's terse JSON wire format.
//!
//! Every logical field the library exposes is described by a static
//! [`FieldDescriptor`] pairing the device's wire key with a transform kind:
//! a [`Decoder`] for status fields read from `/jc`, an [`Encoder`] for command
//! fields written to `/cv`. The descriptors are grouped into two independent,
//! ordered [`Registry`] tables built at compile time.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

mod registry;
mod transforms;

pub use registry::{COMMAND_FIELDS, STATUS_FIELDS};
pub use transforms::{Decoder, Encoder};

/// Typed result of decoding one status field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Timestamp(DateTime<Local>),
    Integer(i64),
    Bool(bool),
    Text(String),
    /// Clock time that may be absent (sunrise/sunset of 0)
    Time(Option<DateTime<Local>>),
    /// Dotted-quad IPv4 address
    Address(String),
    /// Open/closed state of the 8 stations on a board, station 1 first
    Stations([bool; 8]),
    /// Undecoded wire value
    Raw(Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Timestamp(ts) | FieldValue::Time(Some(ts)) => {
                write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S"))
            }
            FieldValue::Time(None) => write!(f, "-"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Text(s) | FieldValue::Address(s) => write!(f, "{s}"),
            FieldValue::Stations(bits) => {
                let states: Vec<String> = bits.iter().map(|b| b.to_string()).collect();
                write!(f, "({})", states.join(", "))
            }
            FieldValue::Raw(v) => write!(f, "{v}"),
        }
    }
}

/// Typed input for a command field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommandValue {
    Int(i64),
    /// Absolute time a rain delay should end; `None` switches the delay off
    ResumeAt(Option<DateTime<Local>>),
}

impl From<i64> for CommandValue {
    fn from(value: i64) -> Self {
        CommandValue::Int(value)
    }
}

impl From<Option<DateTime<Local>>> for CommandValue {
    fn from(value: Option<DateTime<Local>>) -> Self {
        CommandValue::ResumeAt(value)
    }
}

impl From<DateTime<Local>> for CommandValue {
    fn from(value: DateTime<Local>) -> Self {
        CommandValue::ResumeAt(Some(value))
    }
}

/// Static pairing of a logical field name, its wire key and transform kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor<K> {
    name: &'static str,
    wire_key: &'static str,
    kind: K,
}

pub type GetDescriptor = FieldDescriptor<Decoder>;
pub type SetDescriptor = FieldDescriptor<Encoder>;

impl<K: Copy> FieldDescriptor<K> {
    pub const fn new(name: &'static str, wire_key: &'static str, kind: K) -> Self {
        Self {
            name,
            wire_key,
            kind,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    pub fn kind(&self) -> K {
        self.kind
    }
}

impl GetDescriptor {
    pub fn decode(&self, raw: &Value, now: DateTime<Local>) -> Result<FieldValue> {
        self.kind
            .decode(raw, now)
            .map_err(|reason| Error::invalid_value(self.name, reason))
    }
}

impl SetDescriptor {
    /// Encode `value` into the wire integer for this command.
    pub fn encode(&self, value: &CommandValue, now: DateTime<Local>) -> Result<i64> {
        self.kind
            .encode(value, now)
            .map_err(|reason| Error::invalid_value(self.name, reason))
    }
}

/// Ordered, immutable table of descriptors indexed by logical name.
#[derive(Debug)]
pub struct Registry<K: 'static> {
    fields: &'static [FieldDescriptor<K>],
}

impl<K: Copy + 'static> Registry<K> {
    pub const fn new(fields: &'static [FieldDescriptor<K>]) -> Self {
        Self { fields }
    }

    pub fn lookup(&self, name: &str) -> Result<&'static FieldDescriptor<K>> {
        self.fields
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FieldDescriptor<K>> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|d| d.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

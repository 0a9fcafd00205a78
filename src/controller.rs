//! Typed access to controller variables.
//!
//! [`Controller`] resolves a logical field name through the status or command
//! registry and performs exactly one round trip through its [`Transport`] per
//! call. Nothing is cached: every `get` fetches a fresh status document.

use crate::codec::{CommandValue, FieldValue, COMMAND_FIELDS, STATUS_FIELDS};
use crate::constants::{defaults, endpoints};
use crate::error::{Error, Result};
use crate::helpers::{Clock, SystemClock};
use crate::interfaces::{CommandPayload, RawDocument, Transport};

pub struct Controller<T> {
    transport: T,
    clock: Box<dyn Clock + Send + Sync>,
    log_target: String,
}

impl<T: Transport> Controller<T> {
    pub fn new(transport: T) -> Self {
        Controller {
            transport,
            clock: Box::new(SystemClock),
            log_target: defaults::LOG_TARGET.to_string(),
        }
    }

    /// Replace the source of "now" used by time-relative transforms.
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Read one status field from a freshly fetched `/jc` document.
    pub fn get(&self, name: &str) -> Result<FieldValue> {
        let descriptor = STATUS_FIELDS.lookup(name)?;
        let document = self.transport.fetch(endpoints::STATUS)?;
        let raw = raw_value(&document, descriptor.wire_key())?;
        let value = descriptor.decode(raw, self.clock.now())?;
        log::debug!(
            target: self.log_target.as_str(),
            "{} ({}) = {:?}",
            name,
            descriptor.wire_key(),
            value
        );
        Ok(value)
    }

    /// Decode every status field, in registry order, from a single fetch.
    pub fn get_all(&self) -> Result<Vec<(&'static str, FieldValue)>> {
        let document = self.transport.fetch(endpoints::STATUS)?;
        let now = self.clock.now();
        STATUS_FIELDS
            .iter()
            .map(|descriptor| -> Result<(&'static str, FieldValue)> {
                let raw = raw_value(&document, descriptor.wire_key())?;
                Ok((descriptor.name(), descriptor.decode(raw, now)?))
            })
            .collect()
    }

    /// Encode `value` and send it as a single-variable `/cv` command.
    pub fn set(&self, name: &str, value: CommandValue) -> Result<()> {
        let descriptor = COMMAND_FIELDS.lookup(name)?;
        let wire_value = descriptor.encode(&value, self.clock.now())?;
        let payload =
            CommandPayload::from([(descriptor.wire_key().to_string(), wire_value.to_string())]);
        log::info!(
            target: self.log_target.as_str(),
            "Setting {} ({}={})",
            name,
            descriptor.wire_key(),
            wire_value
        );
        self.transport.submit(endpoints::COMMAND, &payload)?;
        Ok(())
    }
}

pub fn status_field_names() -> impl Iterator<Item = &'static str> {
    STATUS_FIELDS.names()
}

pub fn command_field_names() -> impl Iterator<Item = &'static str> {
    COMMAND_FIELDS.names()
}

fn raw_value<'a>(document: &'a RawDocument, key: &str) -> Result<&'a serde_json::Value> {
    document.get(key).ok_or_else(|| Error::MissingKey {
        key: key.to_string(),
    })
}

//! Client for the OpenSprinkler irrigation controller's HTTP+JSON API.
//!
//! ```no_run
//! use opensprinkler::{ClientConfig, CommandValue, OpenSprinkler};
//!
//! let device = OpenSprinkler::new(&ClientConfig::new("192.168.1.20", "opendoor"));
//! let stations = device.controller().get("station_status")?;
//! println!("{stations}");
//! device.controller().set("rain_delay", CommandValue::ResumeAt(None))?;
//! # Ok::<(), opensprinkler::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod constants;
pub mod controller;
mod device;
mod error;
pub mod helpers;
pub mod interfaces;

pub use codec::{CommandValue, FieldValue};
pub use config::ClientConfig;
pub use controller::Controller;
pub use device::OpenSprinkler;
pub use error::{Error, Result};

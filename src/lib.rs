#![warn(missing_docs)]

//! `crcflex` is a runtime-configurable CRC computation engine modeled at
//! clock-tick granularity. A single engine instance can be reconfigured on
//! the fly, over a narrow command/nibble control bus, to produce any of the
//! CRC catalogue's variants: register width 1 through 32, arbitrary
//! polynomial, initial value, input/output bit reflection, and final XOR
//! mask. The crate also provides the bit-exact reference model the engine
//! is validated against, the named catalogue of standard parameter sets,
//! and an independent width-parametric LFSR built on the same
//! shift-and-conditionally-XOR step.
//!
//! # Configuring the Engine
//!
//! A CRC variant is described by a [`CrcConfig`], built directly, parsed
//! from a setup nibble stream, or taken from the built-in [`table`]:
//!
//! ```
//! // CRC-16/XMODEM by hand
//! let config = crcflex::CrcConfig::new(16, 0x1021, 0x0000, 0x0000, false, false)
//!     .expect("parameters fit the bitwidth");
//!
//! // CRC-32 from the catalogue
//! let entry = crcflex::table::find("CRC-32").unwrap();
//! assert_eq!(entry.config().polynomial, 0x04C11DB7);
//! ```
//!
//! Constructors validate rather than truncate: a zero or too-large
//! bitwidth, a parameter wider than the bitwidth, or a malformed setup
//! stream is reported as a [`ConfigError`] instead of being folded into a
//! wrong checksum downstream.
//!
//! # Driving the Engine
//!
//! [`CrcEngine::step`] advances the engine by exactly one tick, sampling a
//! [`Command`] and a 4-bit data value. Every state transition is a
//! deterministic function of the driven tick sequence, which makes runs
//! trivially replayable. Both inputs pass through a one-tick register
//! stage, and multi-nibble operations take multiple ticks (a message byte
//! costs two nibble-intake ticks plus eight shift ticks), so most clients
//! will prefer the bundled drivers, which issue the same tick sequences a
//! hardware testbench would:
//!
//! ```
//! let entry = crcflex::table::find("CRC-32").unwrap();
//!
//! let mut engine = crcflex::CrcEngine::new();
//!
//! engine.load_config(&entry.config());
//! engine.restart();
//! engine.write_message(b"123456789");
//!
//! assert_eq!(engine.read_result(), 0xCBF43926);
//! ```
//!
//! A latched configuration survives both the RESET command and a
//! [`hard_reset`](CrcEngine::hard_reset): reset restarts the message
//! computation under the existing configuration rather than discarding it.
//!
//! ```
//! # let entry = crcflex::table::find("CRC-32").unwrap();
//! # let mut engine = crcflex::CrcEngine::new();
//! # engine.load_config(&entry.config());
//! # engine.restart();
//! # engine.write_message(b"123456789");
//! # assert_eq!(engine.read_result(), 0xCBF43926);
//! // Same configuration, second message, no new SETUP
//! engine.restart();
//! engine.write_message(b"123456789");
//! assert_eq!(engine.read_result(), 0xCBF43926);
//! ```
//!
//! There is no timeout machinery: a client that stops mid-sequence leaves
//! the engine parked in its current phase, and RESET is the only way out.
//!
//! # The Reference Model
//!
//! [`golden_crc`] computes the same fold as the engine over an in-memory
//! byte slice, and doubles as a plain software CRC routine:
//!
//! ```
//! let config = crcflex::table::find("CRC-16/XMODEM").unwrap().config();
//!
//! assert_eq!(crcflex::golden_crc(&config, b"123456789"), 0x31C3);
//! ```
//!
//! # The Generic LFSR
//!
//! [`Lfsr`] is a load/shift register with a runtime feedback mask, driven
//! by its own per-tick input wires and sharing no state with the CRC path:
//!
//! ```
//! use crcflex::{Lfsr, LfsrInput};
//!
//! let mut lfsr = Lfsr::new();
//! let mut wires = LfsrInput {
//!     reset: false,
//!     load: true,
//!     shift: false,
//!     init_value: 0x2D,
//!     bitwidth: 8,
//!     taps: 0x1D,
//! };
//!
//! lfsr.step(&wires);
//! assert_eq!(lfsr.value(), 0x2D);
//!
//! wires.load = false;
//! wires.shift = true;
//! lfsr.step(&wires);
//! assert_eq!(lfsr.value(), 0x5A);
//! ```

mod config;
mod engine;
mod fold;
mod golden;
mod lfsr;
mod reflect;

/// The nibble wire codec: integers to and from little-endian 4-bit groups,
/// and nibble pairs to and from bytes.
pub mod nibble;

/// The named catalogue of standard CRC parameter sets.
pub mod table;

pub use config::ConfigError;
pub use config::CrcConfig;
pub use config::MAX_BITS;
pub use engine::Command;
pub use engine::CrcEngine;
pub use engine::SetupPhase;
pub use golden::golden_crc;
pub use lfsr::Lfsr;
pub use lfsr::LfsrInput;
pub use reflect::reflect;

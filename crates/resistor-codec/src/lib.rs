//! Resistor color band codec.
//!
//! [`encode`] reads the value printed by a sequence of color bands and
//! [`decode`] finds the bands that print a given value. Both are pure
//! functions over the constant color table in [`table`].

pub mod bands;
pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod parse;
pub mod spec;
pub mod table;
pub mod units;

pub use bands::Bands;
pub use color::Color;
pub use decode::decode;
pub use encode::{encode, mantissa};
pub use error::CodecError;
pub use layout::BandLayout;
pub use parse::{parse_resistance, parse_temp_co, parse_tolerance};
pub use spec::ResistorSpec;
pub use table::{BandRole, BandValue};
pub use units::{OhmUnit, format_scaled};

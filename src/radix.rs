//! The closed set of supported numeral systems.



//		Modules

#[cfg(test)]
#[path = "tests/radix.rs"]
mod tests;



//		Packages

use crate::{
	converter::{render_positive, render_signed_i32, render_signed_i64},
	errors::ConversionError,
};
use core::fmt::{Display, Formatter, self};
use log::debug;
use serde::{Deserialize, Serialize};



//		Enums

//		Radix																	
/// The base of a positional numeral system.
/// 
/// Only octal, decimal, and hexadecimal are supported. Raw integers are turned
/// into a [`Radix`] through [`TryFrom`], which rejects every other value with
/// [`ConversionError::InvalidArgument`].
/// 
/// # Serialisation
/// 
/// A [`Radix`] serialises as its bare numeric value, e.g. `16`, and is
/// validated on the way back in, so `7` fails to deserialise. This makes it
/// suitable for carrying in configuration files.
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum Radix {
	/// Base 8.
	Octal,
	
	/// Base 10.
	Decimal,
	
	/// Base 16, rendered with uppercase digits.
	Hexadecimal,
}

//󰭅		Radix																	
impl Radix {
	/// All supported radices, in ascending order.
	pub const ALL: [Self; 3] = [Self::Octal, Self::Decimal, Self::Hexadecimal];
	
	//		value																
	/// The numeric base.
	#[must_use]
	pub const fn value(self) -> u8 {
		match self {
			Self::Octal       => 8,
			Self::Decimal     => 10,
			Self::Hexadecimal => 16,
		}
	}
	
	//		format_positive														
	/// Renders a non-negative 32-bit integer in this radix.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::InvalidArgument`] if `number` is negative.
	/// 
	pub fn format_positive(self, number: i32) -> Result<String, ConversionError> {
		render_positive(i64::from(number), self)
	}
	
	//		format_signed														
	/// Renders any 32-bit integer in this radix.
	/// 
	/// Decimal output is signed. Octal and hexadecimal output is the 32-bit
	/// two's-complement bit pattern read as an unsigned value, so `-1` becomes
	/// `FFFFFFFF` and [`i32::MIN`] becomes `80000000`.
	#[must_use]
	pub fn format_signed(self, number: i32) -> String {
		render_signed_i32(number, self)
	}
	
	//		format_signed_i64													
	/// Renders any 64-bit integer in this radix.
	/// 
	/// The 64-bit counterpart of [`format_signed()`](Self::format_signed()).
	#[must_use]
	pub fn format_signed_i64(self, number: i64) -> String {
		render_signed_i64(number, self)
	}
}

//󰭅		Display																	
impl Display for Radix {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value())
	}
}

//󰭅		From: Radix -> i32														
impl From<Radix> for i32 {
	//		from																
	fn from(radix: Radix) -> Self {
		Self::from(radix.value())
	}
}

//󰭅		From: Radix -> u8														
impl From<Radix> for u8 {
	//		from																
	fn from(radix: Radix) -> Self {
		radix.value()
	}
}

//󰭅		From: Radix -> u32														
impl From<Radix> for u32 {
	//		from																
	fn from(radix: Radix) -> Self {
		Self::from(radix.value())
	}
}

//󰭅		TryFrom: i32 -> Radix													
impl TryFrom<i32> for Radix {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i32) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: i64 -> Radix													
impl TryFrom<i64> for Radix {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		match v {
			8  => Ok(Self::Octal),
			10 => Ok(Self::Decimal),
			16 => Ok(Self::Hexadecimal),
			_  => {
				debug!("Rejected radix {v}: not 8, 10 or 16");
				Err(ConversionError::unsupported_radix(v))
			},
		}
	}
}

//󰭅		TryFrom: u8 -> Radix													
impl TryFrom<u8> for Radix {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u8) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: u32 -> Radix													
impl TryFrom<u32> for Radix {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u32) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}



//! Rendering of integers as octal, decimal, and hexadecimal digit strings.

//	These lint checks are unnecessary in this module because:
//	  1. The digit buffer is sized for the longest output of any supported
//	     radix, and the cursor only moves once per emitted digit.
//	  2. Digit lookups index the 16-entry alphabet with a remainder that is
//	     always below the radix, which is at most 16.
//	  3. Division and remainder are by the radix, which is never zero.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::missing_asserts_for_indexing,
	reason = "Bounds are fixed by the supported radices"
)]



//		Modules

#[cfg(test)]
#[path = "tests/converter.rs"]
mod tests;



//		Packages

use crate::{errors::ConversionError, radix::Radix};
use log::debug;



//		Constants

/// The digit alphabet shared by every supported radix.
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The longest digit string for a 64-bit value, which is octal at 22 digits.
const MAX_DIGITS: usize = 22;



//		Public functions

//		positive_to_octal														
/// Renders a non-negative integer in octal.
/// 
/// Zero renders as `"0"`.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `number` is negative.
/// 
pub fn positive_to_octal(number: i32) -> Result<String, ConversionError> {
	render_positive(i64::from(number), Radix::Octal)
}

//		positive_to_decimal														
/// Renders a non-negative integer in decimal.
/// 
/// The output never depends on locale, and contains no grouping separators.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `number` is negative.
/// 
pub fn positive_to_decimal(number: i32) -> Result<String, ConversionError> {
	render_positive(i64::from(number), Radix::Decimal)
}

//		positive_to_hex															
/// Renders a non-negative integer in hexadecimal, with uppercase digits.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `number` is negative.
/// 
pub fn positive_to_hex(number: i32) -> Result<String, ConversionError> {
	render_positive(i64::from(number), Radix::Hexadecimal)
}

//		positive_to_radix														
/// Renders a non-negative integer in the given radix.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `number` is negative, or if
/// `radix` is not 8, 10, or 16. The number is checked first.
/// 
pub fn positive_to_radix(number: i32, radix: i32) -> Result<String, ConversionError> {
	_ = require_non_negative("number", i64::from(number))?;
	match Radix::try_from(radix)? {
		Radix::Octal       => positive_to_octal(number),
		Radix::Decimal     => positive_to_decimal(number),
		Radix::Hexadecimal => positive_to_hex(number),
	}
}

//		to_radix_signed															
/// Renders any 32-bit integer in the given radix.
/// 
/// Decimal output is plain signed decimal, with a leading `-` for negative
/// values. Octal and hexadecimal output is the 32-bit two's-complement bit
/// pattern read as an unsigned value, without padding:
/// 
/// | `number`       | radix 8         | radix 16     |
/// |----------------|-----------------|--------------|
/// | `0`            | `0`             | `0`          |
/// | `255`          | `377`           | `FF`         |
/// | `-1`           | `37777777777`   | `FFFFFFFF`   |
/// | [`i32::MIN`]   | `20000000000`   | `80000000`   |
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `radix` is not 8, 10, or
/// 16.
/// 
pub fn to_radix_signed(number: i32, radix: i32) -> Result<String, ConversionError> {
	Ok(Radix::try_from(radix)?.format_signed(number))
}

//		to_radix_signed_i64														
/// Renders any 64-bit integer in the given radix.
/// 
/// This follows the same conventions as [`to_radix_signed()`], using the
/// 64-bit bit pattern, so `-1` renders as `FFFFFFFFFFFFFFFF` in hexadecimal.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `radix` is not 8, 10, or
/// 16.
/// 
pub fn to_radix_signed_i64(number: i64, radix: i32) -> Result<String, ConversionError> {
	Ok(Radix::try_from(radix)?.format_signed_i64(number))
}

//		positive_to_octal_wide													
/// Renders the octal digits of `number + 1`.
/// 
/// This is not a general-purpose 64-bit converter. The offset exists so that
/// the magnitude of [`i32::MIN`] can be produced from [`i32::MAX`] without
/// overflowing, and `positive_to_octal_wide(i32::MAX.into())` yields the same
/// string as `to_radix_signed(i32::MIN, 8)`. The successor of [`i64::MAX`] is
/// still rendered correctly.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `number` is negative.
/// 
pub fn positive_to_octal_wide(number: i64) -> Result<String, ConversionError> {
	render_successor(number, Radix::Octal)
}

//		positive_to_hex_wide													
/// Renders the hexadecimal digits of `number + 1`.
/// 
/// See [`positive_to_octal_wide()`] for why the offset exists.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::InvalidArgument`] if `number` is negative.
/// 
pub fn positive_to_hex_wide(number: i64) -> Result<String, ConversionError> {
	render_successor(number, Radix::Hexadecimal)
}



//		Crate functions

//		render_positive															
/// Renders a value that is required to be non-negative.
pub(crate) fn render_positive(number: i64, radix: Radix) -> Result<String, ConversionError> {
	let value = require_non_negative("number", number)?;
	Ok(match radix {
		Radix::Decimal                    => value.to_string(),
		Radix::Octal | Radix::Hexadecimal => render_digits(value, radix),
	})
}

//		render_signed_i32														
/// Renders a 32-bit value, using its bit pattern outside of decimal.
pub(crate) fn render_signed_i32(number: i32, radix: Radix) -> String {
	match radix {
		Radix::Decimal                    => number.to_string(),
		Radix::Octal | Radix::Hexadecimal => render_digits(u64::from(number.cast_unsigned()), radix),
	}
}

//		render_signed_i64														
/// Renders a 64-bit value, using its bit pattern outside of decimal.
pub(crate) fn render_signed_i64(number: i64, radix: Radix) -> String {
	match radix {
		Radix::Decimal                    => number.to_string(),
		Radix::Octal | Radix::Hexadecimal => render_digits(number.cast_unsigned(), radix),
	}
}



//		Private functions

//		require_non_negative													
fn require_non_negative(name: &'static str, value: i64) -> Result<u64, ConversionError> {
	u64::try_from(value).map_err(|_err| {
		debug!("Rejected {name} {value}: less than zero");
		ConversionError::negative(name, value)
	})
}

//		render_successor														
fn render_successor(number: i64, radix: Radix) -> Result<String, ConversionError> {
	//	At most 2^63, which a u64 holds
	let successor = require_non_negative("number", number)? + 1;
	Ok(render_digits(successor, radix))
}

//		render_digits															
/// Renders the digits of an unsigned value, most significant first.
/// 
/// Digits are produced least significant first by repeated division, filling
/// the buffer from the end. The loop always runs at least once, so zero yields
/// a single `0` rather than an empty string.
fn render_digits(value: u64, radix: Radix) -> String {
	let base          = u64::from(radix.value());
	let mut buffer    = [0_u8; MAX_DIGITS];
	let mut start     = MAX_DIGITS;
	let mut remaining = value;
	
	loop {
		#[expect(clippy::cast_possible_truncation, reason = "Remainder is below 16")]
		let digit     = (remaining % base) as usize;
		start        -= 1;
		buffer[start] = DIGITS[digit];
		remaining    /= base;
		if remaining == 0 {
			break;
		}
	}
	
	buffer[start..].iter().copied().map(char::from).collect()
}



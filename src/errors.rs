//! Contains error types used throughout the library.



//		Packages

use core::fmt::{Display, Formatter, self};
use thiserror::Error as ThisError;



//		Enums

//		ConversionError															
/// Represents all possible conversion errors that can occur.
/// 
/// There is a single kind of failure: an argument that breaks the contract of
/// the operation it was passed to. The error is raised immediately, and no
/// partial output is ever produced.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// An argument violated a precondition of the called operation.
	#[error("Invalid argument `{name}` ({value}): {reason}")]
	InvalidArgument {
		/// The name of the offending parameter.
		name:   &'static str,
		
		/// The offending value, widened to 64 bits.
		value:  i64,
		
		/// Which precondition was violated.
		reason: InvalidReason,
	},
}

//󰭅		ConversionError															
impl ConversionError {
	//		negative															
	/// Builds the error for a value that was required to be non-negative.
	pub(crate) const fn negative(name: &'static str, value: i64) -> Self {
		Self::InvalidArgument { name, value, reason: InvalidReason::ValueIsNegative }
	}
	
	//		unsupported_radix													
	/// Builds the error for a radix outside of 8, 10, and 16.
	pub(crate) const fn unsupported_radix(value: i64) -> Self {
		Self::InvalidArgument { name: "radix", value, reason: InvalidReason::UnsupportedRadix }
	}
	
	//		reason																
	/// The precondition that was violated.
	#[must_use]
	pub const fn reason(&self) -> InvalidReason {
		match *self {
			Self::InvalidArgument { reason, .. } => reason,
		}
	}
}

//		InvalidReason															
/// The precondition behind a [`ConversionError::InvalidArgument`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum InvalidReason {
	/// The value is negative, which the operation does not accept.
	ValueIsNegative,
	
	/// The radix is not one of the supported numeral systems.
	UnsupportedRadix,
}

//󰭅		Display																	
impl Display for InvalidReason {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match *self {
			Self::ValueIsNegative  => write!(f, "value is less than zero"),
			Self::UnsupportedRadix => write!(f, "radix is not 8, 10 or 16"),
		}
	}
}



//! The Numeral Systems crate renders integers as octal, decimal, and
//! hexadecimal digit strings.
//!
//! Output is deterministic and locale-independent. Digits are uppercase, most
//! significant first, with no leading zeros; zero renders as `"0"`.
//!
//! Two families of operation are provided:
//!
//!   - The `positive_*` functions accept only non-negative values, and fail
//!     with [`ConversionError::InvalidArgument`] otherwise.
//!   - The `to_radix_signed*` functions accept any value. Decimal output is
//!     signed, while octal and hexadecimal output is the two's-complement bit
//!     pattern of the value read as unsigned.
//!
//! ```
//! use numeral_systems::{Radix, positive_to_hex, to_radix_signed};
//!
//! assert_eq!(positive_to_hex(255).unwrap(), "FF");
//! assert_eq!(to_radix_signed(-1, 16).unwrap(), "FFFFFFFF");
//! assert_eq!(Radix::Octal.format_signed(i32::MIN), "20000000000");
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::needless_pass_by_value,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod converter;
mod errors;
mod radix;



//		Packages

pub use converter::{
	positive_to_decimal,
	positive_to_hex,
	positive_to_hex_wide,
	positive_to_octal,
	positive_to_octal_wide,
	positive_to_radix,
	to_radix_signed,
	to_radix_signed_i64,
};
pub use errors::{ConversionError, InvalidReason};
pub use radix::Radix;



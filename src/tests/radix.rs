//		Packages

use super::*;
use crate::errors::InvalidReason;
use claims::{assert_err, assert_err_eq, assert_ok_eq};
use core::cmp::Ordering;
use rubedo::sugar::s;
use std::collections::HashSet;



//		Tests

mod constants {
	use super::*;
	
	//		ALL																	
	#[test]
	fn all__ascending() {
		assert_eq!(Radix::ALL, [Radix::Octal, Radix::Decimal, Radix::Hexadecimal]);
		assert!(Radix::ALL.windows(2).all(|pair| pair[0].value() < pair[1].value()));
	}
}

mod public_methods {
	use super::*;
	
	//		value																
	#[test]
	fn value() {
		assert_eq!(Radix::Octal.value(),        8);
		assert_eq!(Radix::Decimal.value(),      10);
		assert_eq!(Radix::Hexadecimal.value(), 16);
	}
	
	//		format_positive														
	#[test]
	fn format_positive__zero() {
		for radix in Radix::ALL {
			assert_ok_eq!(radix.format_positive(0), s!("0"));
		}
	}
	#[test]
	fn format_positive__normal() {
		assert_ok_eq!(Radix::Octal.format_positive(8),         s!("10"));
		assert_ok_eq!(Radix::Decimal.format_positive(42),      s!("42"));
		assert_ok_eq!(Radix::Hexadecimal.format_positive(255), s!("FF"));
	}
	#[test]
	fn format_positive__negative() {
		for radix in Radix::ALL {
			let err = radix.format_positive(-1);
			assert_err_eq!(&err, &ConversionError::InvalidArgument {
				name:   "number",
				value:  -1,
				reason: InvalidReason::ValueIsNegative,
			});
		}
	}
	
	//		format_signed														
	#[test]
	fn format_signed__decimal() {
		assert_eq!(Radix::Decimal.format_signed(-42),      "-42");
		assert_eq!(Radix::Decimal.format_signed(i32::MIN), "-2147483648");
		assert_eq!(Radix::Decimal.format_signed(i32::MAX), "2147483647");
	}
	#[test]
	fn format_signed__bit_pattern() {
		assert_eq!(Radix::Octal.format_signed(-1),             "37777777777");
		assert_eq!(Radix::Hexadecimal.format_signed(-1),       "FFFFFFFF");
		assert_eq!(Radix::Octal.format_signed(i32::MIN),       "20000000000");
		assert_eq!(Radix::Hexadecimal.format_signed(i32::MIN), "80000000");
		assert_eq!(Radix::Hexadecimal.format_signed(i32::MAX), "7FFFFFFF");
	}
	
	//		format_signed_i64													
	#[test]
	fn format_signed_i64__normal() {
		assert_eq!(Radix::Decimal.format_signed_i64(i64::MIN),     "-9223372036854775808");
		assert_eq!(Radix::Hexadecimal.format_signed_i64(-1),       "FFFFFFFFFFFFFFFF");
		assert_eq!(Radix::Hexadecimal.format_signed_i64(i64::MIN), "8000000000000000");
		assert_eq!(Radix::Octal.format_signed_i64(-1),             "1777777777777777777777");
	}
}

mod derived_traits {
	use super::*;
	
	//		Debug																
	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Radix::Octal),       "Octal");
		assert_eq!(format!("{:?}", Radix::Hexadecimal), "Hexadecimal");
	}
	
	//		Deserialize															
	#[test]
	fn deserialize__valid() {
		assert_ok_eq!(serde_json::from_str::<Radix>("8"),  Radix::Octal);
		assert_ok_eq!(serde_json::from_str::<Radix>("10"), Radix::Decimal);
		assert_ok_eq!(serde_json::from_str::<Radix>("16"), Radix::Hexadecimal);
	}
	#[test]
	fn deserialize__invalid() {
		let err = serde_json::from_str::<Radix>("7");
		assert_err!(&err);
		assert!(err.unwrap_err().to_string().starts_with("Invalid argument `radix` (7): radix is not 8, 10 or 16"));
		
		assert_err!(serde_json::from_str::<Radix>("\"16\""));
		assert_err!(serde_json::from_str::<Radix>("-16"));
	}
	
	//		Hash																
	#[test]
	fn hash() {
		let mut set = HashSet::new();
		_ = set.insert(Radix::Octal);
		assert!( set.contains(&Radix::Octal));
		assert!(!set.contains(&Radix::Decimal));
	}
	
	//		Ord																	
	#[test]
	fn ord() {
		assert!(Radix::Octal   < Radix::Decimal);
		assert!(Radix::Decimal < Radix::Hexadecimal);
		assert_eq!(Radix::Decimal.cmp(&Radix::Decimal), Ordering::Equal);
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		assert_ok_eq!(serde_json::to_string(&Radix::Octal),       "8");
		assert_ok_eq!(serde_json::to_string(&Radix::Hexadecimal), "16");
		assert_ok_eq!(serde_json::to_string(&Radix::ALL),         "[8,10,16]");
	}
}

mod traits {
	use super::*;
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(Radix::Octal.to_string(),       "8");
		assert_eq!(Radix::Decimal.to_string(),     "10");
		assert_eq!(format!("{}", Radix::Hexadecimal), "16");
	}
}

mod conversions {
	use super::*;
	
	//		From: Radix -> i32													
	#[test]
	fn from__to_i32() {
		assert_eq!(i32::from(Radix::Hexadecimal), 16_i32);
	}
	
	//		From: Radix -> u8													
	#[test]
	fn from__to_u8() {
		assert_eq!(u8::from(Radix::Octal), 8_u8);
	}
	
	//		From: Radix -> u32													
	#[test]
	fn from__to_u32() {
		assert_eq!(u32::from(Radix::Decimal), 10_u32);
	}
	
	//		TryFrom: i32 -> Radix												
	#[test]
	fn try_from__i32_valid() {
		assert_ok_eq!(Radix::try_from(8_i32),  Radix::Octal);
		assert_ok_eq!(Radix::try_from(10_i32), Radix::Decimal);
		assert_ok_eq!(Radix::try_from(16_i32), Radix::Hexadecimal);
	}
	#[test]
	fn try_from__i32_invalid() {
		for v in [i32::MIN, -8, 0, 1, 2, 7, 9, 11, 15, 17, 36, i32::MAX] {
			let err = Radix::try_from(v);
			assert_err_eq!(&err, &ConversionError::InvalidArgument {
				name:   "radix",
				value:  i64::from(v),
				reason: InvalidReason::UnsupportedRadix,
			});
		}
	}
	
	//		TryFrom: i64 -> Radix												
	#[test]
	fn try_from__i64() {
		assert_ok_eq!(Radix::try_from(16_i64), Radix::Hexadecimal);
		let err = Radix::try_from(i64::MAX);
		assert_err_eq!(&err, &ConversionError::unsupported_radix(i64::MAX));
		assert_eq!(err.unwrap_err().to_string(), format!("Invalid argument `radix` ({}): radix is not 8, 10 or 16", i64::MAX));
	}
	
	//		TryFrom: u8 -> Radix												
	#[test]
	fn try_from__u8() {
		assert_ok_eq!(Radix::try_from(8_u8), Radix::Octal);
		assert_err_eq!(Radix::try_from(u8::MAX), ConversionError::unsupported_radix(255));
	}
	
	//		TryFrom: u32 -> Radix												
	#[test]
	fn try_from__u32() {
		assert_ok_eq!(Radix::try_from(10_u32), Radix::Decimal);
		assert_err_eq!(Radix::try_from(u32::MAX), ConversionError::unsupported_radix(i64::from(u32::MAX)));
	}
	
	#[test]
	fn round_trip() {
		for radix in Radix::ALL {
			assert_ok_eq!(Radix::try_from(u8::from(radix)), radix);
		}
	}
}



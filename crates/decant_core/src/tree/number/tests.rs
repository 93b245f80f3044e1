use test_case::test_case;

use crate::tree::{FloatTarget, IntegerTarget};

#[test_case(f64::from(i8::MAX), Some(i8::MAX); "i8 max")]
#[test_case(f64::from(i8::MIN), Some(i8::MIN); "i8 min")]
#[test_case(128.0, None; "i8 above max")]
#[test_case(-129.0, None; "i8 below min")]
#[test_case(1.5, None; "i8 fraction")]
fn converts_i8(value: f64, expected: Option<i8>) {
	assert_eq!(i8::from_number_exact(value), expected);
}

#[test_case(f64::from(u8::MAX), Some(u8::MAX); "u8 max")]
#[test_case(0.0, Some(0); "u8 zero")]
#[test_case(-0.0, Some(0); "u8 negative zero")]
#[test_case(-1.0, None; "u8 negative")]
#[test_case(256.0, None; "u8 above max")]
fn converts_u8(value: f64, expected: Option<u8>) {
	assert_eq!(u8::from_number_exact(value), expected);
}

#[test_case(f64::from(i16::MAX), Some(i16::MAX); "i16 max")]
#[test_case(f64::from(i16::MIN), Some(i16::MIN); "i16 min")]
#[test_case(32768.0, None; "i16 above max")]
fn converts_i16(value: f64, expected: Option<i16>) {
	assert_eq!(i16::from_number_exact(value), expected);
}

#[test_case(f64::from(u16::MAX), Some(u16::MAX); "u16 max")]
#[test_case(65536.0, None; "u16 above max")]
fn converts_u16(value: f64, expected: Option<u16>) {
	assert_eq!(u16::from_number_exact(value), expected);
}

#[test_case(f64::from(i32::MAX), Some(i32::MAX); "i32 max")]
#[test_case(f64::from(i32::MIN), Some(i32::MIN); "i32 min")]
#[test_case(2_147_483_648.0, None; "i32 above max")]
fn converts_i32(value: f64, expected: Option<i32>) {
	assert_eq!(i32::from_number_exact(value), expected);
}

#[test_case(f64::from(u32::MAX), Some(u32::MAX); "u32 max")]
#[test_case(4_294_967_296.0, None; "u32 above max")]
fn converts_u32(value: f64, expected: Option<u32>) {
	assert_eq!(u32::from_number_exact(value), expected);
}

#[test_case(i64::MIN as f64, Some(i64::MIN); "i64 min")]
#[test_case(9_223_372_036_854_775_808.0, None; "i64 two to the 63")]
#[test_case(9_007_199_254_740_992.0, Some(9_007_199_254_740_992); "i64 two to the 53")]
fn converts_i64(value: f64, expected: Option<i64>) {
	assert_eq!(i64::from_number_exact(value), expected);
}

#[test_case(18_446_744_073_709_549_568.0, Some(18_446_744_073_709_549_568); "u64 largest below two to the 64")]
#[test_case(18_446_744_073_709_551_616.0, None; "u64 two to the 64")]
fn converts_u64(value: f64, expected: Option<u64>) {
	assert_eq!(u64::from_number_exact(value), expected);
}

#[test]
fn rejects_non_finite_numbers() {
	for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
		assert_eq!(i64::from_number_exact(value), None);
		assert_eq!(u64::from_number_exact(value), None);
		assert_eq!(usize::from_number_exact(value), None);
	}
}

#[test]
fn rejects_huge_magnitudes() {
	assert_eq!(i64::from_number_exact(1e300), None);
	assert_eq!(i64::from_number_exact(-1e300), None);
	assert_eq!(u64::from_number_exact(f64::MAX), None);
}

#[test]
fn float_targets_narrow_without_error() {
	assert_eq!(f64::from_number(123.456), 123.456);
	assert_eq!(f32::from_number(123.456), 123.456_f32);
	assert!(f32::from_number(1e300).is_infinite());
	assert_eq!(<f32 as FloatTarget>::NAME, "f32");
	assert_eq!(<u16 as IntegerTarget>::NAME, "u16");
}

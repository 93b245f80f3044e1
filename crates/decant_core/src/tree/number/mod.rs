/// Floating-point type a number can be read into.
///
/// Narrowing follows `as` semantics and never fails.
pub trait FloatTarget: Copy {
	/// Type name used in diagnostics.
	const NAME: &'static str;

	/// Convert the stored number.
	fn from_number(value: f64) -> Self;
}

impl FloatTarget for f64 {
	const NAME: &'static str = "f64";

	fn from_number(value: f64) -> Self {
		value
	}
}

impl FloatTarget for f32 {
	const NAME: &'static str = "f32";

	fn from_number(value: f64) -> Self {
		value as f32
	}
}

/// Integer type a number can be read into.
///
/// Conversion succeeds only when the stored number is finite, integral, and
/// inside the target range.
pub trait IntegerTarget: Copy {
	/// Type name used in diagnostics.
	const NAME: &'static str;

	/// Convert the stored number, or `None` when it is not exactly representable.
	fn from_number_exact(value: f64) -> Option<Self>;
}

/// Exact `f64` to `i128` conversion.
///
/// The saturating `as` cast is undone and compared, which rejects fractions,
/// NaN, infinities and anything past the `i128` range.
fn exact_i128(value: f64) -> Option<i128> {
	if !value.is_finite() || value.fract() != 0.0 {
		return None;
	}
	let candidate = value as i128;
	(candidate as f64 == value && candidate != i128::MAX && candidate != i128::MIN).then_some(candidate)
}

macro_rules! impl_integer_target {
	($($ty:ty),*) => {
		$(
			impl IntegerTarget for $ty {
				const NAME: &'static str = stringify!($ty);

				fn from_number_exact(value: f64) -> Option<Self> {
					exact_i128(value).and_then(|candidate| <$ty>::try_from(candidate).ok())
				}
			}
		)*
	};
}

impl_integer_target!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests;

pub trait Parity
where
	Self: Sized,
{
	#[must_use]
	fn is_even(&self) -> bool;

	#[must_use]
	fn is_odd(&self) -> bool {
		!self.is_even()
	}

	/// The smallest even number greater than or equal to `self`.
	#[must_use]
	fn ceil_even(self) -> Self;
}

macro_rules! impl_parity_for {
	($t:ty) => {
		impl Parity for $t {
			fn is_even(&self) -> bool {
				self & 1 == 0
			}

			fn ceil_even(self) -> Self {
				self + (self & 1)
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_parity_for!($t);
		impl_parity_for!($($others),+);
	};
}

impl_parity_for!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

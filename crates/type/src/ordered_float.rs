// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::{
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("NaN is not an ordered float")]
pub struct OrderedFloatError;

macro_rules! ordered_float {
	($name:ident, $primitive:ty, $sign_shift:literal, $magnitude_mask:literal) => {
		/// A float with a total order: NaN is rejected at construction,
		/// negative zero compares below positive zero by bit pattern.
		#[repr(transparent)]
		#[derive(Copy, Clone, Default)]
		pub struct $name(pub $primitive);

		impl $name {
			pub fn value(&self) -> $primitive {
				self.0
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.0.to_bits() == other.0.to_bits()
			}
		}

		impl Eq for $name {}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> Ordering {
				let a = self.0.to_bits() ^ ((self.0.to_bits() >> $sign_shift) & $magnitude_mask);
				let b = other.0.to_bits() ^ ((other.0.to_bits() >> $sign_shift) & $magnitude_mask);
				a.cmp(&b)
			}
		}

		impl Hash for $name {
			fn hash<H: Hasher>(&self, state: &mut H) {
				self.0.to_bits().hash(state);
			}
		}

		impl fmt::Debug for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				self.0.fmt(f)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				self.0.fmt(f)
			}
		}

		impl From<$name> for $primitive {
			fn from(v: $name) -> Self {
				v.0
			}
		}

		impl TryFrom<$primitive> for $name {
			type Error = OrderedFloatError;

			fn try_from(f: $primitive) -> Result<Self, Self::Error> {
				if f.is_nan() {
					Err(OrderedFloatError)
				} else {
					Ok($name(f))
				}
			}
		}

		impl Serialize for $name {
			fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				self.0.serialize(serializer)
			}
		}

		impl<'de> Deserialize<'de> for $name {
			fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				let f = <$primitive>::deserialize(deserializer)?;
				$name::try_from(f).map_err(de::Error::custom)
			}
		}
	};
}

ordered_float!(OrderedF32, f32, 31, 0x7fffffff);
ordered_float!(OrderedF64, f64, 63, 0x7fffffffffffffff);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_nan() {
		assert_eq!(OrderedF32::try_from(f32::NAN), Err(OrderedFloatError));
		assert_eq!(OrderedF64::try_from(f64::NAN), Err(OrderedFloatError));
	}

	#[test]
	fn test_accepts_finite_and_infinite() {
		assert!(OrderedF64::try_from(3.14).is_ok());
		assert!(OrderedF64::try_from(f64::INFINITY).is_ok());
		assert!(OrderedF64::try_from(f64::NEG_INFINITY).is_ok());
	}

	#[test]
	fn test_total_order() {
		let mut values: Vec<OrderedF64> =
			[2.0, -1.0, 0.5, -0.0, 0.0].into_iter().map(|f| OrderedF64::try_from(f).unwrap()).collect();
		values.sort();
		let sorted: Vec<f64> = values.into_iter().map(f64::from).collect();
		assert_eq!(sorted, vec![-1.0, -0.0, 0.0, 0.5, 2.0]);
	}

	#[test]
	fn test_eq_by_bits() {
		let a = OrderedF32::try_from(1.5).unwrap();
		let b = OrderedF32::try_from(1.5).unwrap();
		assert_eq!(a, b);
		assert_ne!(OrderedF32::try_from(0.0).unwrap(), OrderedF32::try_from(-0.0).unwrap());
	}
}

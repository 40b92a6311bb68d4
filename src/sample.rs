use std::cmp::Ordering;
use std::fmt::Debug;

/// A value the peak detector can classify.
///
/// Implemented for every primitive integer and floating point type. Float
/// samples must not be NaN: an unordered comparison is reported by the
/// detector as [`PeakError::InvariantViolation`](crate::PeakError).
pub trait Sample: Copy + PartialOrd + Debug + Send + Sync {
    /// Written into non-peak positions by [`inflate`](crate::inflate).
    const ZERO: Self;

    /// Order two samples, `None` when they are unordered.
    fn order(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }
}

macro_rules! impl_sample {
    ($zero:expr => $($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_sample!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_sample!(0.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(<u8 as Sample>::ZERO, 0);
        assert_eq!(<i64 as Sample>::ZERO, 0);
        assert_eq!(<f32 as Sample>::ZERO, 0.0);
    }

    #[test]
    fn test_order_rejects_nan() {
        assert_eq!(1.0f64.order(&2.0), Some(Ordering::Less));
        assert_eq!(f64::NAN.order(&2.0), None);
        assert_eq!(3u16.order(&3), Some(Ordering::Equal));
    }
}

use lanedivide::{Denominator, DenominatorKind, DividerError};
use proptest::prelude::*;

macro_rules! scalar_vs_naive {
    ($($name:ident, $recover:ident: $t:ty;)*) => {$(
        proptest! {
            #[test]
            fn $name(dividend in any::<$t>(), divisor in any::<$t>()) {
                prop_assume!(divisor != 0);
                prop_assume!(!(<$t>::MIN != 0 && dividend == <$t>::MIN && divisor as i128 == -1));
                let denom = Denominator::<$t>::new(divisor);
                prop_assert_eq!(dividend / &denom, dividend / divisor);
                prop_assert_eq!(dividend % &denom, dividend % divisor);
            }

            #[test]
            fn $recover(divisor in any::<$t>()) {
                prop_assume!(divisor != 0);
                let denom = Denominator::<$t>::new(divisor);
                prop_assert_eq!(denom.recover(), divisor);
                prop_assert_eq!(denom.value(), divisor);
            }
        }
    )*};
}

scalar_vs_naive! {
    test_u8_denominator_vs_naive, test_u8_recover: u8;
    test_u16_denominator_vs_naive, test_u16_recover: u16;
    test_u32_denominator_vs_naive, test_u32_recover: u32;
    test_u64_denominator_vs_naive, test_u64_recover: u64;
    test_i8_denominator_vs_naive, test_i8_recover: i8;
    test_i16_denominator_vs_naive, test_i16_recover: i16;
    test_i32_denominator_vs_naive, test_i32_recover: i32;
    test_i64_denominator_vs_naive, test_i64_recover: i64;
}

// Divisors just below and above powers of two sit closest to the boundary
// where a short multiplier stops being exact.
proptest! {
    #[test]
    fn test_u32_near_power_of_two(dividend in any::<u32>(), shift in 1u32..32, offset in -2i64..=2) {
        let divisor = ((1i64 << shift) + offset) as u32;
        prop_assume!(divisor != 0);
        let denom = Denominator::new(divisor);
        prop_assert_eq!(dividend / &denom, dividend / divisor);
        prop_assert_eq!(dividend % &denom, dividend % divisor);
    }

    #[test]
    fn test_u64_large_dividends(dividend in (u64::MAX - 1_000_000)..=u64::MAX, divisor in 1..=u64::MAX) {
        let denom = Denominator::new(divisor);
        prop_assert_eq!(dividend / &denom, dividend / divisor);
    }

    #[test]
    fn test_i64_extreme_dividends(offset in 0i64..1_000_000, divisor in any::<i64>()) {
        prop_assume!(divisor != 0 && divisor != -1);
        let denom = Denominator::new(divisor);
        for dividend in [i64::MIN + offset, i64::MAX - offset] {
            prop_assert_eq!(dividend / &denom, dividend / divisor);
        }
    }

    #[test]
    fn test_i32_assign_ops(dividend in any::<i32>(), divisor in any::<i32>()) {
        prop_assume!(divisor != 0 && !(dividend == i32::MIN && divisor == -1));
        let denom = Denominator::new(divisor);
        let mut quot = dividend;
        quot /= &denom;
        let mut rem = dividend;
        rem %= &denom;
        prop_assert_eq!(quot, dividend / divisor);
        prop_assert_eq!(rem, dividend % divisor);
        prop_assert_eq!(denom.div_rem(dividend).quot, quot);
        prop_assert_eq!(denom.div_rem(dividend).rem, rem);
    }
}

// Scaling a denominator by a power of two must divide like a fresh
// denominator for the scaled divisor.
proptest! {
    #[test]
    fn test_u32_denominator_shl(dividend in any::<u32>(), divisor in 1..=u32::MAX, s in 0u32..40) {
        let expected = divisor << s.min(divisor.leading_zeros());
        let shifted = Denominator::new(divisor) << s;
        prop_assert_eq!(shifted.value(), expected);
        prop_assert_eq!(shifted.recover(), expected);
        prop_assert_eq!(dividend / &shifted, dividend / expected);
        prop_assert_eq!(dividend % &shifted, dividend % expected);
    }

    #[test]
    fn test_u64_denominator_shr(dividend in any::<u64>(), odd in 1..=u64::MAX, t in 0u32..64, s in 0u32..70) {
        let divisor = odd << t;
        prop_assume!(divisor != 0);
        let expected = divisor >> s.min(divisor.trailing_zeros());
        let mut shifted = Denominator::new(divisor);
        shifted >>= s;
        prop_assert_eq!(shifted.value(), expected);
        prop_assert_eq!(shifted.recover(), expected);
        prop_assert_eq!(dividend / &shifted, dividend / expected);
    }

    #[test]
    fn test_i32_denominator_shifts(dividend in any::<i32>(), divisor in any::<i32>(), s in 0u32..40) {
        prop_assume!(divisor != 0);
        let sign_bits = (divisor ^ (divisor >> 31)).leading_zeros() - 1;
        let widened = divisor << s.min(sign_bits);
        let narrowed = divisor >> s.min(divisor.trailing_zeros());
        let mut left = Denominator::new(divisor);
        left <<= s;
        let right = Denominator::new(divisor) >> s;
        prop_assert_eq!(left.value(), widened);
        prop_assert_eq!(left.recover(), widened);
        prop_assert_eq!(right.value(), narrowed);
        prop_assert_eq!(right.recover(), narrowed);
        if !(dividend == i32::MIN && widened == -1) {
            prop_assert_eq!(dividend / &left, dividend / widened);
        }
        if !(dividend == i32::MIN && narrowed == -1) {
            prop_assert_eq!(dividend / &right, dividend / narrowed);
            prop_assert_eq!(dividend % &right, dividend % narrowed);
        }
    }
}

mod edge_case_tests {
    use super::*;

    #[test]
    fn test_divider_error_zero() {
        assert!(matches!(Denominator::<u8>::try_new(0), Err(DividerError::Zero)));
        assert!(matches!(Denominator::<i16>::try_new(0), Err(DividerError::Zero)));
        assert!(matches!(Denominator::<u32>::try_new(0), Err(DividerError::Zero)));
        assert!(matches!(Denominator::<i64>::try_new(0), Err(DividerError::Zero)));
        assert_eq!(DividerError::Zero.to_string(), "divider must be != 0");
        assert!(Denominator::<u32>::try_new(3).is_ok());
    }

    #[test]
    fn test_power_of_two_divisors() {
        for shift in 1..=31 {
            let divisor = 1u32 << shift;
            let denom = Denominator::new(divisor);
            assert_eq!(denom.kind(), DenominatorKind::PowerOfTwo);
            assert_eq!(denom.shift(), shift);
            for dividend in [0, 1, divisor - 1, divisor, divisor + 1, u32::MAX] {
                assert_eq!(dividend / &denom, dividend / divisor);
            }
        }
        for shift in 1..=62 {
            let divisor = -(1i64 << shift);
            let denom = Denominator::new(divisor);
            assert_eq!(denom.kind(), DenominatorKind::PowerOfTwo);
            for dividend in [i64::MIN, -divisor - 1, -1, 0, 1, divisor + 1, i64::MAX] {
                assert_eq!(dividend / &denom, dividend / divisor);
            }
        }
    }

    #[test]
    fn test_unit_divisors() {
        let one = Denominator::new(1i32);
        let minus_one = Denominator::new(-1i32);
        assert_eq!(one.kind(), DenominatorKind::Unit);
        assert_eq!(minus_one.kind(), DenominatorKind::NegativeUnit);
        assert_eq!(Denominator::new(1u64).kind(), DenominatorKind::Unit);
        for n in [i32::MIN + 1, -5, 0, 5, i32::MAX] {
            assert_eq!(n / &one, n);
            assert_eq!(n / &minus_one, -n);
            assert_eq!(n % &minus_one, 0);
        }
        // overflows natively; wraps here
        assert_eq!(i32::MIN / &minus_one, i32::MIN);
        assert_eq!(i32::MIN / &Denominator::new(i32::MIN), 1);
        assert_eq!(Denominator::new(i32::MIN).recover(), i32::MIN);
    }

    #[test]
    fn test_min_max_values() {
        let test_cases = [
            (u32::MAX, u32::MAX),
            (u32::MAX - 1, u32::MAX),
            (0, u32::MAX),
            (1, u32::MAX),
            (u32::MAX, 3),
            (u32::MAX, 7),
        ];
        for (dividend, divisor) in test_cases {
            let denom = Denominator::new(divisor);
            assert_eq!(dividend / &denom, dividend / divisor);
            assert_eq!(dividend % denom, dividend % divisor);
        }
        for divisor in [i8::MIN, -128 + 1, -3, 3, 7, i8::MAX] {
            let denom = Denominator::new(divisor);
            for dividend in [i8::MIN, i8::MAX, 0] {
                assert_eq!(dividend / &denom, dividend / divisor);
            }
        }
    }

    #[test]
    fn test_multiplier_kinds() {
        // 7 needs the wide multiplier at every width, 3 never does.
        assert_eq!(Denominator::new(7u8).kind(), DenominatorKind::MultiplyAdd);
        assert_eq!(Denominator::new(7u32).kind(), DenominatorKind::MultiplyAdd);
        assert_eq!(Denominator::new(7u64).kind(), DenominatorKind::MultiplyAdd);
        assert_eq!(Denominator::new(3u32).kind(), DenominatorKind::Multiply);
        assert_eq!(Denominator::new(3u32).magic(), 0xAAAA_AAAB);
        assert_eq!(Denominator::new(3u32).shift(), 1);
        assert_eq!(Denominator::new(-5i32).kind(), DenominatorKind::Multiply);
        assert_eq!(Denominator::new(-3i32).kind(), DenominatorKind::MultiplyAdd);
        assert_eq!(Denominator::new(7i32).kind(), DenominatorKind::MultiplyAdd);
    }

    #[test]
    fn test_construction_is_idempotent() {
        for divisor in [3u16, 10, 641, 1000, u16::MAX] {
            assert_eq!(Denominator::new(divisor), Denominator::from(divisor));
        }
    }

    #[test]
    fn test_shift_round_trip() {
        for divisor in [3u8, 5, 7, 10, 255] {
            let denom = Denominator::new(divisor);
            let widened = denom << 8;
            assert_eq!(widened.value(), divisor << divisor.leading_zeros());
            let narrowed = widened.value() >> widened.value().trailing_zeros().min(8);
            assert_eq!(widened >> 8, Denominator::new(narrowed));
        }
        assert_eq!(Denominator::new(1i16) << 3, Denominator::new(8i16));
        assert_eq!(Denominator::new(-1i16) << 15, Denominator::new(i16::MIN));
        assert_eq!(Denominator::new(i16::MIN) >> 15, Denominator::new(-1i16));
        assert_eq!((Denominator::new(-1i16) << 4).kind(), DenominatorKind::PowerOfTwo);
    }

    #[test]
    fn test_every_narrow_divisor() {
        for divisor in (1..=u8::MAX).map(Denominator::new) {
            let d = divisor.value();
            assert_eq!(divisor.recover(), d);
            for n in 0..=u8::MAX {
                assert_eq!(n / &divisor, n / d, "{} / {}", n, d);
            }
        }
        for d in (i8::MIN..=i8::MAX).filter(|&d| d != 0) {
            let divisor = Denominator::new(d);
            assert_eq!(divisor.recover(), d);
            for n in i8::MIN..=i8::MAX {
                if n == i8::MIN && d == -1 {
                    continue; // divide with overflow
                }
                assert_eq!(n / &divisor, n / d, "{} / {}", n, d);
                assert_eq!(n % &divisor, n % d, "{} % {}", n, d);
            }
        }
    }
}

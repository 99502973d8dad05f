#![no_main]
use lanedivide::{div, Denominator, InvariantDenominator, LaneVector};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|items: Vec<u64>| {
    if items.len() < 2 {
        return;
    }
    macro_rules! run {
        ($num_type:ty) => {{
            let d = items[0] as $num_type;
            if let Ok(denom) = Denominator::try_new(d) {
                assert_eq!(denom.recover(), d);
                let invariant = InvariantDenominator::<$num_type, 4>::from(denom);
                for item in items.iter() {
                    let item = *item as $num_type;
                    if <$num_type>::MIN != 0 && item == <$num_type>::MIN && d as i128 == -1 {
                        continue; // divide with overflow
                    }
                    assert_eq!(item / &denom, item / d, "scalar {} {} / {}", stringify!($num_type), item, d);
                    let quot = invariant.apply(LaneVector::splat(item));
                    assert_eq!(quot.extract(3), item / d, "invariant {} {} / {}", stringify!($num_type), item, d);
                }
            }

            // per-lane divisors from consecutive items
            for window in items.windows(2) {
                let numer = LaneVector::from_array([window[0] as $num_type, window[1] as $num_type]);
                let denom = LaneVector::from_array([window[1] as $num_type, window[0] as $num_type]);
                if denom.as_array().contains(&0) {
                    continue;
                }
                if (0..2).any(|i| <$num_type>::MIN != 0 && numer[i] == <$num_type>::MIN && denom[i] as i128 == -1) {
                    continue; // divide with overflow
                }
                let result = div(numer, denom);
                let invariant = InvariantDenominator::from_lanes(denom);
                assert_eq!(invariant.div_rem(numer), result);
                for i in 0..2 {
                    assert_eq!(result.quot[i], numer[i] / denom[i], "generic {}", stringify!($num_type));
                    assert_eq!(result.rem[i], numer[i] % denom[i], "generic {}", stringify!($num_type));
                }
            }
        }};
    }
    run!(u8);
    run!(i8);
    run!(u16);
    run!(i16);
    run!(u32);
    run!(i32);
    run!(u64);
    run!(i64);
});

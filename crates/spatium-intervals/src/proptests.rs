//! Property-based tests for interval arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;
    use spatium_rationals::Rational;

    use crate::Interval;

    fn bound() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    fn non_zero_bound() -> impl Strategy<Value = i64> {
        prop_oneof![(-100i64..=-1i64), (1i64..=100i64)]
    }

    fn within(value: &Rational, interval: &Interval) -> bool {
        interval.lo().compare(value) != Ordering::Greater
            && interval.hi().compare(value) != Ordering::Less
    }

    proptest! {
        #[test]
        fn result_bounds_are_ordered(a in bound(), b in bound(), c in bound(), d in bound()) {
            let x = Interval::from_i64(a, b);
            let y = Interval::from_i64(c, d);
            for r in [&x + &y, &x - &y, &x * &y] {
                prop_assert_ne!(r.lo().compare(r.hi()), Ordering::Greater);
            }
        }

        #[test]
        fn mul_matches_brute_force_corners(a in bound(), b in bound(), c in bound(), d in bound()) {
            let products = [a * c, a * d, b * c, b * d];
            let lo = *products.iter().min().unwrap();
            let hi = *products.iter().max().unwrap();
            prop_assert_eq!(
                &Interval::from_i64(a, b) * &Interval::from_i64(c, d),
                Interval::from_i64(lo, hi)
            );
        }

        #[test]
        fn mul_contains_endpoint_products(a in bound(), b in bound(), c in bound(), d in bound()) {
            let result = &Interval::from_i64(a, b) * &Interval::from_i64(c, d);
            for x in [a, b] {
                for y in [c, d] {
                    prop_assert!(within(&Rational::from(x * y), &result));
                }
            }
        }

        #[test]
        fn div_contains_endpoint_quotients(
            a in bound(), b in bound(),
            c in non_zero_bound(), d in non_zero_bound(),
        ) {
            let result = Interval::from_i64(a, b)
                .div(&Interval::from_i64(c, d))
                .unwrap();
            for x in [a, b] {
                for y in [c, d] {
                    prop_assert!(within(&Rational::from_i64(x, y), &result));
                }
            }
        }

        #[test]
        fn div_by_zero_bound_always_fails(a in bound(), b in bound(), c in bound()) {
            prop_assert!(Interval::from_i64(a, b).div(&Interval::from_i64(0, c)).is_err());
            prop_assert!(Interval::from_i64(a, b).div(&Interval::from_i64(c, 0)).is_err());
        }

        #[test]
        fn add_contains_endpoint_sums(a in bound(), b in bound(), c in bound(), d in bound()) {
            let result = &Interval::from_i64(a, b) + &Interval::from_i64(c, d);
            prop_assert!(within(&Rational::from(a + c), &result));
            prop_assert!(within(&Rational::from(b + d), &result));
        }

        #[test]
        fn neg_involutive(a in bound(), b in bound()) {
            let x = Interval::from_i64(a.min(b), a.max(b));
            prop_assert_eq!(-(-x.clone()), x);
        }
    }
}

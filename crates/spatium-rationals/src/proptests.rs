//! Property-based tests for extended rational arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use dashu::base::{Gcd, Signed as DashuSigned};
    use dashu::integer::IBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rat() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    // Canonical form: reduced, sign on the numerator.
    fn assert_canonical(r: &Rational) {
        if r.is_finite() {
            assert!(DashuSigned::is_positive(r.denominator()));
            let g = IBig::from(r.numerator().clone().gcd(r.denominator().clone()));
            if r.numerator() != &IBig::ZERO {
                assert_eq!(g, IBig::ONE);
            }
        }
    }

    proptest! {
        // Field axioms over finite values

        #[test]
        fn add_commutative(a in rat(), b in rat()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in rat(), b in rat(), c in rat()) {
            prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in rat(), b in rat()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_distributive(a in rat(), b in rat(), c in rat()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn add_identity(a in rat()) {
            prop_assert_eq!(&a + &Rational::zero(), a.clone());
        }

        #[test]
        fn additive_inverse(a in rat()) {
            prop_assert!((&a + &-&a).is_zero());
        }

        #[test]
        fn sub_then_add_round_trips(a in rat(), b in rat()) {
            prop_assert_eq!((&a - &b) + &b, a.clone());
        }

        #[test]
        fn div_then_mul_round_trips(a in rat(), n in non_zero_int(), d in non_zero_int()) {
            let b = Rational::from_i64(n, d);
            prop_assert_eq!((&a / &b) * &b, a.clone());
        }

        // Canonical form invariants

        #[test]
        fn construction_is_canonical(n in small_int(), d in small_int()) {
            assert_canonical(&Rational::from_i64(n, d));
        }

        #[test]
        fn arithmetic_stays_canonical(a in rat(), b in rat()) {
            assert_canonical(&(&a + &b));
            assert_canonical(&(&a - &b));
            assert_canonical(&(&a * &b));
            assert_canonical(&(&a / &b));
        }

        // Ordering

        #[test]
        fn compare_antisymmetric(a in rat(), b in rat()) {
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }

        #[test]
        fn compare_matches_equality(a in rat(), b in rat()) {
            prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
        }

        #[test]
        fn infinities_bracket_everything(a in rat()) {
            prop_assert_eq!(a.compare(&Rational::infinity()), Ordering::Less);
            prop_assert_eq!(a.compare(&Rational::neg_infinity()), Ordering::Greater);
        }

        // Round trips

        #[test]
        fn display_round_trips(a in rat()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn recip_involutive(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d);
            prop_assert_eq!(a.recip().recip(), a);
        }
    }
}

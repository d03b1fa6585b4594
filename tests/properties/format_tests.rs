//! Property-based tests for display formatting.

use proptest::prelude::*;

use japflix::format::{StarRating, StarStyle, format_money, format_year, to_stars};

fn filled(rating: StarRating) -> u16 {
    u16::from(rating.full) * 2 + u16::from(rating.half)
}

proptest! {
    #[test]
    fn stars_always_have_five_slots(vote in any::<f64>()) {
        let rating = to_stars(Some(vote));
        prop_assert_eq!(rating.full + u8::from(rating.half) + rating.empty, StarRating::SLOTS);
        prop_assert_eq!(rating.render(StarStyle::Ascii).chars().count(), 5);
        prop_assert_eq!(rating.render(StarStyle::Unicode).chars().count(), 5);
    }

    #[test]
    fn stars_are_monotonic(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(filled(to_stars(Some(low))) <= filled(to_stars(Some(high))));
    }

    #[test]
    fn money_is_sentinel_or_dollars(amount in any::<f64>()) {
        let text = format_money(Some(amount));
        if amount.is_finite() && amount > 0.0 {
            prop_assert!(text.starts_with("$ "));
            prop_assert!(!text.ends_with('.'));
        } else {
            prop_assert_eq!(text, "N/A");
        }
    }

    #[test]
    fn year_is_sentinel_or_four_digits(date in ".{0,12}") {
        let year = format_year(Some(&date));
        prop_assert!(year == "N/A" || (year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())));
    }
}

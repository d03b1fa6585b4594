//! Property-based tests for normalization and filtering.

use proptest::prelude::*;

use japflix::catalog::{Catalog, MovieRecord};
use japflix::search::{filter, matches, normalize};

fn arb_movie() -> impl Strategy<Value = MovieRecord> {
    (
        proptest::option::of("[a-zA-ZÀ-ÿ ]{0,24}"),
        proptest::option::of("[a-zA-ZÀ-ÿ ]{0,40}"),
        proptest::option::of(".{0,60}"),
        prop::collection::vec("[A-Z][a-z]{2,10}", 0..3),
    )
        .prop_map(|(title, tagline, overview, genres)| MovieRecord {
            title,
            tagline,
            overview,
            genres,
            ..MovieRecord::default()
        })
}

fn has_combining_mark(s: &str) -> bool {
    s.chars().any(|c| ('\u{0300}'..='\u{036f}').contains(&c))
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_movie(), 0..20).prop_map(Catalog::new)
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "[a-zA-ZÀ-ɏ ]{0,40}") {
        let once = normalize(Some(&s));
        prop_assert_eq!(normalize(Some(&once)), once);
    }

    #[test]
    fn normalize_strips_combining_marks(s in "[a-zA-ZÀ-ÿ ]{0,40}") {
        let folded = normalize(Some(&s));
        prop_assert!(!has_combining_mark(&folded), "combining mark left in {:?}", folded);
        prop_assert!(!folded.chars().any(char::is_uppercase), "uppercase left in {:?}", folded);
    }

    #[test]
    fn filter_is_exact_and_ordered(catalog in arb_catalog(), query in "[a-zA-Zé]{1,3}") {
        let results = filter(&catalog, &query);
        let needle = normalize(Some(&query));

        prop_assert!(results.indices().windows(2).all(|w| w[0] < w[1]));
        for (idx, movie) in catalog.movies().iter().enumerate() {
            prop_assert_eq!(results.indices().contains(&idx), matches(movie, &needle));
        }
    }

    #[test]
    fn filter_finds_title_regardless_of_case(
        catalog in arb_catalog(),
        title in "[a-z]{3,12}",
    ) {
        let mut movies = catalog.movies().to_vec();
        movies.push(MovieRecord::titled(&title));
        let last = movies.len() - 1;
        let catalog = Catalog::new(movies);

        let results = filter(&catalog, &title.to_uppercase());
        prop_assert!(results.indices().contains(&last));
    }

    #[test]
    fn blank_query_matches_nothing(catalog in arb_catalog()) {
        prop_assert!(filter(&catalog, "").is_empty());
    }

    #[test]
    fn lenient_parse_never_panics(raw in ".{0,200}") {
        let _ = Catalog::from_json_str(&raw);
    }
}

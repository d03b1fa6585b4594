use insta::assert_snapshot;

use japflix::catalog::{Catalog, MovieRecord};
use japflix::format::{StarStyle, format_money, format_runtime, format_year, to_stars};
use japflix::search::filter;
use japflix::view::{DetailView, ListView};

fn catalog() -> Catalog {
    Catalog::from_json_str(
        r#"[
          {"title": "Kiki's Delivery Service", "tagline": "A witch in training.",
           "overview": "A young witch moves to a seaside town.",
           "genres": [{"name": "Animation"}, {"name": "Family"}],
           "vote_average": 7.3, "release_date": "1989-07-29", "runtime": 103,
           "budget": 8000000, "revenue": 41000000},
          {"title": "Totoro", "genres": ["Animation"], "vote_average": "10"},
          42
        ]"#,
    )
    .unwrap()
}

fn metadata_block(detail: &DetailView) -> String {
    detail
        .metadata()
        .iter()
        .map(|row| format!("{}: {}", row.label, row.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn detail_metadata_full_record() {
    let detail = DetailView::from_record(&catalog().movies()[0]);
    assert_snapshot!(metadata_block(&detail), @r"
    Year: 1989
    Runtime: 103 min
    Budget: $ 8,000,000
    Revenue: $ 41,000,000
    ");
}

#[test]
fn detail_metadata_sparse_record() {
    let detail = DetailView::from_record(&catalog().movies()[1]);
    assert_snapshot!(metadata_block(&detail), @r"
    Year: N/A
    Runtime: N/A
    Budget: N/A
    Revenue: N/A
    ");
}

#[test]
fn non_object_entry_keeps_its_slot() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.movies()[2], MovieRecord::default());
}

#[test]
fn list_view_json() {
    let catalog = catalog();
    let list = ListView::render(&catalog, &filter(&catalog, "animation"));
    insta::assert_json_snapshot!(list.entries(), @r#"
    [
      {
        "kind": "movie",
        "index": 0,
        "title": "Kiki's Delivery Service",
        "tagline": "A witch in training.",
        "stars": {
          "full": 3,
          "half": true,
          "empty": 1
        }
      },
      {
        "kind": "movie",
        "index": 1,
        "title": "Totoro",
        "tagline": "",
        "stars": {
          "full": 5,
          "half": false,
          "empty": 0
        }
      }
    ]
    "#);
}

#[test]
fn star_rows() {
    let rows = [0.0, 1.0, 4.9, 5.0, 9.99, 10.0]
        .iter()
        .map(|v| format!("{v} -> {}", to_stars(Some(*v)).render(StarStyle::Unicode)))
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(rows, @r"
    0 -> ☆☆☆☆☆
    1 -> ⯪☆☆☆☆
    4.9 -> ★★☆☆☆
    5 -> ★★⯪☆☆
    9.99 -> ★★★★⯪
    10 -> ★★★★★
    ");
}

#[test]
fn formatter_sentinels() {
    let line = [
        format_money(None),
        format_money(Some(0.0)),
        format_year(Some("soon")),
        format_runtime(Some(0.0)),
    ]
    .join(" | ");
    assert_snapshot!(line, @"N/A | N/A | N/A | N/A");
}

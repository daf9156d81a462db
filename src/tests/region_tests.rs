// tests/region_tests.rs
use crate::regions::{RegionTable, ALL};

const DISTRICTS: &str = r#"[
  {
    "si_do_name": "Seoul",
    "sigungu": [
      {
        "sigungu_code": "1168000000",
        "sigungu_name": "Gangnam",
        "eup_myeon_dong": [
          { "code": "1168010100", "name": "Yeoksam-dong" },
          { "code": "1168010300", "name": "Gaepo-dong" }
        ]
      },
      {
        "sigungu_code": "1165000000",
        "sigungu_name": "Seocho",
        "eup_myeon_dong": [
          { "code": "1165010800", "name": "Seocho-dong" }
        ]
      }
    ]
  },
  {
    "si_do_name": "Busan",
    "sigungu": [
      {
        "sigungu_code": "2650000000",
        "sigungu_name": "Suyeong",
        "eup_myeon_dong": [
          { "code": "2650010200", "name": "Suyeong-dong" }
        ]
      }
    ]
  }
]"#;

fn table() -> RegionTable {
    RegionTable::from_json(DISTRICTS).unwrap()
}

#[test]
fn specific_district_resolves_to_single_code_and_its_dongs() {
    let scope = table().resolve("Seoul", Some("Gangnam")).unwrap();

    assert_eq!(scope.sigungu_codes, vec!["1168000000"]);
    assert_eq!(scope.dongs.len(), 2);
    assert_eq!(scope.dongs[0].code, "1168010100");
    assert_eq!(scope.dongs[0].name, "Yeoksam-dong");
}

#[test]
fn all_sentinel_resolves_to_union_of_districts() {
    let scope = table().resolve("Seoul", Some(ALL)).unwrap();

    assert_eq!(scope.sigungu_codes, vec!["1168000000", "1165000000"]);
    let names: Vec<&str> = scope.dongs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Yeoksam-dong", "Gaepo-dong", "Seocho-dong"]);
}

#[test]
fn absent_district_behaves_like_the_all_sentinel() {
    let with_sentinel = table().resolve("Seoul", Some(ALL)).unwrap();
    let without = table().resolve("Seoul", None).unwrap();

    assert_eq!(with_sentinel.sigungu_codes, without.sigungu_codes);
    assert_eq!(with_sentinel.dongs, without.dongs);
}

#[test]
fn every_valid_city_district_pair_yields_dongs() {
    let table = table();
    for (city, district) in [
        ("Seoul", "Gangnam"),
        ("Seoul", "Seocho"),
        ("Busan", "Suyeong"),
    ] {
        let scope = table.resolve(city, Some(district)).unwrap();
        assert!(
            !scope.dongs.is_empty(),
            "{city}/{district} resolved to no neighborhoods"
        );
    }
}

#[test]
fn unknown_city_is_the_failure_signal() {
    assert!(table().resolve("Nonexistent", Some("Gangnam")).is_none());
}

#[test]
fn unknown_district_under_known_city_is_the_failure_signal() {
    assert!(table().resolve("Seoul", Some("Nowhere")).is_none());
}

#[test]
fn matching_is_exact_no_normalization() {
    let table = table();
    assert!(table.resolve("seoul", Some("Gangnam")).is_none());
    assert!(table.resolve("Seoul ", Some("Gangnam")).is_none());
    assert!(table.resolve("Seoul", Some("gangnam")).is_none());
}

// tests/utils.rs
use crate::domain::{ArticleListing, ComplexDetail, ComplexListing, ListingRecord, ListingTable};
use crate::regions::RegionTable;
use crate::scrape::{ComplexSummary, Portal, ScrapeError};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Mutex;

/// Minimal district table used by the end-to-end scenarios: one city,
/// one district, one neighborhood.
pub const TEST_DISTRICTS: &str = r#"[
  {
    "si_do_name": "Seoul",
    "sigungu": [
      {
        "sigungu_code": "1168000000",
        "sigungu_name": "Gangnam",
        "eup_myeon_dong": [
          { "code": "1168010100", "name": "Yeoksam-dong" }
        ]
      }
    ]
  }
]"#;

pub fn test_regions() -> RegionTable {
    RegionTable::from_json(TEST_DISTRICTS).expect("test district table must parse")
}

/// Canned portal: maps cortar codes to summaries and complex ids to
/// merged records, records every call, and fails on request for the
/// error-path tests.
#[derive(Default)]
pub struct StubPortal {
    pub summaries: HashMap<String, Vec<ComplexSummary>>,
    pub listings: HashMap<String, Vec<ComplexListing>>,
    pub failing_dongs: Vec<String>,
    pub failing_complexes: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl Portal for StubPortal {
    fn complex_summaries(&self, cortar_no: &str) -> Result<Vec<ComplexSummary>, ScrapeError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("summaries:{cortar_no}"));
        if self.failing_dongs.iter().any(|c| c == cortar_no) {
            return Err(ScrapeError::Network("connection refused".into()));
        }
        Ok(self.summaries.get(cortar_no).cloned().unwrap_or_default())
    }

    fn complex_listings(&self, complex_no: &str) -> Result<Vec<ComplexListing>, ScrapeError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("listings:{complex_no}"));
        if self.failing_complexes.iter().any(|c| c == complex_no) {
            return Err(ScrapeError::Network("connection reset".into()));
        }
        Ok(self.listings.get(complex_no).cloned().unwrap_or_default())
    }
}

impl StubPortal {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn summary(no: &str, name: &str) -> ComplexSummary {
    ComplexSummary {
        complex_no: Some(no.to_string()),
        complex_name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn complex_listing(no: &str, name: &str, listing_name: &str) -> ComplexListing {
    let mut attrs = BTreeMap::new();
    attrs.insert("세대수".to_string(), "100세대".to_string());
    ComplexListing {
        detail: ComplexDetail {
            complex_no: no.to_string(),
            complex_name: Some(name.to_string()),
            attrs,
        },
        listing: ArticleListing {
            name: Some(listing_name.to_string()),
            price: Some("10억".to_string()),
            area: Some("84㎡".to_string()),
            floor: Some("12/20층".to_string()),
            direction: Some("남향".to_string()),
            image_url: Some("https://img.example/1.jpg".to_string()),
            comment: Some("역세권".to_string()),
        },
    }
}

/// A two-row aggregated table with one fully-populated record and one
/// record exercising every sentinel path.
pub fn sample_table() -> ListingTable {
    let mut table = ListingTable::new("Seoul", "Gangnam");

    let full = complex_listing("123", "Test Complex", "101동 매매");
    table.rows.push(ListingRecord {
        detail: full.detail,
        listing: full.listing,
        dong_code: "1168010100".to_string(),
        dong_name: "Yeoksam-dong".to_string(),
    });

    table.rows.push(ListingRecord {
        detail: ComplexDetail {
            complex_no: "456".to_string(),
            complex_name: None,
            attrs: BTreeMap::new(),
        },
        listing: ArticleListing::default(),
        dong_code: "1168010100".to_string(),
        dong_name: "Yeoksam-dong".to_string(),
    });

    table
}

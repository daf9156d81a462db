// domain/record.rs
use std::collections::BTreeMap;

/// Labeled attribute rows kept from the complex-info page, in export
/// column order. Rows with any other label are dropped at parse time.
pub const ATTR_LABELS: [&str; 14] = [
    "공급면적",
    "전용면적",
    "해당면적 세대수",
    "현관구조",
    "방/욕실",
    "위치",
    "사용승인일",
    "세대수",
    "난방",
    "주차",
    "전기차 충전시설",
    "용적률/건폐율",
    "관리사무소 전화",
    "건설사",
];

// Sentinels applied when rows are rendered; parsed structs keep `None`
// so tests can tell "absent" from "present but empty".
pub const UNKNOWN: &str = "Unknown";
pub const NO_IMAGE: &str = "No image";
pub const NO_COMMENT: &str = "No comment";

/// Complex-level fields parsed from the complex-info page.
/// `attrs` holds only allow-listed labels that were actually found.
#[derive(Debug, Clone)]
pub struct ComplexDetail {
    pub complex_no: String,
    pub complex_name: Option<String>,
    pub attrs: BTreeMap<String, String>,
}

/// One advertised unit parsed from the article page. Every field is
/// optional; area/floor/direction are populated only when the item
/// carried at least four summary sub-items.
#[derive(Debug, Clone, Default)]
pub struct ArticleListing {
    pub name: Option<String>,
    pub price: Option<String>,
    pub area: Option<String>,
    pub floor: Option<String>,
    pub direction: Option<String>,
    pub image_url: Option<String>,
    pub comment: Option<String>,
}

/// Detail ∪ listing, before region annotation. What the detail fetcher
/// hands back per complex.
#[derive(Debug, Clone)]
pub struct ComplexListing {
    pub detail: ComplexDetail,
    pub listing: ArticleListing,
}

/// Final row: one (neighborhood, complex, listing) triple. The dong
/// stamp is captured when the record is created, not after the loop.
#[derive(Debug, Clone)]
pub struct ListingRecord {
    pub detail: ComplexDetail,
    pub listing: ArticleListing,
    pub dong_code: String,
    pub dong_name: String,
}

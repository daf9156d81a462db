// scrape/markers.rs
//
// The marker-search call: one warm-up GET against the portal landing
// page (the API rejects sessions without its cookies), then the
// single-markers API with the full browser-shaped parameter set.

use crate::scrape::models::ComplexSummary;
use crate::scrape::ScrapeError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER};
use serde_json::Value;

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const LANDING_URL: &str = "https://new.land.naver.com/complexes";
const MARKER_API_URL: &str = "https://new.land.naver.com/api/complexes/single-markers/2.0";

/// Geographic rectangle sent with every marker query. The default does
/// not adapt to the requested neighborhood (see DESIGN.md, open
/// questions).
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub left_lon: f64,
    pub right_lon: f64,
    pub top_lat: f64,
    pub bottom_lat: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            left_lon: 127.0335801,
            right_lon: 127.0610459,
            top_lat: 37.5229391,
            bottom_lat: 37.5118764,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerQuery {
    pub bounds: BoundingBox,
}

impl MarkerQuery {
    pub fn params(&self, cortar_no: &str) -> Vec<(&'static str, String)> {
        vec![
            ("cortarNo", cortar_no.to_string()),
            ("zoom", "16".to_string()),
            ("priceType", "RETAIL".to_string()),
            ("markerId", String::new()),
            ("markerType", String::new()),
            ("selectedComplexNo", String::new()),
            ("selectedComplexBuildingNo", String::new()),
            ("fakeComplexMarker", String::new()),
            ("realEstateType", "APT:ABYG:JGC:PRE".to_string()),
            ("tradeType", String::new()),
            ("tag", ":::::::".to_string()),
            ("rentPriceMin", "0".to_string()),
            ("rentPriceMax", "900000000".to_string()),
            ("priceMin", "0".to_string()),
            ("priceMax", "900000000".to_string()),
            ("areaMin", "0".to_string()),
            ("areaMax", "900000000".to_string()),
            ("oldBuildYears", String::new()),
            ("recentlyBuildYears", String::new()),
            ("minHouseHoldCount", String::new()),
            ("maxHouseHoldCount", String::new()),
            ("showArticle", "false".to_string()),
            ("sameAddressGroup", "false".to_string()),
            ("minMaintenanceCost", String::new()),
            ("maxMaintenanceCost", String::new()),
            ("directions", String::new()),
            ("leftLon", self.bounds.left_lon.to_string()),
            ("rightLon", self.bounds.right_lon.to_string()),
            ("topLat", self.bounds.top_lat.to_string()),
            ("bottomLat", self.bounds.bottom_lat.to_string()),
            ("isPresale", "true".to_string()),
        ]
    }
}

fn marker_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    headers.insert(REFERER, HeaderValue::from_static(LANDING_URL));
    headers.insert(
        "sec-ch-ua",
        HeaderValue::from_static(r#""Not_A Brand";v="8", "Chromium";v="120""#),
    );
    headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    headers.insert("sec-ch-ua-platform", HeaderValue::from_static("\"Windows\""));
    headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("empty"));
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("cors"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-origin"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

/// Fetch all complex markers inside the query rectangle for one
/// neighborhood code. The client must have its cookie store enabled so
/// the warm-up cookies reach the API call.
pub fn fetch_complexes(
    client: &Client,
    query: &MarkerQuery,
    cortar_no: &str,
) -> Result<Vec<ComplexSummary>, ScrapeError> {
    client
        .get(LANDING_URL)
        .headers(marker_headers())
        .send()
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    let resp = client
        .get(MARKER_API_URL)
        .headers(marker_headers())
        .query(&query.params(cortar_no))
        .send()
        .map_err(|e| ScrapeError::Network(e.to_string()))?
        .error_for_status()
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    let data: Value = resp
        .json()
        .map_err(|e| ScrapeError::JsonParse(e.to_string()))?;

    Ok(parse_marker_response(&data))
}

/// A JSON array becomes summaries; anything else (error object, null,
/// empty body parsed as a non-array) becomes an empty table.
pub fn parse_marker_response(data: &Value) -> Vec<ComplexSummary> {
    match data.as_array() {
        Some(arr) => arr
            .iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect(),
        None => Vec::new(),
    }
}

// scrape/models.rs
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// The marker API is loose about types: ids and prices arrive as numbers
// or strings depending on the complex. Normalize both to strings.
fn stringish<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// One complex marker from the marker-search API. Every column is
/// optional so a response that omits columns still deserializes into
/// the same fixed shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplexSummary {
    #[serde(rename = "complexNo", default, deserialize_with = "stringish")]
    pub complex_no: Option<String>,
    #[serde(rename = "complexName", default)]
    pub complex_name: Option<String>,
    #[serde(rename = "totalHouseholdCount", default)]
    pub total_household_count: Option<i64>,
    #[serde(rename = "dealCount", default)]
    pub deal_count: Option<i64>,
    #[serde(rename = "leaseCount", default)]
    pub lease_count: Option<i64>,
    #[serde(rename = "rentCount", default)]
    pub rent_count: Option<i64>,
    #[serde(rename = "minPrice", default, deserialize_with = "stringish")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice", default, deserialize_with = "stringish")]
    pub max_price: Option<String>,
    #[serde(rename = "dealPriceMin", default, deserialize_with = "stringish")]
    pub deal_price_min: Option<String>,
    #[serde(rename = "dealPriceMax", default, deserialize_with = "stringish")]
    pub deal_price_max: Option<String>,
    #[serde(rename = "leasePriceMin", default, deserialize_with = "stringish")]
    pub lease_price_min: Option<String>,
    #[serde(rename = "leasePriceMax", default, deserialize_with = "stringish")]
    pub lease_price_max: Option<String>,
    #[serde(rename = "rentPriceMin", default, deserialize_with = "stringish")]
    pub rent_price_min: Option<String>,
    #[serde(rename = "rentPriceMax", default, deserialize_with = "stringish")]
    pub rent_price_max: Option<String>,
}

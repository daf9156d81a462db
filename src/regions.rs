// regions.rs
//
// The static city → district → neighborhood hierarchy, read once from
// district.json. Lookups are exact string matches on names; accepting
// near-matches would silently change the region scope.

use crate::errors::ServerError;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sentinel meaning "the whole scope" for district/neighborhood inputs.
pub const ALL: &str = "전체";

#[derive(Debug, Deserialize)]
pub struct CityEntry {
    pub si_do_name: String,
    pub sigungu: Vec<SigunguEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SigunguEntry {
    pub sigungu_code: String,
    pub sigungu_name: String,
    pub eup_myeon_dong: Vec<Dong>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Dong {
    pub code: String,
    pub name: String,
}

/// Resolved scope for one collection run.
#[derive(Debug)]
pub struct RegionScope {
    pub sigungu_codes: Vec<String>,
    pub dongs: Vec<Dong>,
}

pub struct RegionTable {
    cities: Vec<CityEntry>,
}

impl RegionTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ServerError::ConfigError(format!("cannot open {}: {e}", path.display()))
        })?;
        let cities: Vec<CityEntry> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                ServerError::ConfigError(format!("cannot parse {}: {e}", path.display()))
            })?;
        Ok(Self { cities })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            cities: serde_json::from_str(json)?,
        })
    }

    /// Look up the district codes and neighborhoods in scope.
    ///
    /// `None` district or the `전체` sentinel widens the scope to every
    /// district under the city. `None` is the failure signal: either the
    /// city is absent from the table, or a specific district is absent
    /// under a city that does exist. Callers abort the run on `None`.
    pub fn resolve(&self, city_name: &str, sigungu_name: Option<&str>) -> Option<RegionScope> {
        let city = self.cities.iter().find(|c| c.si_do_name == city_name)?;

        match sigungu_name {
            Some(name) if name != ALL => {
                let sigungu = city.sigungu.iter().find(|s| s.sigungu_name == name)?;
                Some(RegionScope {
                    sigungu_codes: vec![sigungu.sigungu_code.clone()],
                    dongs: sigungu.eup_myeon_dong.clone(),
                })
            }
            _ => Some(RegionScope {
                sigungu_codes: city
                    .sigungu
                    .iter()
                    .map(|s| s.sigungu_code.clone())
                    .collect(),
                dongs: city
                    .sigungu
                    .iter()
                    .flat_map(|s| s.eup_myeon_dong.iter().cloned())
                    .collect(),
            }),
        }
    }
}

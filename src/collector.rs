// collector.rs
//
// Drives one collection run: resolve the region, walk the neighborhood
// working set, fan each neighborhood out into marker summaries and each
// summary into detail records. Strictly sequential blocking I/O; the
// portal rate-limits anomalous traffic, so no parallel fan-out.

use crate::domain::{record::UNKNOWN, ListingRecord, ListingTable};
use crate::regions::{RegionTable, ALL};
use crate::scrape::Portal;
use std::fmt;

/// Structured progress feed. The UI layer subscribes and renders; the
/// collector itself never prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent<'a> {
    /// A neighborhood's marker fetch is in flight.
    Neighborhood { name: &'a str, code: &'a str },
    /// A complex's detail fetch is in flight.
    Complex { name: &'a str, no: &'a str },
    /// Collection ended; any status display should be cleared.
    Cleared,
}

#[derive(Debug)]
pub enum CollectError {
    /// City (or a specific district under it) absent from the lookup
    /// table. Fatal to the run; nothing was fetched.
    RegionNotFound(String),
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::RegionNotFound(city) => {
                write!(f, "region not found in district table: {city}")
            }
        }
    }
}

impl std::error::Error for CollectError {}

pub struct CollectRequest {
    pub city: String,
    pub sigungu: String,
    pub dong: String,
}

#[derive(Debug)]
pub struct CollectOutcome {
    pub table: ListingTable,
    /// Per-neighborhood and per-complex failures that did not abort the
    /// run, in the order they happened.
    pub warnings: Vec<String>,
}

pub struct Collector<'a, P: Portal> {
    portal: &'a P,
    regions: &'a RegionTable,
}

impl<'a, P: Portal> Collector<'a, P> {
    pub fn new(portal: &'a P, regions: &'a RegionTable) -> Self {
        Self { portal, regions }
    }

    pub fn collect(
        &self,
        req: &CollectRequest,
        progress: &mut dyn FnMut(ProgressEvent<'_>),
    ) -> Result<CollectOutcome, CollectError> {
        let sigungu = match req.sigungu.trim() {
            "" => None,
            s => Some(s),
        };
        let scope = self
            .regions
            .resolve(req.city.trim(), sigungu)
            .ok_or_else(|| CollectError::RegionNotFound(req.city.trim().to_string()))?;

        let mut dongs = scope.dongs;
        let dong_filter = req.dong.trim();
        if !dong_filter.is_empty() && dong_filter != ALL {
            dongs.retain(|d| d.name == dong_filter);
        }

        let mut table = ListingTable::new(req.city.trim(), req.sigungu.trim());
        let mut warnings = Vec::new();

        for dong in &dongs {
            progress(ProgressEvent::Neighborhood {
                name: &dong.name,
                code: &dong.code,
            });

            // Full neighborhood code as cortarNo, matching the lookup
            // table's granularity. See DESIGN.md on code granularity.
            let summaries = match self.portal.complex_summaries(&dong.code) {
                Ok(summaries) => summaries,
                Err(e) => {
                    warnings.push(format!(
                        "marker request failed for {} ({}): {e}",
                        dong.name, dong.code
                    ));
                    continue;
                }
            };
            if summaries.is_empty() {
                warnings.push(format!(
                    "no complexes found for {} ({})",
                    dong.name, dong.code
                ));
                continue;
            }

            for summary in &summaries {
                let Some(complex_no) = summary.complex_no.as_deref() else {
                    continue;
                };
                let complex_name = summary.complex_name.as_deref().unwrap_or(UNKNOWN);
                progress(ProgressEvent::Complex {
                    name: complex_name,
                    no: complex_no,
                });

                match self.portal.complex_listings(complex_no) {
                    Ok(listings) => {
                        for cl in listings {
                            // Dong stamp captured here, per record.
                            table.rows.push(ListingRecord {
                                detail: cl.detail,
                                listing: cl.listing,
                                dong_code: dong.code.clone(),
                                dong_name: dong.name.clone(),
                            });
                        }
                    }
                    Err(e) => {
                        warnings.push(format!(
                            "failed to fetch details for complex {complex_no}: {e}"
                        ));
                    }
                }
            }
        }

        progress(ProgressEvent::Cleared);

        Ok(CollectOutcome { table, warnings })
    }
}

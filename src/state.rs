// state.rs
use crate::regions::RegionTable;
use crate::scrape::Portal;
use std::sync::Mutex;

/// Export artifacts of the most recent non-empty run, held in memory
/// for the download routes. An empty run clears them.
pub struct RunArtifacts {
    pub xlsx: Vec<u8>,
    pub xlsx_name: String,
    pub csv: Vec<u8>,
    pub csv_name: String,
}

pub struct AppState<P: Portal> {
    pub regions: RegionTable,
    pub portal: P,
    pub last_run: Mutex<Option<RunArtifacts>>,
}

impl<P: Portal> AppState<P> {
    pub fn new(regions: RegionTable, portal: P) -> Self {
        Self {
            regions,
            portal,
            last_run: Mutex::new(None),
        }
    }
}

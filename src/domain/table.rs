// domain/table.rs
use crate::domain::record::{ListingRecord, ATTR_LABELS, NO_COMMENT, NO_IMAGE, UNKNOWN};

/// The aggregated result of one collection run. City and district names
/// are run-level and stamped onto every exported row; the dong columns
/// come from each record's own stamp.
#[derive(Debug)]
pub struct ListingTable {
    pub si_do_name: String,
    pub sigungu_name: String,
    pub rows: Vec<ListingRecord>,
}

impl ListingTable {
    pub fn new(si_do_name: impl Into<String>, sigungu_name: impl Into<String>) -> Self {
        Self {
            si_do_name: si_do_name.into(),
            sigungu_name: sigungu_name.into(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fixed export column order. Exports and the preview all render
    /// through `header`/`row_values`, so the artifacts stay in lockstep.
    pub fn header() -> Vec<&'static str> {
        let mut cols = vec!["complexNo", "complexName"];
        cols.extend(ATTR_LABELS);
        cols.extend([
            "매물명",
            "매매가",
            "면적",
            "층수",
            "방향",
            "이미지",
            "코멘트",
            "dong_code",
            "dong_name",
            "si_do_name",
            "sigungu_name",
        ]);
        cols
    }

    /// Render one record into cells, applying the sentinel policy:
    /// name/price → "Unknown", image → "No image", comment → "No comment",
    /// absent attributes and omitted area/floor/direction → empty string.
    pub fn row_values(&self, rec: &ListingRecord) -> Vec<String> {
        let mut cells = Vec::with_capacity(Self::header().len());

        cells.push(rec.detail.complex_no.clone());
        cells.push(
            rec.detail
                .complex_name
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        );
        for label in ATTR_LABELS {
            cells.push(rec.detail.attrs.get(label).cloned().unwrap_or_default());
        }

        let l = &rec.listing;
        cells.push(l.name.clone().unwrap_or_else(|| UNKNOWN.to_string()));
        cells.push(l.price.clone().unwrap_or_else(|| UNKNOWN.to_string()));
        cells.push(l.area.clone().unwrap_or_default());
        cells.push(l.floor.clone().unwrap_or_default());
        cells.push(l.direction.clone().unwrap_or_default());
        cells.push(l.image_url.clone().unwrap_or_else(|| NO_IMAGE.to_string()));
        cells.push(l.comment.clone().unwrap_or_else(|| NO_COMMENT.to_string()));

        cells.push(rec.dong_code.clone());
        cells.push(rec.dong_name.clone());
        cells.push(self.si_do_name.clone());
        cells.push(self.sigungu_name.clone());

        cells
    }
}

pub mod record;
pub mod table;

pub use record::{ArticleListing, ComplexDetail, ComplexListing, ListingRecord, ATTR_LABELS};
pub use table::ListingTable;

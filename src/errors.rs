// errors.rs
use astra::Response;
use std::fmt;

/// Errors originating from the server layer (routing, missing state,
/// export failures). Scrape-level errors live in `scrape::ScrapeError`
/// and never bubble this far except as rendered warnings.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    RegionNotFound(String),
    ConfigError(String),
    XlsxError(String),
    CsvError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::RegionNotFound(city) => {
                write!(f, "Region not found in district table: {city}")
            }
            ServerError::ConfigError(msg) => write!(f, "Configuration Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::CsvError(msg) => write!(f, "CSV Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

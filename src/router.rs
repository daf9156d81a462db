// router.rs
use crate::collector::{CollectError, CollectRequest, Collector, ProgressEvent};
use crate::errors::{ResultResp, ServerError};
use crate::regions::ALL;
use crate::responses::{csv_response, html_response, xlsx_response};
use crate::scrape::Portal;
use crate::spreadsheets::{csv_filename, table_to_csv, table_to_xlsx, xlsx_filename};
use crate::state::{AppState, RunArtifacts};
use crate::templates;
use crate::templates::pages::ResultsVm;
use astra::Request;
use std::collections::HashMap;

pub fn handle<P: Portal>(req: Request, state: &AppState<P>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        ("GET", "/collect") => run_collection(&req, state),

        ("GET", "/download/xlsx") => {
            let last_run = state.last_run.lock().map_err(|_| ServerError::InternalError)?;
            match last_run.as_ref() {
                Some(run) => xlsx_response(run.xlsx.clone(), &run.xlsx_name),
                None => Err(ServerError::BadRequest(
                    "no collected data to download; run a collection first".into(),
                )),
            }
        }

        ("GET", "/download/csv") => {
            let last_run = state.last_run.lock().map_err(|_| ServerError::InternalError)?;
            match last_run.as_ref() {
                Some(run) => csv_response(run.csv.clone(), &run.csv_name),
                None => Err(ServerError::BadRequest(
                    "no collected data to download; run a collection first".into(),
                )),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

fn run_collection<P: Portal>(req: &Request, state: &AppState<P>) -> ResultResp {
    let params = parse_query(req);

    let city = params.get("city").map(|s| s.trim()).unwrap_or_default();
    if city.is_empty() {
        return Err(ServerError::BadRequest("city name is required".into()));
    }
    let sigungu = params
        .get("sigungu")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(ALL);
    let dong = params
        .get("dong")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(ALL);

    let request = CollectRequest {
        city: city.to_string(),
        sigungu: sigungu.to_string(),
        dong: dong.to_string(),
    };

    // Structured progress events rendered as status lines on the
    // server console while the blocking run is in flight.
    let mut progress = |ev: ProgressEvent<'_>| match ev {
        ProgressEvent::Neighborhood { name, code } => {
            eprintln!("⏳ {name} ({code}) - 수집중입니다.");
        }
        ProgressEvent::Complex { name, no } => {
            eprintln!("⏳ {name} ({no}) - 수집중입니다.");
        }
        ProgressEvent::Cleared => eprintln!("✅ 수집이 완료되었습니다."),
    };

    let collector = Collector::new(&state.portal, &state.regions);
    let outcome = collector
        .collect(&request, &mut progress)
        .map_err(|e| match e {
            CollectError::RegionNotFound(city) => ServerError::RegionNotFound(city),
        })?;

    for warning in &outcome.warnings {
        eprintln!("⚠️ {warning}");
    }

    let mut last_run = state.last_run.lock().map_err(|_| ServerError::InternalError)?;

    if outcome.table.is_empty() {
        eprintln!("🏁 No data to save.");
        *last_run = None;
        return html_response(templates::pages::no_data_page(
            &request.city,
            &request.sigungu,
            &outcome.warnings,
        ));
    }

    eprintln!("📦 {} listings collected", outcome.table.len());

    let xlsx = table_to_xlsx(&outcome.table)?;
    let csv = table_to_csv(&outcome.table)?;
    *last_run = Some(RunArtifacts {
        xlsx,
        xlsx_name: xlsx_filename(&request.city, &request.sigungu),
        csv,
        csv_name: csv_filename(&request.city, &request.sigungu),
    });

    html_response(templates::pages::results_page(&ResultsVm {
        table: &outcome.table,
        warnings: &outcome.warnings,
    }))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

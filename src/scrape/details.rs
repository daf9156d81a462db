// scrape/details.rs
//
// Per-complex detail scraping: the complex-info page and the article
// list page (tradeTypes=A1, direct sale), both keyed by complex id and
// parsed with fixed class selectors. The selectors are tied to the
// current fin.land.naver.com markup; a markup change makes fields come
// back `None`, it does not raise.

use crate::domain::{ArticleListing, ComplexDetail, ComplexListing, ATTR_LABELS};
use crate::scrape::ScrapeError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

fn info_url(complex_no: &str) -> String {
    format!("https://fin.land.naver.com/complexes/{complex_no}?tab=complex-info")
}

fn article_url(complex_no: &str) -> String {
    format!("https://fin.land.naver.com/complexes/{complex_no}?tab=article&tradeTypes=A1")
}

fn detail_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(REFERER, HeaderValue::from_static("https://fin.land.naver.com/"));
    headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("empty"));
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("cors"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-origin"));
    headers
}

fn sel(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::HtmlParse(format!("bad selector {css}: {e}")))
}

fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// The pages are served as UTF-8 with signature; strip the BOM before
/// handing the body to the HTML parser.
pub fn decode_utf8_sig(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let resp = client
        .get(url)
        .headers(detail_headers())
        .send()
        .map_err(|e| ScrapeError::Network(e.to_string()))?
        .error_for_status()
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    let bytes = resp
        .bytes()
        .map_err(|e| ScrapeError::Network(e.to_string()))?;
    Ok(decode_utf8_sig(&bytes))
}

/// Fetch and merge both pages for one complex. Zero article items mean
/// zero records; complex-level fields alone never produce a row.
pub fn fetch_complex_listings(
    client: &Client,
    complex_no: &str,
) -> Result<Vec<ComplexListing>, ScrapeError> {
    let info_html = fetch_page(client, &info_url(complex_no))?;
    let detail = parse_complex_info(&info_html, complex_no)?;

    let article_html = fetch_page(client, &article_url(complex_no))?;
    let listings = parse_article_list(&article_html)?;

    Ok(listings
        .into_iter()
        .map(|listing| ComplexListing {
            detail: detail.clone(),
            listing,
        })
        .collect())
}

/// Parse the complex-info page: the name span plus the labeled
/// attribute rows. Only allow-listed labels are kept; rows missing
/// either the term or the definition node are skipped.
pub fn parse_complex_info(html: &str, complex_no: &str) -> Result<ComplexDetail, ScrapeError> {
    let doc = Html::parse_document(html);

    let name_sel = sel("span.ComplexSummary_name__vX3IN")?;
    let item_sel = sel("li.DataList_item__T1hMR")?;
    let term_sel = sel("div.DataList_term__Tks7l")?;
    let def_sel = sel("div.DataList_definition__d9KY1")?;

    let complex_name = doc.select(&name_sel).next().map(text_of);

    let mut attrs = BTreeMap::new();
    for item in doc.select(&item_sel) {
        let term = match item.select(&term_sel).next() {
            Some(el) => text_of(el),
            None => continue,
        };
        let definition = match item.select(&def_sel).next() {
            Some(el) => text_of(el),
            None => continue,
        };
        if ATTR_LABELS.contains(&term.as_str()) {
            attrs.insert(term, definition);
        }
    }

    Ok(ComplexDetail {
        complex_no: complex_no.to_string(),
        complex_name,
        attrs,
    })
}

/// Parse the article page into listings. Area/floor/direction are only
/// read when an item carries at least four summary sub-items (the page
/// renders a shorter summary row for some listing kinds, where those
/// positions mean different things).
pub fn parse_article_list(html: &str) -> Result<Vec<ArticleListing>, ScrapeError> {
    let doc = Html::parse_document(html);

    let item_sel = sel("li.ComplexArticleItem_item__L5o7k")?;
    let name_sel = sel("span.ComplexArticleItem_name__4h3AA")?;
    let price_sel = sel("span.ComplexArticleItem_price__DFeIb")?;
    let summary_sel = sel("li.ComplexArticleItem_item-summary__oHSwl")?;
    let img_sel = sel("img")?;
    let comment_sel = sel("p.ComplexArticleItem_comment__zN_dK")?;

    let mut listings = Vec::new();
    for item in doc.select(&item_sel) {
        let mut listing = ArticleListing {
            name: item.select(&name_sel).next().map(text_of),
            price: item.select(&price_sel).next().map(text_of),
            ..Default::default()
        };

        let summary: Vec<String> = item.select(&summary_sel).map(text_of).collect();
        if summary.len() >= 4 {
            listing.area = summary.get(1).cloned();
            listing.floor = summary.get(2).cloned();
            listing.direction = summary.get(3).cloned();
        }

        listing.image_url = item
            .select(&img_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);
        listing.comment = item.select(&comment_sel).next().map(text_of);

        listings.push(listing);
    }

    Ok(listings)
}

//! Fetching of the two static boundary documents.

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use loudi_shared::boundary::BoundarySet;

/// Primary boundary file: the local region's county polygons.
const LOCAL_BOUNDARY: Asset = asset!("/assets/data/loudi.json");

/// Parent-region boundary file, only used by the scope toggle.
const PARENT_BOUNDARY: Asset = asset!("/assets/data/hunan.json");

fn data_url(asset: &Asset) -> String {
    // Same-origin static file; reqwest on wasm needs an absolute URL.
    let window = web_sys::window().unwrap();
    let origin = window.location().origin().unwrap();
    format!("{origin}{asset}")
}

async fn fetch_boundary(asset: &Asset) -> Result<BoundarySet, String> {
    let url = data_url(asset);
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("{url} 请求失败: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("{url} 返回 {}", resp.status()));
    }
    let raw = resp.text().await.map_err(|e| e.to_string())?;
    let set = BoundarySet::from_geojson_str(&raw)?;
    info!(url = %url, features = set.features.len(), "boundary dataset loaded");
    Ok(set)
}

pub async fn fetch_local_boundary() -> Result<BoundarySet, String> {
    fetch_boundary(&LOCAL_BOUNDARY).await.map_err(|e| {
        warn!(error = %e, "local boundary load failed");
        e
    })
}

pub async fn fetch_parent_boundary() -> Result<BoundarySet, String> {
    fetch_boundary(&PARENT_BOUNDARY).await.map_err(|e| {
        warn!(error = %e, "parent boundary load failed");
        e
    })
}

use serde::de::DeserializeOwned;

use crate::dom;
use crate::error::Error;
use crate::stats::ResearchStats;

pub async fn request_get_json<T: DeserializeOwned>(url: &str) -> Result<T, Error> {
    log::trace!("request_get_json: {}", url);
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(Error::Status(response.status().as_u16()));
    }
    Ok(response.json::<T>().await?)
}

/// One GET of the statistics document. The page-relative path is resolved
/// against the window origin since wasm requests need absolute URLs.
pub async fn get_research_stats() -> Result<ResearchStats, Error> {
    let origin = dom::window().location().origin().map_err(Error::from)?;
    let url = format!("{}/assets/researchdata.json", origin);
    request_get_json::<ResearchStats>(&url).await
}

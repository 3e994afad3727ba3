use contracts::domain::pft::CategoryDataset;
use gloo_net::http::Request;

use crate::shared::error::WidgetError;

/// Fetch and decode the PFT data file. One request, no retries.
pub async fn fetch_dataset(data_url: &str) -> Result<CategoryDataset, WidgetError> {
    let response = Request::get(data_url)
        .send()
        .await
        .map_err(|e| WidgetError::Network(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| WidgetError::Network(e.to_string()))?;

    decode_body(&body)
}

pub fn check_status(status: u16) -> Result<(), WidgetError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(WidgetError::Fetch { status })
    }
}

pub fn decode_body(body: &str) -> Result<CategoryDataset, WidgetError> {
    Ok(CategoryDataset::from_json_str(body)?)
}

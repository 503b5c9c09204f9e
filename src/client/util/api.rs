//! Typed fetchers for the catalog API.

#[cfg(feature = "web")]
use crate::model::catalog::{
    DiscovererDto, ObjectDetailDto, ObjectSummaryDto, ObservatoryDto, StatsDto,
};

/// Filters as entered in the dashboard controls, serialized into the list
/// endpoint's query string
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectsRequest {
    pub object_type: String,
    pub habitable: String,
    pub search: String,
}

impl ObjectsRequest {
    /// Build the query string for `/api/objects`; empty fields are omitted
    /// and the search term is trimmed before encoding
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.object_type.is_empty() {
            params.push(format!("type={}", urlencoding::encode(&self.object_type)));
        }
        if !self.habitable.is_empty() {
            params.push(format!("habitable={}", urlencoding::encode(&self.habitable)));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(search)));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Retrieve the filtered object list from API
#[cfg(feature = "web")]
pub async fn get_objects(request: &ObjectsRequest) -> Result<Vec<ObjectSummaryDto>, String> {
    let url = format!("/api/objects{}", request.to_query_string());
    fetch_json(&url).await
}

/// Retrieve one object's detail payload from API
#[cfg(feature = "web")]
pub async fn get_object_detail(id: i32) -> Result<ObjectDetailDto, String> {
    fetch_json(&format!("/api/objects/{id}")).await
}

/// Retrieve the discoverer reference list from API
#[cfg(feature = "web")]
pub async fn get_discoverers() -> Result<Vec<DiscovererDto>, String> {
    fetch_json("/api/discoverers").await
}

/// Retrieve the observatory reference list from API
#[cfg(feature = "web")]
pub async fn get_observatories() -> Result<Vec<ObservatoryDto>, String> {
    fetch_json("/api/observatories").await
}

/// Retrieve aggregate catalog stats from API
#[cfg(feature = "web")]
pub async fn get_stats() -> Result<StatsDto, String> {
    fetch_json("/api/stats").await
}

#[cfg(feature = "web")]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        _ => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_dto.error
                ))
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_text
                ))
            }
        }
    }
}

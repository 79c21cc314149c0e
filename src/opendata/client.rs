//! Socrata dataset client
//!
//! Thin HTTP client over the NYC open-data parking-regulation resource.
//! Queries are expressed as SoQL `$where` clauses: a latitude/longitude
//! range for viewport loads and `within_circle` for radius searches.

use std::time::Duration;

use crate::{
    config::OpenDataConfig,
    error::{AppError, AppResult},
    geo::{BoundingBox, LatLng},
};

use super::record::SignRecord;

/// Client for the parking-regulation dataset
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    http: reqwest::Client,
    dataset_url: String,
    app_token: Option<String>,
}

impl OpenDataClient {
    /// Build a client from configuration
    pub fn new(config: &OpenDataConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            dataset_url: config.dataset_url.clone(),
            app_token: config.app_token.clone(),
        })
    }

    /// Fetch sign records inside a bounding box (viewport load)
    pub async fn signs_in_bounds(
        &self,
        bounds: BoundingBox,
        limit: u32,
    ) -> AppResult<Vec<SignRecord>> {
        self.fetch(&bounds_where_clause(&bounds), limit).await
    }

    /// Fetch sign records within `radius_meters` of a center point
    pub async fn signs_within_circle(
        &self,
        center: LatLng,
        radius_meters: f64,
        limit: u32,
    ) -> AppResult<Vec<SignRecord>> {
        self.fetch(&circle_where_clause(center, radius_meters), limit)
            .await
    }

    async fn fetch(&self, where_clause: &str, limit: u32) -> AppResult<Vec<SignRecord>> {
        let mut request = self
            .http
            .get(&self.dataset_url)
            .query(&[("$limit", limit.to_string()), ("$where", where_clause.to_string())]);

        if let Some(token) = &self.app_token {
            request = request.header("X-App-Token", token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::OpenData(format!(
                "dataset fetch failed: {status}"
            )));
        }

        Ok(response.json::<Vec<SignRecord>>().await?)
    }
}

/// SoQL clause for a viewport query
fn bounds_where_clause(bounds: &BoundingBox) -> String {
    format!(
        "latitude between {} and {} AND longitude between {} and {}",
        bounds.south, bounds.north, bounds.west, bounds.east
    )
}

/// SoQL clause for a radius query
fn circle_where_clause(center: LatLng, radius_meters: f64) -> String {
    format!(
        "within_circle(location, {}, {}, {})",
        center.lat, center.lng, radius_meters
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_where_clause() {
        let bounds = BoundingBox::new(40.70, -74.02, 40.75, -73.95);
        assert_eq!(
            bounds_where_clause(&bounds),
            "latitude between 40.7 and 40.75 AND longitude between -74.02 and -73.95"
        );
    }

    #[test]
    fn test_circle_where_clause() {
        let clause = circle_where_clause(LatLng::new(40.7128, -74.006), 500.0);
        assert_eq!(clause, "within_circle(location, 40.7128, -74.006, 500)");
    }

    #[test]
    fn test_client_from_config() {
        let config = OpenDataConfig {
            dataset_url: "https://data.cityofnewyork.us/resource/dv6r-f4he.json".to_string(),
            app_token: Some("token".to_string()),
            timeout_seconds: 10,
        };
        let client = OpenDataClient::new(&config).unwrap();
        assert_eq!(client.dataset_url, config.dataset_url);
        assert_eq!(client.app_token.as_deref(), Some("token"));
    }
}

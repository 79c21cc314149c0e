//! Spot query service

use crate::{
    config::SearchConfig,
    error::{AppError, AppResult},
    geo::{self, BoundingBox, LatLng, NYC_BOUNDS},
    handlers::spots::response::{NearestSpotResponse, SpotStatus},
    opendata::{OpenDataClient, SignRecord},
    rules::{self, EvaluationTime},
    utils::validation::validate_radius,
};

/// Spot service for business logic
pub struct SpotService;

impl SpotService {
    /// Fetch and evaluate all signs inside a viewport
    pub async fn spots_in_view(
        client: &OpenDataClient,
        search: &SearchConfig,
        bounds: BoundingBox,
        at: EvaluationTime,
        limit: Option<u32>,
    ) -> AppResult<Vec<SpotStatus>> {
        if bounds.is_degenerate() {
            return Err(AppError::InvalidInput(
                "Bounding box must have positive extent on both axes".to_string(),
            ));
        }
        if !bounds.intersects(&NYC_BOUNDS) {
            return Err(AppError::InvalidInput(
                "Viewport is outside the New York City service area".to_string(),
            ));
        }

        let limit = limit
            .unwrap_or(search.viewport_record_limit)
            .min(search.viewport_record_limit);

        let records = client.signs_in_bounds(bounds, limit).await?;
        Ok(records
            .iter()
            .filter_map(|r| Self::to_status(r, at))
            .collect())
    }

    /// Find the closest sign to a center point within a radius
    pub async fn nearest_spot(
        client: &OpenDataClient,
        search: &SearchConfig,
        center: LatLng,
        radius_meters: Option<f64>,
        at: EvaluationTime,
    ) -> AppResult<NearestSpotResponse> {
        let radius = radius_meters.unwrap_or(search.default_radius_meters);
        validate_radius(radius, search.max_radius_meters)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        // The original client refuses nearest-parking searches outside NYC
        if !NYC_BOUNDS.contains(center) {
            return Err(AppError::InvalidInput(
                "Nearest parking search works only inside New York City".to_string(),
            ));
        }

        let records = client
            .signs_within_circle(center, radius, search.radius_record_limit)
            .await?;

        let located: Vec<(LatLng, &SignRecord)> = records
            .iter()
            .filter_map(|r| r.coords().map(|c| (c, r)))
            .collect();

        let positions: Vec<LatLng> = located.iter().map(|(c, _)| *c).collect();
        let (idx, distance) = geo::nearest(center, &positions).ok_or_else(|| {
            AppError::NotFound(format!(
                "No parking spots found within {} meters",
                radius.round() as i64
            ))
        })?;

        let (coords, record) = located[idx];
        let decision = rules::evaluate(record.rule_text(), at);

        Ok(NearestSpotResponse {
            spot: SpotStatus {
                latitude: coords.lat,
                longitude: coords.lng,
                sign_text: record.rule_text().map(str::to_string),
                allowed: decision.allowed,
                reason: decision.reason,
            },
            distance_meters: distance,
        })
    }

    /// Evaluate one record, skipping those without usable coordinates
    fn to_status(record: &SignRecord, at: EvaluationTime) -> Option<SpotStatus> {
        let coords = record.coords()?;
        let decision = rules::evaluate(record.rule_text(), at);
        Some(SpotStatus {
            latitude: coords.lat,
            longitude: coords.lng,
            sign_text: record.rule_text().map(str::to_string),
            allowed: decision.allowed,
            reason: decision.reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn record(lat: Option<f64>, lng: Option<f64>, text: Option<&str>) -> SignRecord {
        SignRecord {
            latitude: lat,
            longitude: lng,
            location: None,
            sign_description: text.map(str::to_string),
            sign_text: None,
            description: None,
        }
    }

    #[test]
    fn test_to_status_evaluates_rule() {
        let r = record(Some(40.71), Some(-74.0), Some("NO PARKING ANYTIME"));
        let status =
            SpotService::to_status(&r, EvaluationTime::new(Weekday::Mon, 10.0)).unwrap();
        assert!(!status.allowed);
        assert_eq!(status.reason, "No parking anytime");
        assert_eq!(status.sign_text.as_deref(), Some("NO PARKING ANYTIME"));
    }

    #[test]
    fn test_to_status_without_text_defaults_to_allowed() {
        let r = record(Some(40.71), Some(-74.0), None);
        let status =
            SpotService::to_status(&r, EvaluationTime::new(Weekday::Mon, 10.0)).unwrap();
        assert!(status.allowed);
        assert_eq!(status.reason, "No rule data");
    }

    #[test]
    fn test_to_status_skips_unlocated_records() {
        let r = record(None, None, Some("NO PARKING ANYTIME"));
        assert!(SpotService::to_status(&r, EvaluationTime::new(Weekday::Mon, 10.0)).is_none());
    }
}

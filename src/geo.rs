//! Geographic primitives
//!
//! Coordinate pairs, the NYC bounding box, and great-circle distance.
//! These replace the mapping-library helpers the browser client leaned on.

use serde::{Deserialize, Serialize};

use crate::constants::nyc_bounds;

/// Mean Earth radius in meters
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An axis-aligned bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// The box is degenerate when either axis has zero or negative extent
    pub fn is_degenerate(&self) -> bool {
        self.south >= self.north || self.west >= self.east
    }

    /// Whether a point lies inside the box (edges inclusive)
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }

    /// Whether two boxes overlap at all
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.south <= other.north
            && self.north >= other.south
            && self.west <= other.east
            && self.east >= other.west
    }
}

/// Approximate bounds of New York City
pub const NYC_BOUNDS: BoundingBox = BoundingBox {
    south: nyc_bounds::SOUTH,
    west: nyc_bounds::WEST,
    north: nyc_bounds::NORTH,
    east: nyc_bounds::EAST,
};

/// Great-circle distance between two points, in meters
pub fn haversine_meters(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Index and distance of the candidate closest to `center`
pub fn nearest(center: LatLng, candidates: &[LatLng]) -> Option<(usize, f64)> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, &c)| (i, haversine_meters(center, c)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyc_bounds_contains_manhattan() {
        // City Hall
        assert!(NYC_BOUNDS.contains(LatLng::new(40.7128, -74.0060)));
        // Philadelphia is well outside
        assert!(!NYC_BOUNDS.contains(LatLng::new(39.9526, -75.1652)));
    }

    #[test]
    fn test_degenerate_box() {
        assert!(BoundingBox::new(40.8, -74.0, 40.7, -73.9).is_degenerate());
        assert!(BoundingBox::new(40.7, -73.9, 40.8, -74.0).is_degenerate());
        assert!(!BoundingBox::new(40.7, -74.0, 40.8, -73.9).is_degenerate());
    }

    #[test]
    fn test_intersects() {
        let view = BoundingBox::new(40.70, -74.02, 40.75, -73.95);
        assert!(view.intersects(&NYC_BOUNDS));

        let philly = BoundingBox::new(39.90, -75.20, 39.99, -75.10);
        assert!(!philly.intersects(&NYC_BOUNDS));
    }

    #[test]
    fn test_haversine_known_distance() {
        // Times Square to Grand Central is roughly 1.1 km
        let times_square = LatLng::new(40.7580, -73.9855);
        let grand_central = LatLng::new(40.7527, -73.9772);
        let d = haversine_meters(times_square, grand_central);
        assert!(d > 850.0 && d < 1150.0, "got {d}");
    }

    #[test]
    fn test_haversine_zero_distance() {
        let p = LatLng::new(40.7128, -74.0060);
        assert!(haversine_meters(p, p) < 1e-6);
    }

    #[test]
    fn test_nearest_picks_closest() {
        let center = LatLng::new(40.7128, -74.0060);
        let candidates = vec![
            LatLng::new(40.7580, -73.9855),
            LatLng::new(40.7130, -74.0062),
            LatLng::new(40.7300, -73.9900),
        ];
        let (idx, dist) = nearest(center, &candidates).unwrap();
        assert_eq!(idx, 1);
        assert!(dist < 50.0);
    }

    #[test]
    fn test_nearest_empty() {
        assert!(nearest(LatLng::new(40.7, -74.0), &[]).is_none());
    }
}

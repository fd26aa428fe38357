//! Coordinate extraction from shared map links.
//!
//! Office locations arrive as pasted Google Maps URLs. This module pulls a
//! latitude/longitude pair out of the handful of link shapes the share
//! sheet produces, without talking to any geocoding service.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::MapLinkError;

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates.
    ///
    /// # Errors
    /// Returns an error if latitude is outside [-90, 90] or longitude is
    /// outside [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, MapLinkError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(MapLinkError::OutOfRange { lat, lng });
        }
        Ok(Self { lat, lng })
    }
}

/// Extract coordinates from a maps link.
///
/// Recognized shapes, tried in order:
/// - an `@lat,lng[,zoom]` path segment (`/maps/@59.33,18.06,12z`)
/// - a `q=lat,lng`, `ll=lat,lng`, or `query=lat,lng` query parameter
///
/// A parameter that holds free text (`q=Head+Office`) is skipped rather
/// than treated as an error; the link only fails if no source yields a
/// numeric pair.
pub fn parse_maps_link(link: &str) -> Result<Coordinates, MapLinkError> {
    let url = Url::parse(link)?;

    let pair = coords_from_path(&url).or_else(|| {
        ["q", "ll", "query"].into_iter().find_map(|key| {
            url.query_pairs()
                .find(|(k, _)| k == key)
                .and_then(|(_, value)| split_pair(&value))
        })
    });

    match pair {
        Some((lat, lng)) => Coordinates::new(lat, lng),
        None => Err(MapLinkError::NoCoordinates),
    }
}

fn coords_from_path(url: &Url) -> Option<(f64, f64)> {
    let segment = url.path_segments()?.find(|s| s.starts_with('@'))?;
    split_pair(segment.trim_start_matches('@'))
}

/// Parse `"lat,lng"` (extra trailing parts such as zoom are ignored).
fn split_pair(value: &str) -> Option<(f64, f64)> {
    let mut parts = value.split(',');
    let lat = parts.next()?.trim().parse::<f64>().ok()?;
    let lng = parts.next()?.trim().parse::<f64>().ok()?;
    Some((lat, lng))
}

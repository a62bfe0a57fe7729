//! Risk Map Export
//!
//! Turns scored rows into map points and a GeoJSON FeatureCollection.
//! Dataset coordinates are `X_COR` = latitude, `Y_COR` = longitude; GeoJSON
//! positions are `[lon, lat]`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::scorer::ScoredRow;
use crate::logic::model::{RiskLabel, RISK_THRESHOLD};

/// Initial map view (center of Bangladesh)
pub const MAP_CENTER: (f64, f64) = (23.6850, 90.3563);
pub const MAP_ZOOM: u8 = 7;

/// Probability above which a district is listed as an alert
pub const ALERT_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    HighRisk,
    LowRisk,
}

impl MarkerStyle {
    pub fn for_probability(probability: f64) -> Self {
        if probability >= RISK_THRESHOLD {
            MarkerStyle::HighRisk
        } else {
            MarkerStyle::LowRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerStyle::HighRisk => "high_risk",
            MarkerStyle::LowRisk => "low_risk",
        }
    }
}

/// `(coordinate, probability, marker)` for one scored row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub district: String,
    pub month: u32,
    pub lat: f64,
    pub lng: f64,
    pub probability: f64,
    pub marker: MarkerStyle,
}

impl MapPoint {
    pub fn from_scored(row: &ScoredRow) -> Self {
        Self {
            district: row.district.clone(),
            month: row.month,
            lat: row.x_cor,
            lng: row.y_cor,
            probability: row.probability,
            marker: MarkerStyle::for_probability(row.probability),
        }
    }

    pub fn label(&self) -> RiskLabel {
        match self.marker {
            MarkerStyle::HighRisk => RiskLabel::High,
            MarkerStyle::LowRisk => RiskLabel::Low,
        }
    }
}

pub fn map_points(scored: &[ScoredRow]) -> Vec<MapPoint> {
    scored.iter().map(MapPoint::from_scored).collect()
}

/// GeoJSON FeatureCollection of map points
pub fn to_geojson(points: &[MapPoint]) -> Value {
    let features: Vec<Value> = points
        .iter()
        .map(|p| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [p.lng, p.lat],
                },
                "properties": {
                    "district": p.district,
                    "month": p.month,
                    "probability": p.probability,
                    "label": p.label().as_str(),
                    "marker": p.marker.as_str(),
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Alert entry for a high-probability district
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub district: String,
    pub month: u32,
    pub probability: f64,
}

/// Rows above [`ALERT_THRESHOLD`], highest probability first
pub fn risk_alerts(scored: &[ScoredRow]) -> Vec<RiskAlert> {
    let mut alerts: Vec<RiskAlert> = scored
        .iter()
        .filter(|row| row.probability > ALERT_THRESHOLD)
        .map(|row| RiskAlert {
            district: row.district.clone(),
            month: row.month,
            probability: row.probability,
        })
        .collect();

    alerts.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    alerts
}

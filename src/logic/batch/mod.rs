//! Batch Module - Historical dataset scoring and map export

pub mod dataset;
pub mod map;
pub mod scorer;


pub use dataset::{is_excluded, load_dataset, read_dataset, DatasetRow, EXCLUDED_STATIONS};
pub use map::{
    map_points, risk_alerts, to_geojson, MapPoint, MarkerStyle, RiskAlert, ALERT_THRESHOLD,
    MAP_CENTER, MAP_ZOOM,
};
pub use scorer::{assemble_row, score_all, ScoredRow};

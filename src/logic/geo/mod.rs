//! Geo Module - District coordinates and coordinate checks

pub mod coordinates;
pub mod districts;

pub use coordinates::{parse_coordinates, validate_coordinates};
pub use districts::{district_names, find_district, lookup_district, District, DISTRICTS};

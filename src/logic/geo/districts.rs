//! District Coordinate Table
//!
//! Static reference data: district name → the `X_COR` / `Y_COR` pair the
//! model was trained with. Immutable for the process lifetime.

use serde::Serialize;

use crate::error::{FloodError, Result};

/// A district and its model coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct District {
    pub name: &'static str,
    /// `X_COR` feature (latitude, degrees north)
    pub x: f64,
    /// `Y_COR` feature (longitude, degrees east)
    pub y: f64,
}

/// All districts offered for prediction, in display order
pub const DISTRICTS: &[District] = &[
    District { name: "Bagerhat", x: 22.651568, y: 89.785938 },
    District { name: "Bandarban", x: 22.195327, y: 92.218377 },
    District { name: "Barguna", x: 22.156889, y: 90.329871 },
    District { name: "Barisal", x: 22.701002, y: 90.353451 },
    District { name: "Bhola", x: 22.687946, y: 90.644397 },
    District { name: "Bogra", x: 24.846522, y: 89.377755 },
    District { name: "Brahmanbaria", x: 23.957090, y: 91.111928 },
    District { name: "Chandpur", x: 23.233258, y: 90.671291 },
    District { name: "Chittagong", x: 22.356851, y: 91.783182 },
    District { name: "Chuadanga", x: 23.640196, y: 88.841841 },
    District { name: "Comilla", x: 23.460856, y: 91.180909 },
    District { name: "Cox's Bazar", x: 21.427229, y: 92.005806 },
    District { name: "Dhaka", x: 23.810331, y: 90.412521 },
    District { name: "Dinajpur", x: 25.627858, y: 88.633576 },
    District { name: "Faridpur", x: 23.607082, y: 89.842940 },
    District { name: "Feni", x: 23.015915, y: 91.397600 },
    District { name: "Gaibandha", x: 25.328751, y: 89.528088 },
    District { name: "Gazipur", x: 23.999940, y: 90.420273 },
    District { name: "Gopalganj", x: 23.005085, y: 89.826605 },
    District { name: "Habiganj", x: 24.374945, y: 91.415530 },
    District { name: "Jamalpur", x: 24.937218, y: 89.937774 },
    District { name: "Jessore", x: 23.166667, y: 89.208611 },
    District { name: "Jhalokathi", x: 22.640562, y: 90.198739 },
    District { name: "Jhenaidah", x: 23.544817, y: 89.153921 },
    District { name: "Joypurhat", x: 25.102347, y: 89.021263 },
    District { name: "Khagrachari", x: 23.119285, y: 91.984663 },
    District { name: "Khulna", x: 22.845641, y: 89.540328 },
    District { name: "Kishoreganj", x: 24.444937, y: 90.776575 },
    District { name: "Kurigram", x: 25.805445, y: 89.636174 },
    District { name: "Kushtia", x: 23.901258, y: 89.120482 },
    District { name: "Lakshmipur", x: 22.942477, y: 90.841184 },
    District { name: "Lalmonirhat", x: 25.992346, y: 89.284725 },
    District { name: "Madaripur", x: 23.164102, y: 90.189680 },
    District { name: "Magura", x: 23.487337, y: 89.419956 },
    District { name: "Manikganj", x: 23.861733, y: 90.004683 },
    District { name: "Meherpur", x: 23.762213, y: 88.631821 },
    District { name: "Moulvibazar", x: 24.482934, y: 91.777417 },
    District { name: "Munshiganj", x: 23.542217, y: 90.530500 },
    District { name: "Mymensingh", x: 24.747149, y: 90.420273 },
    District { name: "Naogaon", x: 24.913159, y: 88.753095 },
    District { name: "Narail", x: 23.172534, y: 89.512672 },
    District { name: "Narayanganj", x: 23.623810, y: 90.499844 },
    District { name: "Narsingdi", x: 23.932233, y: 90.715421 },
    District { name: "Natore", x: 24.420556, y: 89.000282 },
    District { name: "Netrokona", x: 24.870955, y: 90.727887 },
    District { name: "Nilphamari", x: 25.931794, y: 88.856006 },
    District { name: "Noakhali", x: 22.869563, y: 91.099398 },
    District { name: "Pabna", x: 23.998542, y: 89.233646 },
    District { name: "Panchagarh", x: 26.341100, y: 88.554160 },
    District { name: "Patuakhali", x: 22.359631, y: 90.329871 },
    District { name: "Pirojpur", x: 22.584126, y: 89.972030 },
    District { name: "Rajbari", x: 23.757430, y: 89.644466 },
    District { name: "Rajshahi", x: 24.374945, y: 88.604255 },
    District { name: "Rangamati", x: 22.732374, y: 92.198329 },
    District { name: "Rangpur", x: 25.743892, y: 89.275227 },
    District { name: "Satkhira", x: 22.7185, y: 89.0705 },
    District { name: "Chapai Nawabganj", x: 24.6833, y: 88.2500 },
    District { name: "Sherpur", x: 25.0200, y: 90.0170 },
    District { name: "Shariatpur", x: 23.2423, y: 90.4348 },
];

/// Look up a district by exact name
pub fn lookup_district(name: &str) -> Option<&'static District> {
    DISTRICTS.iter().find(|d| d.name == name)
}

/// Look up a district, ignoring case and surrounding whitespace
pub fn find_district(name: &str) -> Result<&'static District> {
    let wanted = name.trim();
    lookup_district(wanted)
        .or_else(|| DISTRICTS.iter().find(|d| d.name.eq_ignore_ascii_case(wanted)))
        .ok_or_else(|| FloodError::invalid(format!("unknown district: {}", name)))
}

/// District names in display order
pub fn district_names() -> impl Iterator<Item = &'static str> {
    DISTRICTS.iter().map(|d| d.name)
}

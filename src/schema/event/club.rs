//! Club information structures

use serde::{Deserialize, Serialize};

/// A racing club: identity, branding and location
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Club {
    /// Stable opaque club identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Creation timestamp
    pub creation: String,
    /// Display name
    pub name: String,
    /// Whether the club is publicly listed
    pub visible: bool,
    /// Club logo image URL
    pub logo_url: String,
    /// Club banner image URL
    pub banner_url: String,
    /// Primary branding color (hex)
    pub primary_color: String,
    /// Text color used over the primary color (hex)
    pub text_color: String,
    /// Street address
    pub address: String,
    /// Venue latitude in degrees
    pub latitude: f64,
    /// Venue longitude in degrees
    pub longitude: f64,
    /// IANA timezone name
    pub timezone: String,
}

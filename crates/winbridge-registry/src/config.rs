//! Default window geometry settings.

use serde::{Deserialize, Serialize};

/// Geometry applied when a create call omits size or position.
///
/// Omitted size resolves to `size_fraction` of the primary display's usable
/// area; omitted origin centers the resolved size within it. A non-zero
/// `cascade_offset` shifts each successive defaulted window so they do not
/// stack exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowDefaults {
    /// Fraction of the usable display area used for defaulted width/height
    /// (valid range: 0.0-1.0 exclusive of zero).
    pub size_fraction: f64,
    /// Pixels each successive defaulted window is offset from center.
    /// Zero disables cascading.
    pub cascade_offset: f64,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            size_fraction: 0.5,
            cascade_offset: 0.0,
        }
    }
}

impl WindowDefaults {
    /// Load defaults from a TOML string. Missing fields keep their defaults.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

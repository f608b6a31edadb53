//! Affected-area overlay.
//!
//! The zones arrive as a static GeoJSON feature collection fetched
//! once at startup. Geometry is carried through untouched for the map
//! layer to draw; the property bags become popup text.

use crate::FiremapError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Border-only styling applied to every zone polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for ZoneStyle {
    fn default() -> Self {
        Self {
            color: "#ff0000".to_string(),
            weight: 2,
            opacity: 0.8,
            fill_opacity: 0.0,
        }
    }
}

/// One affected zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Property bag shown in the popup.
    pub properties: Map<String, Value>,

    /// Geometry as it appeared in the file.
    pub geometry: Value,
}

impl Zone {
    /// Popup body: a header line plus one `key: value` line per
    /// property, skipping the keys in `hidden`.
    pub fn popup_text(&self, hidden: &[&str]) -> String {
        let mut text = String::from("Affected area\n");
        for (key, value) in &self.properties {
            if hidden.iter().any(|hide| hide == key) {
                continue;
            }
            match value {
                Value::String(raw) => text.push_str(&format!("{key}: {raw}\n")),
                other => text.push_str(&format!("{key}: {other}\n")),
            }
        }
        text
    }
}

#[derive(Debug, Deserialize)]
struct WireCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<WireFeature>,
}

#[derive(Debug, Deserialize)]
struct WireFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Value,
}

/// The affected zones loaded from one GeoJSON file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AffectedZones {
    zones: Vec<Zone>,
}

impl AffectedZones {
    /// Parses a GeoJSON `FeatureCollection`. Anything else, including
    /// a bare feature or geometry, is rejected.
    pub fn from_json(json: &str) -> Result<Self, FiremapError> {
        let wire: WireCollection = serde_json::from_str(json)?;
        if wire.kind != "FeatureCollection" {
            return Err(FiremapError::NotAFeatureCollection);
        }
        let zones = wire
            .features
            .into_iter()
            .map(|feature| Zone {
                properties: feature.properties.unwrap_or_default(),
                geometry: feature.geometry,
            })
            .collect();
        Ok(Self { zones })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AffectedZones, ZoneStyle};
    use crate::FiremapError;

    const ZONES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "Nombre": "Quebrada del Condorito",
                    "Superficie_ha": 1832.5,
                    "fid": 7
                },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-64.7, -31.6], [-64.6, -31.6], [-64.6, -31.7], [-64.7, -31.6]]]
                }
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn test_load_keeps_every_feature() {
        let zones = AffectedZones::from_json(ZONES).unwrap();
        assert_eq!(zones.len(), 2);
    }

    #[test]
    fn test_popup_lists_properties() {
        let zones = AffectedZones::from_json(ZONES).unwrap();
        let zone = zones.iter().next().unwrap();
        let popup = zone.popup_text(&[]);
        assert!(popup.starts_with("Affected area\n"));
        assert!(popup.contains("Nombre: Quebrada del Condorito\n"));
        assert!(popup.contains("Superficie_ha: 1832.5\n"));
        assert!(popup.contains("fid: 7\n"));
    }

    #[test]
    fn test_hidden_keys_stay_out_of_the_popup() {
        let zones = AffectedZones::from_json(ZONES).unwrap();
        let zone = zones.iter().next().unwrap();
        let popup = zone.popup_text(&["fid"]);
        assert!(!popup.contains("fid"));
        assert!(popup.contains("Nombre: Quebrada del Condorito\n"));
    }

    #[test]
    fn test_null_properties_make_an_empty_popup() {
        let zones = AffectedZones::from_json(ZONES).unwrap();
        let zone = zones.iter().nth(1).unwrap();
        assert_eq!(zone.popup_text(&[]), "Affected area\n");
    }

    #[test]
    fn test_non_collections_are_rejected() {
        let result = AffectedZones::from_json(r#"{"type": "Feature", "properties": {}}"#);
        assert!(matches!(result, Err(FiremapError::NotAFeatureCollection)));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let result = AffectedZones::from_json("not geojson");
        assert!(matches!(result, Err(FiremapError::Json(_))));
    }

    #[test]
    fn test_default_style_is_border_only() {
        let style = ZoneStyle::default();
        assert_eq!(style.color, "#ff0000");
        assert_eq!(style.weight, 2);
        assert_eq!(style.fill_opacity, 0.0);
    }
}

use crate::{RastileError, TileCoord};

/// Tile URL template with `{z}`, `{x}`, and `{y}` placeholders.
///
/// Each acquisition date gets its own template; the rest of the URL
/// is opaque to us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// A template must mention all three placeholders, otherwise two
    /// different tiles would resolve to the same URL.
    pub fn new(template: impl Into<String>) -> Result<Self, RastileError> {
        let template = template.into();
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !template.contains(placeholder) {
                return Err(RastileError::Template(template));
            }
        }
        Ok(Self(template))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expands the template for `coord`.
    pub fn url_for(&self, coord: TileCoord) -> String {
        self.0
            .replace("{z}", &coord.zoom.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{TileCoord, UrlTemplate};
    use crate::RastileError;

    #[test]
    fn test_url_expansion() {
        let template = UrlTemplate::new("https://tiles.example.net/burn/{z}/{x}/{y}.png").unwrap();
        let url = template.url_for(TileCoord {
            zoom: 12,
            x: 1317,
            y: 2424,
        });
        assert_eq!(url, "https://tiles.example.net/burn/12/1317/2424.png");
    }

    #[test]
    fn test_missing_placeholder_is_rejected() {
        let result = UrlTemplate::new("https://tiles.example.net/burn/{z}/{x}.png");
        assert!(matches!(result, Err(RastileError::Template(_))));
    }
}

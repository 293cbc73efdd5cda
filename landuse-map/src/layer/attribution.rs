//! Credits displayed by the map for the data sources of its layers.

use serde::{Deserialize, Serialize};

/// Represents an attribution, typically used for citing sources or providing credit.
///
/// This struct stores a text description along with an optional URL where more information
/// or the source can be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Default for Attribution {
    /// Credit of the OpenStreetMap base map.
    fn default() -> Self {
        Self::new("© OpenStreetMap", None)
    }
}

impl Attribution {
    /// Creates a new `Attribution` with the given text and optional URL.
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// Returns a reference to the text of the attribution.
    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Returns a reference to the URL associated with the attribution, if any.
    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Renders the attribution as it is shown in the map corner: a link if the URL is known,
    /// plain text otherwise.
    pub fn to_html(&self) -> String {
        match &self.url {
            Some(url) => format!("<a href=\"{url}\">{}</a>", self.text),
            None => self.text.clone(),
        }
    }
}

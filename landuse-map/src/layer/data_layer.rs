use geojson::{Feature, FeatureCollection};

use crate::bounding_rect::BoundingRect;
use crate::layer::popup::popup_content;
use crate::layer::style::FeatureStyle;

/// Feature of a [`DataLayer`] together with everything needed to display it.
#[derive(Debug, Clone)]
pub struct StyledFeature {
    /// Source feature.
    pub feature: Feature,
    /// Path style chosen by the land use class.
    pub style: FeatureStyle,
    /// Popup and tooltip content. `None` for features without properties.
    pub popup: Option<String>,
}

impl StyledFeature {
    /// Applies the styling and popup policy to the feature.
    pub fn new(feature: Feature) -> Self {
        let style = FeatureStyle::for_feature(&feature);
        let popup = popup_content(&feature);
        Self {
            feature,
            style,
            popup,
        }
    }
}

/// Layer of land use polygons built from a `/api/data` response.
#[derive(Debug, Clone, Default)]
pub struct DataLayer {
    features: Vec<StyledFeature>,
    bounds: Option<BoundingRect>,
}

impl DataLayer {
    /// Builds the layer from a feature collection.
    pub fn from_collection(collection: FeatureCollection) -> Self {
        let bounds = BoundingRect::from_features(&collection.features);
        let features = collection
            .features
            .into_iter()
            .map(StyledFeature::new)
            .collect();

        Self { features, bounds }
    }

    /// Features of the layer in the order they were received.
    pub fn features(&self) -> &[StyledFeature] {
        &self.features
    }

    /// Returns true if the collection had no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bounding rect of all feature geometries. `None` if no feature has a geometry.
    pub fn bounds(&self) -> Option<BoundingRect> {
        self.bounds
    }
}

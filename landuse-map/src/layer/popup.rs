//! Content of the popups and tooltips shown for land use polygons.

use geojson::{Feature, JsonObject, JsonValue};

const NO_NAME: &str = "No name";

/// Popup/tooltip HTML for the feature: bold name, line break, area in hectares.
///
/// Returns `None` if the feature has no properties object at all. An empty properties object
/// still gets a popup with the default name and a zero area.
pub fn popup_content(feature: &Feature) -> Option<String> {
    feature.properties.as_ref().map(content_from_properties)
}

fn content_from_properties(properties: &JsonObject) -> String {
    let name = match properties.get("name") {
        Some(JsonValue::String(name)) if !name.is_empty() => escape_html(name),
        Some(JsonValue::Number(number)) if number.as_f64() != Some(0.0) => {
            format_number(number)
        }
        _ => NO_NAME.to_string(),
    };

    let area = match properties.get("area_ha") {
        Some(JsonValue::Number(area)) => format_number(area),
        Some(JsonValue::String(area)) if !area.is_empty() => escape_html(area),
        _ => "0".to_string(),
    };

    format!("<b>{name}</b><br>Area: {area} ha")
}

/// Formats a JSON number the way the browser prints it: integral values without a fractional
/// part.
pub(crate) fn format_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) => format_f64(value),
        None => number.to_string(),
    }
}

/// Shortest decimal form of a finite number, as JavaScript `Number.prototype.toString` prints it.
/// Magnitudes below `1e-6` or from `1e21` up use the exponential form (`1e-7`, `1.5e+21`).
pub(crate) fn format_f64(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

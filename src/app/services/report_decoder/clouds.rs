//! Cloud group decoding
//!
//! Translates sky-cover codes and renders individual cloud layers,
//! including vertical-visibility groups.

use crate::app::models::{CloudCover, CloudLayer};
use crate::constants::cloud_cover_phrase;

/// Translate a cloud cover code into its descriptive phrase
///
/// Unknown codes pass through unchanged.
pub fn translate_cover(code: &str) -> &str {
    cloud_cover_phrase(code)
}

/// Render one decoded sky-condition layer as English text
pub fn render_layer(layer: &CloudLayer) -> String {
    let height_ft = layer.height_hundreds_ft * 100;

    if layer.cover == CloudCover::VerticalVisibility {
        return format!("vertical visibility {} feet", height_ft);
    }

    let mut rendered = format!("{} at {} feet", translate_cover(layer.cover.code()), height_ft);
    if let Some(qualifier) = layer.qualifier {
        rendered.push_str(&format!(" ({})", qualifier.code()));
    }
    rendered
}

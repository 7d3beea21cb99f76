//! Width measurement for generated labels.
//!
//! Auto-indented list items are indented by the width of their label, so a list
//! needs some notion of how wide a string is in a given font. Glyph metrics belong
//! to the renderer; this module only defines the seam and two implementations.

use crate::LayoutError;
use lectern_style::FontSpec;
use rustybuzz::{Feature, UnicodeBuffer};
use std::fmt::{self, Debug};
use std::sync::{Arc, OnceLock};
use ttf_parser::Tag;

/// Measures the advance width of a run of text, in points.
pub trait TextMeasure: Send + Sync + Debug {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32;
}

/// Estimates widths as a fixed fraction of the font size per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageAdvance {
    pub em_fraction: f32,
}

impl Default for AverageAdvance {
    fn default() -> Self {
        Self { em_fraction: 0.5 }
    }
}

impl TextMeasure for AverageAdvance {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * self.em_fraction
    }
}

/// Measures text by shaping it against a real font face.
#[derive(Clone)]
pub struct ShapedMeasure {
    data: Arc<Vec<u8>>,
    face_index: u32,
}

impl Debug for ShapedMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapedMeasure")
            .field("bytes", &self.data.len())
            .field("face_index", &self.face_index)
            .finish()
    }
}

impl ShapedMeasure {
    /// Wraps font file bytes, failing if they do not contain a parsable face.
    pub fn from_bytes(data: Vec<u8>, face_index: u32) -> Result<Self, LayoutError> {
        if rustybuzz::Face::from_slice(&data, face_index).is_none() {
            return Err(LayoutError::Font(format!(
                "no usable font face at index {} in {} bytes",
                face_index,
                data.len()
            )));
        }
        log::debug!("Loaded label font ({} bytes, face {})", data.len(), face_index);
        Ok(Self {
            data: Arc::new(data),
            face_index,
        })
    }
}

impl TextMeasure for ShapedMeasure {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        static FEATURES: OnceLock<Vec<Feature>> = OnceLock::new();
        let features = FEATURES.get_or_init(|| vec![Feature::new(Tag::from_bytes(b"kern"), 1, ..)]);

        // Validated in `from_bytes`
        let Some(face) = rustybuzz::Face::from_slice(&self.data, self.face_index) else {
            return 0.0;
        };

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(&face, features, buffer);
        let scale = font.size / face.units_per_em() as f32;
        glyph_buffer
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance as f32 * scale)
            .sum()
    }
}

//! Geometry APIs
//!
//! Offset/client box sizes and the viewport, as reported by layout.

/// Element geometry state
///
/// `offset_*` is the border box; `client_*` is padding box minus any
/// scrollbar. A detached element reports zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementGeometry {
    pub offset_width: f64,
    pub offset_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ElementGeometry {
    /// Geometry with the given widths and zero heights
    pub fn from_widths(offset_width: f64, client_width: f64) -> Self {
        Self {
            offset_width,
            client_width,
            ..Self::default()
        }
    }

    /// Space taken by a vertical scrollbar (and borders) in this box
    pub fn inset_width(&self) -> f64 {
        (self.offset_width - self.client_width).abs()
    }
}

/// Window viewport (`innerWidth`/`innerHeight`, scrollbar included)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            inner_width: 800.0,
            inner_height: 600.0,
        }
    }
}

//! Column configuration and effective column resolution.

use serde::Deserialize;

/// Width used when a column declares no minimum width.
pub const DEFAULT_MIN_WIDTH: f32 = 100.0;

/// Horizontal alignment of a column's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Where a column's cell content comes from.
///
/// A column either reads a field out of the row, or hands the whole row to a
/// renderer. `R` is the renderer type chosen by the UI layer.
pub enum CellSource<R> {
    Key(String),
    Render(R),
}

impl<R> CellSource<R> {
    /// The lookup key, if this column reads a field.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Render(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

impl<R> std::fmt::Debug for CellSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Presentation rules for one column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnSpec {
    pub header: String,
    pub min_width: Option<f32>,
    pub text_align: Option<TextAlign>,
    pub hide_on_mobile: bool,
    /// Forces the header cell to be centered regardless of `text_align`.
    pub header_centered: bool,
    /// Forces every body cell to be centered regardless of `text_align`.
    pub body_centered: bool,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    pub fn width(&self) -> f32 {
        self.min_width.unwrap_or(DEFAULT_MIN_WIDTH)
    }

    pub fn align(&self) -> TextAlign {
        self.text_align.unwrap_or_default()
    }

    pub fn header_align(&self) -> TextAlign {
        if self.header_centered {
            TextAlign::Center
        } else {
            self.align()
        }
    }

    pub fn body_align(&self) -> TextAlign {
        if self.body_centered {
            TextAlign::Center
        } else {
            self.align()
        }
    }

    pub fn is_visible(&self, is_mobile: bool) -> bool {
        !(is_mobile && self.hide_on_mobile)
    }
}

/// A column that survives the viewport filter, with its defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumn {
    /// Position of the column in the caller's column list.
    pub source_index: usize,
    pub header: String,
    pub width: f32,
    pub header_align: TextAlign,
    pub body_align: TextAlign,
}

/// Computes the effective column set for the current viewport mode.
///
/// Header and body both render from this list, so a hidden column disappears
/// from both at once.
pub fn resolve_columns<'a>(
    specs: impl IntoIterator<Item = &'a ColumnSpec>,
    is_mobile: bool,
) -> Vec<ResolvedColumn> {
    specs
        .into_iter()
        .enumerate()
        .filter(|(_, spec)| spec.is_visible(is_mobile))
        .map(|(source_index, spec)| ResolvedColumn {
            source_index,
            header: spec.header.clone(),
            width: spec.width(),
            header_align: spec.header_align(),
            body_align: spec.body_align(),
        })
        .collect()
}

/// Number of columns a full-width row (summary, placeholders) spans.
pub fn span(effective_columns: usize, show_checkboxes: bool) -> usize {
    effective_columns + usize::from(show_checkboxes)
}

use serde::{Deserialize, Serialize};

use crate::raw::grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowClass {
    Compact,
    Medium,
    Expanded,
}

/// Column layout for one window class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub margin: f32,
    pub column_gap: f32,
    pub columns: u8,
}

token_group! {
    pub struct GridSemanticTokens / GridSemanticOverrides {
        compact_max_width: f32,
        medium_max_width: f32,
        compact_margin: f32,
        medium_margin: f32,
        expanded_margin: f32,
        compact_column_gap: f32,
        medium_column_gap: f32,
        expanded_column_gap: f32,
        compact_columns: u8,
        medium_columns: u8,
        expanded_columns: u8,
    }
}

impl Default for GridSemanticTokens {
    fn default() -> Self {
        Self {
            compact_max_width: grid::COMPACT_MAX_WIDTH,
            medium_max_width: grid::MEDIUM_MAX_WIDTH,
            compact_margin: grid::COMPACT_MARGIN,
            medium_margin: grid::MEDIUM_MARGIN,
            expanded_margin: grid::EXPANDED_MARGIN,
            compact_column_gap: grid::COMPACT_COLUMN_GAP,
            medium_column_gap: grid::MEDIUM_COLUMN_GAP,
            expanded_column_gap: grid::EXPANDED_COLUMN_GAP,
            compact_columns: grid::COMPACT_COLUMNS,
            medium_columns: grid::MEDIUM_COLUMNS,
            expanded_columns: grid::EXPANDED_COLUMNS,
        }
    }
}

impl GridSemanticTokens {
    /// Breakpoints are exclusive upper bounds.
    pub fn window_class(&self, width: f32) -> WindowClass {
        if width < self.compact_max_width {
            WindowClass::Compact
        } else if width < self.medium_max_width {
            WindowClass::Medium
        } else {
            WindowClass::Expanded
        }
    }

    pub fn layout(&self, class: WindowClass) -> GridLayout {
        match class {
            WindowClass::Compact => GridLayout {
                margin: self.compact_margin,
                column_gap: self.compact_column_gap,
                columns: self.compact_columns,
            },
            WindowClass::Medium => GridLayout {
                margin: self.medium_margin,
                column_gap: self.medium_column_gap,
                columns: self.medium_columns,
            },
            WindowClass::Expanded => GridLayout {
                margin: self.expanded_margin,
                column_gap: self.expanded_column_gap,
                columns: self.expanded_columns,
            },
        }
    }

    pub fn layout_for_width(&self, width: f32) -> GridLayout {
        self.layout(self.window_class(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_class_uses_exclusive_breakpoints() {
        let tokens = GridSemanticTokens::default();
        assert_eq!(tokens.window_class(0.0), WindowClass::Compact);
        assert_eq!(tokens.window_class(599.9), WindowClass::Compact);
        assert_eq!(tokens.window_class(600.0), WindowClass::Medium);
        assert_eq!(tokens.window_class(839.0), WindowClass::Medium);
        assert_eq!(tokens.window_class(840.0), WindowClass::Expanded);
    }

    #[test]
    fn layout_matches_window_class() {
        let tokens = GridSemanticTokens::default();
        assert_eq!(
            tokens.layout_for_width(360.0),
            GridLayout {
                margin: 16.0,
                column_gap: 8.0,
                columns: 4
            }
        );
        assert_eq!(tokens.layout_for_width(1280.0).columns, 12);
    }
}

use egui::{Color32, Vec2, vec2};

use crate::palette;

/// Semantic colors of the app.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    pub title: Color32,
    pub check_viewer: Color32,
    pub menu_background: Color32,

    pub trigger_fill: Color32,
    pub trigger_text: Color32,

    pub item_fill: Color32,
    pub item_text: Color32,

    /// Dims everything below the editor overlay.
    pub backdrop: Color32,
    pub overlay_fill: Color32,
    pub field_fill: Color32,
    pub field_text: Color32,
    pub confirm_fill: Color32,
    pub confirm_text: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: palette::FOREST_GREEN,
            check_viewer: palette::SILVER,
            menu_background: palette::BLACK,

            trigger_fill: palette::FOREST_GREEN,
            trigger_text: palette::BLACK,

            item_fill: palette::BLUE,
            item_text: palette::BLACK,

            backdrop: Color32::from_black_alpha(100),
            overlay_fill: palette::GRAY,
            field_fill: palette::BLACK,
            field_text: palette::WHITE,
            confirm_fill: palette::BLACK,
            confirm_text: palette::GRAY,
        }
    }
}

/// Everything that is fixed for the lifetime of the app: sizes, offsets, colors and texts.
///
/// Created once and then only ever passed around by reference.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Window title, also painted at the top of the check viewer.
    pub title: String,

    /// Initial inner size of the native window.
    pub window_size: Vec2,

    /// Uniform margin around every button and between the panes.
    pub margin: f32,

    /// The footprint of every button, not counting [`Self::margin`].
    pub button_size: Vec2,

    /// Number of menu items stacked in one column before a new column is started.
    pub column_len: usize,

    /// Height of the title row in the check viewer pane.
    pub title_height: f32,

    /// How far the menu pane is pushed down from the top.
    pub menu_top_offset: f32,

    /// How far the editor overlay is inset from the window edges.
    pub overlay_inset: f32,

    /// Size of the text field inside the editor overlay.
    pub field_size: Vec2,

    /// Font size of the text field. Kept below the field height so the text isn't clipped.
    pub field_text_size: f32,

    /// Maximum number of characters in a menu item label.
    pub max_label_chars: usize,

    pub field_hint: String,
    pub trigger_label: String,
    pub confirm_label: String,

    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "simplePos".to_owned(),
            window_size: vec2(1024.0, 768.0),
            margin: 10.0,
            button_size: vec2(100.0, 50.0),
            column_len: 5,
            title_height: 24.0,
            menu_top_offset: 34.0,
            overlay_inset: 200.0,
            field_size: vec2(255.0, 30.0),
            field_text_size: 22.0,
            max_label_chars: 18,
            field_hint: "Menu item title...".to_owned(),
            trigger_label: "Add menu item".to_owned(),
            confirm_label: "Confirm".to_owned(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    #[inline]
    pub fn with_window_size(mut self, window_size: impl Into<Vec2>) -> Self {
        self.window_size = window_size.into();
        self
    }

    #[inline]
    pub fn with_column_len(mut self, column_len: usize) -> Self {
        self.column_len = column_len;
        self
    }

    #[inline]
    pub fn with_max_label_chars(mut self, max_label_chars: usize) -> Self {
        self.max_label_chars = max_label_chars;
        self
    }

    #[inline]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// A button plus its margin on all sides.
    pub fn button_cell(&self) -> Vec2 {
        self.button_size + Vec2::splat(2.0 * self.margin)
    }
}

//! The fixed set of named colors used by the app.
//!
//! Only a handful are used by the default [`crate::Theme`], the rest are here so a
//! [`crate::Theme`] can be re-colored without inventing new constants.

use egui::Color32;

pub const RED: Color32 = Color32::from_rgb(255, 0, 0);
pub const GREEN: Color32 = Color32::from_rgb(0, 255, 0);
pub const BLUE: Color32 = Color32::from_rgb(0, 0, 255);
pub const YELLOW: Color32 = Color32::from_rgb(255, 255, 0);
pub const CYAN: Color32 = Color32::from_rgb(0, 255, 255);
pub const MAGENTA: Color32 = Color32::from_rgb(255, 0, 255);
pub const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);
pub const PURPLE: Color32 = Color32::from_rgb(128, 0, 128);
pub const BROWN: Color32 = Color32::from_rgb(165, 42, 42);
pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const GRAY: Color32 = Color32::from_rgb(128, 128, 128);
pub const SILVER: Color32 = Color32::from_rgb(192, 192, 192);
pub const PINK: Color32 = Color32::from_rgb(255, 192, 203);
pub const LIGHT_BLUE: Color32 = Color32::from_rgb(173, 216, 230);
pub const FOREST_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Every named color, with its name. Handy for pickers and debug views.
pub const ALL: [(&str, Color32); 16] = [
    ("Red", RED),
    ("Green", GREEN),
    ("Blue", BLUE),
    ("Yellow", YELLOW),
    ("Cyan", CYAN),
    ("Magenta", MAGENTA),
    ("Orange", ORANGE),
    ("Purple", PURPLE),
    ("Brown", BROWN),
    ("Black", BLACK),
    ("White", WHITE),
    ("Gray", GRAY),
    ("Silver", SILVER),
    ("Pink", PINK),
    ("LightBlue", LIGHT_BLUE),
    ("ForestGreen", FOREST_GREEN),
];

/// Look up a palette color by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<Color32> {
    ALL.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, color)| color)
}

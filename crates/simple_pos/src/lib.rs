//! simplePos: a check viewer next to a menu of buttons.
//!
//! Menu items are added through a floating editor: click "Add menu item", type a title,
//! confirm, and the item shows up in the menu grid. Clicking a menu item logs its label.
//!
//! The app is split into pure parts that know nothing about windows:
//! * [`MenuItemStore`]: the menu items, in insertion order.
//! * [`Editor`]: the open/closed state machine of the floating editor, and its draft.
//! * [`FrameLayout`]: where every pane and button goes, for a given window size.
//!
//! …and [`SimplePos`], which paints a [`FrameLayout`] with egui every frame and folds the
//! resulting clicks ([`Activations`]) back into the store and the editor.
//!
//! ## Feature flags
//! * `glow` (default) / `wgpu`: the eframe renderer to use.
//! * `serde`: derive `serde` traits for [`Config`], [`Theme`] and the store records.

#![forbid(unsafe_code)]

mod activation;
mod app;
mod config;
pub mod editor;
pub mod layout;
pub mod palette;
pub mod store;

pub use activation::{Activation, Activations};
pub use app::{SimplePos, Transition, paint_box};
pub use config::{Config, Theme};
pub use editor::{ConfirmError, Editor, EditorState};
pub use layout::{Control, FrameLayout};
pub use store::{ItemId, MenuItemRecord, MenuItemStore};

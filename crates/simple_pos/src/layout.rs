//! Where everything goes, for one frame.
//!
//! [`FrameLayout::compose`] is a pure function of the config, the window rect, the editor
//! and the store. It is recomputed from scratch every frame; [`crate::SimplePos`]
//! only ever places widgets at rects it got from here.

use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::{Config, Editor, MenuItemStore, store::ItemId};

/// Something that can be clicked or typed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// Opens the editor overlay.
    Trigger,

    /// The text field of the editor overlay.
    TextField,

    /// Commits the draft of the editor overlay.
    Confirm,

    /// The button of the menu item at `index`.
    Item { index: usize, id: ItemId },
}

/// An interactive region and its hit-test bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub control: Control,
    pub rect: Rect,
}

/// The button of one menu item, and its place in the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemRegion {
    pub index: usize,
    pub id: ItemId,
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
}

/// The editor overlay, present only while the editor is open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Dimmed area below the overlay. Swallows all clicks that miss the overlay.
    pub backdrop: Rect,

    /// The overlay panel itself.
    pub rect: Rect,

    pub field: Rect,
    pub confirm: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameLayout {
    pub screen: Rect,

    pub title: Rect,
    pub check_viewer: Rect,

    /// The menu pane, including its background.
    pub menu: Rect,
    pub items: Vec<ItemRegion>,
    pub trigger: Rect,

    pub overlay: Option<OverlayLayout>,
}

impl FrameLayout {
    pub fn compose(
        config: &Config,
        screen: Rect,
        editor: &Editor,
        store: &MenuItemStore,
    ) -> Self {
        let margin = config.margin;
        let inner = screen.shrink(margin);

        // Left pane gets one share of the width, the menu pane two.
        let pane_width = (inner.width() - margin).max(0.0);
        let left = Rect::from_min_size(inner.min, vec2(pane_width / 3.0, inner.height()));

        let title = Rect::from_min_size(
            left.min,
            vec2(left.width(), config.title_height.min(left.height())),
        );
        let check_viewer = Rect::from_min_max(
            pos2(left.min.x, (title.max.y + margin).min(left.max.y)),
            left.max,
        );

        let menu = Rect::from_min_max(
            pos2(
                left.max.x + margin,
                (inner.min.y + config.menu_top_offset).min(inner.max.y),
            ),
            inner.max,
        );

        let items = item_regions(config, menu.min, store);

        let trigger = Rect::from_min_size(
            pos2(
                menu.max.x - margin - config.button_size.x,
                menu.min.y + margin,
            ),
            config.button_size,
        );

        let overlay = editor.is_open().then(|| {
            let rect = inner.shrink(config.overlay_inset);

            let field_area = Rect::from_min_max(rect.min + vec2(0.0, margin), rect.max);
            let field = Rect::from_center_size(field_area.center(), config.field_size);

            let confirm = Rect::from_min_size(
                rect.max - Vec2::splat(margin) - config.button_size,
                config.button_size,
            );

            OverlayLayout {
                backdrop: screen,
                rect,
                field,
                confirm,
            }
        });

        Self {
            screen,
            title,
            check_viewer,
            menu,
            items,
            trigger,
            overlay,
        }
    }

    /// Number of grid columns in use.
    pub fn column_count(&self) -> usize {
        self.items.last().map_or(0, |item| item.column + 1)
    }

    /// All interactive regions, in paint order (bottom first).
    pub fn controls(&self) -> Vec<Region> {
        let mut regions: Vec<Region> = self
            .items
            .iter()
            .map(|item| Region {
                control: Control::Item {
                    index: item.index,
                    id: item.id,
                },
                rect: item.rect,
            })
            .collect();

        regions.push(Region {
            control: Control::Trigger,
            rect: self.trigger,
        });

        if let Some(overlay) = &self.overlay {
            regions.push(Region {
                control: Control::TextField,
                rect: overlay.field,
            });
            regions.push(Region {
                control: Control::Confirm,
                rect: overlay.confirm,
            });
        }

        regions
    }

    /// The topmost control under `pos`.
    ///
    /// While the overlay is open, only its own controls can be hit.
    pub fn hit_test(&self, pos: Pos2) -> Option<Control> {
        let controls = self.controls();
        let mut hits = controls
            .iter()
            .rev()
            .filter(|region| region.rect.contains(pos))
            .map(|region| region.control);

        if self.overlay.is_some() {
            hits.find(|control| matches!(control, Control::TextField | Control::Confirm))
        } else {
            hits.next()
        }
    }
}

fn item_regions(config: &Config, origin: Pos2, store: &MenuItemStore) -> Vec<ItemRegion> {
    let column_len = config.column_len.max(1);
    let column_stride = config.button_size.x + config.margin;
    let row_stride = config.button_cell().y;
    let inset = Vec2::splat(config.margin);

    let mut regions = Vec::with_capacity(store.len());
    for (column, group) in store.columns(column_len).enumerate() {
        for (row, item) in group.iter().enumerate() {
            let cell_min = origin + vec2(column_stride * column as f32, row_stride * row as f32);
            regions.push(ItemRegion {
                index: column * column_len + row,
                id: item.id,
                column,
                row,
                rect: Rect::from_min_size(cell_min + inset, config.button_size),
            });
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 768.0))
    }

    fn store_with(n: usize) -> MenuItemStore {
        let mut store = MenuItemStore::new();
        for i in 0..n {
            store.append(format!("item {i}"));
        }
        store
    }

    fn open_editor() -> Editor {
        let mut editor = Editor::default();
        editor.open();
        editor
    }

    #[test]
    fn panes_split_one_to_two() {
        let config = Config::default();
        let layout =
            FrameLayout::compose(&config, screen(), &Editor::default(), &MenuItemStore::new());

        // 1024 - 2 * 10 margin - 10 gap = 994, split 1:2.
        assert!((layout.check_viewer.width() - 994.0 / 3.0).abs() < 1e-3);
        assert!((layout.menu.width() - 994.0 * 2.0 / 3.0).abs() < 1e-3);
        assert_eq!(layout.title.min, pos2(10.0, 10.0));
        assert_eq!(layout.check_viewer.min.y, 10.0 + 24.0 + 10.0);
        assert_eq!(layout.menu.min.y, 10.0 + 34.0);
        assert_eq!(layout.menu.max, pos2(1014.0, 758.0));
    }

    #[test]
    fn empty_store_has_no_item_regions() {
        let config = Config::default();
        let layout =
            FrameLayout::compose(&config, screen(), &Editor::default(), &MenuItemStore::new());

        assert!(layout.items.is_empty());
        assert_eq!(layout.column_count(), 0);
        assert_eq!(layout.controls().len(), 1, "only the trigger");
    }

    #[test]
    fn items_fill_columns_of_five() {
        let config = Config::default();
        let store = store_with(12);
        let layout = FrameLayout::compose(&config, screen(), &Editor::default(), &store);

        assert_eq!(layout.column_count(), 3);
        let mut sizes = vec![0; layout.column_count()];
        for item in &layout.items {
            sizes[item.column] += 1;
        }
        assert_eq!(sizes, [5, 5, 2]);

        let ids: Vec<ItemId> = layout.items.iter().map(|item| item.id).collect();
        let expected: Vec<ItemId> = store.iter().map(|(_, item)| item.id).collect();
        assert_eq!(ids, expected);
        for (index, item) in layout.items.iter().enumerate() {
            assert_eq!(item.index, index);
        }
    }

    fn assert_near(actual: Pos2, expected: Pos2) {
        assert!(
            actual.distance(expected) < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn item_positions_follow_the_grid() {
        let config = Config::default();
        let store = store_with(7);
        let layout = FrameLayout::compose(&config, screen(), &Editor::default(), &store);
        let origin = layout.menu.min;

        let first = layout.items[0].rect;
        assert_near(first.min, origin + vec2(10.0, 10.0));
        assert_eq!(first.size(), vec2(100.0, 50.0));

        // Top to bottom within a column: 50 high plus 10 margin on either side.
        let second = layout.items[1].rect;
        assert_near(second.min, origin + vec2(10.0, 80.0));

        // Next column is one button plus one margin to the right.
        let sixth = layout.items[5];
        assert_eq!((sixth.column, sixth.row), (1, 0));
        assert_near(sixth.rect.min, origin + vec2(120.0, 10.0));
    }

    #[test]
    fn buttons_keep_their_size_in_a_tiny_window() {
        let config = Config::default();
        let store = store_with(3);
        let tiny = Rect::from_min_size(Pos2::ZERO, vec2(120.0, 90.0));
        let layout = FrameLayout::compose(&config, tiny, &open_editor(), &store);

        for region in layout.controls() {
            if !matches!(region.control, Control::TextField) {
                assert_eq!(region.rect.size(), vec2(100.0, 50.0));
            }
        }
    }

    #[test]
    fn trigger_is_pinned_top_right() {
        let config = Config::default();
        let layout =
            FrameLayout::compose(&config, screen(), &Editor::default(), &MenuItemStore::new());

        assert_eq!(layout.trigger.right(), layout.menu.right() - 10.0);
        assert_eq!(layout.trigger.top(), layout.menu.top() + 10.0);
    }

    #[test]
    fn overlay_only_while_open() {
        let config = Config::default();
        let store = MenuItemStore::new();

        let closed = FrameLayout::compose(&config, screen(), &Editor::default(), &store);
        assert!(closed.overlay.is_none());

        let open = FrameLayout::compose(&config, screen(), &open_editor(), &store);
        let overlay = open.overlay.expect("editor is open");
        assert_eq!(overlay.rect, screen().shrink(10.0).shrink(200.0));
        assert_eq!(overlay.backdrop, screen());
        assert_eq!(overlay.field.size(), vec2(255.0, 30.0));
        assert!(overlay.rect.contains_rect(overlay.field));
        assert_eq!(overlay.confirm.max, overlay.rect.max - vec2(10.0, 10.0));
    }

    #[test]
    fn hit_test_respects_the_overlay() {
        let config = Config::default();
        let store = store_with(2);

        let closed = FrameLayout::compose(&config, screen(), &Editor::default(), &store);
        assert_eq!(
            closed.hit_test(closed.trigger.center()),
            Some(Control::Trigger)
        );
        let first = closed.items[0];
        assert_eq!(
            closed.hit_test(first.rect.center()),
            Some(Control::Item {
                index: 0,
                id: first.id
            })
        );
        assert_eq!(closed.hit_test(closed.check_viewer.center()), None);

        let open = FrameLayout::compose(&config, screen(), &open_editor(), &store);
        let overlay = open.overlay.expect("editor is open");
        assert_eq!(open.hit_test(open.trigger.center()), None);
        assert_eq!(open.hit_test(first.rect.center()), None);
        assert_eq!(
            open.hit_test(overlay.confirm.center()),
            Some(Control::Confirm)
        );
        assert_eq!(
            open.hit_test(overlay.field.center()),
            Some(Control::TextField)
        );
    }

    #[test]
    fn composing_is_idempotent() {
        let config = Config::default();
        let store = store_with(8);
        let editor = open_editor();

        let a = FrameLayout::compose(&config, screen(), &editor, &store);
        let b = FrameLayout::compose(&config, screen(), &editor, &store);
        assert_eq!(a, b);
        assert_eq!(a.controls(), b.controls());
    }
}

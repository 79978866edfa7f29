/// Identifies the button of one menu item.
///
/// Used as the salt of the button's [`egui::Id`], so the button keeps its
/// interaction state across frames no matter where it ends up in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ItemId(u64);

impl ItemId {
    /// The [`egui::Id`] of the button for this item.
    pub fn egui_id(self) -> egui::Id {
        egui::Id::new(("menu_item", self.0))
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry in the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MenuItemRecord {
    pub id: ItemId,
    pub label: String,
}

/// The menu items, in the order they were added.
///
/// Items are never removed or edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuItemStore {
    items: Vec<MenuItemRecord>,
    next_id: u64,
}

impl MenuItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the end and return the handle of its button.
    pub fn append(&mut self, label: impl Into<String>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(MenuItemRecord {
            id,
            label: label.into(),
        });
        id
    }

    /// All items with their index, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &MenuItemRecord)> + '_ {
        self.items.iter().enumerate()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.label.as_str())
    }

    /// The items split into grid columns of at most `column_len` items each.
    ///
    /// Columns fill top to bottom, and are placed left to right.
    /// A `column_len` of zero is treated as one.
    pub fn columns(&self, column_len: usize) -> std::slice::Chunks<'_, MenuItemRecord> {
        self.items.chunks(column_len.max(1))
    }

    pub fn get(&self, index: usize) -> Option<&MenuItemRecord> {
        self.items.get(index)
    }

    pub fn find(&self, id: ItemId) -> Option<&MenuItemRecord> {
        self.items.iter().find(|item| item.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

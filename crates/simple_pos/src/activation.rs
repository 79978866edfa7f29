use crate::store::ItemId;

/// A control that reported a click this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The "Add menu item" button.
    Trigger,

    /// The confirm button of the editor overlay.
    Confirm,

    /// The button of one menu item.
    Item(ItemId),
}

/// The clicks collected while building one frame.
///
/// The same control may report more than once per frame;
/// consumers fold the buffer instead of reacting to each entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Activations {
    events: Vec<Activation>,
}

impl Activations {
    #[inline]
    pub fn push(&mut self, activation: Activation) {
        self.events.push(activation);
    }

    /// Push `activation` if `clicked`. Returns `clicked`.
    #[inline]
    pub fn record(&mut self, clicked: bool, activation: Activation) -> bool {
        if clicked {
            self.push(activation);
        }
        clicked
    }

    pub fn contains(&self, activation: Activation) -> bool {
        self.events.contains(&activation)
    }

    /// The activated items, each once, in the order they first fired.
    pub fn items(&self) -> Vec<ItemId> {
        let mut items = Vec::new();
        for event in &self.events {
            if let Activation::Item(id) = *event
                && !items.contains(&id)
            {
                items.push(id);
            }
        }
        items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Activation> for Activations {
    fn from_iter<T: IntoIterator<Item = Activation>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MenuItemStore;

    #[test]
    fn record_only_pushes_clicks() {
        let mut activations = Activations::default();
        assert!(!activations.record(false, Activation::Trigger));
        assert!(activations.is_empty());
        assert!(activations.record(true, Activation::Trigger));
        assert!(activations.contains(Activation::Trigger));
        assert!(!activations.contains(Activation::Confirm));
    }

    #[test]
    fn items_are_deduplicated_in_first_fired_order() {
        let mut store = MenuItemStore::new();
        let a = store.append("a");
        let b = store.append("b");

        let activations: Activations = [
            Activation::Item(b),
            Activation::Trigger,
            Activation::Item(a),
            Activation::Item(b),
        ]
        .into_iter()
        .collect();

        assert_eq!(activations.len(), 4);
        assert_eq!(activations.items(), [b, a]);
    }
}

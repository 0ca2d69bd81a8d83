//! Cart State

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::items::{CartItem, ItemId};

/// Body of a full cart fetch.
///
/// Servers answer either with a list of items or with an object keyed by
/// item id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CartPayload {
    /// `[{"id": 1, ...}, ...]`
    List(Vec<CartItem>),

    /// `{"1": {"id": 1, ...}, ...}`
    Keyed(IndexMap<String, CartItem>),
}

impl CartPayload {
    /// Flattens the payload into items in server order.
    pub fn into_items(self) -> Vec<CartItem> {
        match self {
            Self::List(items) => items,
            Self::Keyed(entries) => entries
                .into_iter()
                .map(|(key, item)| {
                    if key != item.id.as_str() {
                        warn!(key = %key, item_id = %item.id, "cart payload key disagrees with item id");
                    }

                    item
                })
                .collect(),
        }
    }
}

impl From<CartPayload> for CartState {
    fn from(payload: CartPayload) -> Self {
        payload.into_items().into_iter().collect()
    }
}

/// The client's cached view of the cart, keyed by item id.
///
/// Every key is the id of its item. Iteration follows display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: IndexMap<ItemId, CartItem>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection.
    ///
    /// Later duplicates win but keep the position of the first occurrence.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = CartItem>) {
        self.items.clear();
        self.extend(items);
    }

    /// Removes a single line, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<CartItem> {
        self.items.shift_remove(id)
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.get(id)
    }

    /// Whether a line with this id is cached.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Items in display order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &CartItem> {
        self.items.values()
    }

    /// Ids in display order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &ItemId> {
        self.items.keys()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<CartItem> for CartState {
    fn extend<T: IntoIterator<Item = CartItem>>(&mut self, iter: T) {
        for item in iter {
            self.items.insert(item.id.clone(), item);
        }
    }
}

impl IntoIterator for CartState {
    type Item = CartItem;
    type IntoIter = indexmap::map::IntoValues<ItemId, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl FromIterator<CartItem> for CartState {
    fn from_iter<T: IntoIterator<Item = CartItem>>(iter: T) -> Self {
        let mut state = Self::new();
        state.extend(iter);
        state
    }
}

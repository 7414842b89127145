//! Store and item fixtures with fixed blueprints.

use blueprint::{BlueprintFactory, Fields, VariantMap};
use serde::Deserialize;

/// Merchandise with every field optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Fields)]
pub struct Item {
    pub name: Option<String>,
    pub price: Option<f32>,
    pub weight: Option<f32>,
}

impl Item {
    /// Item with every field present.
    pub fn new(name: &str, price: f32, weight: f32) -> Self {
        Self {
            name: Some(name.to_owned()),
            price: Some(price),
            weight: Some(weight),
        }
    }
}

/// Store holding a single best seller and a list of items.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Fields)]
pub struct Store {
    pub name: Option<String>,
    pub best_seller: Option<Item>,
    pub items: Option<Vec<Item>>,
}

/// The item every unmodified item factory produces.
pub fn item_blueprint() -> Item {
    Item::new("Blueprint", 5.0, 5.0)
}

/// Factory producing copies of [`item_blueprint`].
pub fn item_factory() -> BlueprintFactory<Item> {
    BlueprintFactory::new(item_blueprint)
}

/// Factory producing named stores without items.
pub fn store_factory() -> BlueprintFactory<Store> {
    BlueprintFactory::new(|| Store {
        name: Some("StoreBlueprint".to_owned()),
        ..Store::default()
    })
}

/// Three items that differ only by name.
pub fn fruit() -> Vec<Item> {
    ["Strawberry", "Apple", "Orange"]
        .into_iter()
        .map(|name| Item::new(name, 1.0, 1.0))
        .collect()
}

/// Three name-only overrides.
pub fn fruit_maps() -> Vec<VariantMap> {
    ["Strawberry", "Apple", "Orange"]
        .into_iter()
        .map(|name| VariantMap::new().set("name", name))
        .collect()
}

//! Shared priced-item fields and the closed `MenuItem` variant.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use burgerstream_core::{DomainError, DomainResult, Entity, MenuItemId, Money, SizeOptionId};

use crate::{Burger, Drink, Side};

/// Fields every menu item carries, after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedItem {
    pub name: String,
    pub description: Option<String>,
    pub base_price: Money,
    pub image_url: Option<String>,
}

/// Submitted priced-item fields (create/update payload).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "basePrice")]
    pub base_price: Option<Money>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl PricedItemInput {
    pub fn new(name: impl Into<String>, base_price: Money) -> Self {
        Self {
            name: Some(name.into()),
            base_price: Some(base_price),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Name present and non-blank, base price present and non-negative.
    pub fn validate(&self) -> DomainResult<PricedItem> {
        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Err(DomainError::validation("Menu item must have a name")),
        };
        let base_price = self
            .base_price
            .ok_or_else(|| DomainError::validation("Menu item must have a base price"))?;
        if base_price.is_negative() {
            return Err(DomainError::validation("Menu item base price cannot be negative"));
        }

        Ok(PricedItem {
            name,
            description: self.description.clone(),
            base_price,
            image_url: self.image_url.clone(),
        })
    }
}

/// Variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    Burger,
    Drink,
    Side,
}

impl MenuItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuItemKind::Burger => "Burger",
            MenuItemKind::Drink => "Drink",
            MenuItemKind::Side => "Side",
        }
    }
}

impl core::fmt::Display for MenuItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry: one of the three concrete variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuItem {
    Burger(Burger),
    Drink(Drink),
    Side(Side),
}

impl MenuItem {
    pub fn kind(&self) -> MenuItemKind {
        match self {
            MenuItem::Burger(_) => MenuItemKind::Burger,
            MenuItem::Drink(_) => MenuItemKind::Drink,
            MenuItem::Side(_) => MenuItemKind::Side,
        }
    }

    pub fn priced(&self) -> &PricedItem {
        match self {
            MenuItem::Burger(b) => b.priced(),
            MenuItem::Drink(d) => d.priced(),
            MenuItem::Side(s) => s.priced(),
        }
    }

    pub fn as_burger(&self) -> Option<&Burger> {
        match self {
            MenuItem::Burger(b) => Some(b),
            _ => None,
        }
    }

    /// Remove a size option from whatever association set this item has.
    ///
    /// Returns whether anything changed; burgers have no sizes.
    pub fn detach_size_option(&mut self, size_id: &SizeOptionId) -> bool {
        match self {
            MenuItem::Burger(_) => false,
            MenuItem::Drink(d) => d.remove_size_option(size_id),
            MenuItem::Side(s) => s.remove_size_option(size_id),
        }
    }
}

impl Entity for MenuItem {
    type Id = MenuItemId;

    fn id(&self) -> &MenuItemId {
        match self {
            MenuItem::Burger(b) => b.id(),
            MenuItem::Drink(d) => d.id(),
            MenuItem::Side(s) => s.id(),
        }
    }
}

impl From<Burger> for MenuItem {
    fn from(value: Burger) -> Self {
        MenuItem::Burger(value)
    }
}

impl From<Drink> for MenuItem {
    fn from(value: Drink) -> Self {
        MenuItem::Drink(value)
    }
}

impl From<Side> for MenuItem {
    fn from(value: Side) -> Self {
        MenuItem::Side(value)
    }
}

/// Menu item variants that carry a many-to-many set of size options.
///
/// Association add/remove are set operations and therefore idempotent.
pub trait SizedMenuItem: Clone + Into<MenuItem> + Entity<Id = MenuItemId> {
    const KIND: MenuItemKind;

    fn from_menu_item(item: &MenuItem) -> Option<&Self>;

    fn size_options(&self) -> &BTreeSet<SizeOptionId>;

    fn size_options_mut(&mut self) -> &mut BTreeSet<SizeOptionId>;

    /// Returns `true` if the association was newly added.
    fn add_size_option(&mut self, size_id: SizeOptionId) -> bool {
        self.size_options_mut().insert(size_id)
    }

    /// Returns `true` if the association existed.
    fn remove_size_option(&mut self, size_id: &SizeOptionId) -> bool {
        self.size_options_mut().remove(size_id)
    }
}

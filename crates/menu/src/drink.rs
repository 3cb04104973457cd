//! Drink variant.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use burgerstream_core::{DomainResult, Entity, MenuItemId, SizeOptionId};

use crate::item::{MenuItem, MenuItemKind, PricedItem, PricedItemInput, SizedMenuItem};

/// Drink menu item with its associated size options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    id: MenuItemId,
    #[serde(flatten)]
    item: PricedItem,
    carbonated: bool,
    lactose_free: bool,
    size_options: BTreeSet<SizeOptionId>,
}

impl Drink {
    pub fn new(id: MenuItemId, item: PricedItem, carbonated: bool, lactose_free: bool) -> Self {
        Self {
            id,
            item,
            carbonated,
            lactose_free,
            size_options: BTreeSet::new(),
        }
    }

    pub fn priced(&self) -> &PricedItem {
        &self.item
    }

    pub fn is_carbonated(&self) -> bool {
        self.carbonated
    }

    pub fn is_lactose_free(&self) -> bool {
        self.lactose_free
    }

    /// Full-field replacement; the id and size associations are kept.
    pub fn overwrite(&mut self, item: PricedItem, carbonated: bool, lactose_free: bool) {
        self.item = item;
        self.carbonated = carbonated;
        self.lactose_free = lactose_free;
    }
}

impl Entity for Drink {
    type Id = MenuItemId;

    fn id(&self) -> &MenuItemId {
        &self.id
    }
}

impl SizedMenuItem for Drink {
    const KIND: MenuItemKind = MenuItemKind::Drink;

    fn from_menu_item(item: &MenuItem) -> Option<&Self> {
        match item {
            MenuItem::Drink(d) => Some(d),
            _ => None,
        }
    }

    fn size_options(&self) -> &BTreeSet<SizeOptionId> {
        &self.size_options
    }

    fn size_options_mut(&mut self) -> &mut BTreeSet<SizeOptionId> {
        &mut self.size_options
    }
}

/// Drink create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkInput {
    #[serde(flatten)]
    pub item: PricedItemInput,
    #[serde(default, alias = "isCarbonated")]
    pub carbonated: bool,
    #[serde(default, alias = "lactoseFree", alias = "isLactoseFree")]
    pub lactose_free: bool,
}

impl DrinkInput {
    pub fn new(item: PricedItemInput) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }

    pub fn carbonated(mut self, carbonated: bool) -> Self {
        self.carbonated = carbonated;
        self
    }

    pub fn lactose_free(mut self, lactose_free: bool) -> Self {
        self.lactose_free = lactose_free;
        self
    }

    pub fn into_drink(self, id: MenuItemId) -> DomainResult<Drink> {
        let item = self.item.validate()?;
        Ok(Drink::new(id, item, self.carbonated, self.lactose_free))
    }
}

/// Drink list filter (missing values are treated as `false`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkFilter {
    #[serde(default)]
    pub carbonated: Option<bool>,
    #[serde(default, alias = "lactoseFree")]
    pub lactose_free: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkQuery {
    CarbonatedAndLactoseFree,
    Carbonated,
    LactoseFree,
    All,
}

impl DrinkFilter {
    pub fn new(carbonated: bool, lactose_free: bool) -> Self {
        Self {
            carbonated: Some(carbonated),
            lactose_free: Some(lactose_free),
        }
    }

    pub fn query(self) -> DrinkQuery {
        match (
            self.carbonated.unwrap_or(false),
            self.lactose_free.unwrap_or(false),
        ) {
            (true, true) => DrinkQuery::CarbonatedAndLactoseFree,
            (true, false) => DrinkQuery::Carbonated,
            (false, true) => DrinkQuery::LactoseFree,
            (false, false) => DrinkQuery::All,
        }
    }
}

impl DrinkQuery {
    pub fn matches(self, drink: &Drink) -> bool {
        match self {
            DrinkQuery::CarbonatedAndLactoseFree => drink.carbonated && drink.lactose_free,
            DrinkQuery::Carbonated => drink.carbonated,
            DrinkQuery::LactoseFree => drink.lactose_free,
            DrinkQuery::All => true,
        }
    }
}

//! Side variant.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use burgerstream_core::{DomainResult, Entity, MenuItemId, SizeOptionId};

use crate::item::{MenuItem, MenuItemKind, PricedItem, PricedItemInput, SizedMenuItem};

/// Side menu item with its associated size options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    id: MenuItemId,
    #[serde(flatten)]
    item: PricedItem,
    shareable: bool,
    size_options: BTreeSet<SizeOptionId>,
}

impl Side {
    pub fn new(id: MenuItemId, item: PricedItem, shareable: bool) -> Self {
        Self {
            id,
            item,
            shareable,
            size_options: BTreeSet::new(),
        }
    }

    pub fn priced(&self) -> &PricedItem {
        &self.item
    }

    pub fn is_shareable(&self) -> bool {
        self.shareable
    }

    /// Full-field replacement; the id and size associations are kept.
    pub fn overwrite(&mut self, item: PricedItem, shareable: bool) {
        self.item = item;
        self.shareable = shareable;
    }
}

impl Entity for Side {
    type Id = MenuItemId;

    fn id(&self) -> &MenuItemId {
        &self.id
    }
}

impl SizedMenuItem for Side {
    const KIND: MenuItemKind = MenuItemKind::Side;

    fn from_menu_item(item: &MenuItem) -> Option<&Self> {
        match item {
            MenuItem::Side(s) => Some(s),
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

/// Side create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideInput {
    #[serde(flatten)]
    pub item: PricedItemInput,
    #[serde(default, alias = "isShareable")]
    pub shareable: bool,
}

impl SideInput {
    pub fn new(item: PricedItemInput) -> Self {
        Self {
            item,
            shareable: false,
        }
    }

    pub fn shareable(mut self, shareable: bool) -> Self {
        self.shareable = shareable;
        self
    }

    pub fn into_side(self, id: MenuItemId) -> DomainResult<Side> {
        let item = self.item.validate()?;
        Ok(Side::new(id, item, self.shareable))
    }
}

/// Side list filter: `shareable=true` narrows, anything else lists all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideFilter {
    #[serde(default)]
    pub shareable: Option<bool>,
}

impl SideFilter {
    pub fn matches(self, side: &Side) -> bool {
        match self.shareable {
            Some(true) => side.shareable,
            _ => true,
        }
    }
}

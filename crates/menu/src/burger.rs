//! Burger variant and its dietary flag rules.
//!
//! Vegan and chicken are mutually exclusive. The transition rules are
//! expressed as a pure function over the flag triple ([`DietaryFlags::apply`])
//! so the side effects are explicit:
//!
//! - any vegan write forces `lactose_free = true`, whatever value is written;
//! - writing `vegan = true` clears `chicken`;
//! - writing `chicken = true` on a vegan burger performs a `vegan = false`
//!   write (which, again, forces `lactose_free = true`).

use serde::{Deserialize, Serialize};

use burgerstream_core::{DomainResult, Entity, MenuItemId, ValueObject};

use crate::item::{PricedItem, PricedItemInput};

/// Dietary flag triple of a burger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietaryFlags {
    pub vegan: bool,
    pub chicken: bool,
    pub lactose_free: bool,
}

impl ValueObject for DietaryFlags {}

/// A single requested flag write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagChange {
    Vegan(bool),
    Chicken(bool),
    LactoseFree(bool),
}

impl DietaryFlags {
    /// Apply one flag write and return the resulting triple.
    pub fn apply(self, change: FlagChange) -> Self {
        match change {
            FlagChange::Vegan(vegan) => {
                let mut next = Self {
                    vegan,
                    lactose_free: true,
                    ..self
                };
                if vegan && next.chicken {
                    next.chicken = false;
                }
                next
            }
            FlagChange::Chicken(chicken) => {
                let next = Self { chicken, ..self };
                if chicken && next.vegan {
                    next.apply(FlagChange::Vegan(false))
                } else {
                    next
                }
            }
            FlagChange::LactoseFree(lactose_free) => Self {
                lactose_free,
                ..self
            },
        }
    }

    /// Replay the triple as writes in the order vegan, chicken, lactose-free
    /// onto an all-false triple. Consistent triples come back unchanged; a
    /// vegan and chicken triple resolves to chicken.
    pub fn normalized(self) -> Self {
        [
            FlagChange::Vegan(self.vegan),
            FlagChange::Chicken(self.chicken),
            FlagChange::LactoseFree(self.lactose_free),
        ]
        .into_iter()
        .fold(Self::default(), Self::apply)
    }

    pub fn is_consistent(self) -> bool {
        !(self.vegan && self.chicken)
    }
}

/// Burger menu item.
///
/// Deserializing goes through [`Burger::new`], so stored flags are
/// normalized on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BurgerRecord")]
pub struct Burger {
    id: MenuItemId,
    #[serde(flatten)]
    item: PricedItem,
    #[serde(flatten)]
    flags: DietaryFlags,
}

impl Burger {
    /// The flags are normalized, so a burger is never both vegan and chicken.
    pub fn new(id: MenuItemId, item: PricedItem, flags: DietaryFlags) -> Self {
        Self {
            id,
            item,
            flags: flags.normalized(),
        }
    }

    pub fn priced(&self) -> &PricedItem {
        &self.item
    }

    pub fn flags(&self) -> DietaryFlags {
        self.flags
    }

    pub fn is_vegan(&self) -> bool {
        self.flags.vegan
    }

    pub fn is_chicken(&self) -> bool {
        self.flags.chicken
    }

    pub fn is_lactose_free(&self) -> bool {
        self.flags.lactose_free
    }

    pub fn set_vegan(&mut self, vegan: bool) {
        self.flags = self.flags.apply(FlagChange::Vegan(vegan));
    }

    pub fn set_chicken(&mut self, chicken: bool) {
        self.flags = self.flags.apply(FlagChange::Chicken(chicken));
    }

    pub fn set_lactose_free(&mut self, lactose_free: bool) {
        self.flags = self.flags.apply(FlagChange::LactoseFree(lactose_free));
    }

    /// Full-field replacement, preserving the id.
    ///
    /// Flags are written in the order vegan, chicken, lactose-free so the
    /// final lactose-free value is the submitted one.
    pub fn overwrite(&mut self, item: PricedItem, flags: DietaryFlags) {
        self.item = item;
        self.set_vegan(flags.vegan);
        self.set_chicken(flags.chicken);
        self.set_lactose_free(flags.lactose_free);
    }
}

#[derive(Deserialize)]
struct BurgerRecord {
    id: MenuItemId,
    #[serde(flatten)]
    item: PricedItem,
    #[serde(flatten)]
    flags: DietaryFlags,
}

impl From<BurgerRecord> for Burger {
    fn from(record: BurgerRecord) -> Self {
        Burger::new(record.id, record.item, record.flags)
    }
}

impl Entity for Burger {
    type Id = MenuItemId;

    fn id(&self) -> &MenuItemId {
        &self.id
    }
}

/// Burger create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurgerInput {
    #[serde(flatten)]
    pub item: PricedItemInput,
    #[serde(default, alias = "isVegan")]
    pub vegan: Option<bool>,
    #[serde(default, alias = "isChicken")]
    pub chicken: Option<bool>,
    #[serde(default, alias = "lactoseFree", alias = "isLactoseFree")]
    pub lactose_free: Option<bool>,
}

impl BurgerInput {
    pub fn new(item: PricedItemInput) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }

    pub fn vegan(mut self, vegan: bool) -> Self {
        self.vegan = Some(vegan);
        self
    }

    pub fn chicken(mut self, chicken: bool) -> Self {
        self.chicken = Some(chicken);
        self
    }

    pub fn lactose_free(mut self, lactose_free: bool) -> Self {
        self.lactose_free = Some(lactose_free);
        self
    }

    /// Flags produced by writing the submitted values, in field order, onto
    /// a default (all false) triple. Absent fields are not written.
    pub fn flags(&self) -> DietaryFlags {
        let changes = [
            self.vegan.map(FlagChange::Vegan),
            self.chicken.map(FlagChange::Chicken),
            self.lactose_free.map(FlagChange::LactoseFree),
        ];
        changes
            .into_iter()
            .flatten()
            .fold(DietaryFlags::default(), DietaryFlags::apply)
    }

    pub fn into_burger(self, id: MenuItemId) -> DomainResult<Burger> {
        let item = self.item.validate()?;
        Ok(Burger::new(id, item, self.flags()))
    }
}

/// Burger list filter (missing values are treated as `false`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurgerFilter {
    #[serde(default)]
    pub vegan: Option<bool>,
    #[serde(default)]
    pub chicken: Option<bool>,
    #[serde(default, alias = "lactoseFree")]
    pub lactose_free: Option<bool>,
}

/// The query a [`BurgerFilter`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurgerQuery {
    /// Contradictory request; answered without touching the store.
    Nothing,
    Vegan,
    ChickenAndLactoseFree,
    Chicken,
    LactoseFree,
    All,
}

impl BurgerFilter {
    pub fn new(vegan: bool, chicken: bool, lactose_free: bool) -> Self {
        Self {
            vegan: Some(vegan),
            chicken: Some(chicken),
            lactose_free: Some(lactose_free),
        }
    }

    /// Priority cascade; the first matching rule wins.
    pub fn query(self) -> BurgerQuery {
        let vegan = self.vegan.unwrap_or(false);
        let chicken = self.chicken.unwrap_or(false);
        let lactose_free = self.lactose_free.unwrap_or(false);

        if vegan && chicken {
            return BurgerQuery::Nothing;
        }
        // lactose_free is ignored on the vegan branch.
        if vegan {
            return BurgerQuery::Vegan;
        }
        if chicken && lactose_free {
            return BurgerQuery::ChickenAndLactoseFree;
        }
        if chicken {
            return BurgerQuery::Chicken;
        }
        if lactose_free {
            return BurgerQuery::LactoseFree;
        }
        BurgerQuery::All
    }
}

impl BurgerQuery {
    pub fn matches(self, burger: &Burger) -> bool {
        match self {
            BurgerQuery::Nothing => false,
            BurgerQuery::Vegan => burger.is_vegan(),
            BurgerQuery::ChickenAndLactoseFree => burger.is_chicken() && burger.is_lactose_free(),
            BurgerQuery::Chicken => burger.is_chicken(),
            BurgerQuery::LactoseFree => burger.is_lactose_free(),
            BurgerQuery::All => true,
        }
    }
}

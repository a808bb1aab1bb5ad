use std::fmt;

use tracing::info;

use super::combatant::Combatant;
use super::error::DomainError;
use super::inventory::{Inventory, Item};

/// Experience needed for one level.
pub const LEVEL_THRESHOLD: u32 = 100;

/// What happened when an item was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    Healed(u32),
    Wounded(u32),
}

/// The player character: a [`Combatant`] plus progression and an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    body: Combatant,
    level: u32,
    experience: u32,
    inventory: Inventory,
}

impl Hero {
    pub fn new(name: impl Into<String>, health: u32, attack: u32, defense: u32) -> Self {
        Self {
            body: Combatant::new(name, health, attack, defense),
            level: 1,
            experience: 0,
            inventory: Inventory::default(),
        }
    }

    pub(crate) fn restore(body: Combatant, level: u32, experience: u32, inventory: Inventory) -> Self {
        Self {
            body,
            level,
            experience,
            inventory,
        }
    }

    pub fn body(&self) -> &Combatant {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Combatant {
        &mut self.body
    }

    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = self.body.heal(amount);
        info!(name = self.name(), healed, "Heals");
        healed
    }

    /// Adds experience; crossing [`LEVEL_THRESHOLD`] levels up once and restores full
    /// health. Returns whether a level was gained.
    pub fn gain_experience(&mut self, exp: u32) -> bool {
        self.experience = self.experience.saturating_add(exp);
        if self.experience < LEVEL_THRESHOLD {
            return false;
        }
        self.level = self.level.saturating_add(1);
        self.experience -= LEVEL_THRESHOLD;
        self.body.level_up();
        info!(name = self.name(), level = self.level, "Leveled up");
        true
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.add(item);
    }

    pub fn drop_item(&mut self, name: &str) -> Result<Item, DomainError> {
        let item = self.inventory.remove(name)?;
        info!(hero = self.name(), item = name, "Dropped");
        Ok(item)
    }

    /// Uses an item on the hero: potions heal, weapons deal their damage to the holder.
    ///
    /// The item is consumed only if using it succeeded.
    pub fn use_item(&mut self, name: &str) -> Result<ItemEffect, DomainError> {
        let item = self
            .inventory
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::ItemNotFound {
                name: name.to_string(),
            })?;
        let effect = match item {
            Item::Potion { heal, .. } => ItemEffect::Healed(self.body.heal(heal)),
            Item::Weapon { damage, .. } => ItemEffect::Wounded(self.body.take_damage(damage)?),
        };
        self.inventory.remove(name)?;
        info!(hero = self.name(), item = name, ?effect, "Used item");
        Ok(effect)
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Level: {}, XP: {}", self.body, self.level, self.experience)
    }
}

use std::fmt;

use super::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Weapon { name: String, damage: u32 },
    Potion { name: String, heal: u32 },
}

impl Item {
    pub fn weapon(name: impl Into<String>, damage: u32) -> Self {
        Item::Weapon { name: name.into(), damage }
    }

    pub fn potion(name: impl Into<String>, heal: u32) -> Self {
        Item::Potion { name: name.into(), heal }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Weapon { name, .. } | Item::Potion { name, .. } => name,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Item::Weapon { .. } => "Weapon",
            Item::Potion { .. } => "Potion",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} ({})", self.name(), self.type_name())
    }
}

/// Ordered bag of items; lookups by name hit the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn remove(&mut self, name: &str) -> Result<Item, DomainError> {
        let index = self.position(name).ok_or_else(|| DomainError::ItemNotFound {
            name: name.to_string(),
        })?;
        Ok(self.items.remove(index))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inventory:")?;
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

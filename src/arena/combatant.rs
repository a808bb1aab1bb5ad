use std::fmt;

use tracing::info;

use super::error::DomainError;

/// Outcome of a single attack that did not defeat the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// Damage actually taken by the target, after resistance.
    Hit { damage: u32 },
    /// Attack did not exceed the target's defense.
    NoEffect,
}

/// Anything that fights: the hero's body, goblins, dragons, skeletons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    max_health: u32,
    health: u32,
    attack: u32,
    defense: u32,
    /// Halves incoming damage (rounded down).
    resistant: bool,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            max_health: health,
            health,
            attack,
            defense,
            resistant: false,
        }
    }

    pub fn goblin() -> Self {
        Self::new("Goblin", 30, 10, 2)
    }

    pub fn dragon() -> Self {
        Self::new("Dragon", 150, 40, 10)
    }

    pub fn skeleton(
        name: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
        resistant: bool,
    ) -> Self {
        Self {
            resistant,
            ..Self::new(name, health, attack, defense)
        }
    }

    pub(crate) fn restore(
        name: String,
        health: u32,
        max_health: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            name,
            max_health,
            health,
            attack,
            defense,
            resistant: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Attacks `target` for `attack - target.defense` damage.
    ///
    /// # Errors
    /// [`DomainError::Defeated`] if the hit brings the target's health to zero.
    pub fn strike(&self, target: &mut Combatant) -> Result<Strike, DomainError> {
        let raw = self.attack.saturating_sub(target.defense);
        if raw == 0 {
            info!(attacker = %self.name, target = %target.name, "Attack has no effect");
            return Ok(Strike::NoEffect);
        }
        let damage = target.take_damage(raw)?;
        info!(attacker = %self.name, target = %target.name, damage, "Attack hit");
        Ok(Strike::Hit { damage })
    }

    /// Applies `amount` damage and returns how much was actually taken.
    pub fn take_damage(&mut self, amount: u32) -> Result<u32, DomainError> {
        let amount = if self.resistant {
            info!(name = %self.name, "Resists some damage");
            amount / 2
        } else {
            amount
        };
        if amount > 0 && amount >= self.health {
            self.health = 0;
            info!(name = %self.name, "Defeated");
            return Err(DomainError::Defeated {
                name: self.name.clone(),
            });
        }
        self.health -= amount;
        Ok(amount)
    }

    /// Heals up to `max_health` and returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    pub(crate) fn level_up(&mut self) {
        self.attack = self.attack.saturating_add(2);
        self.defense = self.defense.saturating_add(1);
        self.max_health = self.max_health.saturating_add(10);
        self.health = self.max_health;
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, HP: {}, Attack: {}, Defense: {}",
            self.name, self.health, self.attack, self.defense
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_attack_minus_defense() {
        let hero = Combatant::new("Lancelot", 120, 25, 15);
        let mut goblin = Combatant::goblin();
        assert_eq!(hero.strike(&mut goblin).unwrap(), Strike::Hit { damage: 23 });
        assert_eq!(goblin.health(), 7);
    }

    #[test]
    fn weak_attack_has_no_effect() {
        let goblin = Combatant::goblin();
        let mut dragon = Combatant::dragon();
        assert_eq!(goblin.strike(&mut dragon).unwrap(), Strike::NoEffect);
        assert_eq!(dragon.health(), 150);
    }

    #[test]
    fn resistant_skeleton_halves_damage() {
        let hero = Combatant::new("Lancelot", 120, 25, 15);
        let mut bony = Combatant::skeleton("Bony", 60, 12, 8, true);
        assert_eq!(hero.strike(&mut bony).unwrap(), Strike::Hit { damage: 8 });
        assert_eq!(bony.health(), 52);
    }

    #[test]
    fn lethal_hit_is_an_error() {
        let dragon = Combatant::dragon();
        let mut goblin = Combatant::goblin();
        let err = dragon.strike(&mut goblin).unwrap_err();
        assert!(matches!(err, DomainError::Defeated { ref name } if name == "Goblin"));
        assert!(goblin.is_defeated());
    }

    #[test]
    fn exact_lethal_damage_defeats() {
        let mut goblin = Combatant::goblin();
        assert!(goblin.take_damage(30).is_err());
        assert_eq!(goblin.health(), 0);
    }

    #[test]
    fn heal_is_capped() {
        let mut goblin = Combatant::goblin();
        goblin.take_damage(10).unwrap();
        assert_eq!(goblin.heal(50), 10);
        assert_eq!(goblin.health(), 30);
    }
}

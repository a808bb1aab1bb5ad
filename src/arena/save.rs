//! Hero save files.
//!
//! ```text
//! Hero   <name> <health> <maxHealth> <attack> <defense> <level> <experience>
//! Weapon <name> <damage>
//! Potion <name> <heal>
//! ```
//!
//! One `Hero` line first, then one line per inventory item. Tokens follow the same
//! escaping rules as the record store format.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::combatant::Combatant;
use super::error::DomainError;
use super::hero::Hero;
use super::inventory::{Inventory, Item};
use crate::codec::{token, Fields, ParseError};

pub fn write_hero<W: Write>(hero: &Hero, mut sink: W) -> io::Result<()> {
    let body = hero.body();
    writeln!(
        sink,
        "Hero {} {} {} {} {} {} {}",
        token::escape(body.name()),
        body.health(),
        body.max_health(),
        body.attack(),
        body.defense(),
        hero.level(),
        hero.experience()
    )?;
    for item in hero.inventory().items() {
        match item {
            Item::Weapon { name, damage } => writeln!(sink, "Weapon {} {}", token::escape(name), damage)?,
            Item::Potion { name, heal } => writeln!(sink, "Potion {} {}", token::escape(name), heal)?,
        }
    }
    sink.flush()
}

pub fn read_hero<R: BufRead>(source: R) -> Result<Hero, DomainError> {
    let mut body = None;
    let mut progress = (1, 0);
    let mut inventory = Inventory::default();

    for (index, line) in source.lines().enumerate() {
        let line = line.map_err(|e| DomainError::Io {
            path: PathBuf::new(),
            source: e,
        })?;
        let line_no = index + 1;
        let mut fields = Fields::new(line_no, &line);
        let Some(tag) = fields.next_raw() else {
            continue;
        };
        match (tag, body.is_some()) {
            ("Hero", false) => {
                let name = fields.text("name")?;
                let health = fields.uint("health")?;
                let max_health = fields.uint("maxHealth")?;
                let attack = fields.uint("attack")?;
                let defense = fields.uint("defense")?;
                progress = (fields.uint("level")?, fields.uint("experience")?);
                fields.finish()?;
                body = Some(Combatant::restore(name, health.min(max_health), max_health, attack, defense));
            }
            ("Weapon", true) => {
                let item = Item::weapon(fields.text("name")?, fields.uint("damage")?);
                fields.finish()?;
                inventory.add(item);
            }
            ("Potion", true) => {
                let item = Item::potion(fields.text("name")?, fields.uint("heal")?);
                fields.finish()?;
                inventory.add(item);
            }
            (other, _) => {
                return Err(ParseError::UnknownTag {
                    line: line_no,
                    tag: other.to_string(),
                }
                .into())
            }
        }
    }

    let body = body.ok_or(ParseError::MissingField {
        line: 1,
        field: "Hero",
    })?;
    Ok(Hero::restore(body, progress.0, progress.1, inventory))
}

pub fn save_hero(hero: &Hero, path: impl AsRef<Path>) -> Result<(), DomainError> {
    let path = path.as_ref();
    let io_err = |source: io::Error| DomainError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    write_hero(hero, BufWriter::new(file)).map_err(io_err)?;
    info!(hero = hero.name(), path = %path.display(), "Game saved");
    Ok(())
}

pub fn load_hero(path: impl AsRef<Path>) -> Result<Hero, DomainError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DomainError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let hero = read_hero(BufReader::new(file))?;
    info!(hero = hero.name(), path = %path.display(), "Game loaded");
    Ok(hero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn veteran() -> Hero {
        let mut hero = Hero::new("Sir Lancelot", 120, 25, 15);
        hero.gain_experience(125);
        hero.body_mut().take_damage(40).unwrap();
        hero.add_item(Item::weapon("Excalibur", 35));
        hero.add_item(Item::potion("Mana Potion", 30));
        hero
    }

    #[test]
    fn writes_hero_then_items() {
        let mut out = Vec::new();
        write_hero(&veteran(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hero Sir\\sLancelot 90 130 27 16 2 25\nWeapon Excalibur 35\nPotion Mana\\sPotion 30\n"
        );
    }

    #[test]
    fn reload_restores_everything() {
        let hero = veteran();
        let mut out = Vec::new();
        write_hero(&hero, &mut out).unwrap();
        assert_eq!(read_hero(out.as_slice()).unwrap(), hero);
    }

    #[test]
    fn rejects_items_before_hero_and_empty_files() {
        assert!(matches!(
            read_hero("Weapon Excalibur 35\n".as_bytes()),
            Err(DomainError::Parse(ParseError::UnknownTag { line: 1, .. }))
        ));
        assert!(matches!(
            read_hero("".as_bytes()),
            Err(DomainError::Parse(ParseError::MissingField { field: "Hero", .. }))
        ));
        assert!(matches!(
            read_hero("Hero Bob 10 10 1 1 1 -5\n".as_bytes()),
            Err(DomainError::Parse(ParseError::InvalidInteger { field: "experience", .. }))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_hero("/nonexistent/dir/hero_save.txt").unwrap_err();
        assert!(err.to_string().contains("hero_save.txt"));
    }
}

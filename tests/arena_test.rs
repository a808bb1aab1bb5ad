use access_registry::arena::{load_hero, read_hero, save_hero, Combatant, DomainError, Hero, Item, Strike};

/// Battle, level up, save and load: the loaded hero matches the saved one.
#[test]
fn test_hero_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hero_save.txt");

    let mut hero = Hero::new("Sir Lancelot", 120, 25, 15);
    hero.add_item(Item::weapon("Excalibur", 35));
    hero.add_item(Item::potion("Health Elixir", 50));

    let mut bony = Combatant::skeleton("Bony", 60, 12, 8, true);
    assert_eq!(hero.body().strike(&mut bony).unwrap(), Strike::Hit { damage: 8 });
    assert_eq!(bony.strike(hero.body_mut()).unwrap(), Strike::NoEffect);

    hero.gain_experience(75);
    assert!(hero.gain_experience(50));

    let mut dragon = Combatant::dragon();
    assert_eq!(dragon.strike(hero.body_mut()).unwrap(), Strike::Hit { damage: 24 });

    save_hero(&hero, &path).unwrap();
    let loaded = load_hero(&path).unwrap();
    assert_eq!(loaded, hero);
    assert_eq!(loaded.body().health(), 106);
    assert_eq!(loaded.level(), 2);
    assert_eq!(loaded.inventory().items().len(), 2);
}

#[test]
fn test_missing_save_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_hero(dir.path().join("none.txt")),
        Err(DomainError::Io { .. })
    ));
}

#[test]
fn test_dragon_defeats_goblin() {
    let dragon = Combatant::dragon();
    let mut goblin = Combatant::goblin();
    let err = dragon.strike(&mut goblin).unwrap_err();
    assert_eq!(err.to_string(), "Goblin has been defeated!");
}

/// Stats at the top of the range saturate instead of overflowing on level-up.
#[test]
fn test_level_up_at_stat_ceiling() {
    let mut hero = read_hero(format!("Hero X 10 10 {} 1 1 0\n", u32::MAX).as_bytes()).unwrap();
    assert!(hero.gain_experience(100));
    assert_eq!(hero.body().attack(), u32::MAX);
    assert_eq!(hero.body().max_health(), 20);

    let mut veteran =
        read_hero(format!("Hero Y 10 {max} 1 {max} {max} 99\n", max = u32::MAX).as_bytes()).unwrap();
    assert!(veteran.gain_experience(u32::MAX));
    assert_eq!(veteran.level(), u32::MAX);
    assert_eq!(veteran.body().defense(), u32::MAX);
    assert_eq!(veteran.body().max_health(), u32::MAX);
}

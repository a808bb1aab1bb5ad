//! Battle walkthrough: a hero fights two skeletons and a dragon, manages an inventory,
//! levels up, and is saved and reloaded.

use std::error::Error;
use std::process::ExitCode;

use access_registry::arena::{load_hero, save_hero, Combatant, DomainError, Hero, Item, Strike};
use access_registry::lifecycle::setup_tracing;
use tracing::{error, info, info_span};

const SAVE_FILE: &str = "hero_save.txt";

fn main() -> ExitCode {
    setup_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("Fatal Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let _session = info_span!("battle").entered();
    info!("Game session started");

    let mut hero = Hero::new("Sir Lancelot", 120, 25, 15);
    let mut bony = Combatant::skeleton("Bony", 60, 12, 8, true);
    let mut rusty = Combatant::skeleton("Rusty", 55, 10, 7, true);
    let mut dragon = Combatant::dragon();
    info!(hero = hero.name(), "Player created");

    hero.add_item(Item::weapon("Excalibur", 35));
    hero.add_item(Item::weapon("Steel Dagger", 15));
    hero.add_item(Item::potion("Health Elixir", 50));
    hero.add_item(Item::potion("Mana Potion", 30));

    println!("\n=== Initial Hero State ===");
    println!("{}", hero);
    print!("{}", hero.inventory());

    println!("\n=== Battle with {} ===", bony.name());
    skirmish(&mut hero, &mut bony);

    println!("\n=== Using Health Potion ===");
    hero.use_item("Health Elixir")?;
    print!("{}", hero.inventory());

    println!("\n=== Battle with {} ===", rusty.name());
    skirmish(&mut hero, &mut rusty);

    println!("\n=== Gaining Experience ===");
    hero.gain_experience(75);
    if hero.gain_experience(50) {
        println!("{} leveled up to level {}!", hero.name(), hero.level());
    }
    println!("{}", hero);

    println!("\n=== Epic Battle with {} ===", dragon.name());
    for _ in 0..3 {
        exchange(&mut hero, &mut dragon);
    }

    println!("\n=== Saving Game ===");
    save_hero(&hero, SAVE_FILE)?;

    println!("\n=== Loading Game ===");
    let mut loaded = load_hero(SAVE_FILE)?;
    println!("{}", loaded);
    print!("{}", loaded.inventory());

    println!("\n=== Exception Handling Demo ===");
    if let Err(e) = loaded.use_item("Nonexistent Item") {
        println!("Error: {}", e);
    }

    println!("\n=== New Character Demo ===");
    let mut mage = Hero::new("Gandalf", 80, 15, 10);
    mage.add_item(Item::potion("Mega Potion", 100));
    mage.add_item(Item::weapon("Magic Staff", 20));
    println!("{}", mage);
    print!("{}", mage.inventory());

    info!("Game session ended");
    Ok(())
}

/// Hero attacks, the enemy answers, and the hero attacks once more.
fn skirmish(hero: &mut Hero, enemy: &mut Combatant) {
    exchange(hero, enemy);
    if hero.body().is_defeated() || enemy.is_defeated() {
        return;
    }
    let outcome = hero.body().strike(enemy);
    report(hero.name(), enemy.name(), outcome);
}

/// Hero attacks, then the enemy answers if still standing. Defeat ends the exchange
/// but not the program.
fn exchange(hero: &mut Hero, enemy: &mut Combatant) {
    if hero.body().is_defeated() || enemy.is_defeated() {
        return;
    }
    let outcome = hero.body().strike(enemy);
    report(hero.name(), enemy.name(), outcome);
    if enemy.is_defeated() {
        return;
    }
    let outcome = enemy.strike(hero.body_mut());
    report(enemy.name(), hero.name(), outcome);
}

fn report(attacker: &str, target: &str, outcome: Result<Strike, DomainError>) {
    match outcome {
        Ok(Strike::Hit { damage }) => {
            println!("{} attacks {} for {} damage!", attacker, target, damage)
        }
        Ok(Strike::NoEffect) => println!("{} attacks {}, but it has no effect!", attacker, target),
        Err(e) => println!("{}", e),
    }
}

//! Demonstration of seeding a store from JSON data

use seedbed::{create_seed_store, JsonSeed, SeedError, SeedStore};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
struct Seed {
    id: u32,
    name: String,
}

fn main() -> Result<(), SeedError> {
    println!("=== JsonSeed Example ===\n");

    // Seed a typed store from JSON text
    println!("1. Loading seed data from JSON text");
    let text = r#"[
        {"id": 1, "name": "Tomato"},
        {"id": 2, "name": "Basil"}
    ]"#;
    let store: SeedStore<Vec<Seed>> = create_seed_store(JsonSeed::new(text))?;

    println!("\n2. Loaded records:");
    store.with(|seeds| {
        for seed in seeds {
            println!("   #{} {}", seed.id, seed.name);
        }
    });

    // Malformed seed data surfaces as a SeedError
    println!("\n3. Malformed seed data is an error:");
    let bad: Result<SeedStore<Vec<Seed>>, _> = create_seed_store(JsonSeed::new("[{"));
    match bad {
        Err(err) => println!("   {}", err),
        Ok(_) => unreachable!(),
    }

    println!("\n✓ Example complete!");
    Ok(())
}

//! Demonstration of SeedStore for exposing pre-seeded state

use seedbed::SeedStore;

#[derive(Clone, Debug)]
struct Seed {
    id: u32,
    name: String,
}

fn main() {
    println!("=== SeedStore Example: Seed Catalog ===\n");

    // Create a store with pre-populated data
    println!("1. Creating store");
    let store = SeedStore::new(vec![
        Seed {
            id: 1,
            name: "Tomato".to_string(),
        },
        Seed {
            id: 2,
            name: "Basil".to_string(),
        },
        Seed {
            id: 3,
            name: "Sunflower".to_string(),
        },
    ]);

    // Read without cloning
    println!("\n2. Catalog contents:");
    store.with(|seeds| {
        for seed in seeds {
            println!("   #{} {}", seed.id, seed.name);
        }
    });

    // Hand a clone to another consumer; both read the same payload
    println!("\n3. Sharing the store");
    let renderer = store.clone();
    let count = renderer.with(|seeds| seeds.len());
    println!("   Renderer sees {} seeds", count);

    // get() returns an owned copy for consumers that need one
    println!("\n4. Taking an owned copy");
    let owned = store.get();
    println!("   Copied {} records", owned.len());

    println!("\n✓ Example complete!");
}

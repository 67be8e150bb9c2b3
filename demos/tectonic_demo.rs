//! Demonstration of tectonic plate generation

use icosa_plates::*;

fn main() -> Result<()> {
    env_logger::init();

    let config = WorldConfigBuilder::new()
        .subdivision(20)?
        .plate_count(200)?
        .submergence(0.5)?
        .seed(239)
        .build()?;

    println!("Generating world...");
    println!("  Subdivision: {}", config.subdivision);
    println!("  Cells: {}", config.cell_count());
    println!("  Plates: {}", config.plate_count);
    println!("  Seed: {}", config.seed);

    let (world, plates) = WorldMap::generate_from_config(&config)?;

    let oceanic = plates.iter().filter(|plate| plate.kind == PlateKind::Oceanic).count();
    println!("\nPlates: {} oceanic, {} continental", oceanic, plates.len() - oceanic);
    println!(
        "Oceanic surface: {:.1}% (target {:.1}%)",
        world.oceanic_fraction() * 100.0,
        config.submergence * 100.0
    );

    let mut by_size = plates.clone();
    by_size.sort_by_key(|plate| std::cmp::Reverse(plate.cell_count));
    println!("\nLargest plates:");
    for plate in by_size.iter().take(5) {
        println!(
            "  #{:<3} {:?}: {} cells, seeded at {:?}",
            plate.id, plate.kind, plate.cell_count, plate.seed_cell
        );
    }

    // Same config, same plates
    let (again, _) = WorldMap::generate_from_config(&config)?;
    let identical = world.cells() == again.cells();
    println!("\nReproducible: {}", identical);

    Ok(())
}

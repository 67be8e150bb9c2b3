//! Example: Build an icosahedron net and walk across it
//!
//! Demonstrates grid addressing, neighbor queries and movement.

use icosa_plates::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("Icosahedron Net Example");
    println!("=======================\n");

    let world = WorldMap::new(3)?;
    let size = world.size();
    println!("Subdivision: N = {}", world.n());
    println!("Packed array: {} x {}", size.x, size.y);
    println!("Cells: {}\n", world.cell_count());

    // Count cells by seam class
    let mut boundaries = std::collections::HashMap::new();
    for cell in world.cells() {
        *boundaries.entry(world.boundary(cell.x, cell.y)?).or_insert(0usize) += 1;
    }
    println!("Cells by boundary:");
    let mut sorted: Vec<_> = boundaries.iter().collect();
    sorted.sort_by_key(|(boundary, _)| format!("{:?}", boundary));
    for (boundary, count) in sorted {
        println!("  {:?}: {}", boundary, count);
    }

    // Neighbors of a pole cell
    println!("\nNeighbors of (0, 0):");
    println!("  directions: {:?}", world.get_directions(0, 0)?);
    for neighbor in world.near_cells(0, 0)? {
        println!("  ({}, {}) up_side_down={}", neighbor.x, neighbor.y, neighbor.up_side_down);
    }

    // Walk east along the north pole row and around the solid
    println!("\nWalking:");
    let mut position = (0, 0);
    for heading in [Heading::East, Heading::East, Heading::North, Heading::East, Heading::SouthEast] {
        let next = world.step(position.0, position.1, heading)?;
        println!("  {:?}: {:?} -> {:?}", heading, position, next);
        position = next;
    }

    Ok(())
}

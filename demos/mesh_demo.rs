//! Demonstration of flat mesh generation

use icosa_plates::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut world = WorldMap::new(5)?;
    let layout = NetLayout::default();

    // Terrain layer first, then switch to plates
    let mut mode = DisplayMode::Terrain;
    let mut mesh = generate_mesh(&world, &layout, &mode);

    println!("Mesh statistics:");
    println!("  Vertices: {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());
    println!("  Indices: {}", mesh.indices.len());

    // Memory estimate
    let mem_positions = mesh.positions.len() * 8; // 2 floats * 4 bytes
    let mem_colors = mesh.colors.len() * 16; // 4 floats * 4 bytes
    let mem_indices = mesh.indices.len() * 4;
    let total = mem_positions + mem_colors + mem_indices;
    println!("  Total: {} bytes ({:.2} MB)", total, total as f32 / 1024.0 / 1024.0);

    world.generate(24, 0.6, 7)?;
    mode = DisplayMode::Tectonic;
    update_colors(&mut mesh, &world, &mode);

    let distinct: std::collections::HashSet<_> = mesh
        .colors
        .iter()
        .map(|color| color.map(f32::to_bits))
        .collect();
    println!("\nTectonic layer: {} distinct colors", distinct.len());

    let [top, bottom] = layout.outline();
    println!("Outline: {} + {} points", top.len(), bottom.len());

    Ok(())
}

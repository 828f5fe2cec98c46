//! Generate a board and print its structure
//!
//! Run with `RUST_LOG=debug` to see restarts during growth.

use four_color_mesh::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = BoardConfigBuilder::new().seed(seed).build()?;
    let mut board = Board::generate(config)?;

    println!("Seed {}: {} areas", seed, board.area_count());
    for area in board.areas() {
        let [a, b, c] = area.triangle.vertices;
        println!(
            "  #{:<2} ({:6.1},{:6.1}) ({:6.1},{:6.1}) ({:6.1},{:6.1})  adjacent {:?}",
            area.id, a.x, a.y, b.x, b.y, c.x, c.y, area.adjacents
        );
    }

    println!("\nReveal layers:");
    for (i, layer) in board.reveal_layers().layers().iter().enumerate() {
        println!("  layer {}: {} edges", i, layer.len());
    }

    // Greedy coloring in growth order
    for id in 0..board.area_count() {
        let used: Vec<AreaColor> = board
            .get_adjacents(id)
            .iter()
            .filter_map(|&j| board.areas()[j].color)
            .collect();
        let color = AreaColor::ALL.into_iter().find(|c| !used.contains(c));
        board.set_color(id, color)?;
    }
    let solved = board.evaluate();
    println!("\nGreedy coloring solved the board: {}", solved);

    let mesh = generate_mesh_with_highlight(&board, &BasicColorMapper, Some([1.0, 1.0, 1.0, 1.0]));
    println!(
        "Mesh: {} vertices, {} triangles, {} outline segments",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.outlines.len()
    );

    Ok(())
}

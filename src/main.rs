use anyhow::Context;
use log::info;
use mazegen::map::{generate_map, CellKind, GeneratedMap};
use mazegen::settings::MapSettings;

fn cell_char(kind: CellKind) -> char {
    match kind {
        CellKind::Start => 'S',
        CellKind::Goal => 'G',
        CellKind::Wall => '#',
        CellKind::SharedPath => '*',
        CellKind::GenerationPath => 'o',
        CellKind::SearchPath => '+',
        CellKind::Empty => '.',
    }
}

/// Draws the map with the top row (highest y) first
fn render(map: &GeneratedMap) -> String {
    let grid = map.grid();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let kind = map.cell_kind(&(x, y).into()).unwrap_or(CellKind::Empty);
            out.push(cell_char(kind));
        }
        out.push('\n');
    }
    out
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => MapSettings::load(&path)?,
        None => MapSettings::default(),
    };
    info!("Generating with {settings:?}");

    let map = generate_map(&settings).context("Map generation failed")?;
    print!("{}", render(&map));
    println!(
        "generation path: {} cells, A* path: {} cells",
        map.generation_path().len(),
        map.search_path().len()
    );
    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use gammon_core::{Board, Palette, Player};
use tracing_subscriber::EnvFilter;

/// Render a backgammon position to a PNG or SVG file.
#[derive(Debug, Parser)]
#[command(name = "snapshot", version)]
struct Args {
    /// Position JSON. Omit to render an empty board (or the opening with --start).
    position: Option<PathBuf>,

    /// Output file; `.svg` writes vector output, anything else a PNG.
    #[arg(short, long)]
    output: PathBuf,

    /// Board width in pixels; height is three quarters of it.
    #[arg(short, long, default_value_t = 640.0)]
    width: f64,

    /// Palette JSON overriding some or all colours.
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Start from the opening position instead of an empty board.
    #[arg(long, conflicts_with = "position")]
    start: bool,

    /// Draw the board from this player's side.
    #[arg(long, value_enum)]
    player: Option<Side>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Player {
    fn from(s: Side) -> Self {
        match s {
            Side::White => Player::White,
            Side::Black => Player::Black,
        }
    }
}

fn load_board(args: &Args) -> Result<Board, Box<dyn std::error::Error>> {
    let mut board = match &args.position {
        Some(path) => Board::from_json(&fs::read_to_string(path)?)?,
        None if args.start => Board::starting_position(),
        None => Board::new(),
    };
    if let Some(side) = args.player {
        board.active_player = side.into();
    }
    Ok(board)
}

fn load_palette(path: Option<&Path>) -> Result<Palette, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(Palette::from_json(&fs::read_to_string(p)?)?),
        None => Ok(Palette::default()),
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let board = load_board(&args)?;
    let palette = load_palette(args.palette.as_deref())?;

    if is_svg(&args.output) {
        let svg = snapshot_core::render_svg(&board, args.width, &palette)?;
        fs::write(&args.output, svg)?;
    } else {
        let png = snapshot_core::render_png(&board, args.width, &palette)?;
        fs::write(&args.output, png)?;
    }
    tracing::info!(
        output = %args.output.display(),
        width = args.width,
        active = ?board.active_player,
        "snapshot written"
    );
    Ok(())
}

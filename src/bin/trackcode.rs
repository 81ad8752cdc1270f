use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use trackcode::{
    PieceType, RenderSettings, RenderThreading, TrackId, TrackPieceSpec, render_batch_streaming,
    render_tagged,
};

#[derive(Parser, Debug)]
#[command(name = "trackcode", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one track piece as a PNG.
    Piece(PieceArgs),
    /// Render every combination of piece types and track ids as PNGs.
    Set(SetArgs),
}

#[derive(Args, Debug)]
struct SettingsArgs {
    /// Render settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output image edge length in pixels (overrides the settings file).
    #[arg(long)]
    size: Option<u32>,

    /// Lanes per piece (overrides the settings file).
    #[arg(long)]
    lanes: Option<u32>,
}

#[derive(Parser, Debug)]
struct PieceArgs {
    /// Piece type: straight, curve, intersection or junction.
    #[arg(long = "type")]
    piece_type: String,

    /// Track id (1..=127).
    #[arg(long)]
    id: i64,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Parser, Debug)]
struct SetArgs {
    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Piece types to render.
    #[arg(long, value_delimiter = ',', default_value = "straight,curve,intersection,junction")]
    types: Vec<String>,

    /// Track ids, e.g. `1-127` or `1,5,9-12`.
    #[arg(long, default_value = "1-127")]
    ids: String,

    /// Render pieces in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Pieces rendered and held in memory before they are written out.
    #[arg(long, default_value_t = 8)]
    chunk_size: usize,

    #[command(flatten)]
    settings: SettingsArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Piece(args) => cmd_piece(args),
        Command::Set(args) => cmd_set(args),
    }
}

fn load_settings(args: &SettingsArgs) -> anyhow::Result<RenderSettings> {
    let mut settings = match &args.settings {
        Some(path) => RenderSettings::from_json_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => RenderSettings::default(),
    }
    .with_env_overrides();
    if let Some(size) = args.size {
        settings.size_px = size;
    }
    if let Some(lanes) = args.lanes {
        settings.lanes = lanes;
    }
    settings.validate()?;
    Ok(settings)
}

fn cmd_piece(args: PieceArgs) -> anyhow::Result<()> {
    let settings = load_settings(&args.settings)?;
    let piece = render_tagged(&args.piece_type, args.id, &settings)?;

    let out = args.out.join(piece.meta.png_file_name());
    piece.image.write_png(&out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_set(args: SetArgs) -> anyhow::Result<()> {
    let settings = load_settings(&args.settings)?;
    let types = args
        .types
        .iter()
        .map(|t| t.parse::<PieceType>())
        .collect::<Result<Vec<_>, _>>()?;
    let ids = parse_ids(&args.ids)?;

    let specs: Vec<TrackPieceSpec> = types
        .iter()
        .flat_map(|&t| ids.iter().map(move |&id| TrackPieceSpec::new(t, id)))
        .collect();
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let stats = render_batch_streaming(&specs, &settings, &threading, |piece| {
        piece
            .image
            .write_png(args.out.join(piece.meta.png_file_name()))
    })?;
    eprintln!(
        "wrote {} pieces to {} ({} rendered, {} shared)",
        stats.pieces_total,
        args.out.display(),
        stats.pieces_rendered,
        stats.pieces_shared
    );
    Ok(())
}

fn parse_ids(s: &str) -> anyhow::Result<Vec<TrackId>> {
    let mut ids = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (lo, hi) = match part.split_once('-') {
            Some((lo, hi)) => (lo.trim(), hi.trim()),
            None => (part, part),
        };
        let lo: i64 = lo.parse().with_context(|| format!("bad track id '{lo}'"))?;
        let hi: i64 = hi.parse().with_context(|| format!("bad track id '{hi}'"))?;
        anyhow::ensure!(lo <= hi, "empty track id range '{part}'");
        for id in lo..=hi {
            let id = TrackId::new(id)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    anyhow::ensure!(!ids.is_empty(), "no track ids in '{s}'");
    Ok(ids)
}

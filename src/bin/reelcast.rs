use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelcast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scene document and check that it builds.
    Validate(CompArgs),
    /// Print the scene timeline as JSON.
    Timeline(CompArgs),
    /// Print the evaluated state of one frame as JSON.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct CompArgs {
    /// Input scene document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Render options JSON; flags below override it.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Frame rate (integral frames per second).
    #[arg(long)]
    fps: Option<u32>,

    /// Play scenes back-to-back instead of at their authored start times.
    #[arg(long)]
    series: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(args: &CompArgs) -> anyhow::Result<reelcast::Composition> {
    let mut opts = match &args.opts {
        Some(path) => reelcast::RenderOpts::from_path(path)
            .with_context(|| format!("load render options '{}'", path.display()))?,
        None => reelcast::RenderOpts::default(),
    };
    if let Some(fps) = args.fps {
        opts.fps = reelcast::Fps::new(fps, 1)?;
    }
    if args.series {
        opts.placement = reelcast::Placement::Series;
    }

    let comp = reelcast::Composition::from_path(&args.in_path, opts)
        .with_context(|| format!("build composition '{}'", args.in_path.display()))?;
    Ok(comp)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_validate(args: CompArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    let fps = comp.timeline().fps;
    println!(
        "ok: {} scenes, {} frames ({:.2}s at {}/{} fps)",
        comp.document().scenes.len(),
        comp.duration_frames(),
        fps.frames_to_secs(comp.duration_frames()),
        fps.num,
        fps.den,
    );
    Ok(())
}

fn cmd_timeline(args: CompArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    print_json(comp.timeline())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load(&args.comp)?;
    let state = comp.eval_frame(reelcast::FrameIndex(args.frame))?;
    print_json(&state)
}

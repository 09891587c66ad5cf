use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fishplot", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a fish plot as SVG or PNG.
    Render(RenderArgs),
    /// Print the computed clone control points as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input fish document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; the extension (.svg or .png) selects the format.
    #[arg(long)]
    out: PathBuf,

    /// Rasterizer used for PNG output.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,

    /// Override the outline interpolation (polygon, bezier, spline).
    #[arg(long)]
    shape: Option<String>,

    /// Override the plot title.
    #[arg(long)]
    title: Option<String>,

    /// Font file used for text.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input fish document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
    Resvg,
}

impl From<BackendChoice> for fishplot::RasterBackend {
    fn from(c: BackendChoice) -> Self {
        match c {
            BackendChoice::Cpu => Self::Cpu,
            BackendChoice::Resvg => Self::Resvg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn read_document(path: &Path) -> anyhow::Result<fishplot::FishDocument> {
    fishplot::FishDocument::from_path(path)
        .with_context(|| format!("load fish document '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut doc = read_document(&args.in_path)?;
    if let Some(shape) = &args.shape {
        doc.config.shape = fishplot::ShapeMode::parse_lenient(shape);
    }
    if let Some(title) = args.title {
        doc.config.title = Some(title);
    }
    if let Some(font) = args.font {
        doc.config.font.path = Some(font);
    }

    let plot = fishplot::FishPlot::from_document(&doc).context("build fish plot")?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    plot.write(&args.out, args.backend.into())
        .with_context(|| format!("render '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[derive(serde::Serialize)]
struct LayoutDump<'a> {
    timepoints: &'a [f64],
    clones: &'a [fishplot::Subclone],
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let data = doc.to_data().context("validate fish data")?;
    let opts = fishplot::LayoutOpts {
        separate_independent_clones: doc.config.separate_independent_clones,
    };
    let forest = fishplot::layout_clones(&data, opts)?;

    let dump = LayoutDump {
        timepoints: forest.timepoints(),
        clones: forest.clones(),
    };
    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &dump).context("write layout json")?;
    println!();
    Ok(())
}

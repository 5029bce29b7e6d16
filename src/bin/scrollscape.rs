use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollscape", version)]
struct Cli {
    /// Site config JSON (defaults to the built-in roofing site).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log evaluation details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one scene at a given progress and print it as JSON.
    Sample(SampleArgs),
    /// Evaluate one scene at evenly spaced progress values, one JSON line each.
    Sweep(SweepArgs),
    /// Evaluate the whole page at a document scroll offset, with zoom smoothing run to rest.
    Frame(FrameArgs),
    /// Write the site config as pretty JSON.
    DumpSite(DumpArgs),
    /// Parse and validate a site config.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Scene name.
    #[arg(long)]
    scene: String,

    /// Section progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Print CSS declarations instead of raw visual state.
    #[arg(long)]
    css: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Scene name.
    #[arg(long)]
    scene: String,

    /// Number of intervals; prints `steps + 1` lines.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Document scroll offset in CSS pixels.
    #[arg(long)]
    scroll: f64,

    /// Viewport as WIDTHxHEIGHT.
    #[arg(long, default_value = "1440x900")]
    viewport: String,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input site config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Sample(args) => cmd_sample(cli.config.as_deref(), args),
        Command::Sweep(args) => cmd_sweep(cli.config.as_deref(), args),
        Command::Frame(args) => cmd_frame(cli.config.as_deref(), args),
        Command::DumpSite(args) => cmd_dump_site(cli.config.as_deref(), args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_site_json(path: &Path) -> anyhow::Result<scrollscape::SiteConfig> {
    let f = File::open(path).with_context(|| format!("open site config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let site: scrollscape::SiteConfig =
        serde_json::from_reader(r).with_context(|| "parse site config JSON")?;
    Ok(site)
}

fn load_site(config: Option<&Path>) -> anyhow::Result<scrollscape::SiteConfig> {
    let site = match config {
        Some(path) => read_site_json(path)?,
        None => scrollscape::SiteConfig::builtin()?,
    };
    site.validate()?;
    Ok(site)
}

fn find_scene(
    site: &scrollscape::SiteConfig,
    name: &str,
) -> anyhow::Result<scrollscape::SceneConfig> {
    site.scene(name).cloned().with_context(|| {
        let known: Vec<&str> = site
            .sections
            .iter()
            .map(|s| s.scene.name.as_str())
            .collect();
        format!("unknown scene '{name}' (known: {})", known.join(", "))
    })
}

fn cmd_sample(config: Option<&Path>, args: SampleArgs) -> anyhow::Result<()> {
    let site = load_site(config)?;
    let scene = find_scene(&site, &args.scene)?;
    let evaluated = scrollscape::SceneEngine::eval(&scene, args.progress)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.css {
        let rendered = scrollscape::SceneRenderer::render(&evaluated);
        for node in &rendered.nodes {
            writeln!(out, "{} {{ {} }}", node.key, node.inline_style())?;
        }
    } else {
        serde_json::to_writer_pretty(&mut out, &evaluated)?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_sweep(config: Option<&Path>, args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");
    let site = load_site(config)?;
    let scene = find_scene(&site, &args.scene)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..=args.steps {
        let p = f64::from(i) / f64::from(args.steps);
        let evaluated = scrollscape::SceneEngine::eval(&scene, p)?;
        let rendered = scrollscape::SceneRenderer::render(&evaluated);
        serde_json::to_writer(&mut out, &rendered)?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_frame(config: Option<&Path>, args: FrameArgs) -> anyhow::Result<()> {
    let viewport = scrollscape::Viewport::parse(&args.viewport)?;
    let mut site = scrollscape::Site::new(load_site(config)?)?;
    let frame = site.frame_settled(args.scroll, viewport)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &frame)?;
    writeln!(out)?;
    Ok(())
}

fn cmd_dump_site(config: Option<&Path>, args: DumpArgs) -> anyhow::Result<()> {
    let site = load_site(config)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &site)?;
    writeln!(w)?;
    w.flush()?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let site = read_site_json(&args.in_path)?;
    site.validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    eprintln!(
        "ok: {} sections ({})",
        site.sections.len(),
        site.sections
            .iter()
            .map(|s| s.scene.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

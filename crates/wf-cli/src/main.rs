use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use wf_core::{Category, SLOT_COLORS, TermConfig, locate, tokenize};
use wf_scene::{SceneDriver, SceneGraph};

#[derive(Parser)]
#[command(name = "wf", about = "Occurrence-driven 3D marker visualizer CLI")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the lowercase token sequence for source text
    Tokenize {
        /// Text to tokenize; omit when using --file
        text: Option<String>,

        /// Read source text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print occurrence indices and derived heights for one term
    Locate {
        /// Term to locate in the token sequence
        term: String,

        /// Text to scan; omit when using --file
        text: Option<String>,

        /// Read source text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Generate a scene for three terms and simulate the animation
    Run {
        /// Terms for the falling, pulsing, and floating slots
        #[arg(num_args = 3, required = true)]
        terms: Vec<String>,

        /// Source text to visualize
        #[arg(long)]
        text: Option<String>,

        /// Read source text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u32,

        /// Seconds of elapsed time per frame
        #[arg(long, default_value_t = 0.016)]
        dt: f32,

        /// Markers generated per occurrence
        #[arg(long, default_value_t = 10)]
        markers: usize,

        /// Lateral spread radius per slot
        #[arg(long, default_value_t = 10.0)]
        spread: f32,

        /// Uniform marker scale
        #[arg(long, default_value_t = 1.0)]
        scale: f32,

        /// Keep identity rotation instead of random jitter
        #[arg(long)]
        no_rotate: bool,

        /// Seed the placement RNG for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final scene as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Tokenize { text, file } => cmd_tokenize(text.as_deref(), file.as_deref()),
        Commands::Locate { term, text, file } => {
            cmd_locate(term, text.as_deref(), file.as_deref())
        }
        Commands::Run {
            terms,
            text,
            file,
            frames,
            dt,
            markers,
            spread,
            scale,
            no_rotate,
            seed,
            json,
        } => {
            let options = RunOptions {
                frames: *frames,
                dt: *dt,
                markers: *markers,
                spread: *spread,
                scale: *scale,
                no_rotate: *no_rotate,
                seed: *seed,
                json: *json,
            };
            cmd_run(terms, text.as_deref(), file.as_deref(), &options)
        }
    }
}

fn read_source(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        (Some(_), Some(_)) => bail!("pass either inline text or --file, not both"),
        (None, None) => bail!("no source text given; pass text or --file"),
    }
}

fn cmd_tokenize(text: Option<&str>, file: Option<&Path>) -> Result<()> {
    let source = read_source(text, file)?;
    let tokens = tokenize(&source);
    for token in &tokens {
        println!("{token}");
    }
    eprintln!("{} tokens", tokens.len());
    Ok(())
}

fn cmd_locate(term: &str, text: Option<&str>, file: Option<&Path>) -> Result<()> {
    let source = read_source(text, file)?;
    let tokens = tokenize(&source);

    let mut count = 0;
    for m in locate(&tokens, term) {
        println!("index {:>4}  height {:.3}", m.index, m.height);
        count += 1;
    }
    if count == 0 {
        println!("no occurrences of '{term}' in {} tokens", tokens.len());
    }
    Ok(())
}

struct RunOptions {
    frames: u32,
    dt: f32,
    markers: usize,
    spread: f32,
    scale: f32,
    no_rotate: bool,
    seed: Option<u64>,
    json: bool,
}

fn cmd_run(
    terms: &[String],
    text: Option<&str>,
    file: Option<&Path>,
    options: &RunOptions,
) -> Result<()> {
    let source = read_source(text, file)?;

    let mut configs: Vec<TermConfig> = terms
        .iter()
        .zip(SLOT_COLORS)
        .map(|(term, color)| TermConfig::new(term, color))
        .collect();
    for config in &mut configs {
        config.marker_count = options.markers;
        config.spread_radius = options.spread;
        config.scale = options.scale;
        config.randomize_rotation = !options.no_rotate;
    }
    let Ok(configs) = <[TermConfig; 3]>::try_from(configs) else {
        bail!("exactly three terms are required");
    };

    let mut driver = match options.seed {
        Some(seed) => SceneDriver::seeded(SceneGraph::new(), seed),
        None => SceneDriver::new(SceneGraph::new()),
    };

    driver.submit_text(&source);
    let token_count = driver.session().tokens().len();
    let placed = driver
        .submit_terms(&configs)
        .context("failed to generate placements")?;
    tracing::info!(token_count, "scene generated");

    for frame in 0..options.frames {
        driver.tick(frame as f32 * options.dt);
    }

    if options.json {
        let snapshot = driver.host().snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("tokens:    {token_count}");
    for (slot, category) in Category::ALL.into_iter().enumerate() {
        println!(
            "{:<9}  {} markers ('{}')",
            format!("{}:", category.as_str()),
            placed[slot],
            configs[slot].term,
        );
    }
    println!(
        "frames:    {} (dt {:.3}s, {:.1}s elapsed)",
        options.frames,
        options.dt,
        options.frames as f32 * options.dt
    );
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use hexshift::{
    AnimationSpec, Gradient, GradientSet, MAX_GRADIENTS, PresetRecord, PresetStore, ShiftMode,
    generate_document,
};

#[derive(Parser, Debug)]
#[command(name = "hexshift", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a document from gradients given on the command line.
    Generate(GenerateArgs),
    /// Generate a document from a saved preset.
    Render(RenderArgs),
    /// Manage the preset catalog.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Output path, or `-` for stdout.
    #[arg(long, default_value = "-")]
    out: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Name of the saved preset to render.
    #[arg(long)]
    preset: String,

    /// Output path, or `-` for stdout.
    #[arg(long, default_value = "-")]
    out: String,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    #[command(subcommand)]
    cmd: PresetCommand,
}

#[derive(Subcommand, Debug)]
enum PresetCommand {
    /// List saved preset names.
    List,
    /// Print one preset as JSON.
    Show(NameArg),
    /// Save a preset built from generate-style flags.
    Save(SaveArgs),
    /// Delete a preset.
    Delete(NameArg),
}

#[derive(Parser, Debug)]
struct NameArg {
    /// Preset name.
    name: String,
}

#[derive(Parser, Debug)]
struct SaveArgs {
    /// Preset name.
    name: String,

    #[command(flatten)]
    request: RequestArgs,
}

/// Flags shared by every command that builds a generation request.
#[derive(Args, Debug)]
struct RequestArgs {
    /// Text to colorize, e.g. play.example.net.
    #[arg(long)]
    text: String,

    /// Hex color stops of the first gradient, left to right.
    #[arg(long, num_args = 1.., value_name = "HEX")]
    colors: Vec<String>,

    /// Positions in 0..1 pairing with --colors; evenly spaced when omitted.
    #[arg(long, num_args = 1.., value_name = "POS")]
    positions: Vec<f64>,

    /// One extra gradient per use, as comma separated hex colors (ten gradients at most).
    #[arg(long, value_name = "HEX,HEX,...")]
    colors_set: Vec<String>,

    /// Number of frames to generate.
    #[arg(long, default_value_t = 48)]
    frames: u32,

    /// change-interval in milliseconds.
    #[arg(long, default_value_t = 200)]
    interval: u32,

    /// Shift mode.
    #[arg(long, value_enum, default_value_t = ModeChoice::Wrap)]
    mode: ModeChoice,

    /// Phase advance per frame in 0..1; defaults to one character step.
    #[arg(long)]
    shift_per_frame: Option<f64>,

    /// Document root key.
    #[arg(long, default_value = "web")]
    root_key: String,

    /// Document list key.
    #[arg(long, default_value = "texts")]
    list_key: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeChoice {
    Wrap,
    Pingpong,
}

impl From<ModeChoice> for ShiftMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Wrap => ShiftMode::Wrap,
            ModeChoice::Pingpong => ShiftMode::PingPong,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Render(args) => cmd_render(args),
        Command::Preset(args) => match args.cmd {
            PresetCommand::List => cmd_preset_list(),
            PresetCommand::Show(args) => cmd_preset_show(&args.name),
            PresetCommand::Save(args) => cmd_preset_save(&args.name, &args.request),
            PresetCommand::Delete(args) => cmd_preset_delete(&args.name),
        },
    }
}

fn build_request(args: &RequestArgs) -> anyhow::Result<(GradientSet, AnimationSpec)> {
    if args.text.is_empty() {
        anyhow::bail!("--text must not be empty");
    }

    let mut gradients = Vec::new();
    if !args.colors.is_empty() {
        let positions = if args.positions.is_empty() {
            None
        } else {
            Some(args.positions.as_slice())
        };
        gradients.push(Gradient::from_hex_colors(&args.colors, positions)?);
    }
    for group in &args.colors_set {
        let colors: Vec<&str> = group.split(',').map(str::trim).collect();
        gradients.push(Gradient::from_hex_colors(&colors, None)?);
    }
    if gradients.is_empty() {
        anyhow::bail!("provide at least one gradient via --colors or --colors-set");
    }
    gradients.truncate(MAX_GRADIENTS);

    let set = GradientSet::new(gradients)?;
    let spec = AnimationSpec {
        text: args.text.clone(),
        frames: args.frames.max(1),
        mode: args.mode.into(),
        shift_per_frame: args.shift_per_frame,
        interval_ms: args.interval.max(1),
        root_key: args.root_key.clone(),
        list_key: args.list_key.clone(),
    };
    Ok((set, spec))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let (set, spec) = build_request(&args.request)?;
    let yaml = generate_document(&set, &spec)?;
    write_output(&yaml, &args.out)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let store = PresetStore::open_default()?;
    let record = store
        .get(&args.preset)
        .ok_or_else(|| anyhow::anyhow!("no preset named '{}'", args.preset))?;
    if record.text.is_empty() {
        anyhow::bail!("preset '{}' has no text", args.preset);
    }

    let (set, mut spec) = record.into_parts()?;
    spec.frames = spec.frames.max(1);
    spec.interval_ms = spec.interval_ms.max(1);

    let yaml = generate_document(&set, &spec)?;
    write_output(&yaml, &args.out)
}

fn cmd_preset_list() -> anyhow::Result<()> {
    let store = PresetStore::open_default()?;
    for name in store.list() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_preset_show(name: &str) -> anyhow::Result<()> {
    let store = PresetStore::open_default()?;
    let record = store
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("no preset named '{name}'"))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn cmd_preset_save(name: &str, request: &RequestArgs) -> anyhow::Result<()> {
    let (set, spec) = build_request(request)?;
    let store = PresetStore::open_default()?;
    store.put(name, PresetRecord::from_parts(&set, &spec))?;
    eprintln!("saved preset '{name}' to {}", store.path().display());
    Ok(())
}

fn cmd_preset_delete(name: &str) -> anyhow::Result<()> {
    let store = PresetStore::open_default()?;
    if store.delete(name)? {
        eprintln!("deleted preset '{name}'");
    } else {
        eprintln!("no preset named '{name}'");
    }
    Ok(())
}

fn write_output(yaml: &str, out: &str) -> anyhow::Result<()> {
    if out == "-" {
        print!("{yaml}");
        return Ok(());
    }

    let path = PathBuf::from(out);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&path, yaml).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {} lines to {}", yaml.lines().count(), path.display());
    Ok(())
}

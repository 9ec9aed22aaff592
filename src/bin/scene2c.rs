use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scene2c", version, about = "Compile doodle scenes into static C tables")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a scene and its doodles into a C source file.
    Scene(SceneArgs),
    /// Generate the sin(x * pi) lookup table source.
    Sinpi(SinpiArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input scene JSON.
    #[arg(short, long)]
    input: PathBuf,

    /// Directory holding `<name>.json` doodle definitions.
    #[arg(short, long, default_value = "doodles")]
    doodles: PathBuf,

    /// Output C source path.
    #[arg(short, long, default_value = "scene.c")]
    output: PathBuf,

    /// Storage class for the generated constants.
    #[arg(long, value_enum, default_value_t = StorageChoice::Progmem)]
    storage: StorageChoice,

    /// Header directory used in the generated `#include` lines.
    #[arg(long, default_value = "avr-xy-doodles")]
    include_prefix: String,

    /// Omit the NULL sentinel after the last frame table entry.
    #[arg(long)]
    no_null_terminator: bool,
}

#[derive(Parser, Debug)]
struct SinpiArgs {
    /// Fractional bits of the fixed-point format; the table has `1 << bits` entries.
    #[arg(short, long, default_value_t = 8)]
    fractional_bits: u32,

    /// C element type.
    #[arg(short = 't', long = "type", default_value = "uint8_t")]
    c_type: String,

    /// C variable name.
    #[arg(short, long, default_value = "sinpi_lookup_table")]
    variable: String,

    /// Output C source path.
    #[arg(short, long, default_value = "sinpi-lookup.c")]
    output: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StorageChoice {
    Progmem,
    Rodata,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Scene(args) => cmd_scene(args),
        Command::Sinpi(args) => cmd_sinpi(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let opts = scene2c::EmitOpts {
        storage: match args.storage {
            StorageChoice::Progmem => scene2c::Storage::Progmem,
            StorageChoice::Rodata => scene2c::Storage::Rodata,
        },
        include_prefix: args.include_prefix,
        null_terminate: !args.no_null_terminator,
    };

    // The unit is rendered completely before anything touches the output path.
    let source = scene2c::compile_scene_path(&args.input, &args.doodles, &opts)
        .with_context(|| format!("compile scene '{}'", args.input.display()))?;

    write_output(&args.output, &source)
}

fn cmd_sinpi(args: SinpiArgs) -> anyhow::Result<()> {
    let opts = scene2c::SinpiOpts {
        fractional_bits: args.fractional_bits,
        c_type: args.c_type,
        variable: args.variable,
    };
    let source = scene2c::sinpi::render(&opts)?;
    write_output(&args.output, &source)
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;

    eprintln!("wrote {}", path.display());
    Ok(())
}

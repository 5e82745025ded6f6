use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use framer::{
    DEVICES, Device, DeviceOrientation, DirFrameSource, FramerError, FramerOpts, ScreenshotFramer,
};

#[derive(Parser, Debug)]
#[command(
    name = "framer",
    version,
    about = "Add device frames to screenshots.",
    after_help = "If not specified manually, the device and orientation are detected from the \
                  dimensions of the input image.\nUse 'framer list-devices -r' to list all \
                  available devices and orientations."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Frame a PNG screenshot (default).
    Frame(FrameArgs),
    /// List available devices.
    ListDevices(ListArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Device name, e.g. "iPhone 12 Pro". Detected from the screenshot size when omitted.
    #[arg(short, long)]
    device: Option<String>,

    /// Device orientation. Detected from the screenshot size when omitted.
    #[arg(short = 'r', long)]
    orientation: Option<DeviceOrientation>,

    /// Override default output path (a file, or an existing directory).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory holding the device frame PNGs.
    #[arg(long, env = "FRAMER_FRAMES_DIR", default_value = "frames")]
    frames_dir: PathBuf,

    /// Worker threads for screen mask construction.
    #[arg(long)]
    threads: Option<usize>,

    /// PNG screenshot to frame.
    path: PathBuf,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Show supported orientations for each device.
    #[arg(short = 'r', long = "orientations")]
    show_orientations: bool,

    /// Print the catalog geometry as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(with_default_subcommand(std::env::args_os().collect()));
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::ListDevices(args) => cmd_list_devices(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<FramerError>()
                .map_or(1, FramerError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// `framer shot.png` means `framer frame shot.png`. Leading global flags are skipped before
/// looking for a subcommand.
fn with_default_subcommand(mut args: Vec<OsString>) -> Vec<OsString> {
    let first = args
        .iter()
        .skip(1)
        .position(|a| !matches!(a.to_str(), Some("-v" | "--verbose")))
        .map(|i| i + 1);
    let Some(at) = first else {
        return args;
    };
    let explicit = matches!(
        args[at].to_str(),
        Some("frame" | "list-devices" | "help" | "-h" | "--help" | "-V" | "--version")
    );
    if !explicit {
        args.insert(at, OsString::from("frame"));
    }
    args
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::ERROR
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("could not load image '{}'", args.path.display()))?;
    let screenshot = framer::decode_png(&bytes)
        .with_context(|| format!("could not load image '{}'", args.path.display()))?;

    let resolution = framer::resolve(
        screenshot.size(),
        args.device.as_deref(),
        args.orientation,
    )?;
    for w in &resolution.warnings {
        eprintln!("warning: {w}");
    }

    let engine = ScreenshotFramer::new(
        DirFrameSource::new(&args.frames_dir),
        FramerOpts {
            threads: args.threads,
        },
    )?;
    let framed = engine.frame(&screenshot, resolution.device, resolution.orientation)?;
    for w in &framed.warnings {
        eprintln!("warning: {w}");
    }

    let dest = destination_path(&args.path, args.output.as_deref());
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let png = framer::encode_png(&framed.image)?;
    std::fs::write(&dest, png).with_context(|| format!("write png '{}'", dest.display()))?;

    println!(
        "Framed '{}' ({}) screenshot saved to '{}'.",
        resolution.device.name(),
        resolution.orientation,
        dest.display()
    );
    Ok(())
}

fn cmd_list_devices(args: ListArgs) -> anyhow::Result<()> {
    if args.json {
        let infos: Vec<_> = DEVICES.iter().map(Device::describe).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for device in DEVICES {
        if args.show_orientations {
            let orientations = device
                .orientations()
                .iter()
                .map(|o| o.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!("{} - {orientations}", device.name());
        } else {
            println!("{}", device.name());
        }
    }
    Ok(())
}

/// `shot.png` becomes `shot-framed.png` next to the input, unless `output` says otherwise. An
/// `output` that is an existing directory receives the generated file name.
fn destination_path(input: &Path, output: Option<&Path>) -> PathBuf {
    let s = input.to_string_lossy();
    let stem = s
        .len()
        .checked_sub(4)
        .and_then(|cut| Some((s.get(..cut)?, s.get(cut..)?)))
        .filter(|(_, ext)| ext.eq_ignore_ascii_case(".png"))
        .map_or(&*s, |(stem, _)| stem);
    let generated = PathBuf::from(format!("{stem}-framed.png"));

    match output {
        None => generated,
        Some(out) if out.is_dir() => out.join(generated.file_name().unwrap_or_default()),
        Some(out) => out.to_path_buf(),
    }
}

/// RAYCUBE - ray-cast a cube into the terminal
///
/// Without arguments this runs the sweep: a stationary 10-unit cube in the
/// middle of an 80x24 grid, viewed along a direction that circles once over
/// 100 frames. `raycube spin` turns a unit mesh cube in front of a fixed ray
/// and reports each frame as a line of text.
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{info, LevelFilter};
use raycube_core::{Point3, Scenario, SpinConfig, SweepConfig, Vec3};
use raycube_terminal::{TerminalApp, DEFAULT_FRAME_DELAY};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "raycube", version, about = "Ray-cast a cube into the terminal")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fixed box, camera direction sweeping a full circle (default)
    Sweep(SweepArgs),
    /// Mesh cube spinning about Y in front of a fixed ray
    Spin(SpinArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Sweep(SweepArgs::default())
    }
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Grid width in characters
    #[arg(long, default_value_t = SweepConfig::default().width)]
    width: usize,

    /// Grid height in characters
    #[arg(long, default_value_t = SweepConfig::default().height)]
    height: usize,

    /// Frames in one full sweep
    #[arg(long, default_value_t = SweepConfig::default().frames)]
    frames: u32,

    /// Cube edge length
    #[arg(long, default_value_t = SweepConfig::default().cube_size)]
    cube_size: f32,

    /// Distance of the eye behind the cube along -Z
    #[arg(long, default_value_t = SweepConfig::default().eye_distance)]
    eye_distance: f32,

    /// Pause between frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

impl Default for SweepArgs {
    fn default() -> Self {
        let config = SweepConfig::default();
        Self {
            width: config.width,
            height: config.height,
            frames: config.frames,
            cube_size: config.cube_size,
            eye_distance: config.eye_distance,
            delay_ms: DEFAULT_FRAME_DELAY.as_millis() as u64,
        }
    }
}

impl From<&SweepArgs> for SweepConfig {
    fn from(args: &SweepArgs) -> Self {
        SweepConfig {
            width: args.width,
            height: args.height,
            frames: args.frames,
            cube_size: args.cube_size,
            eye_distance: args.eye_distance,
        }
    }
}

#[derive(Args, Debug)]
struct SpinArgs {
    /// Cube edge length
    #[arg(long, default_value_t = SpinConfig::default().cube_size)]
    cube_size: f32,

    /// Ray origin as x,y,z
    #[arg(long, default_value = "0,0,-3", value_parser = parse_triple, allow_hyphen_values = true)]
    origin: [f32; 3],

    /// Ray direction as x,y,z
    #[arg(long, default_value = "0,0,1", value_parser = parse_triple, allow_hyphen_values = true)]
    direction: [f32; 3],

    /// Rotation per frame in radians
    #[arg(long, default_value_t = SpinConfig::default().rotation_speed)]
    speed: f32,
}

impl From<&SpinArgs> for SpinConfig {
    fn from(args: &SpinArgs) -> Self {
        let [ox, oy, oz] = args.origin;
        let [dx, dy, dz] = args.direction;
        SpinConfig {
            cube_size: args.cube_size,
            ray_origin: Point3::new(ox, oy, oz),
            ray_direction: Vec3::new(dx, dy, dz),
            rotation_speed: args.speed,
        }
    }
}

fn parse_triple(value: &str) -> std::result::Result<[f32; 3], String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", value, e))?;

    match parts.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("expected three comma-separated numbers, got '{}'", value)),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // stderr keeps the rendered grid on stdout clean
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (scenario, delay) = match cli.command.unwrap_or_default() {
        Command::Sweep(args) => {
            let scenario =
                Scenario::sweep(&SweepConfig::from(&args)).context("invalid sweep settings")?;
            (scenario, Duration::from_millis(args.delay_ms))
        }
        Command::Spin(args) => {
            let scenario =
                Scenario::spin(&SpinConfig::from(&args)).context("invalid spin settings")?;
            (scenario, Duration::ZERO)
        }
    };

    info!("running {:?} for {} frames", scenario.mode(), scenario.total_frames());
    let mut app = TerminalApp::stdout(scenario, delay);
    app.run().context("failed to write to the terminal")?;
    Ok(())
}

//! GearTrain demo driver
//!
//! Loads a scene file, solves the train, then runs a fixed number of
//! simulation frames into a text render sink that prints every gear.

use std::env;
use std::process::ExitCode;

use getopts::Options;
use geartrain::geartrain::log::{Log, LogSeverity};
use geartrain::geartrain::{
    FrameSnapshot, KinematicSolver, KinematicUpdater, LoaderConfig, NoOpUpdater, RenderSink,
    Scene, SceneLoader, SolverConfig, Updater,
};
use geartrain::{gt_error, gt_info};

const DEFAULT_SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/geartrain.dat");
const DEFAULT_FRAMES: usize = 10;
const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
struct Args {
    scene: String,
    frames: usize,
    dt: f32,
    lenient: bool,
    max_passes: Option<usize>,
    log_level: LogSeverity,
    paused: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Args),
    Help(String),
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt("f", "frames", "number of frames to simulate (default 10)", "N");
    opts.optopt("", "dt", "seconds per frame (default 1/60)", "SECONDS");
    opts.optflag("", "lenient", "read malformed numbers as zero instead of failing");
    opts.optopt("", "max-passes", "cap on solver propagation passes", "N");
    opts.optopt("", "log-level", "one of trace, debug, info, warn, error", "LEVEL");
    opts.optflag("", "paused", "render the solved train without turning it");
    opts
}

fn parse_args(program: &str, args: &[String]) -> Result<Command, String> {
    let opts = options();
    let matches = opts.parse(args).map_err(|f| f.to_string())?;

    if matches.opt_present("help") {
        let brief = format!("Usage: {} [options] [FILE]", program);
        return Ok(Command::Help(opts.usage(&brief)));
    }

    let frames = match matches.opt_str("frames") {
        Some(value) => value.parse().map_err(|_| format!("invalid frame count '{}'", value))?,
        None => DEFAULT_FRAMES,
    };
    let dt = match matches.opt_str("dt") {
        Some(value) => match value.parse::<f32>() {
            Ok(dt) if dt.is_finite() && dt >= 0.0 => dt,
            _ => return Err(format!("invalid time step '{}'", value)),
        },
        None => DEFAULT_DT,
    };
    let max_passes = match matches.opt_str("max-passes") {
        Some(value) => Some(value.parse().map_err(|_| format!("invalid pass count '{}'", value))?),
        None => None,
    };
    let log_level = match matches.opt_str("log-level") {
        Some(value) => LogSeverity::from_name(&value).ok_or_else(|| format!("unknown log level '{}'", value))?,
        None => LogSeverity::Info,
    };
    if matches.free.len() > 1 {
        return Err(format!("expected at most one scene file, got {}", matches.free.len()));
    }

    Ok(Command::Run(Args {
        scene: matches.free.first().cloned().unwrap_or_else(|| DEFAULT_SCENE.to_string()),
        frames,
        dt,
        lenient: matches.opt_present("lenient"),
        max_passes,
        log_level,
        paused: matches.opt_present("paused"),
    }))
}

/// Render sink printing one line per gear each frame.
#[derive(Debug, Default)]
struct TextSink {
    frames: u64,
}

impl RenderSink for TextSink {
    fn submit(&mut self, frame: &FrameSnapshot) -> geartrain::Result<()> {
        self.frames += 1;
        println!("frame {}", self.frames);
        for (name, gear) in frame.gear_names.iter().zip(&frame.gears) {
            println!("  {:<12} at {:>6.2} {:>6.2} {:>6.2}  rotation {:>9.2}",
                name, gear.position.x, gear.position.y, gear.position.z, gear.rotation);
        }
        Ok(())
    }
}

fn simulate<U: Updater>(scene: &mut Scene, updater: &mut U, sink: &mut TextSink, args: &Args) -> geartrain::Result<()> {
    for _ in 0..args.frames {
        updater.update(scene, args.dt);
        sink.submit(&FrameSnapshot::capture(scene))?;
    }
    Ok(())
}

fn run(args: &Args) -> geartrain::Result<()> {
    let loader_config = if args.lenient { LoaderConfig::lenient() } else { LoaderConfig::default() };
    let desc = SceneLoader::new(loader_config).load_file(&args.scene)?;
    let mut scene = Scene::from_desc(desc)?;

    let solver = KinematicSolver::new(SolverConfig {
        max_passes: args.max_passes,
        ..Default::default()
    });
    let report = solver.solve(&mut scene)?;
    for (_, axle) in scene.axles() {
        gt_info!("geartrain::Demo", "{}: direction {:+}, {} deg/s",
            axle.name(), axle.direction().sign(), axle.angular_velocity());
    }

    let mut sink = TextSink::default();
    if args.paused {
        simulate(&mut scene, &mut NoOpUpdater::new(), &mut sink, args)?;
    } else {
        simulate(&mut scene, &mut KinematicUpdater::new(), &mut sink, args)?;
    }
    gt_info!("geartrain::Demo", "{} frames rendered, {} of {} axles motored",
        sink.frames, report.motored_axles, scene.axle_count());
    Ok(())
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().cloned().unwrap_or_else(|| "geartrain_demo".to_string());

    let args = match parse_args(&program, argv.get(1..).unwrap_or(&[])) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help(usage)) => {
            print!("{}", usage);
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}: {}", program, message);
            return ExitCode::FAILURE;
        }
    };

    Log::set_min_severity(args.log_level);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            gt_error!("geartrain::Demo", "Aborting: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use virtual_coach::coach::BeginnerOrdering;
use virtual_coach::intake::{load_intake, Intake, UnknownFaultPolicy};
use virtual_coach::model::Level;
use virtual_coach::source::{DemoSource, FaultSource, ListSource};
use virtual_coach::validation::validate_report;
use virtual_coach::{ReportConfig, ReportPipeline};

#[derive(Parser, Debug)]
#[command(name = "vca-coach")]
#[command(about = "Build a golf swing coaching report from detected faults", long_about = None)]
struct Args {
    /// Path to an intake document (JSON)
    #[arg(short = 'i', long)]
    intake: Option<String>,

    /// Detected fault key (can be specified multiple times, overrides intake faults)
    #[arg(short = 'f', long = "fault")]
    faults: Vec<String>,

    /// Player level: beginner, intermediate or advanced (default: intake or beginner)
    #[arg(short = 'l', long)]
    level: Option<Level>,

    /// Junior player
    #[arg(long)]
    junior: bool,

    /// Practice sessions completed so far
    #[arg(short = 's', long, allow_negative_numbers = true)]
    sessions: Option<i64>,

    /// Player name shown in the report
    #[arg(long)]
    player: Option<String>,

    /// Fail on unknown fault keys instead of dropping them
    #[arg(long)]
    strict: bool,

    /// Beginners keep their own top fault after late_hips
    #[arg(long)]
    sequencing_first: bool,

    /// Use the demo fault set instead of intake/flag faults
    #[arg(long)]
    demo: bool,

    /// Output directory for report.json and plan.txt (prints JSON to stdout if omitted)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Only validate an existing report in the output directory
    #[arg(long)]
    validate: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let output = args.output.as_deref().map(expand);

    // If validate-only mode, just validate and exit
    if args.validate {
        let dir = output.context("--validate needs --output <dir>")?;
        log::info!("Validation mode - checking existing report...");
        validate_report(&dir)?;
        log::info!("✅ Validation completed!");
        return Ok(());
    }

    let intake = match args.intake.as_deref() {
        Some(path) => load_intake(&expand(path))?,
        None => Intake::default(),
    };

    // Flags win over intake fields
    let level = args.level.or(intake.level).unwrap_or_default();
    let mut config = ReportConfig::new(level)
        .with_junior(args.junior || intake.junior.unwrap_or(false))
        .with_sessions(args.sessions.or(intake.sessions).unwrap_or(0));

    if let Some(player) = args.player.or(intake.player) {
        config = config.with_player(player);
    }
    if args.strict {
        config = config.with_unknown_faults(UnknownFaultPolicy::Reject);
    }
    if args.sequencing_first {
        log::info!("Beginner ordering: sequencing first, then own top fault");
        config = config.with_beginner_ordering(BeginnerOrdering::SequencingFirst);
    }
    if let Some(ref dir) = output {
        config = config.with_output_dir(dir.clone());
    }

    if args.demo {
        run(config, DemoSource::new(), output.is_some())?;
    } else {
        let keys = if args.faults.is_empty() {
            intake.faults
        } else {
            args.faults
        };
        run(config, ListSource::new(keys), output.is_some())?;
    }

    // Auto-validate after writing
    if let Some(dir) = output {
        log::info!("Running post-write validation...");
        validate_report(&dir)?;
        log::info!("✅ Validation passed!");
    }

    Ok(())
}

fn run<S: FaultSource>(config: ReportConfig, source: S, write: bool) -> Result<()> {
    let pipeline = ReportPipeline::new(config, source);

    if write {
        pipeline.run_and_write()?;
    } else {
        let report = pipeline.run()?;
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }
    Ok(())
}

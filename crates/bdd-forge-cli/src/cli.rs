//! Command dispatch for the `bdd-forge` entrypoint.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use bdd_forge::generators::{DataType, generate_many, verify};
use bdd_forge::scenario::{Action, Assertion, Intent, WaitCondition, synthesize};
use bdd_forge::{
    extract_steps, load_feature, parse, parse_with_report, render_stubs, validate_strict,
    write_stubs,
};
use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::config::{CliConfig, LogLevel};
use crate::engine::EngineInvocation;
use crate::logging::init_logging;
use crate::output::{
    write_json, write_lines, write_outline, write_skipped, write_steps, write_text,
};

/// Gherkin feature tooling with English and Russian keywords.
#[derive(Parser)]
#[command(name = "bdd-forge", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Automation engine executable.
    #[arg(long, global = true, value_name = "PATH")]
    engine: Option<PathBuf>,
    /// Settings file passed to the automation engine.
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the features, scenarios and steps of a feature file.
    Parse(ParseArgs),
    /// List the distinct steps of a feature file or render stubs for them.
    Steps(StepsArgs),
    /// Report lines the parser drops, optionally running the strict parser.
    Validate(ValidateArgs),
    /// Build a Russian feature from an automation intent.
    Synthesize(SynthesizeArgs),
    /// Generate test data.
    Generate(GenerateArgs),
    /// Check an identifier against its control-digit rule.
    Check(CheckArgs),
}

#[derive(Args)]
pub(crate) struct ParseArgs {
    /// Feature file to read.
    pub file: PathBuf,
    /// Emit JSON instead of an indented outline.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub(crate) struct StepsArgs {
    /// Feature file to read.
    pub file: PathBuf,
    /// Render placeholder procedures instead of bare step text.
    #[arg(long)]
    pub stubs: bool,
    /// Write the stubs to this file instead of stdout.
    #[arg(long, requires = "stubs", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct ValidateArgs {
    /// Feature file to read.
    pub file: PathBuf,
    /// Also run the conforming Gherkin parser.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub(crate) struct SynthesizeArgs {
    #[command(subcommand)]
    pub intent: IntentCommand,
    /// Write the feature to this file instead of stdout.
    #[arg(long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Extra argument for the engine command line; repeatable.
    #[arg(long = "engine-arg", global = true, value_name = "ARG", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,
}

/// Automation intents accepted by `synthesize`.
#[derive(Subcommand)]
pub(crate) enum IntentCommand {
    /// Inspect the structure of a form.
    ExploreForm {
        /// Form to open; the active window when omitted.
        #[arg(long)]
        form: Option<String>,
    },
    /// List the elements of the active form.
    ListElements {
        /// Only list elements of this type.
        #[arg(long = "type")]
        element_type: Option<String>,
    },
    /// Click, type into, select or clear an element.
    PerformAction {
        /// click, double_click, input, select or clear.
        #[arg(long, value_parser = closed_set::<Action>)]
        action: Action,
        /// Element name.
        #[arg(long)]
        element: String,
        /// Value for input and select.
        #[arg(long)]
        value: Option<String>,
    },
    /// Capture the screen.
    TakeScreenshot {
        /// Snapshot name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Wait for an element to change state.
    WaitForCondition {
        /// appear, disappear, enabled or disabled.
        #[arg(long, value_parser = closed_set::<WaitCondition>)]
        condition: WaitCondition,
        /// Element name.
        #[arg(long)]
        element: String,
        /// Upper bound in seconds.
        #[arg(long, default_value_t = 10)]
        timeout: u32,
    },
    /// Read the rows of a table.
    ExtractTableData {
        /// Table element name.
        #[arg(long)]
        table: String,
        /// Read at most this many rows.
        #[arg(long)]
        max_rows: Option<u32>,
    },
    /// Start recording user actions.
    StartRecording {
        /// File the engine records into.
        #[arg(long = "file")]
        output: Option<String>,
    },
    /// Check a condition on an element.
    AssertCondition {
        /// exists, visible, enabled, value or count.
        #[arg(long = "type", value_parser = closed_set::<Assertion>)]
        assertion: Assertion,
        /// Element name.
        #[arg(long)]
        element: String,
        /// Expected value for value and count.
        #[arg(long)]
        expected: Option<String>,
    },
    /// Open an application section.
    Navigate {
        /// Section name.
        #[arg(long)]
        section: String,
        /// Command to run inside the section.
        #[arg(long)]
        command: Option<String>,
    },
}

impl From<IntentCommand> for Intent {
    fn from(command: IntentCommand) -> Self {
        match command {
            IntentCommand::ExploreForm { form } => Self::ExploreForm { form },
            IntentCommand::ListElements { element_type } => Self::ListElements { element_type },
            IntentCommand::PerformAction {
                action,
                element,
                value,
            } => Self::PerformAction {
                action,
                element,
                value,
            },
            IntentCommand::TakeScreenshot { name } => Self::TakeScreenshot { name },
            IntentCommand::WaitForCondition {
                condition,
                element,
                timeout,
            } => Self::WaitForCondition {
                condition,
                element,
                timeout_secs: timeout,
            },
            IntentCommand::ExtractTableData { table, max_rows } => {
                Self::ExtractTableData { table, max_rows }
            }
            IntentCommand::StartRecording { output } => Self::StartRecording { output },
            IntentCommand::AssertCondition {
                assertion,
                element,
                expected,
            } => Self::AssertCondition {
                assertion,
                element,
                expected,
            },
            IntentCommand::Navigate { section, command } => Self::Navigate { section, command },
        }
    }
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// inn, kpp, ogrn, snils, phone, email, date, string or number.
    #[arg(value_parser = closed_set::<DataType>)]
    pub data_type: DataType,
    /// Variant rendering: legal, international, iso, uuid or float.
    #[arg(long)]
    pub format: Option<String>,
    /// Number of values to print.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// inn, kpp, ogrn or snils.
    #[arg(value_parser = closed_set::<DataType>)]
    pub data_type: DataType,
    /// Value to check.
    pub value: String,
}

fn closed_set<T>(value: &str) -> Result<T, String>
where
    T: FromStr<Err = bdd_forge::Error>,
{
    value.parse().map_err(|err: bdd_forge::Error| err.to_string())
}

pub(crate) fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::from_env()
        .wrap_err("failed to read configuration from the environment")?
        .apply_overrides(cli.log_level, cli.engine, cli.settings);
    init_logging(&config);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Parse(args) => handle_parse(&args),
        Commands::Steps(args) => handle_steps(&args),
        Commands::Validate(args) => handle_validate(&args),
        Commands::Synthesize(args) => handle_synthesize(args, &config),
        Commands::Generate(args) => handle_generate(&args),
        Commands::Check(args) => handle_check(&args),
    }
}

fn read_feature(path: &Path) -> Result<String> {
    load_feature(path).wrap_err_with(|| format!("failed to load {}", path.display()))
}

fn handle_parse(args: &ParseArgs) -> Result<ExitCode> {
    let features = parse(&read_feature(&args.file)?);
    let mut stdout = io::stdout();
    if args.json {
        write_json(&mut stdout, &features)?;
    } else {
        write_outline(&mut stdout, &features)?;
    }
    stdout.flush().wrap_err("failed to flush parse output")?;
    Ok(ExitCode::SUCCESS)
}

fn handle_steps(args: &StepsArgs) -> Result<ExitCode> {
    let steps = extract_steps(&read_feature(&args.file)?);
    let mut stdout = io::stdout();
    if !args.stubs {
        write_steps(&mut stdout, &steps)?;
        stdout.flush().wrap_err("failed to flush step listing")?;
        return Ok(ExitCode::SUCCESS);
    }
    let stubs = render_stubs(&steps);
    if let Some(path) = &args.output {
        write_stubs(path, &stubs)
            .wrap_err_with(|| format!("failed to write stubs to {}", path.display()))?;
        write_lines(
            &mut stdout,
            [format!("wrote {} stubs to {}", steps.len(), path.display())],
        )?;
    } else {
        write_text(&mut stdout, &stubs)?;
    }
    stdout.flush().wrap_err("failed to flush stub output")?;
    Ok(ExitCode::SUCCESS)
}

fn handle_validate(args: &ValidateArgs) -> Result<ExitCode> {
    let text = read_feature(&args.file)?;
    let report = parse_with_report(&text);
    let mut stdout = io::stdout();
    write_skipped(&mut stdout, &report.skipped)?;

    let mut ok = report.is_clean();
    let strict_error = args.strict.then(|| validate_strict(&text).err()).flatten();
    if let Some(err) = strict_error {
        write_lines(&mut stdout, [format!("strict: {err}")])?;
        ok = false;
    }
    if ok {
        let scenarios: usize = report.features.iter().map(|f| f.scenarios().len()).sum();
        write_lines(
            &mut stdout,
            [format!(
                "ok: {} feature(s), {scenarios} scenario(s)",
                report.features.len()
            )],
        )?;
    }
    stdout.flush().wrap_err("failed to flush validation report")?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn handle_synthesize(args: SynthesizeArgs, config: &CliConfig) -> Result<ExitCode> {
    let intent = Intent::from(args.intent);
    let document = synthesize(&intent)
        .wrap_err_with(|| format!("cannot synthesize a '{}' scenario", intent.name()))?;
    let text = document.to_string();
    let mut stdout = io::stdout();

    let Some(path) = args.output else {
        if !args.engine_args.is_empty() {
            bail!("--engine-arg is only supported together with --output");
        }
        write_text(&mut stdout, &text)?;
        stdout.flush().wrap_err("failed to flush synthesized feature")?;
        return Ok(ExitCode::SUCCESS);
    };

    let command_line = if config.engine.path.is_some() {
        Some(EngineInvocation::new(&config.engine, &path, &args.engine_args)?.command_line()?)
    } else if args.engine_args.is_empty() {
        None
    } else {
        bail!("--engine-arg requires an engine; set BDD_FORGE_ENGINE_PATH or pass --engine");
    };

    fs::write(&path, &text)
        .wrap_err_with(|| format!("failed to write feature to {}", path.display()))?;
    info!(path = %path.display(), intent = intent.name(), "wrote synthesized feature");
    let mut lines = vec![format!("wrote {}", path.display())];
    lines.extend(command_line);
    write_lines(&mut stdout, lines)?;
    stdout.flush().wrap_err("failed to flush synthesize output")?;
    Ok(ExitCode::SUCCESS)
}

fn handle_generate(args: &GenerateArgs) -> Result<ExitCode> {
    let mut rng: Box<dyn RngCore> = args.seed.map_or_else(
        || Box::new(rand::thread_rng()) as Box<dyn RngCore>,
        |seed| Box::new(StdRng::seed_from_u64(seed)),
    );
    let values = generate_many(
        rng.as_mut(),
        args.data_type,
        args.format.as_deref(),
        args.count,
    );
    let mut stdout = io::stdout();
    write_lines(&mut stdout, values)?;
    stdout.flush().wrap_err("failed to flush generated values")?;
    Ok(ExitCode::SUCCESS)
}

fn handle_check(args: &CheckArgs) -> Result<ExitCode> {
    let valid = verify(args.data_type, &args.value)?;
    let mut stdout = io::stdout();
    let verdict = if valid { "valid" } else { "invalid" };
    write_lines(&mut stdout, [format!("{verdict}: {}", args.value.trim())])?;
    stdout.flush().wrap_err("failed to flush check result")?;
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

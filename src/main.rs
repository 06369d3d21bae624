use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use creepymatrix::commands::compare::run_comparison;
use creepymatrix::commands::version::print_version;
use creepymatrix::settings::{LogFormat, Overrides, Settings, SettingsFile};
use creepymatrix::tracing_config::TracingConfig;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "creepymatrix",
    version,
    about = "Generate a script that diffs files shared by two directory trees",
    long_about = "Walks the source directory and, for every file that also exists at the \
    same relative path in the target directory, writes a `diff --unified --ignore-all-space` \
    command to an executable bash script. Paths containing any ignore pattern are skipped.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(
        long,
        global = true,
        help = "Settings file (default is $HOME/.creepymatrix.yaml)"
    )]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase verbosity")]
    verbose: u8,

    #[arg(long, global = true, value_enum, help = "Log format (default is text)")]
    log_format: Option<LogFormat>,

    #[arg(
        long,
        value_parser = clap::value_parser!(OsString),
        help = "Source project directory"
    )]
    source: Option<OsString>,

    #[arg(
        long,
        value_parser = clap::value_parser!(OsString),
        help = "Target project directory"
    )]
    target: Option<OsString>,

    #[arg(
        long,
        help = "Output bash script file, or - for stdout (default is compare_files.sh)"
    )]
    output: Option<String>,

    #[arg(
        long = "ignore",
        value_name = "PATTERN",
        help = "Substring to ignore, can be used multiple times (replaces the default list)"
    )]
    ignore: Vec<String>,

    #[arg(long, help = "Only compare when the target entry is a regular file")]
    regular_files_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "version",
        about = "Print the version number of creepymatrix",
        long_about = "Prints the package version, the build commit when known, and the platform."
    )]
    Version,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            verbose: (self.verbose > 0).then_some(self.verbose),
            log_format: self.log_format,
            source: self.source.clone().map(PathBuf::from),
            target: self.target.clone().map(PathBuf::from),
            output: self.output.clone(),
            ignore: (!self.ignore.is_empty()).then(|| self.ignore.clone()),
            regular_files_only: self.regular_files_only.then_some(true),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_file = SettingsFile::load(cli.config.as_deref())?;
    let settings = Settings::resolve(settings_file, |key| std::env::var(key).ok(), cli.overrides())?;

    let mut tracing_config = TracingConfig::new()
        .with_verbosity(settings.verbose)
        .with_format(settings.log_format);
    if let Some(env_filter) = std::env::var("RUST_LOG").ok().filter(|f| !f.trim().is_empty()) {
        tracing_config = tracing_config.with_env_filter(env_filter);
    }
    tracing_config.init()?;

    if let Some(path) = &settings.settings_file {
        tracing::info!(file = %path.display(), "Using config file");
    }

    match &cli.command {
        Some(Commands::Version) => print_version(&mut std::io::stdout())?,
        None => {
            let config = settings.comparison_config()?;
            let summary = run_comparison(&config, &settings.output)
                .context("error generating comparison script")?;

            tracing::debug!(%summary, "comparison finished");
        }
    }

    Ok(())
}

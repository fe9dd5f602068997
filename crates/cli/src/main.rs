mod jobconf;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use jobcompat_core::CompatError;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Hadoop jobconf name translation toolkit.
#[derive(Parser)]
#[command(
    name = "jobcompat",
    version,
    about = "Hadoop jobconf name translation toolkit"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug details to stderr
    #[arg(long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate property names to the form a Hadoop version expects
    Translate {
        /// Property names to translate
        #[arg(required = true)]
        names: Vec<String>,
        /// Target Hadoop version (e.g. 2.7.3)
        #[arg(long, env = "JOBCOMPAT_HADOOP_VERSION")]
        hadoop_version: String,
    },

    /// List every known name of a property
    Aliases {
        /// Property name
        name: String,
    },

    /// Read a property from the environment or a jobconf file, trying every alias
    Get {
        /// Property name
        name: String,
        /// JSON jobconf file to read instead of the environment
        #[arg(long)]
        jobconf: Option<PathBuf>,
        /// Value to print when the property is not set
        #[arg(long)]
        default: Option<String>,
    },

    /// Add translated names to a JSON jobconf file and print the result
    TranslateJobconf {
        /// Path to the JSON jobconf file
        file: PathBuf,
        /// Target Hadoop version; adds every known alias when omitted
        #[arg(long, env = "JOBCOMPAT_HADOOP_VERSION")]
        hadoop_version: Option<String>,
    },

    /// Check whether a version is at least a threshold
    VersionGte {
        /// Version to check
        version: String,
        /// Minimum version
        threshold: String,
    },

    /// Check whether a Hadoop version runs on YARN
    UsesYarn {
        /// Hadoop version
        version: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Translate {
            names,
            hadoop_version,
        } => {
            cmd_translate(&names, &hadoop_version, cli.output, cli.quiet);
        }
        Commands::Aliases { name } => {
            cmd_aliases(&name, cli.output);
        }
        Commands::Get {
            name,
            jobconf,
            default,
        } => {
            cmd_get(
                &name,
                jobconf.as_deref(),
                default.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::TranslateJobconf {
            file,
            hadoop_version,
        } => {
            cmd_translate_jobconf(&file, hadoop_version.as_deref(), cli.output, cli.quiet);
        }
        Commands::VersionGte { version, threshold } => {
            let result = jobcompat_core::version_at_least(&version, &threshold);
            print_bool(result, cli.output, cli.quiet);
        }
        Commands::UsesYarn { version } => {
            let result = jobcompat_core::uses_next_generation_runtime(&version);
            print_bool(result, cli.output, cli.quiet);
        }
    }
}

/// Route `tracing` events to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else if quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_translate(names: &[String], hadoop_version: &str, output: OutputFormat, quiet: bool) {
    let mut translations = Vec::with_capacity(names.len());
    for name in names {
        match jobcompat_core::translate(name, hadoop_version) {
            Ok(translated) => translations.push((name.as_str(), translated)),
            Err(e) => exit_with(&e, output, quiet),
        }
    }

    match output {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = translations
                .iter()
                .map(|(name, translated)| (name.to_string(), serde_json::json!(translated)))
                .collect();
            print_json(&serde_json::json!({
                "hadoop_version": hadoop_version,
                "translations": map,
            }));
        }
        OutputFormat::Text => {
            for (_, translated) in translations {
                println!("{}", translated);
            }
        }
    }
}

fn cmd_aliases(name: &str, output: OutputFormat) {
    let aliases = jobcompat_core::all_aliases(name);
    match output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "name": name,
            "aliases": aliases,
        })),
        OutputFormat::Text => {
            for alias in aliases {
                println!("{}", alias);
            }
        }
    }
}

fn cmd_get(
    name: &str,
    jobconf_path: Option<&Path>,
    default: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) {
    let value = match jobconf_path {
        Some(path) => {
            let conf = match jobconf::load(path) {
                Ok(conf) => conf,
                Err(msg) => {
                    report_error(&msg, output, quiet);
                    process::exit(1);
                }
            };
            jobcompat_core::jobconf_from_map(&conf, name, default)
        }
        None => jobcompat_core::jobconf_from_env(name, default),
    };

    match (value, output) {
        (Some(value), OutputFormat::Json) => print_json(&serde_json::json!({
            "name": name,
            "value": value,
        })),
        (Some(value), OutputFormat::Text) => println!("{}", value),
        (None, _) => {
            let msg = format!("error: jobconf variable '{}' is not set", name);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

fn cmd_translate_jobconf(
    path: &Path,
    hadoop_version: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) {
    let conf = match jobconf::load(path) {
        Ok(conf) => conf,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let translated = match jobcompat_core::translate_mapping(&conf, hadoop_version) {
        Ok(t) => t,
        Err(e) => exit_with(&e, output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&serde_json::json!(translated)),
        OutputFormat::Text => print_json(&serde_json::json!(translated.jobconf)),
    }
}

fn print_bool(result: Result<bool, CompatError>, output: OutputFormat, quiet: bool) {
    let value = match result {
        Ok(v) => v,
        Err(e) => exit_with(&e, output, quiet),
    };
    match output {
        OutputFormat::Json => print_json(&serde_json::json!({ "result": value })),
        OutputFormat::Text => println!("{}", value),
    }
}

fn print_json(value: &serde_json::Value) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

fn exit_with(err: &CompatError, output: OutputFormat, quiet: bool) -> ! {
    report_error(&format!("error: {}", err), output, quiet);
    process::exit(1);
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

use std::path::Path;

use clap::{Parser, Subcommand};

use sanscript::trace_init::init_tracing;
use sanscript_cli::commands::{convert_ops, scheme_ops};

#[derive(Parser)]
#[command(name = "sanscript", about = "Transliterate between Indic scripts and romanizations")]
struct Cli {
    /// Directory with extra scheme tables (*.toml)
    #[arg(long, global = true)]
    scheme_dir: Option<String>,
    /// Write a JSON trace to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text between two schemes
    Convert {
        /// Source scheme
        #[arg(long)]
        from: String,
        /// Target scheme
        #[arg(long)]
        to: String,
        /// Text to convert (reads stdin line by line when omitted)
        text: Option<String>,
        /// Override an option, e.g. togglers=##,%% (repeatable)
        #[arg(long = "option", value_name = "KEY=VALUES")]
        option: Vec<String>,
        /// TOML file with options
        #[arg(long = "options", value_name = "FILE")]
        options_file: Option<String>,
    },
    /// List registered schemes
    Schemes {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export or validate scheme tables
    Scheme {
        #[command(subcommand)]
        command: SchemeCommand,
    },
    /// Report scheme pairs whose groups differ in length
    Check,
}

#[derive(Subcommand)]
enum SchemeCommand {
    /// Print a built-in scheme as TOML
    Export {
        /// Scheme identifier
        id: String,
    },
    /// Validate a custom scheme TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = cli
        .trace_dir
        .as_deref()
        .map(|dir| init_tracing(Path::new(dir)));

    match cli.command {
        Command::Convert {
            from,
            to,
            text,
            option,
            options_file,
        } => {
            let options = convert_ops::build_options(options_file.as_deref(), &option)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            let registry = convert_ops::open_registry(cli.scheme_dir.as_deref());
            convert_ops::convert_cmd(&registry, options, &from, &to, text.as_deref());
        }
        Command::Schemes { json } => {
            let registry = convert_ops::open_registry(cli.scheme_dir.as_deref());
            scheme_ops::list_cmd(&registry, json);
        }
        Command::Scheme { command } => match command {
            SchemeCommand::Export { id } => scheme_ops::export_cmd(&id),
            SchemeCommand::Validate { file } => scheme_ops::validate_cmd(&file),
        },
        Command::Check => {
            let registry = convert_ops::open_registry(cli.scheme_dir.as_deref());
            scheme_ops::check_cmd(&registry);
        }
    }
}

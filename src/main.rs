//! freitag CLI entry point.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use freitag_rs::commands::{self, BatchSummary};
use freitag_rs::common::DEFAULT_FORMAT;
use freitag_rs::operations::{ExtractOperation, HumanizeOperation, Operation, RenameOperation, SetOperation};
use freitag_rs::templates::FormatTemplate;

/// A simple command line tool to tag and rename mp3s.
#[derive(Parser, Debug)]
#[command(name = "freitag", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (repeat for more: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each file's name formatted from its tags
    Get {
        #[command(flatten)]
        target: Target,
    },
    /// Write tag values given on the command line
    Set {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        tags: TagArgs,
    },
    /// Rename each file from its tags
    Rename {
        #[command(flatten)]
        target: Target,
    },
    /// Fill tags parsed out of each file's name
    Extract {
        #[command(flatten)]
        target: Target,
        /// Also humanize the extracted album/artist/title tags
        #[arg(long)]
        humanize: bool,
    },
    /// Replace underscores and title-case the album/artist/title tags
    Humanize {
        #[command(flatten)]
        target: Target,
    },
}

#[derive(Args, Debug)]
struct Target {
    /// Files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Format pattern mapping tags to a path
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    format: String,
}

#[derive(Args, Debug)]
struct TagArgs {
    /// The album name
    #[arg(short = 'b', long)]
    album: Option<String>,

    /// The artist name
    #[arg(short = 'a', long)]
    artist: Option<String>,

    /// The track title
    #[arg(short = 't', long)]
    title: Option<String>,

    /// The disc number
    #[arg(short = 'd', long)]
    discnumber: Option<String>,

    /// The track number
    #[arg(short = 'n', long)]
    tracknumber: Option<String>,

    /// The track date (year)
    #[arg(short = 'y', long)]
    date: Option<String>,
}

impl TagArgs {
    fn into_map(self) -> HashMap<String, String> {
        let mut tags = HashMap::new();
        for (name, value) in [
            ("album", self.album),
            ("artist", self.artist),
            ("title", self.title),
            ("discnumber", self.discnumber),
            ("tracknumber", self.tracknumber),
            ("date", self.date),
        ] {
            if let Some(value) = value {
                tags.insert(name.to_string(), value);
            }
        }
        tags
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let summary = run(cli.command);
    if summary.failed > 0 {
        eprintln!("{} of {} files failed", summary.failed, summary.total);
    }
    ExitCode::from(summary.exit_code())
}

fn run(command: Command) -> BatchSummary {
    match command {
        Command::Get { target } => commands::get(&target.files, &FormatTemplate::new(&target.format)),
        Command::Set { target, tags } => {
            let ops: Vec<Box<dyn Operation>> = vec![Box::new(SetOperation::new(tags.into_map()))];
            commands::apply(&target.files, &ops)
        }
        Command::Rename { target } => {
            let ops: Vec<Box<dyn Operation>> = vec![Box::new(RenameOperation::new(FormatTemplate::new(&target.format)))];
            commands::apply(&target.files, &ops)
        }
        Command::Extract { target, humanize } => {
            let mut ops: Vec<Box<dyn Operation>> = vec![Box::new(ExtractOperation::new(FormatTemplate::new(&target.format)))];
            if humanize {
                ops.push(Box::new(HumanizeOperation));
            }
            commands::apply(&target.files, &ops)
        }
        Command::Humanize { target } => {
            let ops: Vec<Box<dyn Operation>> = vec![Box::new(HumanizeOperation)];
            commands::apply(&target.files, &ops)
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();
}

use std::{
    collections::{hash_map::Entry, HashMap},
    error::Error,
    io::{self, Write},
    ops::Range,
    path::{Path, PathBuf},
};

use clap::Parser;
use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFiles,
    term::{
        self,
        termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor},
    },
};
use patmatch::{
    binary_search, bubble_sort,
    kmp::{self, TracingObserver},
    scan::Matches,
    stack, Matcher,
};
use regex::Regex;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Log at trace level. `RUST_LOG` still applies.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print every character position where PATTERN occurs in TEXT, overlapping occurrences included.
    Search(SearchArgs),
    /// Print the failure table of PATTERN.
    Table { pattern: String },
    /// Search every file under PATH for PATTERN. Ignore files are honored.
    Grep(GrepArgs),
    /// Bubble sort a list of integers.
    Sort {
        #[arg(long)]
        descending: bool,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Binary search TARGET in a list of integers. The list is sorted first.
    Bsearch {
        #[arg(allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Evaluate a space separated postfix expression, e.g. "2 3 + 4 *".
    Postfix { expression: String },
    /// Check that the brackets in EXPRESSION are balanced.
    Balanced { expression: String },
}

#[derive(clap::Args)]
struct SearchArgs {
    text: String,
    pattern: String,
    /// Only report the first occurrence.
    #[arg(long)]
    first: bool,
    /// Log every comparison made by the search.
    #[arg(long)]
    trace: bool,
}

#[derive(clap::Args)]
struct GrepArgs {
    pattern: String,
    #[arg(default_value = "./")]
    path: PathBuf,
    /// Only search files whose path matches the given regex.
    #[arg(long)]
    path_pattern: Option<Regex>,
}

type FileId = usize;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let trace = cli.verbose || matches!(&cli.command, Command::Search(args) if args.trace);
    init_tracing(trace);

    match cli.command {
        Command::Search(args) => search(args)?,
        Command::Table { pattern } => {
            println!("{:?}", kmp::build_failure_table(pattern.as_bytes()));
        }
        Command::Grep(args) => grep(args)?,
        Command::Sort { descending, values } => {
            let sorted = if descending {
                bubble_sort::bubble_sort_descending(&values)
            } else {
                bubble_sort::bubble_sort(&values)
            };
            println!("{sorted:?}");
        }
        Command::Bsearch { target, values } => {
            let sorted = bubble_sort::bubble_sort(&values);
            match binary_search::occurrence_range(&sorted, &target) {
                Some((first, last)) => println!("{sorted:?}\nfound at {first}..={last}"),
                None => {
                    let idx = binary_search::insertion_point(&sorted, &target);
                    println!("{sorted:?}\nnot found, would insert at {idx}");
                    std::process::exit(1);
                }
            }
        }
        Command::Postfix { expression } => {
            println!("{}", stack::evaluate_postfix(&expression)?);
        }
        Command::Balanced { expression } => {
            let balanced = stack::balanced_parentheses(&expression);
            println!("{balanced}");
            if !balanced {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_tracing(trace: bool) {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&rust_log, trace))
        .with_writer(io::stderr)
        .init();
}

/// `rust_log` wins over the WARN default; `trace` raises everything to TRACE.
fn log_filter(rust_log: &str, trace: bool) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log);
    if trace {
        filter.add_directive(LevelFilter::TRACE.into())
    } else {
        filter
    }
}

fn search(args: SearchArgs) -> Result<(), Box<dyn Error>> {
    let matcher = Matcher::<char>::for_chars(&args.pattern)?;
    let text: Vec<char> = args.text.chars().collect();
    if args.first {
        match matcher.search_first(&text) {
            Some(idx) => println!("{idx}"),
            None => {
                println!("not found");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let positions = if args.trace {
        matcher.search_observed(&text, &mut TracingObserver)
    } else {
        matcher.search_all(&text)
    };
    println!("{positions:?}");
    if positions.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn grep(args: GrepArgs) -> Result<(), Box<dyn Error>> {
    let matcher: Matcher = args.pattern.parse()?;
    let matches = Matches::collect(&args.path, &matcher, args.path_pattern.as_ref())?;
    if matches.is_empty() {
        std::process::exit(1);
    }

    let mut db = FilesDB::new();
    let mut labels = vec![];
    for file in &matches.files {
        for span in file.spans() {
            labels.push(db.label(&file.path, span.clone())?);
        }
    }
    let message = format!(
        "found {} {} of `{}` in {} {}",
        matches.total(),
        pluralize("occurrence", matches.total()),
        args.pattern,
        matches.files.len(),
        pluralize("file", matches.files.len()),
    );
    let diagnostic = Diagnostic::note()
        .with_message(message)
        .with_labels(labels);
    Emitter::new().emit(&db, diagnostic)?;

    let stdout = &mut StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    for file in &matches.files {
        writeln!(stdout, "{}: {}", file.path.display(), file.spans().len())?;
    }
    stdout.reset()?;
    Ok(())
}

struct Emitter {
    writer: StandardStream,
    config: codespan_reporting::term::Config,
}

impl Emitter {
    fn new() -> Self {
        Self {
            writer: StandardStream::stdout(ColorChoice::Auto),
            config: codespan_reporting::term::Config::default(),
        }
    }

    fn emit(
        &mut self,
        db: &FilesDB,
        diagnostic: Diagnostic<FileId>,
    ) -> Result<(), codespan_reporting::files::Error> {
        term::emit(
            &mut self.writer.lock(),
            &self.config,
            &db.files,
            &diagnostic,
        )
    }
}

struct FilesDB {
    files: SimpleFiles<String, String>,
    path_to_file_id: HashMap<PathBuf, FileId>,
}

impl FilesDB {
    fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            path_to_file_id: HashMap::new(),
        }
    }

    fn label(&mut self, path: &Path, span: Range<usize>) -> io::Result<Label<FileId>> {
        let file_id = self.try_get_or_insert(path, || std::fs::read_to_string(path))?;
        Ok(Label::primary(file_id, span))
    }

    fn try_get_or_insert<E>(
        &mut self,
        path: &Path,
        f: impl Fn() -> Result<String, E>,
    ) -> Result<FileId, E> {
        match self.path_to_file_id.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                let file_id = self.files.add(path.display().to_string(), f()?);
                entry.insert(file_id);
                Ok(file_id)
            }
        }
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

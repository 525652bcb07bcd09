//! Textel binary: the interactive read-eval-print loop.
//!
//! Thin glue over the library: read a line, tokenize it on whitespace, hand
//! the tokens to the session, and render the outcome — the usage guide, the
//! image text, or a framed error banner per failure category. All editing
//! semantics live in the library.

use clap::Parser;
use crossterm::style::Stylize;
use flexi_logger::{Logger, LoggerHandle};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use textel::{Category, Command, Error, Reply, Session};

const PROMPT: &str = "(press 'G' for guidance)> ";

const HEADER: &str = "\
--------------------------------------------------------------
--------------------  TEXT IMAGE COMMANDS  -------------------
--------------------------------------------------------------
";

const GUIDE: &str = "\
-----------------------------------------------------------

 Edit a text document as an emulation of a 2D image.
 Coordinates are 1-indexed; 'O' marks an empty cell.

 Usage:

 G                 Print this guide
 I M N             Initialize an empty M x N image (columns x rows)
 C                 Reset every cell of the image to 'O'
 L X Y C           Set the cell at (X, Y) to C
 V X Y1 Y2 C       Paint column X from row Y1 to row Y2 with C
 H X1 X2 Y C       Paint row Y from column X1 to column X2 with C
 K X1 Y1 X2 Y2 C   Paint the rectangle with top-left corner (X1, Y1)
                   and bottom-right corner (X2, Y2) with C
 F X Y C           Flood-fill the empty region containing (X, Y) with C
 S 'name'          Save the image to the file name (quotes required)
 P                 Print the image
 X                 Leave the editor

-----------------------------------------------------------
";

/// Command-line surface of the editor.
#[derive(Parser)]
#[command(version, about = "A line-driven editor for rectangular text images")]
struct Cli {
    #[arg(help = "Command script to run instead of an interactive session.")]
    script: Option<PathBuf>,
}

/// Whether the session keeps reading input.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logger = init_logging();

    match cli.script {
        Some(path) => run_script(&path),
        None => run_interactive(),
    }
}

/// Start the logger; level comes from the environment, warnings by default.
fn init_logging() -> Option<LoggerHandle> {
    match Logger::try_with_env_or_str("warn") {
        Ok(logger) => match logger.log_to_stderr().start() {
            Ok(handle) => Some(handle),
            Err(err) => {
                eprintln!("failed to start logger: {err}");
                None
            }
        },
        Err(err) => {
            eprintln!("failed to configure logger: {err}");
            None
        }
    }
}

fn run_interactive() -> ExitCode {
    print!("{HEADER}");
    println!("{GUIDE}");

    let mut session = Session::new();
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };
        if dispatch(&mut session, &line) == Flow::Quit {
            return ExitCode::SUCCESS;
        }
        prompt();
    }
    ExitCode::SUCCESS
}

fn run_script(path: &Path) -> ExitCode {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read script '{}': {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if dispatch(&mut session, line) == Flow::Quit {
            break;
        }
    }
    ExitCode::SUCCESS
}

/// Run one input line against the session and render its outcome.
fn dispatch(session: &mut Session, line: &str) -> Flow {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match Command::parse(&tokens).and_then(|command| session.execute(command)) {
        Ok(Reply::Done) => Flow::Continue,
        Ok(Reply::Image(text)) => {
            println!("{text}");
            Flow::Continue
        }
        Ok(Reply::Guide) => {
            println!("{GUIDE}");
            Flow::Continue
        }
        Ok(Reply::Quit) => {
            println!("{}", "Goodbye :'(".cyan());
            Flow::Quit
        }
        Err(err) => {
            report(&err);
            Flow::Continue
        }
    }
}

fn prompt() {
    print!("{PROMPT}");
    let _ = io::stdout().flush();
}

/// Render one framed error banner and keep the session going.
fn report(err: &Error) {
    let (title, hint) = banner(err.category());
    println!("----------------------    ERROR    -------------------------");
    println!(" >  {}", title.red().bold());
    println!(" >     {hint}");
    println!(" >     ({err})");
    println!("-------------------------------------------------------------");
    println!();
}

const fn banner(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Command => ("INVALID COMMAND", "the input does not start with a known command"),
        Category::Syntax => (
            "INVALID COMMAND SYNTAX",
            "the command was given the wrong number of arguments",
        ),
        Category::Empty => (
            "UNINITIALIZED IMAGE",
            "this command needs an initialized image; run I first",
        ),
        Category::Value => (
            "INVALID COMMAND INPUT",
            "dimensions take integers and cell values take a single character",
        ),
        Category::Bounds => (
            "INVALID IMAGE BOUNDS",
            "positions must lie inside the current image",
        ),
        Category::Interval => (
            "INVALID POSITION INTERVAL",
            "the first endpoint must not be past the second",
        ),
        Category::Filename => (
            "INVALID FILENAME FORMAT",
            "quote the file name and use at least 3 characters",
        ),
        Category::File => (
            "FILE WRITE FAILED",
            "the image could not be written to the destination",
        ),
    }
}

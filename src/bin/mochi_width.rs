//! Mochi Width
//!
//! Measures the terminal width of each input line.
//! Reads from files or stdin and prints widths, grapheme clusters,
//! per-codepoint classification or wrapped text.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;

use mochi_width::{Config, Grapheme, VersionDataset};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Width,
    TextWidth,
    Graphemes,
    Codepoints,
    Wrap(usize),
    ListVersions,
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct LineRecord<'a> {
    line: &'a str,
    width: isize,
}

#[derive(Serialize)]
struct CodepointRecord {
    codepoint: String,
    width: i8,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut mode = Mode::Width;
    let mut output_format = OutputFormat::Text;
    let mut reverse = false;
    let mut version: Option<String> = None;
    let mut tables: Option<PathBuf> = None;
    let mut inputs: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--text-width" => mode = Mode::TextWidth,
            "-g" | "--graphemes" => mode = Mode::Graphemes,
            "-r" | "--reverse" => reverse = true,
            "-c" | "--codepoints" => mode = Mode::Codepoints,
            "-l" | "--list-versions" => mode = Mode::ListVersions,
            "-j" | "--json" => output_format = OutputFormat::Json,
            "-w" | "--wrap" => {
                i += 1;
                match args.get(i).and_then(|n| n.parse().ok()) {
                    Some(width) => mode = Mode::Wrap(width),
                    None => {
                        eprintln!("--wrap needs a width in cells");
                        return ExitCode::FAILURE;
                    },
                }
            },
            "-u" | "--unicode-version" => {
                i += 1;
                version = args.get(i).cloned();
            },
            "--tables" => {
                i += 1;
                tables = args.get(i).map(PathBuf::from);
            },
            "-h" | "--help" => {
                print_help();
                return ExitCode::SUCCESS;
            },
            arg if arg.starts_with('-') && arg != "-" => {
                eprintln!("Unknown option '{}'", arg);
                return ExitCode::FAILURE;
            },
            arg => inputs.push(arg.to_string()),
        }
        i += 1;
    }

    // Command line beats environment beats config file
    let mut config = Config::load_or_default().with_env();
    if version.is_some() {
        config = config.with_version_override(version.as_deref());
    }
    if tables.is_some() {
        config.extra_tables = tables;
    }

    let collection = match config.datasets() {
        Ok(collection) => collection,
        Err(e) => {
            eprintln!("Error loading tables: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if mode == Mode::ListVersions {
        for version in collection.versions() {
            println!("{}", version);
        }
        return ExitCode::SUCCESS;
    }

    let dataset = config.select(&collection);
    tracing::debug!(version = %dataset.version, "Selected Unicode tables");

    let input = match read_input(&inputs) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for line in input.lines() {
        if let Err(message) = report_line(&config, dataset, mode, output_format, reverse, line) {
            eprintln!("{}", message);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_input(inputs: &[String]) -> io::Result<String> {
    if inputs.is_empty() || inputs.iter().all(|path| path == "-") {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        return Ok(data);
    }
    let mut data = String::new();
    for path in inputs {
        let content = std::fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("'{}': {}", path, e)))?;
        data.push_str(&content);
        if !content.ends_with('\n') {
            data.push('\n');
        }
    }
    Ok(data)
}

fn report_line(
    config: &Config,
    dataset: &VersionDataset,
    mode: Mode,
    format: OutputFormat,
    reverse: bool,
    line: &str,
) -> Result<(), String> {
    match mode {
        Mode::Width | Mode::TextWidth => {
            let width = if mode == Mode::TextWidth {
                config
                    .measure(dataset)
                    .width(line)
                    .map_err(|e| format!("Error measuring {:?}: {}", line, e))? as isize
            } else {
                dataset.wcswidth(line, None)
            };
            match format {
                OutputFormat::Text => println!("{}\t{}", width, line),
                OutputFormat::Json => print_json(&LineRecord { line, width })?,
            }
        },
        Mode::Graphemes => {
            let graphemes: Vec<Grapheme<'_>> = if reverse {
                dataset.graphemes_rev(line).collect()
            } else {
                dataset.graphemes(line).collect()
            };
            match format {
                OutputFormat::Text => {
                    for g in &graphemes {
                        println!("{}\t{}\t{:?}", g.start, g.width, g.text);
                    }
                },
                OutputFormat::Json => print_json(&graphemes)?,
            }
        },
        Mode::Codepoints => {
            let records: Vec<CodepointRecord> = line
                .chars()
                .map(|c| CodepointRecord {
                    codepoint: format!("U+{:04X}", c as u32),
                    width: dataset.char_width(c),
                })
                .collect();
            match format {
                OutputFormat::Text => {
                    for record in &records {
                        println!("{}\t{}", record.codepoint, record.width);
                    }
                },
                OutputFormat::Json => print_json(&records)?,
            }
        },
        Mode::Wrap(width) => {
            let lines = config.wrapper(dataset, width).wrap(line);
            match format {
                OutputFormat::Text => {
                    for wrapped in &lines {
                        println!("{}", wrapped);
                    }
                },
                OutputFormat::Json => print_json(&lines)?,
            }
        },
        Mode::ListVersions => {},
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Error serializing: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn print_help() {
    println!("Mochi Width");
    println!();
    println!("Usage: mochi-width [OPTIONS] [FILE...]");
    println!();
    println!("Options:");
    println!("  -t, --text-width             Follow tabs, backspace and cursor movement");
    println!("  -g, --graphemes              Print each grapheme cluster and its width");
    println!("  -r, --reverse                With --graphemes, print clusters right to left");
    println!("  -c, --codepoints             Print the width of each codepoint");
    println!("  -w, --wrap <N>               Wrap each line to N cells");
    println!("  -j, --json                   Output JSON records");
    println!("  -u, --unicode-version <V>    Unicode version (default: latest)");
    println!("      --tables <PATH>          Load extra Unicode tables from JSON");
    println!("  -l, --list-versions          List available Unicode versions");
    println!("  -h, --help                   Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!("UNICODE_VERSION and ~/.config/mochi/width.json also select the version.");
    println!();
    println!("Examples:");
    println!("  echo 'コンニチハ' | mochi-width");
    println!("  mochi-width --graphemes --json notes.txt");
    println!("  mochi-width -u 9.0 --wrap 40 README.md");
}

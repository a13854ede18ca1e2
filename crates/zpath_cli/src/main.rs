use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        "zpath {VERSION} - JSONPath query tool

Usage: zpath [OPTIONS] <PATH> [FILE]

Arguments:
  <PATH>     JSONPath query (e.g. \"$.store.book[?@.price < 10]\")
  [FILE]     Input JSON file (reads from stdin if omitted)

Options:
  -h, --help     Show this help message
  -V, --version  Show version"
    );
}

fn print_version() {
    println!("zpath {VERSION}");
}

enum ParsedArgs {
    Help,
    Version,
    Query { path: String, file: Option<String> },
}

fn parse_args() -> Result<ParsedArgs, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return Err("missing required argument: <PATH>\n\nUsage: zpath [OPTIONS] <PATH> [FILE]\n\nFor more information, try '--help'".to_string());
    }

    let mut positional = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParsedArgs::Help),
            "-V" | "--version" => return Ok(ParsedArgs::Version),
            s if s.starts_with('-') => {
                return Err(format!("unknown option: {s}\n\nUsage: zpath [OPTIONS] <PATH> [FILE]\n\nFor more information, try '--help'"));
            }
            _ => positional.push(arg.clone()),
        }
    }

    match positional.len() {
        0 => Err("missing required argument: <PATH>\n\nUsage: zpath [OPTIONS] <PATH> [FILE]\n\nFor more information, try '--help'".to_string()),
        1 => Ok(ParsedArgs::Query {
            path: positional.into_iter().next().unwrap_or_default(),
            file: None,
        }),
        2 => {
            let mut iter = positional.into_iter();
            Ok(ParsedArgs::Query {
                path: iter.next().unwrap_or_default(),
                file: iter.next(),
            })
        }
        _ => Err("too many arguments\n\nUsage: zpath [OPTIONS] <PATH> [FILE]\n\nFor more information, try '--help'".to_string()),
    }
}

fn read_input(file: Option<&str>) -> Result<String, String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("error reading file '{path}': {e}"))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("error reading stdin: {e}"))?;
            Ok(buffer)
        }
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    match args {
        ParsedArgs::Help => {
            print_help();
            Ok(())
        }
        ParsedArgs::Version => {
            print_version();
            Ok(())
        }
        ParsedArgs::Query { path, file } => {
            let input = read_input(file.as_deref())?;

            let results = zpath_core::query(&input, &path).map_err(|e| e.to_string())?;

            println!("{}", zpath_core::format_results(&results));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zpath: {e}");
            ExitCode::FAILURE
        }
    }
}

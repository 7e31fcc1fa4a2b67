// Command-line interface for Praat TextGrid files
//
// This binary provides commands for converting, inspecting and transcoding
// TextGrid files. The core capabilities come from the textgrid crate; this
// layer only wires files, flags and configuration to the library surface.
//
// Converting:
//
// The source encoding is auto-detected from the file content (never from
// the extension — all three encodings share ".TextGrid"), overridable with
// an explicit --from flag.
// Usage:
//  textgrid <input> [--to <format>] [--from <format>] [-o <file>]   - Convert (default)
//  textgrid convert <input> [--to <format>] [-o <file>]             - Same, explicit
//  textgrid inspect <path> [--json]      - Show the tier structure
//  textgrid transcode <text> [--to-praat] [--retain-diacritics]
//  textgrid export-csv <input> --tier <name> [-o <file>]
//  textgrid import-csv <csv> --grid <input> --tier <name> -o <file>

mod csv;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::process;
use textgrid::{Direction, FormatRegistry, SerializedGrid, TextGrid};
use textgrid_config::{Loader, TextgridConfig};

const SUBCOMMANDS: &[&str] = &[
    "convert",
    "inspect",
    "transcode",
    "export-csv",
    "import-csv",
    "help",
];

fn build_cli() -> Command {
    Command::new("textgrid")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting Praat TextGrid files")
        .long_about(
            "textgrid is a command-line tool for working with Praat TextGrid files.\n\n\
            Commands:\n  \
            - convert:    Rewrite a file in another encoding (long, short, binary)\n  \
            - inspect:    Show the tier structure, optionally as JSON\n  \
            - transcode:  Convert label text between Praat notation and Unicode\n  \
            - export-csv: Dump one tier as CSV rows\n  \
            - import-csv: Add a tier from CSV rows\n\n\
            Examples:\n  \
            textgrid recording.TextGrid --to binary -o recording.bin.TextGrid\n  \
            textgrid inspect recording.TextGrid --json\n  \
            textgrid transcode '\\sw' ",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a textgrid.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between TextGrid encodings (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source encoding (auto-detected from content if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target encoding: long, short or binary (default from config)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout for text encodings)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the tier structure of a TextGrid file")
                .arg(
                    Arg::new("path")
                        .help("Path to the TextGrid file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the full annotation model as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("transcode")
                .about("Convert label text between Praat notation and Unicode")
                .arg(
                    Arg::new("text")
                        .help("The text to transcode")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to-praat")
                        .long("to-praat")
                        .help("Convert Unicode to Praat notation instead of the reverse")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("retain-diacritics")
                        .long("retain-diacritics")
                        .help("Keep combining diacritics instead of stripping them")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export-csv")
                .about("Dump one tier as CSV rows (label;xmin;xmax or label;time)")
                .arg(
                    Arg::new("input")
                        .help("Input TextGrid file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("tier")
                        .long("tier")
                        .help("Name of the tier to export")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("import-csv")
                .about("Add a tier from CSV rows to an existing TextGrid")
                .arg(
                    Arg::new("csv")
                        .help("CSV file with label;xmin;xmax or label;time rows")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("grid")
                        .long("grid")
                        .help("The TextGrid file to add the tier to")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("tier")
                        .long("tier")
                        .help("Name for the new tier")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output encoding (default from config)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // If the first argument is not a subcommand, inject "convert" so that
    // `textgrid file.TextGrid --to short` works without naming it.
    let mut args: Vec<String> = std::env::args().collect();
    if args.len() > 1
        && !args[1].starts_with('-')
        && !SUBCOMMANDS.contains(&args[1].as_str())
    {
        args.insert(1, "convert".to_string());
    }

    let matches = build_cli().get_matches_from(args);
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub)) => {
            let input = sub.get_one::<String>("input").expect("input is required");
            let from = sub.get_one::<String>("from").map(|s| s.as_str());
            let to = sub
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or(&config.convert.default_format);
            let output = sub.get_one::<String>("output").map(|s| s.as_str());
            handle_convert(input, from, to, output);
        }
        Some(("inspect", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            handle_inspect(path, sub.get_flag("json"));
        }
        Some(("transcode", sub)) => {
            let text = sub.get_one::<String>("text").expect("text is required");
            let direction = if sub.get_flag("to-praat") {
                Direction::ToPraat
            } else {
                Direction::ToUnicode
            };
            let retain = sub.get_flag("retain-diacritics") || config.transcode.retain_diacritics;
            println!("{}", textgrid::transcode(text, direction, retain));
        }
        Some(("export-csv", sub)) => {
            let input = sub.get_one::<String>("input").expect("input is required");
            let tier = sub.get_one::<String>("tier").expect("tier is required");
            let output = sub.get_one::<String>("output").map(|s| s.as_str());
            handle_export_csv(input, tier, output, &config);
        }
        Some(("import-csv", sub)) => {
            let csv_path = sub.get_one::<String>("csv").expect("csv is required");
            let grid_path = sub.get_one::<String>("grid").expect("grid is required");
            let tier = sub.get_one::<String>("tier").expect("tier is required");
            let to = sub
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or(&config.convert.default_format);
            let output = sub.get_one::<String>("output").expect("output is required");
            handle_import_csv(csv_path, grid_path, tier, to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            process::exit(1);
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TextgridConfig {
    let loader = Loader::new().with_optional_file("textgrid.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        process::exit(1);
    })
}

fn read_grid(path: &str, from: Option<&str>) -> TextGrid {
    let data = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        process::exit(1);
    });
    let registry = FormatRegistry::default();
    let result = match from {
        Some(format) => registry.decode(&data, format),
        None => registry.decode_auto(&data),
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error decoding '{path}': {e}");
        process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert(input: &str, from: Option<&str>, to: &str, output: Option<&str>) {
    let registry = FormatRegistry::default();
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let grid = read_grid(input, from);
    let result = registry.encode(&grid, to).unwrap_or_else(|e| {
        eprintln!("Error encoding as {to}: {e}");
        process::exit(1);
    });

    match (output, result) {
        (Some(path), data) => {
            fs::write(path, data.into_bytes()).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                process::exit(1);
            });
        }
        (None, SerializedGrid::Text(text)) => {
            print!("{text}");
        }
        (None, SerializedGrid::Binary(_)) => {
            eprintln!("The binary encoding requires an output file. Use -o <path>.");
            process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect(path: &str, json: bool) {
    let grid = read_grid(path, None);
    if json {
        let rendered = serde_json::to_string_pretty(&grid).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    println!(
        "TextGrid {} .. {} ({} tiers)",
        grid.xmin(),
        grid.xmax(),
        grid.len()
    );
    for (index, (name, tier)) in grid.iter().enumerate() {
        let unit = if tier.is_point_tier() {
            "points"
        } else {
            "intervals"
        };
        println!(
            "  {}. {} ({}, {} {})",
            index + 1,
            name,
            tier.tier_type(),
            tier.len(),
            unit
        );
    }
}

/// Handle the export-csv command
fn handle_export_csv(input: &str, tier: &str, output: Option<&str>, config: &TextgridConfig) {
    let grid = read_grid(input, None);
    let rows = csv::export_tier(&grid, tier, config.csv.delimiter).unwrap_or_else(|e| {
        eprintln!("Error exporting tier: {e}");
        process::exit(1);
    });
    match output {
        Some(path) => {
            fs::write(path, rows).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                process::exit(1);
            });
        }
        None => print!("{rows}"),
    }
}

/// Handle the import-csv command
fn handle_import_csv(
    csv_path: &str,
    grid_path: &str,
    tier_name: &str,
    to: &str,
    output: &str,
    config: &TextgridConfig,
) {
    let content = fs::read_to_string(csv_path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{csv_path}': {e}");
        process::exit(1);
    });
    let tier = csv::import_tier(&content, config.csv.delimiter).unwrap_or_else(|e| {
        eprintln!("Error importing CSV: {e}");
        process::exit(1);
    });

    let mut grid = read_grid(grid_path, None);
    if let Err(e) = grid.insert_tier(tier_name, tier) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    if let Err(e) = textgrid::write(&grid, output, to) {
        eprintln!("Error writing '{output}': {e}");
        process::exit(1);
    }
}

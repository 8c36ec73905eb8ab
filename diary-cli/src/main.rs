// Command-line interface for the diary markup engine
//
// The web application renders submissions once, when they are created, and shows previews on
// the front page. This binary exposes the same operations for scripting and for checking how a
// piece of text will come out.
//
// Usage:
//  diary <input> [-o <file>]                    - Render raw text (default)
//  diary render <input> [-o <file>]             - Same as above (explicit)
//  diary preview <input>                        - Listing preview of rendered HTML
//  diary entry <input> --author <name>          - Compose a stored entry, printed as JSON
//  diary list <entries.json> [--page N]         - Front page over stored entries
//  diary --list-rules                           - Show the markup rules in order
//
// <input> may be "-" for stdin. Files use plain newlines; they are converted to the "\r\n" a
// browser form submits before rendering.
//
// Extra Parameters:
//
// Configuration can be overridden per run with --extra-<parameter-name> <value>:
//  link-class, max-input-length, preview-chars, ellipsis, page-size
// Example:
//  diary notes.txt --extra-link-class external --extra-max-input-length 0

use chrono::{DateTime, Utc};
use clap::{Arg, ArgAction, Command, ValueHint};
use diary_config::{DiaryConfig, Loader};
use diary_markup::entry::load_entries;
use diary_markup::{
    frontpage, preview_with, Draft, EngineOptions, Entry, MarkupEngine, PageRequest,
    PreviewOptions,
};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

const SUBCOMMANDS: &[&str] = &["render", "preview", "entry", "list", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("diary")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render diary markup to HTML and build listing previews")
        .long_about(
            "diary turns the sigil markup used in diary entries and comments into HTML.\n\n\
            Markup:\n  \
            **bold**  //italic//  __underline__  ~~strike~~  ^^sup^^  ,,sub,,\n  \
            [text](https://link)  # Heading (up to ###)  @@verbatim line@@\n\n\
            Examples:\n  \
            diary notes.txt                        # Render to stdout\n  \
            diary render notes.txt -o notes.html   # Render to a file\n  \
            diary preview notes.html               # Listing preview\n  \
            diary list entries.json --page 1       # Second front page",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the markup rules in the order they are applied")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a diary.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render raw text to an HTML fragment (default command)")
                .arg(input_arg("input", "Input file path, or - for stdin"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the plain-text listing preview of rendered HTML")
                .arg(input_arg("input", "Rendered HTML file, or - for stdin")),
        )
        .subcommand(
            Command::new("entry")
                .about("Render raw text into a stored entry and print it as JSON")
                .arg(input_arg("input", "Input file path, or - for stdin"))
                .arg(
                    Arg::new("author")
                        .long("author")
                        .help("Login of the entry author")
                        .required(true),
                )
                .arg(
                    Arg::new("private")
                        .long("private")
                        .help("Only list the entry for its author")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("id")
                        .long("id")
                        .help("Entry id")
                        .default_value("1")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("timestamp")
                        .long("timestamp")
                        .help("Creation time as RFC 3339 (defaults to now)"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Print a front page over a JSON array of stored entries")
                .arg(input_arg("entries", "JSON file with stored entries, or - for stdin"))
                .arg(
                    Arg::new("page")
                        .long("page")
                        .help("Zero-based page index")
                        .default_value("0")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("viewer")
                        .long("viewer")
                        .help("List private entries written by this user"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the page as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare path means "render"
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Some(key) = extra_params.keys().next() {
        fail(format!("Unknown parameter --extra-{key}"));
    }
    log::debug!("effective configuration: {config:?}");

    let engine = MarkupEngine::new(EngineOptions::from(&config.markup));
    let preview_options = PreviewOptions::from(&config.preview);

    if matches.get_flag("list-rules") {
        handle_list_rules_command(&engine);
        return;
    }

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(&engine, input, output);
        }
        Some(("preview", sub_matches)) => {
            handle_preview_command(required(sub_matches, "input"), &preview_options);
        }
        Some(("entry", sub_matches)) => {
            let eid = sub_matches.get_one::<u64>("id").copied().unwrap_or(1);
            let timestamp = match sub_matches.get_one::<String>("timestamp") {
                Some(raw) => parse_timestamp(raw),
                None => Utc::now(),
            };
            handle_entry_command(
                &engine,
                required(sub_matches, "input"),
                required(sub_matches, "author"),
                sub_matches.get_flag("private"),
                eid,
                timestamp,
            );
        }
        Some(("list", sub_matches)) => {
            let request = PageRequest {
                page: sub_matches.get_one::<usize>("page").copied().unwrap_or(0),
                page_size: config.listing.page_size,
                viewer: sub_matches.get_one::<String>("viewer").map(|s| s.as_str()),
            };
            handle_list_command(
                required(sub_matches, "entries"),
                &request,
                &preview_options,
                sub_matches.get_flag("json"),
            );
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| fail(format!("missing <{name}>")))
}

/// Handle the render command
fn handle_render_command(engine: &MarkupEngine, input: &str, output: Option<&str>) {
    let source = read_source(input);
    let html = engine
        .render_bytes(&to_form_text(&source))
        .unwrap_or_else(|e| fail(e));

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                fail(format!("writing file '{path}': {e}"));
            });
        }
        None => println!("{html}"),
    }
}

/// Handle the preview command
fn handle_preview_command(input: &str, options: &PreviewOptions) {
    let source = read_source(input);
    let html = String::from_utf8(source)
        .unwrap_or_else(|e| fail(format!("'{input}' is not valid UTF-8: {e}")));
    println!("{}", preview_with(html.trim_end_matches(&['\r', '\n'][..]), options));
}

/// Handle the entry command
fn handle_entry_command(
    engine: &MarkupEngine,
    input: &str,
    author: &str,
    private: bool,
    eid: u64,
    timestamp: DateTime<Utc>,
) {
    let source = to_form_text(&read_source(input));
    let text = String::from_utf8(source)
        .unwrap_or_else(|e| fail(format!("'{input}' is not valid UTF-8: {e}")));
    let draft = Draft::new(text, author).private(private);

    let entry = Entry::compose(engine, &draft, eid, timestamp).unwrap_or_else(|e| fail(e));
    let json = serde_json::to_string_pretty(&entry).unwrap_or_else(|e| fail(e));
    println!("{json}");
}

/// Handle the list command
fn handle_list_command(
    input: &str,
    request: &PageRequest<'_>,
    options: &PreviewOptions,
    as_json: bool,
) {
    let source = read_source(input);
    let json = String::from_utf8(source)
        .unwrap_or_else(|e| fail(format!("'{input}' is not valid UTF-8: {e}")));
    let entries = load_entries(&json).unwrap_or_else(|e| fail(e));
    let page = frontpage(&entries, request, options);

    if as_json {
        let json = serde_json::to_string_pretty(&page).unwrap_or_else(|e| fail(e));
        println!("{json}");
        return;
    }

    if page.entries.is_empty() {
        println!("No entries on page {}.", page.page);
        return;
    }
    for summary in &page.entries {
        println!(
            "#{} {} {}",
            summary.eid,
            summary.author,
            summary.timestamp.format("%Y-%m-%d %H:%M")
        );
        println!("    {}", summary.preview);
    }
    if page.has_more {
        println!("(more on page {})", page.page + 1);
    }
}

/// Handle the list-rules flag
fn handle_list_rules_command(engine: &MarkupEngine) {
    println!("Markup rules, applied in this order to every line:\n");
    for (index, kind) in engine.rules().iter().enumerate() {
        println!("  {}. {:<14} {}", index + 1, kind.name(), kind.example());
    }
    println!("\nLines wrapped in @@...@@ are copied verbatim.");
    println!("Anchors use class \"{}\".", engine.rules().link_class());
    match engine.max_input_length() {
        Some(limit) => println!("Input is limited to {limit} characters."),
        None => println!("Input length is not limited."),
    }
}

fn read_source(path: &str) -> Vec<u8> {
    if path == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .unwrap_or_else(|e| fail(format!("reading stdin: {e}")));
        return buffer;
    }
    fs::read(path).unwrap_or_else(|e| fail(format!("reading file '{path}': {e}")))
}

/// Convert file text to form text: drop one trailing newline and turn lone
/// `\n` into `\r\n`. Works on bytes; neither byte occurs inside a multi-byte
/// UTF-8 sequence.
fn to_form_text(source: &[u8]) -> Vec<u8> {
    let body = source.strip_suffix(b"\n").unwrap_or(source);
    let body = body.strip_suffix(b"\r").unwrap_or(body);

    let mut out = Vec::with_capacity(body.len() + body.len() / 16);
    let mut previous = 0u8;
    for &byte in body {
        if byte == b'\n' && previous != b'\r' {
            out.push(b'\r');
        }
        out.push(byte);
        previous = byte;
    }
    out
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|e| fail(format!("invalid --timestamp '{raw}': {e}")))
}

fn load_cli_config(explicit_path: Option<&str>) -> DiaryConfig {
    let loader = Loader::new().with_optional_file("diary.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(format!("failed to load configuration: {err}")))
}

fn apply_config_overrides(config: &mut DiaryConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["link-class"]) {
        config.markup.link_class = raw;
    }
    if let Some(raw) = take_override(extra_params, &["max-input-length", "max-input"]) {
        config.markup.max_input_length = parse_usize_arg("max-input-length", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["preview-chars", "preview-length"]) {
        config.preview.max_chars = parse_usize_arg("preview-chars", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["ellipsis"]) {
        config.preview.ellipsis = raw;
    }
    if let Some(raw) = take_override(extra_params, &["page-size"]) {
        config.listing.page_size = parse_usize_arg("page-size", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.parse()
        .unwrap_or_else(|_| fail(format!("invalid number '{raw}' for --extra-{flag}")))
}

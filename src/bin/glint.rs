//! Command-line interface for glint
//! Inspect or reformat a file: detect its language, dump highlight spans,
//! or print the canonically reformatted text.
//!
//! Usage:
//!   glint `<path>`              - reformat and print
//!   glint `<path>` --detect     - print the detected language
//!   glint `<path>` --tokens     - print highlight spans as JSON
//!   glint `<path>` --lang json  - skip detection and use the given
//!                                 language for whichever action runs

use clap::{Arg, ArgAction, Command};
use glint::{detect, tokenize, FormatRegistry, Language};

fn main() {
    let matches = Command::new("glint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect, classify, and reformat source text")
        .arg_required_else_help(true)
        .arg(Arg::new("path").help("Path to the file").required(true).index(1))
        .arg(
            Arg::new("detect")
                .long("detect")
                .help("Print the detected language and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print highlight spans as JSON instead of reformatting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help(
                    "Use this language instead of detecting one, for every action \
                     (xml, html, json, python, css, javascript)",
                ),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path, e);
        std::process::exit(1);
    });

    let lang = match matches.get_one::<String>("lang") {
        Some(name) => parse_language(name).unwrap_or_else(|| {
            eprintln!("Unknown language '{}'", name);
            std::process::exit(1);
        }),
        None => detect(path, &text),
    };

    if matches.get_flag("detect") {
        println!("{}", lang);
        return;
    }

    if matches.get_flag("tokens") {
        let spans = tokenize(&text, lang);
        let json = serde_json::to_string_pretty(&spans).unwrap_or_else(|e| {
            eprintln!("Error serializing spans: {}", e);
            std::process::exit(1);
        });
        println!("{}", json);
        return;
    }

    let registry = FormatRegistry::with_defaults();
    match registry.format(&text, lang) {
        Ok(formatted) => println!("{}", formatted),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn parse_language(name: &str) -> Option<Language> {
    match name.to_ascii_lowercase().as_str() {
        "plain" | "text" | "plain-text" => Some(Language::PlainText),
        "xml" => Some(Language::Xml),
        "html" => Some(Language::Html),
        "json" => Some(Language::Json),
        "python" | "py" => Some(Language::Python),
        "css" => Some(Language::Css),
        "javascript" | "js" => Some(Language::JavaScript),
        _ => None,
    }
}

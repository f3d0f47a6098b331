// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! htmlgen CLI - render JSON templates and escape text

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use htmlgen::{escape, obfuscate, ElementTemplate, Result};
use tracing_subscriber::filter::Directive;

fn main() -> ExitCode {
    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "htmlgen=info".parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "render" => {
            if args.len() < 3 {
                eprintln!("Usage: htmlgen render <file|->");
                return ExitCode::from(1);
            }
            render_template(&args[2])
        }
        "escape" => {
            if args.len() < 3 {
                eprintln!("Usage: htmlgen escape <text>");
                return ExitCode::from(1);
            }
            println!("{}", escape(&args[2]));
            ExitCode::SUCCESS
        }
        "obfuscate" => {
            if args.len() < 3 {
                eprintln!("Usage: htmlgen obfuscate <text>");
                return ExitCode::from(1);
            }
            println!("{}", obfuscate(&escape(&args[2])));
            ExitCode::SUCCESS
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("htmlgen {}", htmlgen::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"htmlgen - Build HTML from element trees

USAGE:
    htmlgen <COMMAND> [ARGS]

COMMANDS:
    render <file|->     Render a JSON template (use - for stdin)
    escape <text>       Escape HTML special characters
    obfuscate <text>    Escape, then emit numeric character references
    help                Show this help message
    version             Show version information

EXAMPLES:
    htmlgen render page.json > page.html
    echo '{{"tag": "p", "children": [{{"text": "a < b"}}]}}' | htmlgen render -
    htmlgen obfuscate me@example.com
"#
    );
}

fn render_template(path: &str) -> ExitCode {
    match load_template(path) {
        Ok(template) => {
            println!("{}", template.render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to render {}: {}", path, e);
            ExitCode::from(1)
        }
    }
}

fn load_template(path: &str) -> Result<ElementTemplate> {
    let json = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    tracing::info!(path, bytes = json.len(), "Loaded template");
    ElementTemplate::from_json(&json)
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::bail;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use the_archivist::processor::{FileProcessor, ProcessRequest};
use the_archivist::traits::Processor;

/// One scripted invocation of the walkthrough.
struct Scenario {
    title: &'static str,
    file_name: Option<&'static str>,
    payload: Option<Value>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let processor = FileProcessor::with_tracing();

    match args.len() {
        1 => run_walkthrough(&processor),
        3 => run_one_shot(&processor, &args[1], &args[2])?,
        _ => {
            bail!(
                "Usage: {} [<file-name> <payload>]\n\
                 With no arguments, runs the scripted walkthrough.\n\
                 <payload> is parsed as JSON where possible, else taken as plain text.\n\
                 Example: {} myFile.txt '\"Hello, world!\"'",
                args[0],
                args[0]
            );
        }
    }

    Ok(())
}

/// Parse a payload argument as JSON, falling back to a plain string.
fn parse_payload(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn run_one_shot(processor: &FileProcessor, file_name: &str, raw_payload: &str) -> anyhow::Result<()> {
    let req = ProcessRequest::new(Some(file_name.to_string()), Some(parse_payload(raw_payload)));
    let outcome = processor.process(&req);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn run_walkthrough(processor: &FileProcessor) {
    let scenarios = vec![
        Scenario {
            title: "Both inputs absent",
            file_name: None,
            payload: None,
        },
        Scenario {
            title: "Numeric payload",
            file_name: Some("myFile.txt"),
            payload: Some(Value::from(42)),
        },
        Scenario {
            title: "Empty payload",
            file_name: Some("myFile.txt"),
            payload: Some(Value::from("")),
        },
        Scenario {
            title: "Well-formed request",
            file_name: Some("myFile.txt"),
            payload: Some(Value::from("Hello, world!")),
        },
        Scenario {
            title: "Whitespace-only name, empty payload",
            file_name: Some(" "),
            payload: Some(Value::from("")),
        },
        Scenario {
            title: "Whitespace-only name, absent payload",
            file_name: Some(" "),
            payload: None,
        },
    ];

    println!("📂 The Archivist - File Processing Walkthrough");
    println!("═══════════════════════════════════════════════");
    println!("Every scenario ends with the handle-release notice, whatever the outcome.");
    println!();

    for (i, scenario) in scenarios.iter().enumerate() {
        println!("{}", "─".repeat(60));
        println!("Scenario {}: {}", i + 1, scenario.title);
        println!(
            "  file_name: {:?}, payload: {:?}",
            scenario.file_name, scenario.payload
        );

        let req = ProcessRequest::new(
            scenario.file_name.map(str::to_string),
            scenario.payload.clone(),
        );
        let outcome = processor.process(&req);

        match serde_json::to_string(&outcome) {
            Ok(json) => println!("  outcome: {}", json),
            Err(e) => eprintln!("  failed to render outcome: {}", e),
        }
        println!();
    }

    println!("🎉 Walkthrough complete!");
}

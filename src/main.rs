//! CLI tool for validating PDF documents against expected properties.
//!
//! This binary demonstrates the capabilities of the pdfexpect crate: point
//! it at a PDF and tell it what to expect, and it prints every expectation
//! that the document does not meet.

use pdfexpect::{validate_pdf, Expectations};
use std::{env, process};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let pdf_path = args[1].clone();
    let expectations = match parse_expectations(&args[2..]) {
        Ok(expectations) => expectations,
        Err(message) => {
            eprintln!("❌ {message}");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if expectations.is_empty() {
        println!("⚠️  No expectations given; nothing to validate.");
        return;
    }

    let report = validate_pdf(&pdf_path, &expectations).await;

    if let Some(error) = &report.general {
        eprintln!("❌ Validation could not run: {error}");
        process::exit(2);
    }

    if report.is_empty() {
        println!("✅ {pdf_path}: all expectations met");
        return;
    }

    println!("❌ {pdf_path}: expectations not met");
    if let Some(message) = &report.page_count {
        println!("   pages   : {message}");
    }
    if let Some(message) = &report.title {
        println!("   title   : {message}");
    }
    if let Some(missing) = &report.text_phrases {
        println!("   phrases : missing {missing:?}");
    }
    process::exit(1);
}

/// Parse the flag arguments that follow the PDF path.
fn parse_expectations(args: &[String]) -> Result<Expectations, String> {
    let mut expectations = Expectations::default();
    let mut phrases: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pages" => {
                let value = flag_value(args, i, "--pages")?;
                let pages = value
                    .parse::<u32>()
                    .map_err(|_| format!("--pages expects a number, got '{value}'"))?;
                expectations.page_count = Some(pages);
                i += 2;
            }
            "--title" => {
                expectations.title = Some(flag_value(args, i, "--title")?.to_string());
                i += 2;
            }
            "--phrase" => {
                phrases.push(flag_value(args, i, "--phrase")?.to_string());
                i += 2;
            }
            unknown => return Err(format!("Unknown option '{unknown}'")),
        }
    }

    if !phrases.is_empty() {
        expectations.text_phrases = Some(phrases);
    }
    Ok(expectations)
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} expects a value"))
}

fn print_usage(program_name: &str) {
    println!("📄 pdfexpect - PDF expectation validation tool");
    println!();
    println!("USAGE:");
    println!("    {} <pdf_file> [OPTIONS]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <pdf_file>         Path to the PDF file to validate");
    println!();
    println!("OPTIONS:");
    println!("    --pages <N>        Expected number of pages");
    println!("    --title <TITLE>    Expected metadata title (exact match)");
    println!("    --phrase <TEXT>    Phrase that must appear in the page text (repeatable)");
    println!("    -h, --help         Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    {} invoice.pdf --pages 3", program_name);
    println!(
        "    {} report.pdf --title \"Annual Report\" --phrase \"Revenue\" --phrase \"Outlook\"",
        program_name
    );
    println!();
    println!("Exit code 0 when every expectation is met, 1 on mismatches,");
    println!("2 when the document could not be loaded.");
}

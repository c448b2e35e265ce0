//! Mailarmor CLI
//!
//! Usage:
//!   mailarmor --text "email body"                  # Single classification
//!   mailarmor --subject "Re: invoice" --text "..."  # With subject
//!   mailarmor --interactive                        # Classify stdin lines
//!   mailarmor --serve                              # HTTP API server
//!   mailarmor --text "body" --json                 # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

use mailarmor::core::{run_server, Classifier, RuleRepository};
use mailarmor::types::{ClassificationResult, EmailInput};
use mailarmor::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "mailarmor",
    version = VERSION,
    about = "Mailarmor - Rule-based email request type classifier",
    long_about = "Mailarmor assigns a request-type label to an email using weighted\n\
                  phrases, regex patterns, negation suppression and per-category\n\
                  thresholds. Every label is explained by the phrases that fired.\n\n\
                  Modes:\n  \
                  --text         Classify one email body\n  \
                  --interactive  Classify each stdin line\n  \
                  --serve        HTTP API server mode\n\n\
                  Log level is read from RUST_LOG (default: info)."
)]
struct Args {
    /// Email body to classify (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Email subject (single mode)
    #[arg(long)]
    subject: Option<String>,

    /// Interactive mode - classify lines read from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show matched phrases and every category score
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // A broken rule table is fatal before any classification
    let rules = match RuleRepository::try_builtin() {
        Ok(rules) => rules,
        Err(e) => {
            error!("rule table failed validation: {}", e);
            std::process::exit(1);
        }
    };
    info!(categories = rules.len(), version = VERSION, "rules loaded");

    let classifier = Classifier::with_rules(rules);

    if args.serve {
        run_serve(&args).await;
    } else if args.interactive {
        run_interactive(&classifier, &args);
    } else if let Some(ref text) = args.text {
        run_single(&classifier, args.subject.as_deref(), text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&classifier, &args);
    }
}

/// Classify one email
fn run_single(classifier: &Classifier<'_>, subject: Option<&str>, body: &str, args: &Args) {
    let email = EmailInput {
        subject: subject.map(str::to_string),
        body: body.to_string(),
        include_debug: args.verbose,
    };
    let result = classifier.classify_email(&email);
    print_result(&result, args);
}

/// Classify each stdin line as an email body
fn run_interactive(classifier: &Classifier<'_>, args: &Args) {
    print_header(args.no_color);
    println!("Type or paste an email body and press Enter. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut count = 0usize;

    loop {
        print!("{}", if args.no_color { "> ".normal() } else { "> ".bold() });
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Classified: {}", count);
            break;
        }
        if line.is_empty() {
            continue;
        }

        let result = classifier.classify(line);
        count += 1;
        print_result(&result, args);
    }
}

/// Print a result in the mode selected by flags
fn print_result(result: &ClassificationResult, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("failed to serialize result: {}", e),
        }
    } else if args.verbose {
        print_verbose(result);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }
}

/// Print header
fn print_header(no_color: bool) {
    let title = format!("Mailarmor v{} - Request Type Classifier", VERSION);
    println!("========================================");
    if no_color {
        println!("  {}", title);
    } else {
        println!("  {}", title.bold());
    }
    println!("========================================");
    println!();
}

/// Print result with audit trail and all category scores
fn print_verbose(result: &ClassificationResult) {
    println!("{}", result.to_terminal_string());
    if !result.matched_phrases.is_empty() {
        println!("  {}", "Matched:".bold());
        for phrase in &result.matched_phrases {
            println!("    • {}", phrase);
        }
    }
    println!("  {}", "Scores:".bold());
    for (category, score) in result.ranked_scores() {
        let line = format!("    {:<25} {:>4}", category, score);
        if category == result.label {
            println!("{}", line.green());
        } else if score > 0 {
            println!("{}", line);
        } else {
            println!("{}", line.dimmed());
        }
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    println!("Mailarmor v{} - API Server", VERSION);
    println!();

    if let Err(e) = run_server(&args.addr).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

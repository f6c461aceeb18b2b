use std::io::Read;

use clap::Parser;

use bias_core::{analyze, found_categories, notes_for, render_legend, render_spans};

#[derive(Parser)]
#[command(
    name = "bias-scan",
    about = "Flag potentially biased wording in job advertisements",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<String>,
    /// Print highlight and legend markup instead of the JSON report
    #[arg(long)]
    html: bool,
}

fn report(text: &str, html: bool) {
    let analysis = analyze(text);
    if html {
        println!("{}", render_spans(&analysis.text, &analysis.spans));
        let categories = found_categories(&analysis.lexicon_hits, &analysis.rule_hits);
        println!("{}", render_legend(&categories));
        for (category, note) in notes_for(&categories) {
            println!("- {category}: {note}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&analysis).unwrap());
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Failed to read stdin");
        report(&input, cli.html);
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading {path}: {e}");
                std::process::exit(1);
            });
            report(&text, cli.html);
        }
    }
}

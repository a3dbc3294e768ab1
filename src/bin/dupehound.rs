use anyhow::Result;
use clap::Parser;
use dupehound_core::config::ScanConfig;
use dupehound_core::engine;
use dupehound_core::reporting::{console, html};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dupehound", version)]
#[command(about = "Flags near-duplicate function definitions within source files")]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File extension to include (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_values_t = vec![String::from("py")])]
    extensions: Vec<String>,

    /// Similarity threshold in (0, 1]
    #[arg(long, default_value_t = 0.75)]
    threshold: f64,

    /// Directory for generated HTML reports
    #[arg(long, default_value = "reports")]
    report_dir: PathBuf,

    /// Print the duplicate pairs as JSON instead of the table view
    #[arg(long)]
    json: bool,

    /// Skip writing the HTML report
    #[arg(long)]
    no_html: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ScanConfig {
        root: cli.path,
        extensions: cli.extensions,
        similarity_threshold: cli.threshold,
        report_dir: cli.report_dir,
        verbose: cli.verbose,
    };

    let report = engine::scan(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        console::print_report(&report);
    }

    // Console output first: a report-write failure must not discard it.
    let report_path = if cli.no_html {
        None
    } else {
        Some(html::write_report(&report, &config.report_dir)?)
    };

    if !cli.json {
        console::print_summary(&report, report_path.as_deref());
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use battery_report_core::BatteryReportPayload;
use battery_report_extract::output::{self, OutputFormat};
use battery_report_extract::{generate, parse};

#[derive(Debug, Parser)]
#[command(name = "battery-report")]
#[command(about = "Battery report extraction and health scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a fresh battery report via powercfg and convert it.
    Generate(GenerateArgs),
    /// Parse an existing battery-report.html file.
    Parse(ParseArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Directory for the generated report and the converted output.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Name of the converted output file, written into the output directory.
    #[arg(long, default_value = "battery-data.json")]
    json_output: String,
    /// Output format for the converted payload (default: json).
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Path to an existing battery-report.html to parse.
    #[arg(long)]
    input: PathBuf,
    /// Output file path; prints to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Output format for the converted payload (default: json).
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Parse(args) => run_parse(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let report_path = generate::run_battery_report(&args.output_dir)
        .map_err(|err| format!("Failed to generate battery report: {err}"))?;

    let parsed = parse::parse_report_file(&report_path)
        .map_err(|err| format!("Failed to read '{}': {err}", report_path.display()))?;
    let payload = BatteryReportPayload::assemble(parsed.system, parsed.battery, parsed.history);

    let out_path = args.output_dir.join(&args.json_output);
    output::write_payload(&out_path, &payload, args.format)
        .map_err(|err| format!("Failed to write '{}': {err}", out_path.display()))?;

    println!("Battery data written to {}", out_path.display());
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let parsed = parse::parse_report_file(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    let payload = BatteryReportPayload::assemble(parsed.system, parsed.battery, parsed.history);

    match args.output {
        Some(path) => {
            output::write_payload(&path, &payload, args.format)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            println!("Battery data written to {}", path.display());
        }
        None => {
            let raw = output::format_payload(&payload, args.format)
                .map_err(|err| format!("Failed to format payload: {err}"))?;
            print!("{raw}");
        }
    }

    Ok(())
}

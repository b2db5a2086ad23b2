//! cvmark CLI - Markdown CV validation and conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use cvmark::{parse_file, render, validate, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "cvmark")]
#[command(version)]
#[command(about = "Validate and convert Markdown CVs", long_about = None)]
struct Cli {
    /// Input Markdown CV file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CV file and report diagnostics
    Validate {
        /// Input Markdown CV file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert a CV file to JSON
    Json {
        /// Input Markdown CV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert a CV file to plain text
    Text {
        /// Input Markdown CV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include front-matter properties in the output
        #[arg(long)]
        properties: bool,
    },

    /// Show document structure information
    Info {
        /// Input Markdown CV file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Validate { input }) => cmd_validate(&input),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Text {
            input,
            output,
            properties,
        }) => cmd_text(&input, output.as_deref(), properties),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            // Default behavior: validate if input is provided
            if let Some(input) = cli.input {
                cmd_validate(&input)
            } else {
                println!("{}", "Usage: cvmark <FILE>".yellow());
                println!("       cvmark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let validation = validate::validate(&doc);

    if validation.is_valid {
        println!(
            "{} {} ({} sections, {} items)",
            "valid".green().bold(),
            input.display(),
            doc.section_count(),
            doc.item_count()
        );
        Ok(())
    } else {
        for diagnostic in &validation.diagnostics {
            eprintln!("{} {}", "error:".red().bold(), diagnostic);
        }
        std::process::exit(1);
    }
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&doc, format)?;

    write_output(output, &json)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    properties: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let options = RenderOptions::new().with_properties(properties);
    let text = render::to_text(&doc, &options)?;

    write_output(output, &text)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    log::debug!("parsed {} for info display", input.display());

    println!("{}", "Document".bold());
    let name = if doc.contact.has_name() {
        doc.contact.name.clone()
    } else {
        "(missing)".to_string()
    };
    println!("  Name:     {}", name);
    if let Some(title) = &doc.contact.title {
        println!("  Title:    {}", title);
    }
    for (label, value) in &doc.contact.channels {
        println!("  {}: {}", label, value);
    }

    println!("\n{} ({})", "Sections".bold(), doc.section_count());
    for section in &doc.sections {
        let roles: usize = section.items.iter().map(|i| i.roles.len()).sum();
        println!(
            "  {} ({} items, {} roles){}",
            section.title,
            section.items.len(),
            roles,
            if section.page_break { " [page break]" } else { "" }
        );
    }

    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

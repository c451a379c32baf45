//! docxmd CLI - DOCX to Markdown conversion tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docxmd::{
    convert_file, detect_format_from_path, parse_file_with_options, Block, JsonFormat,
    ParseOptions, RenderOptions,
};

/// Output directory used when none is given.
const DEFAULT_OUTPUT_DIR: &str = "MarkdownOutput";

#[derive(Parser)]
#[command(name = "docxmd")]
#[command(version)]
#[command(about = "Convert DOCX documents to Markdown", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to Markdown with extracted images
    Convert {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Dump the parsed document model as JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Default)]
struct RenderArgs {
    /// Font name marking code runs
    #[arg(long, value_name = "FONT")]
    code_font: Option<String>,

    /// Language tag for fenced code blocks
    #[arg(long, value_name = "LANG")]
    code_lang: Option<String>,

    /// Table of contents title
    #[arg(long, value_name = "TITLE")]
    toc_title: Option<String>,

    /// Omit the table of contents
    #[arg(long)]
    no_toc: bool,

    /// Include YAML frontmatter
    #[arg(short, long)]
    frontmatter: bool,

    /// Print conversion statistics
    #[arg(long)]
    stats: bool,
}

impl RenderArgs {
    fn to_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new()
            .with_toc(!self.no_toc)
            .with_frontmatter(self.frontmatter)
            .with_stats(self.stats);
        if let Some(ref font) = self.code_font {
            options = options.with_code_font(font.clone());
        }
        if let Some(ref lang) = self.code_lang {
            options = options.with_code_language(lang.clone());
        }
        if let Some(ref title) = self.toc_title {
            options = options.with_toc_title(title.clone());
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            render,
        }) => cmd_convert(&input, output.as_deref(), &render),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &RenderArgs::default())
            } else {
                println!("{}", "Usage: docxmd <FILE> [OUTPUT]".yellow());
                println!("       docxmd --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    args: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    log::debug!("Output directory: {}", output_dir.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Converting {}...", input.display()));

    let result = convert_file(input, &output_dir, &args.to_options());
    pb.finish_and_clear();
    let result = result?;

    println!(
        "{} {}",
        "Markdown saved to:".green().bold(),
        result.output_path.display()
    );

    if args.stats {
        println!();
        println!("{}", "Conversion Statistics".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = docxmd::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docxmd::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    // Lenient mode: show what can be read even if optional parts are broken
    let doc = parse_file_with_options(input, ParseOptions::new().lenient())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref created) = doc.metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    let unsupported = doc
        .body
        .iter()
        .filter(|b| matches!(b, Block::Unsupported { .. }))
        .count();

    println!("{}: {}", "Paragraphs".bold(), doc.paragraphs().count());
    println!("{}: {}", "Tables".bold(), doc.tables().count());
    println!("{}: {}", "Images".bold(), doc.images.len());
    println!("{}: {}", "Other elements".bold(), unsupported);
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docxmd".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX to Markdown conversion tool");
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use diffx_core::{diff_files, format_output_with_options, DiffOptions, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "diffx")]
#[command(about = "Compare two structured data files and print a semantic diff")]
struct Cli {
    file_a: PathBuf,
    file_b: PathBuf,

    #[arg(long, value_enum, default_value_t = CliFormat::Diffx)]
    format: CliFormat,

    #[arg(long, default_value_t = 0.0)]
    epsilon: f64,

    #[arg(long)]
    array_id_key: Option<String>,

    #[arg(long)]
    ignore_keys_regex: Option<String>,

    #[arg(long)]
    path_filter: Option<String>,

    #[arg(long)]
    ignore_whitespace: bool,

    #[arg(long)]
    ignore_case: bool,

    #[arg(long)]
    show_unchanged: bool,

    #[arg(long)]
    show_types: bool,

    #[arg(long, default_value_t = 0)]
    context_lines: usize,

    #[arg(long)]
    brief: bool,

    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Diffx,
    Json,
    Yaml,
    Unified,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Diffx => OutputFormat::Diffx,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Yaml => OutputFormat::Yaml,
            CliFormat::Unified => OutputFormat::Unified,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut options = DiffOptions::default()
        .with_epsilon(cli.epsilon)
        .with_ignore_whitespace(cli.ignore_whitespace)
        .with_ignore_case(cli.ignore_case)
        .with_show_unchanged(cli.show_unchanged)
        .with_show_types(cli.show_types)
        .with_output_format(cli.format.into())
        .with_context_lines(cli.context_lines)
        .with_brief_mode(cli.brief)
        .with_quiet_mode(cli.quiet);

    if let Some(key) = cli.array_id_key {
        options = options.with_array_id_key(key);
    }
    if let Some(pattern) = cli.ignore_keys_regex {
        options = options.with_ignore_keys_regex(pattern);
    }
    if let Some(substring) = cli.path_filter {
        options = options.with_path_filter(substring);
    }

    match run(&cli.file_a, &cli.file_b, &options) {
        Ok(rendered) => {
            if !options.quiet_mode {
                print!("{rendered}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("diffx: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(file_a: &std::path::Path, file_b: &std::path::Path, options: &DiffOptions) -> Result<String, String> {
    let results = diff_files(file_a, file_b, options).map_err(|err| err.to_string())?;

    if options.brief_mode {
        return Ok(if results.is_empty() {
            "equal\n".to_string()
        } else {
            "differ\n".to_string()
        });
    }

    format_output_with_options(&results, options).map_err(|err| err.to_string())
}

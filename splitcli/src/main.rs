use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use splitcraft_core::{
    Severity, SplitMode, SplitRequest, Splitter, SplitterConfig, Workbook, reader,
};
use std::path::{Path, PathBuf};

mod formatter;

use formatter::{ConsoleProgress, print_error, print_info, print_warning};

#[derive(Parser)]
#[command(name = "splitcli")]
#[command(about = "Split a spreadsheet table into per-group files or sheets", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the source spreadsheet file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Sheet to split (defaults to the first sheet)
    #[arg(short, long, value_name = "SHEET")]
    sheet: Option<String>,

    /// Header name of the key column to group by
    #[arg(short = 'k', long, value_name = "COLUMN")]
    column: Option<String>,

    /// Output layout
    #[arg(short, long, value_enum, default_value = "files")]
    mode: OutputMode,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// List the workbook's sheet names and exit
    #[arg(long)]
    list_sheets: bool,

    /// List the header columns of the selected sheet and exit
    #[arg(long)]
    list_columns: bool,

    /// Print every written file path after the run
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputMode {
    /// One workbook per group
    Files,
    /// One workbook with one sheet per group
    Book,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        SplitterConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("splitcraft.toml");
        if default_config_path.exists() {
            SplitterConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            SplitterConfig::default()
        }
    };

    if cli.list_sheets || cli.list_columns {
        let workbook = load_workbook(&cli.file)?;
        if cli.list_sheets {
            for name in workbook.sheet_names() {
                println!("{name}");
            }
            return Ok(());
        }
        return list_columns(&workbook, cli.sheet.as_deref());
    }

    let Some(column) = cli.column else {
        print_warning("no key column selected, use --column");
        return Ok(());
    };

    let sheet = match cli.sheet {
        Some(name) => name,
        None => match first_sheet_name(&cli.file)? {
            Some(name) => name,
            None => {
                print_warning("workbook has no sheets");
                return Ok(());
            }
        },
    };

    let request = SplitRequest {
        source: cli.file,
        sheet,
        key_column: column,
        mode: match cli.mode {
            OutputMode::Files => SplitMode::SeparateFiles,
            OutputMode::Book => SplitMode::SingleWorkbook,
        },
    };

    let splitter = Splitter::with_config(config);
    let mut progress = ConsoleProgress::new();

    match splitter.split(&request, &mut progress) {
        Ok(report) => {
            if cli.verbose {
                for file in &report.files {
                    println!("saved {}", file.display());
                }
            }
            print_info(&format!(
                "split {} group(s) into {}",
                report.groups,
                report.output_dir.display()
            ));
            Ok(())
        }
        Err(err) => match err.severity() {
            Severity::Error => {
                print_error(&err.to_string());
                std::process::exit(1);
            }
            _ => {
                print_warning(&err.to_string());
                Ok(())
            }
        },
    }
}

fn load_workbook(file: &Path) -> Result<Workbook> {
    reader::read_workbook(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn first_sheet_name(file: &Path) -> Result<Option<String>> {
    let workbook = load_workbook(file)?;
    Ok(workbook.sheet_names().first().map(|name| name.to_string()))
}

fn list_columns(workbook: &Workbook, sheet: Option<&str>) -> Result<()> {
    let sheet = match sheet {
        Some(name) => workbook
            .sheet(name)
            .with_context(|| format!("sheet '{name}' not found in workbook"))?,
        None => match workbook.sheets.first() {
            Some(sheet) => sheet,
            None => {
                print_warning("workbook has no sheets");
                return Ok(());
            }
        },
    };

    for column in sheet.header_values() {
        println!("{column}");
    }
    Ok(())
}

//! Command-line driver: load a cell file into a matrix and query it

use clap::{Parser, Subcommand};
use infmat::{normalize_line, parse_cell_line, parse_range, Matrix, Position, Window};
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "infmat - load sparse cells from a tab-separated file and inspect them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a cell file and report size and extents
    Load {
        /// File with one `row<TAB>col<TAB>value` cell per line
        file: PathBuf,

        /// Default value of the matrix
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        default: i64,

        /// List occupied cells as `row:col value`
        #[arg(long)]
        print: bool,

        /// List occupied cells as JSON
        #[arg(long, conflicts_with = "print")]
        json: bool,

        /// Reject negative coordinates
        #[arg(long)]
        strict: bool,
    },
    /// Load a cell file and print a dense window of it
    Window {
        /// File with one `row<TAB>col<TAB>value` cell per line
        file: PathBuf,

        /// Row range (format: start:end)
        #[arg(long, allow_hyphen_values = true)]
        rows: String,

        /// Column range (format: start:end)
        #[arg(long, allow_hyphen_values = true)]
        cols: String,

        /// Default value of the matrix
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        default: i64,
    },
}

#[derive(Serialize)]
struct CellRecord {
    row: i64,
    col: i64,
    value: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Load {
            file,
            default,
            print,
            json,
            strict,
        } => {
            let mut matrix = load_matrix(file, *default, *strict)?;
            handle_load(&mut matrix, *print, *json)?;
        }
        Commands::Window {
            file,
            rows,
            cols,
            default,
        } => {
            let matrix = load_matrix(file, *default, false)?;
            let rows = parse_range(rows).map_err(|e| format!("--rows {rows}: {e}"))?;
            let cols = parse_range(cols).map_err(|e| format!("--cols {cols}: {e}"))?;
            print!("{}", Window::new(&matrix, rows, cols));
        }
    }

    Ok(())
}

fn load_matrix(
    path: &Path,
    default: i64,
    strict: bool,
) -> Result<Matrix<i64>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    let mut matrix = Matrix::with_default(default);
    let mut loaded = 0usize;
    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let line = normalize_line(raw).map_err(|e| format!("line {line_no}: {e}"))?;
        let (pos, value) =
            parse_cell_line::<i64>(&line).map_err(|e| format!("line {line_no}: {e}"))?;
        if strict {
            Position::checked(pos.row, pos.col).map_err(|e| format!("line {line_no}: {e}"))?;
        }
        debug!("line {line_no}: {pos} = {value}");
        matrix.insert_at(pos, value);
        loaded += 1;
    }

    info!("loaded {loaded} lines from {}", path.display());
    Ok(matrix)
}

fn handle_load(
    matrix: &mut Matrix<i64>,
    print: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("size: {}", matrix.size());
    println!("rows: {}", matrix.rows());
    println!("cols: {}", matrix.cols());

    if print {
        for (pos, value) in matrix.iter() {
            println!("{pos} {value}");
        }
    } else if json {
        let cells: Vec<CellRecord> = matrix
            .iter()
            .map(|(pos, &value)| CellRecord {
                row: pos.row,
                col: pos.col,
                value,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&cells)?);
    }

    Ok(())
}

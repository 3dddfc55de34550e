// src/file.rs

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::consts::{OUTPUT_EXT, OUTPUT_SEP, TIMESTAMP_FORMAT};
use crate::csv::write_board;
use crate::score::RankedEntry;

/// Where the board ended up.
#[derive(Debug, PartialEq, Eq)]
pub enum Written {
    File(PathBuf),
    /// The file could not be written; the board went to stdout instead.
    Stdout,
}

/// Write the board to the resolved output path, or print it if that fails.
pub fn export_board(file_name: Option<&Path>, entries: &[RankedEntry], decimals: u32) -> Written {
    let path = resolve_out_path(file_name, Local::now());
    match write_board_file(&path, entries, decimals) {
        Ok(()) => {
            logf!("wrote {} entries to {}", entries.len(), path.display());
            Written::File(path)
        }
        Err(e) => {
            logw!("unable to write {}: {e}; printing results instead", path.display());
            let stdout = io::stdout();
            if let Err(e) = write_board(stdout.lock(), entries, decimals, OUTPUT_SEP) {
                loge!("failed to print results: {e}");
            }
            Written::Stdout
        }
    }
}

/// Create/truncate `path` and write every entry as `rank,name,score`.
pub fn write_board_file(path: &Path, entries: &[RankedEntry], decimals: u32) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let out = BufWriter::new(File::create(path)?);
    write_board(out, entries, decimals, OUTPUT_SEP)?;
    Ok(())
}

/// Output path for this run:
/// - no name → `<timestamp>.csv`
/// - `.csv` appended when missing
/// - `-` inserted before `.csv` while the file already exists
pub fn resolve_out_path(file_name: Option<&Path>, now: DateTime<Local>) -> PathBuf {
    let base = match file_name {
        Some(p) if !p.as_os_str().is_empty() => with_csv_ext(p),
        _ => default_file_name(now),
    };
    next_free(base)
}

pub fn default_file_name(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("{}.{OUTPUT_EXT}", now.format(TIMESTAMP_FORMAT)))
}

fn with_csv_ext(p: &Path) -> PathBuf {
    if p.extension().is_some_and(|e| e == OUTPUT_EXT) {
        return p.to_path_buf();
    }
    let mut s = p.as_os_str().to_owned();
    s.push(".");
    s.push(OUTPUT_EXT);
    PathBuf::from(s)
}

fn next_free(mut p: PathBuf) -> PathBuf {
    while p.exists() && !p.is_dir() {
        let mut name: OsString = p.file_stem().map(|s| s.to_owned()).unwrap_or_default();
        name.push("-.");
        name.push(OUTPUT_EXT);
        p.set_file_name(name);
    }
    p
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

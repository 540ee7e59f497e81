//! Workbook export of the ranked position sheets.

use std::{fs, io::Write, path::Path};

use atomic_write_file::AtomicWriteFile;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use crate::{
    error::DraftError,
    valuations::models::{PositionRankings, RankedPlayer},
    Result,
};

/// Header row of every position sheet.
pub const SHEET_COLUMNS: [&str; 6] = [
    "name",
    "$",
    "tier",
    "points",
    "points_per_dollar",
    "risk_adjusted_points_per_dollar",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Create missing parent directories of the output path.
    pub create_dirs: bool,
}

/// Build the workbook in memory, one sheet per ranked position.
pub fn build_workbook(rankings: &PositionRankings) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for (position, rows) in &rankings.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(position.as_str())?;
        write_sheet(worksheet, rows, &header)?;
    }

    Ok(workbook)
}

fn write_sheet(worksheet: &mut Worksheet, rows: &[RankedPlayer], header: &Format) -> Result<()> {
    for (col, title) in SHEET_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_string(r, 0, row.name.as_str())?;
        worksheet.write_number(r, 1, row.value)?;
        worksheet.write_number(r, 2, row.tier)?;
        worksheet.write_number(r, 3, row.points)?;
        worksheet.write_number(r, 4, row.points_per_dollar)?;
        worksheet.write_number(r, 5, row.risk_adjusted_points_per_dollar)?;
    }

    Ok(())
}

/// Write the ranked sheets to `output`.
///
/// The file is replaced atomically: on any failure an existing workbook at
/// `output` is left as it was.
pub fn write_workbook(
    rankings: &PositionRankings,
    output: &Path,
    options: ExportOptions,
) -> Result<()> {
    ensure_parent_dir(output, options.create_dirs)?;

    let mut workbook = build_workbook(rankings)?;
    let buffer = workbook.save_to_buffer()?;

    let mut file = AtomicWriteFile::open(output).map_err(|e| DraftError::io(output, e))?;
    file.write_all(&buffer)
        .map_err(|e| DraftError::io(output, e))?;
    file.commit().map_err(|e| DraftError::io(output, e))?;

    info!("Wrote {} sheets to {}", rankings.sheets.len(), output.display());
    Ok(())
}

fn ensure_parent_dir(output: &Path, create: bool) -> Result<()> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if parent.is_dir() {
        return Ok(());
    }
    if create {
        fs::create_dir_all(parent).map_err(|e| DraftError::io(parent, e))?;
        info!("Created output directory {}", parent.display());
        Ok(())
    } else {
        Err(DraftError::OutputDirMissing {
            path: parent.to_path_buf(),
        })
    }
}

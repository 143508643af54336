//! Workbook loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::expansion::ExpansionSheet;
use crate::layout::{EXPANSION_SHEET_INDEX, METADATA_SHEET_INDEX};
use crate::metadata::MetadataSheet;

/// The two sheets of a value set workbook.
#[derive(Debug, Clone)]
pub struct ValueSetWorkbook {
    pub metadata: MetadataSheet,
    pub expansion: ExpansionSheet,
}

/// Open a workbook and load its metadata and expansion sheets.
///
/// The format follows the file extension (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`,
/// `.ods`). Sheets are taken by position, not by name.
pub fn read_value_set_workbook(path: &Path) -> Result<ValueSetWorkbook> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        sheets = ?workbook.sheet_names(),
        "opened workbook"
    );

    let metadata_range = read_sheet(&mut workbook, path, METADATA_SHEET_INDEX)?;
    let expansion_range = read_sheet(&mut workbook, path, EXPANSION_SHEET_INDEX)?;

    let metadata = MetadataSheet::from_range(&metadata_range);
    let expansion = ExpansionSheet::from_range(expansion_range);
    debug!(
        metadata_rows = metadata.len(),
        expansion_rows = expansion.row_count(),
        "loaded value set sheets"
    );

    Ok(ValueSetWorkbook {
        metadata,
        expansion,
    })
}

fn read_sheet(
    workbook: &mut Sheets<BufReader<File>>,
    path: &Path,
    index: usize,
) -> Result<Range<Data>> {
    match workbook.worksheet_range_at(index) {
        Some(Ok(range)) => Ok(range),
        Some(Err(source)) => Err(IngestError::SheetRead {
            path: path.to_path_buf(),
            index,
            source,
        }),
        None => Err(IngestError::SheetMissing {
            path: path.to_path_buf(),
            index,
        }),
    }
}

//! Shared workbook fixtures for the extractor tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};

/// A metadata value as written to the workbook.
#[derive(Clone)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    /// Year, month, day, stored as a date-formatted serial number.
    Date(u16, u8, u8),
    /// Nothing is written; the cell stays empty.
    Blank,
}

impl Cell {
    fn write(&self, sheet: &mut Worksheet, row: u32, col: u16) {
        match self {
            Cell::Text(text) => {
                sheet.write_string(row, col, *text).expect("write text");
            }
            Cell::Number(number) => {
                sheet.write_number(row, col, *number).expect("write number");
            }
            Cell::Date(year, month, day) => {
                let date = ExcelDateTime::from_ymd(*year, *month, *day).expect("valid date");
                let format = Format::new().set_num_format("yyyy-mm-dd");
                sheet
                    .write_datetime_with_format(row, col, &date, &format)
                    .expect("write date");
            }
            Cell::Blank => {}
        }
    }
}

/// Builder for a two-sheet value set workbook.
pub struct ValueSetFixture {
    pub metadata: Vec<(&'static str, Cell)>,
    /// Expansion rows written above the header, as (row, text).
    pub preamble: Vec<(u32, &'static str)>,
    pub header: Option<&'static str>,
    pub codes: Vec<Cell>,
}

impl ValueSetFixture {
    /// The diabetes medications workbook used throughout the tests.
    pub fn diabetes() -> Self {
        Self {
            metadata: vec![
                ("Value Set Name", Cell::Text("Diabetes Medications")),
                ("OID", Cell::Text("2.16.840.1.113883.3.464.1003.196.12.1001")),
                ("Definition Version", Cell::Text("20210101")),
                ("Steward", Cell::Text(" NLM ")),
                ("Purpose: Clinical Focus", Cell::Text(" Identify diabetes drugs ")),
            ],
            preamble: vec![(0, "Value Set Expansion"), (2, "Expansion Version")],
            header: Some("Code"),
            codes: vec![
                Cell::Text("1000001"),
                Cell::Text("1000002"),
                Cell::Text("1000003"),
            ],
        }
    }

    pub fn without_field(mut self, label: &str) -> Self {
        self.metadata.retain(|(key, _)| *key != label);
        self
    }

    pub fn with_field(mut self, label: &'static str, value: Cell) -> Self {
        self.metadata.retain(|(key, _)| *key != label);
        self.metadata.push((label, value));
        self
    }

    pub fn with_preamble(mut self, preamble: Vec<(u32, &'static str)>) -> Self {
        self.preamble = preamble;
        self
    }

    pub fn with_header(mut self, header: Option<&'static str>) -> Self {
        self.header = header;
        self
    }

    pub fn with_codes(mut self, codes: Vec<Cell>) -> Self {
        self.codes = codes;
        self
    }

    /// Write the workbook into `dir` and return its path.
    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut workbook = Workbook::new();

        let info = workbook.add_worksheet();
        info.set_name("Value Set Info").expect("name sheet");
        for (row, (label, value)) in (0u32..).zip(&self.metadata) {
            info.write_string(row, 0, *label).expect("write label");
            value.write(info, row, 1);
        }

        let expansion = workbook.add_worksheet();
        expansion.set_name("Expansion").expect("name sheet");
        for (row, text) in &self.preamble {
            expansion.write_string(*row, 0, *text).expect("write preamble");
        }
        if let Some(header) = self.header {
            expansion.write_string(11, 0, header).expect("write header");
        }
        expansion
            .write_string(11, 1, "Description")
            .expect("write header");
        for (row, code) in (12u32..).zip(&self.codes) {
            code.write(expansion, row, 0);
            expansion
                .write_string(row, 1, format!("term {row}"))
                .expect("write description");
        }

        workbook.save(&path).expect("save workbook");
        path
    }
}

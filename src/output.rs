//! Output formatting

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::object::Segment;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::error::DiscoResult;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Write `rows` to `out`. The table form always carries a header row,
    /// even when `rows` is empty.
    pub fn write<T, W>(&self, rows: &[T], out: &mut W) -> DiscoResult<()>
    where
        T: Serialize + Tabled,
        W: Write + ?Sized,
    {
        match self {
            OutputFormat::Table => {
                writeln!(out, "{}", render_table(rows))?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, rows).map_err(io::Error::from)?;
                writeln!(out)?;
            }
            OutputFormat::Yaml => {
                serde_yaml::to_writer(&mut *out, rows).map_err(io::Error::other)?;
            }
        }
        Ok(())
    }
}

/// ASCII table, left-aligned, columns sized to content.
pub fn render_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::ascii())
        .with(Modify::new(Segment::all()).with(Alignment::left()))
        .to_string()
}

//! Range output.
//!
//! ```text
//! name   N0100, N0133          one "low, high" pair per line
//! id     784, 799
//! csv    low,high,low_name,high_name
//!        784,799,N0100,N0133
//! json   {"level": 3, "ranges": [{"low": 784, "high": 799}]}
//! ```

use super::{IdRange, RangeSet};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RangeFormat {
    /// Trixel names, e.g. `N0100, N0133`.
    #[default]
    Name,
    /// Raw integer ids.
    Id,
    /// A JSON document with the level and the range list.
    Json,
    /// CSV with both encodings.
    Csv,
}

impl fmt::Display for RangeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RangeFormat::Name => "name",
            RangeFormat::Id => "id",
            RangeFormat::Json => "json",
            RangeFormat::Csv => "csv",
        })
    }
}

impl FromStr for RangeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(RangeFormat::Name),
            "id" => Ok(RangeFormat::Id),
            "json" => Ok(RangeFormat::Json),
            "csv" => Ok(RangeFormat::Csv),
            other => Err(format!("unknown range format '{}'", other)),
        }
    }
}

#[derive(Serialize)]
struct JsonRanges<'a> {
    level: u32,
    ranges: &'a [IdRange],
}

pub fn write_ranges<W: Write>(mut writer: W, ranges: &RangeSet, format: RangeFormat) -> io::Result<()> {
    match format {
        RangeFormat::Name => {
            for range in ranges {
                writeln!(writer, "{}", range)?;
            }
        }
        RangeFormat::Id => {
            for range in ranges {
                writeln!(writer, "{}, {}", range.low.id(), range.high.id())?;
            }
        }
        RangeFormat::Csv => {
            writeln!(writer, "low,high,low_name,high_name")?;
            for range in ranges {
                writeln!(
                    writer,
                    "{},{},{},{}",
                    range.low.id(),
                    range.high.id(),
                    range.low,
                    range.high
                )?;
            }
        }
        RangeFormat::Json => {
            let doc = JsonRanges {
                level: ranges.level(),
                ranges: ranges.pairs(),
            };
            serde_json::to_writer_pretty(&mut writer, &doc)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}

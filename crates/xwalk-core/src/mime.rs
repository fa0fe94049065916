//! # MimeType Registry
//!
//! The closed set of tabular content types a methodology may describe.
//! Adding a type is a reviewed change to this enum: every `match` on
//! `MimeType` must handle it.
//!
//! | Variant | Content type | Extensions |
//! |---------|--------------|------------|
//! | `Csv`  | `text/csv` | `csv` |
//! | `Xls`  | `application/vnd.ms-excel` | `xls` |
//! | `Xlsx` | `application/vnd.openxmlformats-officedocument.spreadsheetml.sheet` | `xlsx` |
//! | `Prq`  | `application/vnd.apache.parquet` | `parquet`, `prq` |
//! | `Ftr`  | `application/vnd.apache.arrow.file` | `feather`, `ftr`, `arrow` |

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::XwalkError;

/// A supported tabular file type.
///
/// Serializes as the canonical content type. Deserialization goes through
/// [`MimeType::from_content_type`], so it accepts exactly what `FromStr`
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MimeType {
    /// Comma-separated values.
    #[serde(rename = "text/csv")]
    Csv,
    /// Legacy Excel workbook.
    #[serde(rename = "application/vnd.ms-excel")]
    Xls,
    /// Office Open XML workbook.
    #[serde(rename = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")]
    Xlsx,
    /// Apache Parquet.
    #[serde(rename = "application/vnd.apache.parquet")]
    Prq,
    /// Apache Arrow IPC file (Feather v2).
    #[serde(rename = "application/vnd.apache.arrow.file")]
    Ftr,
}

impl MimeType {
    /// All supported types in registry order.
    pub fn all() -> &'static [MimeType] {
        &[Self::Csv, Self::Xls, Self::Xlsx, Self::Prq, Self::Ftr]
    }

    /// The canonical content-type string.
    ///
    /// Must match the serde representation.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xls => "application/vnd.ms-excel",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Prq => "application/vnd.apache.parquet",
            Self::Ftr => "application/vnd.apache.arrow.file",
        }
    }

    /// Short upper-case tag (`CSV`, `XLSX`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Xls => "XLS",
            Self::Xlsx => "XLSX",
            Self::Prq => "PRQ",
            Self::Ftr => "FTR",
        }
    }

    /// File extensions recognized for this type, lower-case, without dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Csv => &["csv"],
            Self::Xls => &["xls"],
            Self::Xlsx => &["xlsx"],
            Self::Prq => &["parquet", "prq"],
            Self::Ftr => &["feather", "ftr", "arrow"],
        }
    }

    /// Resolve a content-type string.
    ///
    /// Surrounding whitespace, ASCII case and media-type parameters
    /// (`; charset=utf-8`) are ignored.
    ///
    /// # Errors
    ///
    /// [`XwalkError::UnsupportedMimeType`] if the type is not in the registry.
    pub fn from_content_type(s: &str) -> Result<Self, XwalkError> {
        let essence = s.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        content_type_table()
            .get(essence.as_str())
            .copied()
            .ok_or_else(|| XwalkError::UnsupportedMimeType(s.to_string()))
    }

    /// Resolve a file extension, with or without a leading dot.
    pub fn from_extension(ext: &str) -> Result<Self, XwalkError> {
        let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|mime| mime.extensions().contains(&ext.as_str()))
            .ok_or_else(|| XwalkError::UnsupportedMimeType(ext))
    }

    /// Resolve a path by its extension.
    pub fn from_path(path: &Path) -> Result<Self, XwalkError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| XwalkError::UnsupportedMimeType(path.display().to_string()))?;
        Self::from_extension(ext)
    }
}

/// Reverse lookup from content type to variant, built on first use.
fn content_type_table() -> &'static HashMap<&'static str, MimeType> {
    static TABLE: OnceLock<HashMap<&'static str, MimeType>> = OnceLock::new();
    TABLE.get_or_init(|| {
        MimeType::all()
            .iter()
            .map(|mime| (mime.content_type(), *mime))
            .collect()
    })
}

impl std::fmt::Display for MimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.content_type())
    }
}

impl FromStr for MimeType {
    type Err = XwalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_content_type(s)
    }
}

impl<'de> Deserialize<'de> for MimeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_content_type(&raw).map_err(serde::de::Error::custom)
    }
}

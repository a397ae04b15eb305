use crate::domain::model::{Journal, ScientificArticle};
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// A record kind that can be printed as a table row.
pub trait Tabular: Serialize {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

impl Tabular for ScientificArticle {
    fn headers() -> &'static [&'static str] {
        &[
            "title",
            "author",
            "date_written",
            "word_count",
            "reference_count",
            "original_language",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.title().to_string(),
            self.author().to_string(),
            self.date_written().to_string(),
            self.word_count().to_string(),
            self.reference_count().to_string(),
            self.is_original_language().to_string(),
        ]
    }
}

impl Tabular for Journal {
    fn headers() -> &'static [&'static str] {
        &[
            "name",
            "topic",
            "language",
            "founding_date",
            "issn",
            "price",
            "periodic",
            "article_count",
        ]
    }

    // 文章清單在表格中只顯示數量
    fn row(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.topic().to_string(),
            self.language().to_string(),
            self.founding_date().to_string(),
            self.issn().to_string(),
            format!("{:.2}", self.price()),
            self.is_periodic().to_string(),
            self.articles().len().to_string(),
        ]
    }
}

pub fn render<T: Tabular>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(items)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Csv => render_csv(items),
    }
}

/// Single record; JSON and text only make sense here, CSV gets a one-row table.
pub fn render_one<T: Tabular>(item: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
        OutputFormat::Csv => render_csv(std::slice::from_ref(item)),
        OutputFormat::Text => {
            let mut out = String::new();
            for (header, value) in T::headers().iter().zip(item.row()) {
                let _ = writeln!(out, "{}: {}", header, value);
            }
            Ok(out)
        }
    }
}

fn render_text<T: Tabular>(items: &[T]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i, item.row().join(" | "));
    }
    out
}

fn render_csv<T: Tabular>(items: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::headers())?;
    for item in items {
        writer.write_record(item.row())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ValidationError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 目錄種子檔 (TOML)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub articles: Vec<ArticleSeed>,
    #[serde(default)]
    pub journals: Vec<JournalSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSeed {
    pub title: String,
    pub author: String,
    /// 缺省為今天
    pub date_written: Option<NaiveDate>,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub reference_count: u32,
    #[serde(default = "default_true")]
    pub original_language: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalSeed {
    pub name: String,
    pub topic: String,
    pub language: String,
    /// 缺省為今天
    pub founding_date: Option<NaiveDate>,
    pub issn: String,
    pub price: f64,
    #[serde(default)]
    pub periodic: bool,
    /// Positions in `[[articles]]` to attach. Absent means every article.
    pub articles: Option<Vec<usize>>,
}

fn default_true() -> bool {
    true
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${JOURNAL_PRICE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            CatalogError::ConfigParseError {
                message: format!("env substitution pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        for (i, article) in self.articles.iter().enumerate() {
            validation::validate_non_empty_string(&format!("articles[{}].title", i), &article.title)?;
            validation::validate_non_empty_string(&format!("articles[{}].author", i), &article.author)?;
        }

        for (i, journal) in self.journals.iter().enumerate() {
            let field = |name: &str| format!("journals[{}].{}", i, name);
            validation::validate_non_empty_string(&field("name"), &journal.name)?;
            validation::validate_issn(&field("issn"), &journal.issn)?;
            validation::validate_price(&field("price"), journal.price)?;

            if let Some(positions) = &journal.articles {
                for &position in positions {
                    validation::validate_position(&field("articles"), position, self.articles.len())?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[articles]]
title = "Thoughts"
author = "T. Shevchenko"
date_written = "2024-01-15"
word_count = 100
reference_count = 10

[[articles]]
title = "Saturday report"
author = "V. Subotin"
word_count = 150
reference_count = 100
original_language = false

[[journals]]
name = "KPI Herald"
topic = "University life"
language = "Ukrainian"
founding_date = "1898-09-01"
issn = "243-5345"
price = 45.65
periodic = true
articles = [1]

[[journals]]
name = "Kyiv Life"
topic = "News"
language = "Ukrainian"
issn = "2435-5355"
price = 12.54
"#;

    #[test]
    fn test_parse_catalog_config() {
        let config = CatalogConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.articles.len(), 2);
        assert_eq!(
            config.articles[0].date_written,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert!(config.articles[0].original_language);
        assert!(config.articles[1].date_written.is_none());
        assert!(!config.articles[1].original_language);

        assert_eq!(config.journals.len(), 2);
        assert_eq!(config.journals[0].articles, Some(vec![1]));
        assert!(config.journals[1].articles.is_none());
        assert!(!config.journals[1].periodic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CATALOG_TEST_PRICE", "99.5");

        let content = r#"
[[journals]]
name = "Priced"
topic = "t"
language = "en"
issn = "1234-5678"
price = ${CATALOG_TEST_PRICE}
"#;

        let config = CatalogConfig::from_toml_str(content).unwrap();
        assert_eq!(config.journals[0].price, 99.5);

        std::env::remove_var("CATALOG_TEST_PRICE");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = CatalogConfig::from_toml_str("[[journals]\nname = ");
        assert!(matches!(result, Err(CatalogError::ConfigParseError { .. })));
    }

    #[test]
    fn test_validation_rejects_unknown_article_position() {
        let content = r#"
[[journals]]
name = "Orphan"
topic = "t"
language = "en"
issn = "1234-5678"
price = 1.0
articles = [0]
"#;
        let config = CatalogConfig::from_toml_str(content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("journals[0].articles"));
    }

    #[test]
    fn test_validation_rejects_negative_price() {
        let content = r#"
[[journals]]
name = "Cheap"
topic = "t"
language = "en"
issn = "1234-5678"
price = -3.0
"#;
        let config = CatalogConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }
}

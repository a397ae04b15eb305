use crate::config::toml_config::{ArticleSeed, CatalogConfig, JournalSeed};
use crate::core::container::EntityContainer;
use crate::domain::model::{Journal, ScientificArticle};
use crate::domain::ports::Container;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;

/// The two containers the application works with, built in one explicit step.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    journals: EntityContainer<Journal>,
    articles: EntityContainer<ScientificArticle>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `config` and appends its seeds in file order. Missing dates
    /// fall back to `today`.
    pub fn from_config(config: &CatalogConfig, today: NaiveDate) -> Result<Self> {
        config.validate()?;

        let mut catalog = Self::new();
        for seed in &config.articles {
            catalog.push_article(article_from_seed(seed, today))?;
        }
        tracing::debug!("Seeded {} articles", catalog.articles.len());

        for seed in &config.journals {
            let articles = catalog.select_articles(seed.articles.as_deref())?;
            catalog.push_journal(journal_from_seed(seed, today, articles))?;
        }
        tracing::debug!("Seeded {} journals", catalog.journals.len());

        Ok(catalog)
    }

    /// 內建範例資料：兩篇文章、五本期刊，每本期刊都附上全部文章
    pub fn demo(today: NaiveDate) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.articles.add(
            0,
            ScientificArticle::new("Думи мої", "Т.Г. Шевченко", today, 100, 10, true),
        )?;
        catalog.articles.add(
            1,
            ScientificArticle::new("Суботній звіт", "В.В. Суботін", today, 150, 100, true),
        )?;

        let journals = [
            ("Вісник КПІ", "Життя університету", "243-5345", 45.65, true),
            ("Підслухано, КПІ", "Життя університету", "2543-535", 450.65, false),
            ("Новини КПІ", "Життя університету", "2643-5354", 65.65, true),
            ("Життя Києва", "Новини", "2435-5355", 12.54, false),
            ("Волонтерський рух", "Новини", "2453-5535", 412.32, true),
        ];
        for (i, (name, topic, issn, price, periodic)) in journals.into_iter().enumerate() {
            let journal = Journal::new(
                name,
                topic,
                "Українська",
                today,
                issn,
                price,
                periodic,
                catalog.articles.get_all(),
            );
            catalog.journals.add(i, journal)?;
        }

        tracing::debug!(
            "Demo catalog ready: {} journals, {} articles",
            catalog.journals.len(),
            catalog.articles.len()
        );
        Ok(catalog)
    }

    pub fn journals(&self) -> &EntityContainer<Journal> {
        &self.journals
    }

    pub fn journals_mut(&mut self) -> &mut EntityContainer<Journal> {
        &mut self.journals
    }

    pub fn articles(&self) -> &EntityContainer<ScientificArticle> {
        &self.articles
    }

    pub fn articles_mut(&mut self) -> &mut EntityContainer<ScientificArticle> {
        &mut self.articles
    }

    fn push_article(&mut self, article: ScientificArticle) -> Result<()> {
        let end = self.articles.len();
        self.articles.add(end, article)
    }

    fn push_journal(&mut self, journal: Journal) -> Result<()> {
        let end = self.journals.len();
        self.journals.add(end, journal)
    }

    /// Copies the chosen articles out of the article container.
    fn select_articles(&self, positions: Option<&[usize]>) -> Result<Vec<ScientificArticle>> {
        match positions {
            None => Ok(self.articles.get_all()),
            Some(positions) => positions
                .iter()
                .map(|&p| self.articles.get(p).cloned())
                .collect(),
        }
    }
}

fn article_from_seed(seed: &ArticleSeed, today: NaiveDate) -> ScientificArticle {
    ScientificArticle::new(
        seed.title.clone(),
        seed.author.clone(),
        seed.date_written.unwrap_or(today),
        seed.word_count,
        seed.reference_count,
        seed.original_language,
    )
}

fn journal_from_seed(
    seed: &JournalSeed,
    today: NaiveDate,
    articles: Vec<ScientificArticle>,
) -> Journal {
    Journal::new(
        seed.name.clone(),
        seed.topic.clone(),
        seed.language.clone(),
        seed.founding_date.unwrap_or(today),
        seed.issn.clone(),
        seed.price,
        seed.periodic,
        articles,
    )
}

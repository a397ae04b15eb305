use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Explicit total order for a record kind.
///
/// Records compare by a documented primary key with a secondary key for ties,
/// not field by field, so this is kept apart from `Ord`.
pub trait NaturalOrder {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

/// Stable sort of a slice by each element's [`NaturalOrder`].
pub fn sort_natural<T: NaturalOrder>(items: &mut [T]) {
    items.sort_by(|a, b| a.natural_cmp(b));
}

/// 科學文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScientificArticle {
    title: String,
    author: String,
    date_written: NaiveDate,
    word_count: u32,
    reference_count: u32,
    original_language: bool,
}

impl ScientificArticle {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date_written: NaiveDate,
        word_count: u32,
        reference_count: u32,
        original_language: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date_written,
            word_count,
            reference_count,
            original_language,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date_written(&self) -> NaiveDate {
        self.date_written
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    pub fn reference_count(&self) -> u32 {
        self.reference_count
    }

    pub fn is_original_language(&self) -> bool {
        self.original_language
    }
}

impl NaturalOrder for ScientificArticle {
    /// Date written first, title breaks ties.
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.date_written
            .cmp(&other.date_written)
            .then_with(|| self.title.cmp(&other.title))
    }
}

/// 期刊
///
/// `articles` is owned: [`Journal::new`] takes its own copy, so a journal
/// never observes later changes to the collection it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    name: String,
    topic: String,
    language: String,
    founding_date: NaiveDate,
    issn: String,
    price: f64,
    periodic: bool,
    articles: Vec<ScientificArticle>,
}

impl Journal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        topic: impl Into<String>,
        language: impl Into<String>,
        founding_date: NaiveDate,
        issn: impl Into<String>,
        price: f64,
        periodic: bool,
        articles: Vec<ScientificArticle>,
    ) -> Self {
        Self {
            name: name.into(),
            topic: topic.into(),
            language: language.into(),
            founding_date,
            issn: issn.into(),
            price,
            periodic,
            articles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn founding_date(&self) -> NaiveDate {
        self.founding_date
    }

    pub fn issn(&self) -> &str {
        &self.issn
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    pub fn articles(&self) -> &[ScientificArticle] {
        &self.articles
    }
}

impl NaturalOrder for Journal {
    /// Name first, founding date breaks ties.
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.founding_date.cmp(&other.founding_date))
    }
}

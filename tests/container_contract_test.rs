use anyhow::Result;
use chrono::NaiveDate;
use journal_catalog::{
    sort_natural, CatalogError, Container, EntityContainer, Journal, Operation, ScientificArticle,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn article(title: &str, written: NaiveDate) -> ScientificArticle {
    ScientificArticle::new(title, "Author", written, 1000, 12, true)
}

/// Exercises the contract through a generic function so any implementer
/// could be dropped in.
fn fill<C: Container<ScientificArticle>>(container: &mut C, items: Vec<ScientificArticle>) -> Result<()> {
    for item in items {
        let end = container.len();
        container.add(end, item)?;
    }
    Ok(())
}

#[test]
fn test_positional_scenario_with_records() -> Result<()> {
    let x = article("X", date(2024, 1, 1));
    let y = article("Y", date(2024, 1, 2));
    let z = article("Z", date(2024, 1, 3));

    let mut container = EntityContainer::new();
    container.add(0, x.clone())?;
    container.add(1, y.clone())?;
    container.add(0, z.clone())?;
    assert_eq!(container.get_all(), vec![z.clone(), x.clone(), y.clone()]);

    let removed = container.remove(1)?;
    assert_eq!(removed, x);
    assert_eq!(container.get_all(), vec![z, y]);
    Ok(())
}

#[test]
fn test_failed_calls_leave_records_in_place() -> Result<()> {
    let mut container = EntityContainer::new();
    fill(
        &mut container,
        vec![article("A", date(2024, 1, 1)), article("B", date(2024, 1, 2))],
    )?;
    let before = container.get_all();

    let err = container.update(2, article("C", date(2024, 1, 3))).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::OutOfRange {
            operation: Operation::Update,
            index: 2,
            len: 2
        }
    ));
    assert!(container.add(5, article("C", date(2024, 1, 3))).is_err());
    assert!(container.remove(9).is_err());

    assert_eq!(container.len(), 2);
    assert_eq!(container.get_all(), before);
    Ok(())
}

#[test]
fn test_sorting_snapshot_does_not_reorder_container() -> Result<()> {
    let mut container = EntityContainer::new();
    fill(
        &mut container,
        vec![
            article("B", date(2024, 1, 1)),
            article("Late", date(2025, 1, 1)),
            article("A", date(2024, 1, 1)),
            article("Early", date(2023, 1, 1)),
        ],
    )?;

    let mut snapshot = container.get_all();
    sort_natural(&mut snapshot);
    let sorted: Vec<&str> = snapshot.iter().map(|a| a.title()).collect();
    assert_eq!(sorted, vec!["Early", "A", "B", "Late"]);

    assert_eq!(container.get(0)?.title(), "B");
    assert_eq!(container.get(3)?.title(), "Early");
    Ok(())
}

#[test]
fn test_journal_container_sorted_by_name_then_founding_date() -> Result<()> {
    let journal = |name: &str, founded: NaiveDate| {
        Journal::new(name, "Science", "en", founded, "1234-5678", 10.0, true, vec![])
    };

    let mut journals = EntityContainer::new();
    journals.add(0, journal("Nature", date(1990, 1, 1)))?;
    journals.add(1, journal("Lancet", date(1823, 10, 5)))?;
    journals.add(2, journal("Nature", date(1869, 11, 4)))?;

    let mut snapshot = journals.get_all();
    sort_natural(&mut snapshot);
    let keys: Vec<(&str, NaiveDate)> = snapshot
        .iter()
        .map(|j| (j.name(), j.founding_date()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Lancet", date(1823, 10, 5)),
            ("Nature", date(1869, 11, 4)),
            ("Nature", date(1990, 1, 1)),
        ]
    );
    Ok(())
}

#[test]
fn test_journal_built_from_snapshot_is_unaffected_by_container_changes() -> Result<()> {
    let mut articles = EntityContainer::new();
    fill(&mut articles, vec![article("Only", date(2024, 1, 1))])?;

    let journal = Journal::new(
        "Herald",
        "News",
        "en",
        date(2000, 1, 1),
        "1234-5678",
        5.0,
        false,
        articles.get_all(),
    );

    articles.add(1, article("Later", date(2024, 2, 1)))?;
    articles.update(0, article("Replaced", date(2024, 1, 1)))?;

    assert_eq!(journal.articles().len(), 1);
    assert_eq!(journal.articles()[0].title(), "Only");
    Ok(())
}

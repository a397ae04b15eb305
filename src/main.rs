use clap::Parser;
use journal_catalog::config::{CliConfig, Command, RecordKind};
use journal_catalog::core::report::{render, render_one, OutputFormat, Tabular};
use journal_catalog::utils::error::{ErrorSeverity, Result};
use journal_catalog::utils::logger;
use journal_catalog::{sort_natural, Catalog, Container, EntityContainer, NaturalOrder};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut catalog = config.load_catalog(today)?;
    tracing::info!(
        "📚 Catalog loaded: {} journals, {} articles",
        catalog.journals().len(),
        catalog.articles().len()
    );

    match config.command {
        Command::List { kind, sort, format } => match kind {
            RecordKind::Journals => list(catalog.journals(), sort, format),
            RecordKind::Articles => list(catalog.articles(), sort, format),
        },
        Command::Show {
            kind,
            index,
            format,
        } => match kind {
            RecordKind::Journals => show(catalog.journals(), index, format),
            RecordKind::Articles => show(catalog.articles(), index, format),
        },
        Command::Remove {
            kind,
            index,
            format,
        } => match kind {
            RecordKind::Journals => remove(catalog.journals_mut(), index, format),
            RecordKind::Articles => remove(catalog.articles_mut(), index, format),
        },
        Command::Demo => demo(&mut catalog),
    }
}

fn list<T>(container: &EntityContainer<T>, sort: bool, format: OutputFormat) -> Result<()>
where
    T: Tabular + NaturalOrder + Clone,
{
    let mut snapshot = container.get_all();
    if sort {
        sort_natural(&mut snapshot);
    }
    print!("{}", render(&snapshot, format)?);
    Ok(())
}

fn show<T>(container: &EntityContainer<T>, index: usize, format: OutputFormat) -> Result<()>
where
    T: Tabular + Clone,
{
    let item = container.get(index)?;
    print!("{}", render_one(item, format)?);
    Ok(())
}

fn remove<T>(container: &mut EntityContainer<T>, index: usize, format: OutputFormat) -> Result<()>
where
    T: Tabular + Clone,
{
    let removed = container.remove(index)?;
    tracing::info!("🗑️ Removed record at position {}", index);

    println!("Removed:");
    print!("{}", render_one(&removed, format)?);
    println!("Remaining:");
    print!("{}", render(&container.get_all(), format)?);
    Ok(())
}

fn demo(catalog: &mut Catalog) -> Result<()> {
    let journal = catalog.journals().get(3)?;
    println!("{:?}", journal);

    let removed = catalog.journals_mut().remove(4)?;
    tracing::info!("🗑️ Removed journal: {}", removed.name());
    Ok(())
}

use clap::Parser;
use course_connect::app::{render, shell};
use course_connect::core::ConfigProvider;
use course_connect::utils::{logger, validation};
use course_connect::utils::validation::Validate;
use course_connect::{
    Browser, CliConfig, DirectoryError, FileCatalogSource, FilterEvent, LocalStorage,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting course-connect");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ course-connect failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: CliConfig) -> Result<(), DirectoryError> {
    config.validate()?;

    let directory = config.directory_config()?;
    if let Err(e) = directory.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    let catalog_path = config.catalog_path(&directory)?;
    let source = FileCatalogSource::new(LocalStorage::new(config.storage_base()), catalog_path);
    let mut browser = Browser::load(&source, directory.departments().to_vec()).await?;
    browser.apply(FilterEvent::SetQuery(config.query.clone()));
    browser.apply(FilterEvent::SelectDepartment(config.department.clone()));

    if config.lint {
        let issues = validation::lint_catalog(browser.catalog().courses(), browser.departments());
        if issues.is_empty() {
            println!("✅ {}: no catalog issues", catalog_path);
        } else {
            for issue in &issues {
                println!("⚠️  {}", issue);
            }
            println!("{} issue(s) in {}", issues.len(), catalog_path);
        }
        return Ok(());
    }

    if config.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        shell::run_shell(&mut browser, directory.name(), stdin, tokio::io::stdout()).await?;
    } else {
        println!("{}", render::render(&browser, config.format, directory.name())?);
    }

    if let Some(contact) = directory.support_contact() {
        if config.format == render::OutputFormat::Text {
            println!("\nNeed help? Contact {}", contact);
        }
    }

    Ok(())
}

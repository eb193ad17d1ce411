use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{session::JWT_KEY, HttpStore, LocalStorage, MemoryStore, SelectedFile, Store};
use frontend::{
    ui::new_bill::{AMOUNT, COMMENTARY, DATE, EXPENSE_NAME, EXPENSE_TYPE, PCT, VAT},
    DomEvent, Document, HtmlRenderer, RoutePath, Router,
};
use shared::domain::{BillId, SessionUser, UserType};
use tracing::{info, warn};

mod config;

#[derive(Parser, Debug)]
#[command(name = "billed", about = "Billed employee space, driven from the terminal")]
struct Cli {
    /// Bills API root; overrides the settings file and environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Local-storage file holding the session.
    #[arg(long)]
    storage_path: Option<PathBuf>,
    /// Serve the bills from an in-memory store seeded with sample data.
    #[arg(long)]
    demo: bool,
    /// Print the rendered page markup.
    #[arg(long)]
    html: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stores the employee session used by every other command.
    Session {
        #[arg(long)]
        email: String,
        #[arg(long)]
        jwt: Option<String>,
    },
    #[command(flatten)]
    Page(PageCommand),
}

/// Commands that run the router against the configured store.
#[derive(Subcommand, Debug)]
enum PageCommand {
    /// Lists the bills, latest first.
    Bills,
    /// Opens a page by its hash, e.g. `#employee/bills`.
    Open { hash: String },
    /// Shows the receipt of one bill.
    Receipt { bill_id: String },
    /// Uploads a receipt and submits a new bill.
    NewBill {
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = "")]
        expense_type: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "")]
        vat: String,
        #[arg(long, default_value = "")]
        pct: String,
        #[arg(long, default_value = "")]
        commentary: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (mut settings, settings_problems) = config::load_settings();
    if let Some(api_url) = &cli.api_url {
        settings.api_url = config::normalize_api_url(api_url);
    }
    let storage_path = cli
        .storage_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.storage_path));

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();
    for problem in &settings_problems {
        warn!("{problem}");
    }

    let mut storage = LocalStorage::open(&storage_path)
        .with_context(|| format!("failed to open session storage '{}'", storage_path.display()))?;

    let command = match cli.command {
        Command::Session { email, jwt } => {
            storage.clear();
            storage.set_user(&SessionUser {
                user_type: UserType::Employee,
                email: email.clone(),
            })?;
            if let Some(jwt) = jwt {
                storage.set_item(JWT_KEY, jwt);
            }
            storage.save()?;
            info!(path = %storage_path.display(), %email, "session stored");
            println!("session stored for {email}");
            return Ok(());
        }
        Command::Page(command) => command,
    };

    let session = Arc::new(storage);
    let store: Arc<dyn Store> = if cli.demo {
        info!("using the in-memory demo store");
        Arc::new(MemoryStore::with_fixtures())
    } else {
        let store = HttpStore::new(
            &settings.api_url,
            session.clone(),
            Duration::from_secs(settings.http_timeout_seconds),
        )
        .context("failed to build the bills API client")?;
        info!(api_url = %store.base_url(), "using the bills API");
        Arc::new(store)
    };

    let mut router = Router::new(store, session, Arc::new(HtmlRenderer));
    let mut doc = Document::new();

    match command {
        PageCommand::Bills => router.navigate(&mut doc, RoutePath::Bills).await,
        PageCommand::Open { hash } => router.navigate_hash(&mut doc, &hash).await?,
        PageCommand::Receipt { bill_id } => {
            router.navigate(&mut doc, RoutePath::Bills).await;
            router
                .dispatch(&mut doc, DomEvent::ClickIconEye(BillId::new(bill_id)))
                .await;
        }
        PageCommand::NewBill {
            file,
            expense_type,
            name,
            date,
            amount,
            vat,
            pct,
            commentary,
        } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read receipt '{}'", file.display()))?;
            let mime_type = mime_guess::from_path(&file).first_raw().map(str::to_string);

            router.navigate(&mut doc, RoutePath::NewBill).await;
            doc.select_file(SelectedFile::new(
                file.to_string_lossy(),
                mime_type,
                bytes,
            ));
            router.dispatch(&mut doc, DomEvent::FileChange).await;

            doc.set_field(EXPENSE_TYPE, expense_type);
            doc.set_field(EXPENSE_NAME, name);
            doc.set_field(DATE, date);
            doc.set_field(AMOUNT, amount);
            doc.set_field(VAT, vat);
            doc.set_field(PCT, pct);
            doc.set_field(COMMENTARY, commentary);
            router.dispatch(&mut doc, DomEvent::Submit).await;
        }
    }

    report(&router, &mut doc, cli.html);
    Ok(())
}

fn report(router: &Router, doc: &mut Document, html: bool) {
    if let Some(path) = router.current_path() {
        println!("page: {path}");
    }
    for alert in doc.take_alerts() {
        println!("alert: {alert}");
    }
    if let Some(banner) = doc.banner() {
        println!("error: {banner}");
    }
    if let Some(modal) = doc.modal_body() {
        println!("receipt:\n{modal}");
    }
    if html {
        println!("{}", doc.root_html());
    }
}

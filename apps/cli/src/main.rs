use std::{
    io::Write,
    sync::Arc,
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use tubesum_core::{
    AuthSession, Config, Gate, HttpWebhook, NhostSession, Panel, PanelView, gate,
    looks_like_youtube_url,
};

mod render;

#[derive(Parser)]
#[command(name = "tubesum")]
#[command(about = "Summarize YouTube videos through an authenticated summarization webhook")]
struct Cli {
    /// Video URL. Starts an interactive session when omitted.
    url: Option<String>,

    /// Account email for the auth service
    #[arg(short, long, env = "NHOST_EMAIL")]
    email: Option<String>,

    /// Account password for the auth service
    #[arg(short, long, env = "NHOST_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Summarization webhook endpoint (overrides TUBESUM_WEBHOOK_URL)
    #[arg(long)]
    endpoint: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubesum=warn,tubesum_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), e);
    std::process::exit(1);
}

async fn sign_in(session: &NhostSession, email: Option<String>, password: Option<String>) {
    let (Some(email), Some(password)) = (email, password) else {
        return;
    };

    let spinner = render::create_spinner("Checking session...");
    let result = session.sign_in(&email, &password).await;
    spinner.finish_and_clear();

    if let Err(e) = result {
        tracing::warn!(error = %e, "sign-in failed");
        render::sign_in_surface(Some(&e.to_string()));
        std::process::exit(1);
    }
}

/// Submit `url` and render the outcome. Returns whether a summary was shown.
async fn run_submission(panel: &Panel, url: String) -> bool {
    if !url.is_empty() && !looks_like_youtube_url(&url) {
        render::url_hint(&url);
    }

    let started = Instant::now();
    let mut rx = panel.subscribe();
    let submit = panel.submit_url(url);
    tokio::pin!(submit);

    let mut spinner = None;
    let result = loop {
        tokio::select! {
            result = &mut submit => break result,
            Ok(()) = rx.changed() => {
                let processing = rx.borrow_and_update().is_processing;
                if processing && spinner.is_none() {
                    spinner = Some(render::create_spinner("Processing..."));
                }
            }
        }
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    render::view(&panel.view(), Some(started.elapsed()));
    result.is_ok()
}

async fn interactive(panel: &Panel) -> Result<()> {
    render::view(&panel.view(), None);
    println!(
        "{}",
        style("Commands: :signout to sign out, :quit to exit").dim()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", render::prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":signout" => {
                if let Err(e) = panel.auth().sign_out().await {
                    eprintln!("{} {}", style("Warning:").yellow().bold(), e);
                }
                println!("{}", style("Signed out.").dim());
                break;
            }
            _ => {
                run_submission(panel, line.clone()).await;
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::from_env().unwrap_or_else(|e| fail(e));
    if let Some(endpoint) = cli.endpoint {
        config = config.with_webhook_url(endpoint).unwrap_or_else(|e| fail(e));
    }

    // Validate auth configuration early
    let session = Arc::new(NhostSession::new(&config.nhost).unwrap_or_else(|e| fail(e)));
    let webhook = Arc::new(HttpWebhook::new(&config.webhook_url));
    tracing::debug!(endpoint = webhook.endpoint(), auth = session.base_url(), "configured");

    println!(
        "\n{}  {}\n",
        style("tubesum").cyan().bold(),
        style("Video Summarizer").dim()
    );

    sign_in(&session, cli.email, cli.password).await;

    match gate(session.status()) {
        Gate::Loading => {
            render::view(&PanelView::AuthLoading, None);
            return Ok(());
        }
        Gate::SignIn => {
            render::sign_in_surface(None);
            std::process::exit(1);
        }
        Gate::Panel => {}
    }

    render::header(session.user_email().as_deref());
    let panel = Panel::new(webhook, session);

    match cli.url {
        Some(url) => {
            let ok = run_submission(&panel, url).await;
            if !ok {
                std::process::exit(1);
            }
        }
        None => interactive(&panel).await?,
    }

    Ok(())
}

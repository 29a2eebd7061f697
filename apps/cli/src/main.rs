use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use echosummarize_core::{
    ClientConfig, PageOptions, RevealConfig, SummaryClient, SummaryPage, logging::init_tracing,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::print_summary;

mod terminal;

/// How long the service took, as shown next to the "Summary:" header.
fn format_wait(wait: Duration) -> String {
    let millis = wait.as_millis();
    match millis {
        0..1_000 => format!("{}ms", millis),
        1_000..60_000 => format!("{:.1}s", wait.as_secs_f64()),
        _ => format!("{}m {:02}s", wait.as_secs() / 60, wait.as_secs() % 60),
    }
}

#[derive(Parser)]
#[command(name = "echosummarize")]
#[command(about = "Distill YouTube videos into concise summaries")]
struct Cli {
    /// YouTube URL, sent to the service as-is
    url: String,

    /// Base URL of the summarization service (overrides ECHOSUMMARIZE_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Milliseconds between revealed characters (overrides ECHOSUMMARIZE_REVEAL_SPEED_MS)
    #[arg(short, long)]
    speed_ms: Option<u64>,

    /// Print the summary at once instead of typing it out
    #[arg(long)]
    no_reveal: bool,
}

fn create_spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut client_config = ClientConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        client_config.endpoint = endpoint;
    }

    let mut reveal = RevealConfig::from_env()?;
    if let Some(ms) = cli.speed_ms {
        reveal.speed = Duration::from_millis(ms);
    }
    reveal.enabled = !cli.no_reveal;

    let client = SummaryClient::new(client_config);
    let mut page = SummaryPage::new(PageOptions {
        reveal,
        ..PageOptions::default()
    });

    println!(
        "\n{}  {}\n",
        style("EchoSummarize").magenta().bold(),
        style("Distill YouTube videos into concise summaries with AI magic.").dim()
    );

    page.set_query(cli.url);
    let ticket = page.submit();
    tracing::debug!(endpoint = %client.config().summarize_url(), "submitting");

    let started = Instant::now();
    let spinner = create_spinner(page.submit_button().label.as_str())?;
    let result = client.summarize(&ticket.url).await;
    spinner.finish_and_clear();
    page.resolve(ticket.id, result);

    let Some(summary) = page.summary() else {
        return Ok(());
    };
    if summary.is_empty() {
        return Ok(());
    }

    println!(
        "{} {}\n",
        style("Summary:").magenta().bold(),
        style(format!("[{}]", format_wait(started.elapsed()))).dim()
    );

    print_summary(&Term::stdout(), summary, &page.options().reveal).await?;

    Ok(())
}

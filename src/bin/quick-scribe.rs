use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;

use quick_scribe::{
    data_uri, hf::HfInferenceClient, metrics::compute_metrics, save_summary,
    tracing::init_tracing_subscriber, SessionError, SummarizeSession, SummaryModel,
};

#[derive(Parser)]
#[command(name = "quick-scribe", about = "Summarize pasted notes with hosted models")]
struct Cli {
    /// Model id to summarize with
    /// (sshleifer/distilbart-cnn-12-6, t5-small, google/pegasus-xsum)
    #[arg(long, default_value = "sshleifer/distilbart-cnn-12-6")]
    model: SummaryModel,

    /// Maximum characters sent to the model; longer input is trimmed
    #[arg(long, env = "MAX_INPUT_CHARS", default_value = "1024")]
    max_chars: usize,

    /// Read input from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request a summary and print it
    Summarize {
        /// Hugging Face API token
        #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
        api_token: String,

        /// Also save the summary to this file as text/plain
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also print the summary as a base64 data URI
        #[arg(long)]
        data_uri: bool,
    },
    /// Print word/character metrics for the input without summarizing
    Stats,
}

async fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let text = read_input(cli.input.as_ref()).await?;

    match cli.command {
        Command::Stats => {
            let metrics = compute_metrics(&text, cli.max_chars);
            println!(
                "Words: {} | Characters: {}",
                metrics.word_count, metrics.char_count
            );
            println!(
                "Input fills {}% of the {}-character cap",
                metrics.fullness_percent, cli.max_chars
            );
        }
        Command::Summarize {
            api_token,
            out,
            data_uri: print_data_uri,
        } => {
            let client = HfInferenceClient::new(api_token);
            let mut session = SummarizeSession::new(client).max_chars(cli.max_chars);

            let metrics = session.update_input(&text);
            tracing::info!(
                words = metrics.word_count,
                chars = metrics.char_count,
                model = %cli.model,
                "Generating summary..."
            );

            let response = match session.summarize(cli.model).await {
                Ok(response) => response,
                Err(SessionError::EmptyInput) => {
                    anyhow::bail!("please provide some text to summarize");
                }
                Err(SessionError::Summarizer(e)) => {
                    if let quick_scribe::hf::HfError::Parse { body, .. } = &e {
                        tracing::error!(%body, "Unexpected response body");
                    }
                    return Err(e.into());
                }
            };

            println!("{}", response.summary);

            if let Some(out) = out {
                save_summary(&out, &response.summary).await?;
            }

            if print_data_uri {
                println!("{}", data_uri(&response.summary));
            }
        }
    }

    Ok(())
}

mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use media_shim::{ExtractOptions, Normalizer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries results; logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_shim=info".into())
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from(cli.runtime);

    match cli.command {
        Commands::YtDlp { import_path, args } => {
            let argv: Vec<String> = std::iter::once(import_path).chain(args).collect();
            let envelope = config.yt_dlp().run(argv.as_slice()).await;
            println!("{}", envelope.to_json());
        }
        Commands::YouGet {
            import_path,
            options,
            raw,
            url
        } => {
            let client = config.you_get();
            if raw {
                let output = client.extract_raw(&import_path, &url).await?;
                print!("{}", output.stdout);
            } else {
                let options = match options {
                    Some(json) => ExtractOptions::from_json(&json)?,
                    None => ExtractOptions::default()
                };
                let extraction = client.extract(&import_path, &url, &options).await?;
                println!("{}", extraction.into_text());
            }
        }
        Commands::FixLineEndings { root } => {
            tracing::info!("Scanning files to normalize line endings...");
            let normalizer = Normalizer::new(root);
            let report = tokio::task::spawn_blocking(move || normalizer.run())
                .await
                .context("line ending normalizer panicked")??;
            tracing::info!(
                "Done. All line endings are now LF. ({} scanned, {} fixed)",
                report.scanned,
                report.rewritten.len()
            );
        }
        Commands::Version { import_path } => {
            let version = config
                .yt_dlp()
                .version(&import_path)
                .await
                .context("yt-dlp not found or not executable")?;
            println!("{version}");
        }
    }

    Ok(())
}

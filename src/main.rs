use clap::Parser;
use faceshape::{cli, config, detector, error, interactive, render};
use cli::{Cli, Commands};
use config::{Config, DELAY_ENV_VAR};
use detector::{Detector, EventOutcome, SharedClassifier};
use error::Result;
use faceshape_common::{view, SimulatedClassifier};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Detect { image, json, seed, delay_ms } => {
            let config = Config::load()?;
            let delay = delay_ms.map(Duration::from_millis).unwrap_or_else(|| config.analysis_delay());
            let mut detector = Detector::new(build_classifier(seed.or(config.seed), delay));

            detector.submit(&image)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Analyzing your face shape...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let outcomes = detector.settle().await;
            spinner.finish_and_clear();

            for outcome in outcomes {
                if let EventOutcome::IntakeFailed(err) = outcome {
                    return Err(err);
                }
            }

            let state = detector.state();
            if json {
                if let Some(result) = &state.current_result {
                    println!("{}", serde_json::to_string_pretty(result)?);
                }
            } else {
                println!("{}", render::render_detector(&view::detector_view(state)));
                println!("※ この結果は画像を解析しておらず、ランダムに選ばれたものです");
            }
        }

        Commands::Guide => {
            println!("{}", render::render_guide(&view::guide_cards()));
        }

        Commands::Interactive { seed } => {
            let config = Config::load()?;
            let detector = Detector::new(build_classifier(seed.or(config.seed), config.analysis_delay()));
            interactive::run_interactive(detector).await?;
        }

        Commands::Config { set_delay_ms, show } => {
            let mut config = Config::load_file()?;

            if let Some(delay_ms) = set_delay_ms {
                config.set_analysis_delay_ms(delay_ms)?;
                println!("✔ 解析待ち時間を {}ms に設定しました", delay_ms);
            }

            if show || set_delay_ms.is_none() {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  解析待ち時間: {}ms", config.analysis_delay_ms);
                match Config::delay_override() {
                    Ok(Some(delay_ms)) => {
                        println!("  ({} により {}ms で上書き中)", DELAY_ENV_VAR, delay_ms)
                    }
                    Ok(None) => {}
                    Err(err) => println!("  ⚠ {}", err),
                }
                println!(
                    "  乱数シード: {}",
                    config.seed.map(|s| s.to_string()).unwrap_or_else(|| "未設定".into())
                );
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_classifier(seed: Option<u64>, delay: Duration) -> SharedClassifier {
    let classifier = match seed {
        Some(seed) => SimulatedClassifier::with_seed(seed),
        None => SimulatedClassifier::new(),
    };
    Arc::new(classifier.with_latency(delay))
}

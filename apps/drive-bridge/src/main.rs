//! Voice Drive Bridge
//!
//! Wires an utterance source to the intent classifier and the dispatch
//! client: speech segment -> motion intent -> HTTP drive command, with an
//! indicator color shown for every classified utterance. A failed dispatch
//! is logged by the dispatch task and never interrupts this loop.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, error, info};

use drive_dispatch::{DriveClient, EndpointConfig};
use drive_intent::{classify, FeedbackPolicy, MotionIntent};
use voice_listen::{
    Indicator, ListenConfig, MockIndicator, MockUtterances, Utterance, UtteranceSource,
};

#[derive(Parser)]
#[command(name = "drive-bridge")]
#[command(about = "Voice-controlled drive bridge")]
struct Args {
    /// Drive server host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Drive server port
    #[arg(long, default_value_t = 9999)]
    port: u16,

    /// Drive server path
    #[arg(long, default_value = "/json")]
    path: String,

    /// Utterance source to use
    #[arg(long, default_value = "stdin")]
    source: String,

    /// Show the stop color instead of blue for unrecognized input
    #[arg(long)]
    plain_fallback: bool,

    /// Language hint for the recognizer
    #[arg(long, default_value = "en-US")]
    language: String,

    /// Sample rate for audio capture
    #[arg(long, default_value_t = 16000)]
    sample_rate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();

    let endpoint = EndpointConfig {
        host: args.host.clone(),
        port: args.port,
        path: args.path.clone(),
    };
    let client = DriveClient::new(&endpoint)?;
    let policy = FeedbackPolicy {
        distinct_fallback: !args.plain_fallback,
    };
    let listen_config = ListenConfig {
        language: Some(args.language.clone()),
        sample_rate_hz: args.sample_rate,
        ..ListenConfig::default()
    };

    print_banner();
    info!("dispatching drive commands to {}", endpoint.url());

    let mut indicator = MockIndicator::default();

    match args.source.as_str() {
        "mock" => {
            let mut source = MockUtterances::new(listen_config);
            while let Some(utterance) = source.poll() {
                handle_utterance(&utterance, &client, policy, &mut indicator);
            }
        }
        "stdin" => run_stdin_loop(&client, policy, &mut indicator)?,
        other => {
            error!("unknown utterance source: {}", other);
            return Err(anyhow::anyhow!("unknown utterance source: {}", other));
        }
    }

    Ok(())
}

/// One trip through the bridge: classify, show feedback, dispatch.
fn handle_utterance(
    utterance: &Utterance,
    client: &DriveClient,
    policy: FeedbackPolicy,
    indicator: &mut impl Indicator,
) {
    let classification = classify(&utterance.text);
    match classification.matched {
        Some(keyword) => info!(
            "{:?} -> {} (matched {:?})",
            utterance.text, classification.intent, keyword
        ),
        None => debug!("did not understand {:?}, sending stop", utterance.text),
    }
    indicator.set_color(classification.feedback_color(policy));
    client.send_detached(classification.intent);
}

fn run_stdin_loop(
    client: &DriveClient,
    policy: FeedbackPolicy,
    indicator: &mut impl Indicator,
) -> Result<()> {
    println!("Type a command and press Enter (or 'quit' to exit):");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut segment = 0u64;

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();

        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        if !line.is_empty() {
            let utterance = Utterance {
                start_ms: segment * 1000,
                end_ms: (segment + 1) * 1000,
                text: line.to_string(),
                ts: None,
            };
            segment += 1;
            handle_utterance(&utterance, client, policy, indicator);
        }
    }

    Ok(())
}

fn print_banner() {
    println!("You can tell me how to drive with commands of:");
    let names: Vec<String> = MotionIntent::ALL.iter().map(|i| i.to_string()).collect();
    println!("  {}", names.join(", "));
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

//! Interactive terminal rendition of the share test grid: one action per
//! share method plus the download trigger, every outcome delivered as a
//! blocking notification.
//!
//! The platform here is simulated (it accepts everything except payloads
//! that combine a file with a url, a quirk seen on real devices), which
//! makes the harness runnable anywhere. Wire up a real `SharePlatform`
//! implementation to probe an actual environment.

use std::{
    io::{self, BufRead, Write},
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use share_harness::{HarnessParams, HarnessSession, Notifier, OutcomeReport};
use share_sdk::{ShareError, SharePayload, SharePlatform, METHOD_NAMES};
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

struct SimulatedPlatform;

#[async_trait]
impl SharePlatform for SimulatedPlatform {
    fn has_share(&self) -> bool {
        true
    }

    fn has_can_share(&self) -> bool {
        true
    }

    fn can_share(&self, payload: &SharePayload) -> bool {
        !(payload.url.is_some() && !payload.files.is_empty())
    }

    async fn share(&self, payload: SharePayload) -> Result<(), ShareError> {
        // pretend the native share sheet is up for a moment
        sleep(Duration::from_millis(300)).await;
        if payload.title.is_none() && payload.text.is_none() && payload.url.is_none()
            && payload.files.is_empty()
        {
            return Err(ShareError::new("TypeError", "Nothing to share"));
        }
        Ok(())
    }
}

/// Prints the report and waits for Enter, the terminal equivalent of a
/// blocking alert dialog.
struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, report: &OutcomeReport) {
        println!("\n  {report}");
        print!("  (press Enter to continue) ");
        io::stdout().flush().ok();
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();
    }
}

fn read_choice() -> Option<String> {
    print!("> ");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    let choice = line.trim().to_string();
    (!choice.is_empty()).then_some(choice)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let platform = Arc::new(SimulatedPlatform);
    let session = HarnessSession::new(HarnessParams::new(
        platform.clone(),
        Arc::new(AlertNotifier),
    ));

    let capability = session.probe();
    println!("Share capability testing");
    println!("  share entry point:     {}", if platform.has_share() { "yes" } else { "no" });
    println!("  feasibility predicate: {}", if platform.has_can_share() { "yes" } else { "no" });
    println!("  overall support:       {}", if capability.supported { "supported" } else { "not supported" });

    loop {
        println!();
        println!("  0) download image");
        for (index, method) in METHOD_NAMES.iter().enumerate() {
            println!("  {}) share {method}", index + 1);
        }
        println!("  q) quit");

        let Some(choice) = read_choice() else {
            continue;
        };
        match choice.as_str() {
            "q" => break,
            "0" => {
                if session.download().await.is_ok() {
                    if let Some(url) = session.display_url() {
                        println!("  image downloaded: {url}");
                    }
                }
            }
            other => match other.parse::<usize>() {
                Ok(index) if (1..=METHOD_NAMES.len()).contains(&index) => {
                    session.dispatch(METHOD_NAMES[index - 1]).await;
                }
                _ => println!("  unknown action: {other}"),
            },
        }
    }
}

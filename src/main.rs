use std::sync::Arc;

use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;
use tracing_subscriber::EnvFilter;

use callform::config::WidgetConfig;
use callform::models::BookingForm;
use callform::services::clock::SystemClock;
use callform::services::slots;
use callform::services::submission::log::LogSink;
use callform::services::submission::NoPickers;
use callform::widget::BookingWidget;

/// Terminal stand-in for the page shell: renders every state change the
/// widget publishes and feeds user commands into its transitions.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = WidgetConfig::from_env();
    tracing::info!(
        reset_delay_ms = config.reset_delay_ms,
        booking_window_days = config.booking_window_days,
        "starting booking widget shell"
    );

    let widget = Arc::new(BookingWidget::new(
        config,
        Arc::new(SystemClock),
        Arc::new(LogSink),
        Arc::new(NoPickers),
    ));

    let mut snapshots = WatchStream::new(widget.subscribe());
    let renderer = tokio::spawn(async move {
        while let Some(form) = snapshots.next().await {
            render(&form);
        }
    });

    println!("commands: open | close | phone <digits> | date <YYYY-MM-DD> | time <H:MM> | times | submit | show | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };
        match command {
            "open" => widget.open(),
            "close" => widget.close(),
            "phone" => {
                if let Err(err) = widget.set_phone(arg) {
                    println!("rejected: {err}");
                }
            }
            "date" => match NaiveDate::parse_from_str(arg, "%Y-%m-%d") {
                Ok(date) => {
                    if let Err(err) = widget.set_date(date) {
                        println!("rejected: {err}");
                    }
                }
                Err(_) => println!("expected a date like 2025-06-16"),
            },
            "time" => {
                if let Err(err) = widget.set_time(arg) {
                    println!("rejected: {err}");
                }
            }
            "times" => println!("{}", slots::available_times().join(", ")),
            "submit" => {
                if let Err(err) = widget.submit().await {
                    println!("rejected: {err}");
                }
            }
            "show" => render(&widget.snapshot()),
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    renderer.abort();
    Ok(())
}

fn render(form: &BookingForm) {
    let date = form
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let time = form.time.as_deref().unwrap_or("-");
    let phone = if form.phone.is_empty() {
        "-"
    } else {
        form.phone.as_str()
    };
    println!(
        "[{}] phone: {phone} | date: {date} | time: {time}",
        form.phase.as_str()
    );
}

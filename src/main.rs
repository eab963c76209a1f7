// SPDX-License-Identifier: MPL-2.0
//! Interactive exerciser for the flash-message engine.
//!
//! Reads commands from stdin and drives a [`FlashService`], printing the
//! banner state after each one. Useful for poking at rotation and
//! deduplication behavior without a hosting UI.

use flashbar::config;
use flashbar::error::{Error, Result};
use flashbar::flash::{FlashService, Message, Priority};
use tokio::io::{AsyncBufReadExt, BufReader};

/// A parsed stdin command.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Push(Message),
    Next,
    Show,
    Clear,
    Quit,
    Help,
}

/// Parses a command line.
///
/// Message syntax: `[high] success|error <text>`, e.g.
/// `high error Lost connection to the server.`
fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    match trimmed {
        "" => return None,
        "next" => return Some(Command::Next),
        "show" => return Some(Command::Show),
        "clear" => return Some(Command::Clear),
        "quit" | "exit" => return Some(Command::Quit),
        "help" => return Some(Command::Help),
        _ => {}
    }

    let (priority, rest) = match trimmed.strip_prefix("high ") {
        Some(rest) => (Priority::High, rest.trim_start()),
        None => (Priority::Low, trimmed),
    };

    let (status, text) = rest.split_once(' ')?;
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let message = match status {
        "success" => Message::success(text),
        "error" => Message::error(text),
        _ => return None,
    };
    Some(Command::Push(message.with_priority(priority)))
}

async fn print_state(service: &FlashService) {
    match service.text().await {
        Some(text) => println!("displayed: {text}"),
        None => println!("displayed: (nothing)"),
    }
    let pending = service.pending_texts().await;
    if !pending.is_empty() {
        println!("pending:   {}", pending.join(" | "));
    }
}

fn print_help() {
    println!("commands:");
    println!("  [high] success <text>   push a success message");
    println!("  [high] error <text>     push an error message");
    println!("  next                    force rotation to the next message");
    println!("  show                    print displayed message and backlog");
    println!("  clear                   drop everything");
    println!("  quit                    exit");
}

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)
        .map_err(|e| Error::Config(e.to_string()))?;

    let mut args = pico_args::Arguments::from_env();
    let timeout_ms: Option<u64> = args
        .opt_value_from_str("--timeout-ms")
        .map_err(|e| Error::Config(e.to_string()))?;

    let mut config = config::load().unwrap_or_default();
    if timeout_ms.is_some() {
        config.display_timeout_ms = timeout_ms;
    }

    let service = FlashService::from_config(&config);
    log::info!(
        "flashbar demo, display timeout {}ms",
        config.display_timeout().as_millis()
    );
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Some(Command::Push(message)) => {
                let outcome = service.push(message).await;
                println!("-> {outcome:?}");
                print_state(&service).await;
            }
            Some(Command::Next) => {
                service.force_display().await;
                print_state(&service).await;
            }
            Some(Command::Show) => print_state(&service).await,
            Some(Command::Clear) => {
                service.clear().await;
                print_state(&service).await;
            }
            Some(Command::Quit) => break,
            Some(Command::Help) | None => print_help(),
        }
    }

    Ok(())
}

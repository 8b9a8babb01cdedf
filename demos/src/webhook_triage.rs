//! Webhook Triage Example
//!
//! Demonstrates the casegen macros on a feed of loosely-typed webhook
//! deliveries:
//! - `#[codable_enum(String)]` decodes event kinds that may be unknown
//! - `#[nullable_enum]` maps free-form role names onto a closed set
//! - `stringified!` logs the checks it performs alongside their results
//!
//! # Usage
//! cargo run -p casegen-demos --bin webhook-triage
//! cargo run -p casegen-demos --bin webhook-triage -- demos/data/webhooks.jsonl
//!
//! Set `RUST_LOG=webhook_triage=debug` to see every delivery.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use casegen::prelude::*;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

const BUNDLED_FEED: &str = include_str!("../data/webhooks.jsonl");

// ============================================================================
// Delivery Types
// ============================================================================

/// Kind of webhook event. Unrecognized kinds decode to `Unknown` instead of
/// failing the whole delivery.
#[codable_enum(String)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    Opened,
    Pr = "pull_request",
    Push,
}

#[nullable_enum]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Maintainer,
    Contributor,
    Visitor,
}

#[derive(Debug, Deserialize)]
pub struct Delivery {
    pub id: u64,
    pub event: EventKind,
    pub sender: String,
    pub role: String,
}

// ============================================================================
// Triage
// ============================================================================

#[derive(Debug, Default)]
struct Tally {
    by_event: BTreeMap<EventKind, usize>,
    by_role: BTreeMap<Role, usize>,
}

impl Tally {
    fn record(&mut self, delivery: &Delivery) -> Role {
        let role = Role::with_name(&delivery.role);
        *self.by_event.entry(delivery.event).or_default() += 1;
        *self.by_role.entry(role).or_default() += 1;
        role
    }
}

fn parse_feed(feed: &str) -> Result<Vec<Delivery>> {
    feed.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).with_context(|| format!("line {}", index + 1))
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("webhook_triage=info")),
        )
        .init();

    let feed = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => BUNDLED_FEED.to_string(),
    };

    let deliveries = parse_feed(&feed)?;
    tracing::info!(count = deliveries.len(), "Loaded deliveries");

    let mut tally = Tally::default();
    for delivery in &deliveries {
        let role = tally.record(delivery);
        tracing::debug!(
            id = delivery.id,
            sender = %delivery.sender,
            event = delivery.event.raw_value(),
            ?role,
            "Triaged delivery"
        );
    }

    let (unknown_events, check) =
        stringified!(tally.by_event.get(&EventKind::Unknown).copied().unwrap_or(0));
    if unknown_events > 0 {
        tracing::warn!(unknown_events, check, "Feed contains unrecognized event kinds");
    }

    println!("Events:");
    for (event, count) in &tally.by_event {
        println!("  {:<14} {}", event.raw_value(), count);
    }
    println!();
    println!("Roles:");
    for (role, count) in &tally.by_role {
        println!("  {:<14} {}", format!("{:?}", role), count);
    }
    println!();
    println!("Re-encoded: {}", serde_json::to_string(&tally.by_event.keys().collect::<Vec<_>>())?);

    Ok(())
}

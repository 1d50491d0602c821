//! Presenter and Preview
//!
//! This example links two viewers through an in-process channel.
//!
//! Key concepts:
//! - Local navigation is announced on the channel
//! - The channel echoes every event back to all viewers
//! - The preview runs one step ahead of the presenter
//! - Raw key codes are translated into navigation commands
//!
//! Run with: RUST_LOG=debug cargo run --example presenter_preview

use serde_json::json;
use stepsync::builder::SynchronizerBuilder;
use stepsync::input::{command_for_key, keys};
use stepsync::steps;
use stepsync::sync::MemoryChannel;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Presenter and Preview ===\n");

    let channel = MemoryChannel::new();
    let slides = steps!["title", "problem", "idea", "demo", "questions"];

    let mut presenter = SynchronizerBuilder::new()
        .channel(channel.clone())
        .steps(slides.clone())
        .standalone(true)
        .build()
        .unwrap();

    let mut preview = SynchronizerBuilder::new()
        .channel(MemoryChannel::new())
        .steps(slides)
        .standalone(true)
        .offset(1)
        .build()
        .unwrap();

    let presses = [keys::RIGHT, keys::SPACE, keys::LEFT, keys::PAGE_DOWN, 65];
    for key in presses {
        let Some(command) = command_for_key(key) else {
            println!("key {key:>2}: not a navigation key");
            continue;
        };
        presenter.dispatch(command);

        for event in channel.drain() {
            let payload = event.to_payload();
            presenter.on_goto(&payload);
            preview.on_goto(&payload);
        }

        println!(
            "key {key:>2}: presenter on {:<9} preview on {}",
            presenter.active().map(|s| s.as_str()).unwrap_or("-"),
            preview.active().map(|s| s.as_str()).unwrap_or("-"),
        );
    }

    println!("\nMalformed payloads are ignored:");
    for payload in [json!(null), json!({}), json!({"step": null})] {
        let outcome = preview.on_goto(&payload);
        println!("  {payload:<16} -> {outcome:?}");
    }

    println!("\nPresenter path: {:?}", presenter.history().get_path());
    println!("\n=== Example Complete ===");
}

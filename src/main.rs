// opencode-notifier
//
// Reads opencode session lifecycle events from stdin (one JSON object
// per line) and raises a desktop notification via terminal-notifier
// when a session completes or errors.

#![allow(dead_code)]

mod config;
mod dispatcher;
mod events;
mod notification;
mod session;

use std::io;

use config::AppConfig;
use dispatcher::Dispatcher;
use notification::appearance::{content_image_url, detect_color_mode};
use notification::TerminalNotifier;
use session::OpencodeClient;

fn main() {
    let mut config = AppConfig::default();
    config.content_image = Some(content_image_url(detect_color_mode()));

    let client = OpencodeClient::new(config.server_url.clone());
    let dispatcher = Dispatcher::new(client, TerminalNotifier, config);

    println!("[Main] opencode-notifier started, reading events from stdin");

    let stdin = io::stdin();
    if let Err(e) = events::run(stdin.lock(), &dispatcher) {
        eprintln!("[Main] Event loop failed: {:#}", e);
        std::process::exit(1);
    }
}

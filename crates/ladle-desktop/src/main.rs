//! Ladle Desktop Application
//!
//! Native client for the Ladle recipe-sharing platform.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ladle=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Ladle...");

    dioxus::launch(app::App);
}

#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sigstudio_core::ContactRecord;

/// The contact record for this session, loaded once at startup
static CONTACT: OnceLock<ContactRecord> = OnceLock::new();

/// Get the session's contact record.
pub fn contact() -> &'static ContactRecord {
    CONTACT.get_or_init(ContactRecord::default)
}

/// Signature Studio - email signature preview and export
#[derive(Parser, Debug)]
#[command(name = "sigstudio-desktop")]
#[command(about = "Signature Studio - preview, theme and export an email signature")]
struct Args {
    /// TOML file overriding the built-in contact record
    #[arg(short, long)]
    contact: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let record = match args.contact {
        Some(ref path) => match ContactRecord::from_toml_file(path) {
            Ok(record) => {
                tracing::info!("Loaded contact record from {:?}", path);
                record
            }
            Err(e) => {
                tracing::error!("Cannot load contact file {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ContactRecord::default(),
    };

    let title = format!("Signature Studio - {}", record.full_name);
    let _ = CONTACT.set(record);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1060.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

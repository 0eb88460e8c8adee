mod dashboard;
mod grocery;
mod voice;

pub use dashboard::dashboard;
pub use grocery::grocery;
pub use voice::parse_utterance;

use clap::ValueEnum;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Mode {
    Home,
    Restaurant,
}

/// CLI flag wins over the config file default.
pub(crate) fn resolve_mode(config: &crate::config::Config, flag: Option<Mode>) -> Mode {
    match flag {
        Some(mode) => mode,
        None => match config.app.mode.as_str() {
            "restaurant" => Mode::Restaurant,
            _ => Mode::Home,
        },
    }
}

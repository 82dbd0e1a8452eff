#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod theme;

pub use config::{Config, LayoutConfig, load_config};
pub use ir::{Entry, Moved, Radar};
pub use layout::{Diagnostic, Layout, compute_layout};
pub use parser::{RadarError, parse_radar};
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;

//! `stockroom-cli`
//!
//! **Responsibility:** the interactive text front end. Parses typed arguments out
//! of raw input lines and calls into `stockroom-inventory`; the store itself never
//! sees raw text.

pub mod config;
pub mod prompt;
pub mod render;
pub mod session;

pub use config::{Cli, OutputFormat};
pub use prompt::Prompter;
pub use render::Renderer;
pub use session::{MenuCommand, Session};

//! Interactive text front end for the drink inventory.
//!
//! `menu` drives the prompt loop, `presenter` turns inventory operations into
//! user-facing lines, and `config` reads the session settings.

pub mod config;
pub mod menu;
pub mod presenter;

pub use config::{CliConfig, ConfigError, SessionMode};
pub use menu::{Menu, MenuChoice, MenuState, SessionEnd, SessionError};
pub use presenter::Presenter;

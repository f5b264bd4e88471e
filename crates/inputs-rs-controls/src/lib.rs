//! # inputs-rs-controls
//!
//! Headless input controls for the inputs-rs library. Each control owns a
//! model value, keeps it transformed through its pipeline, and validates it
//! with the `required` placeholder bound to the control's own notion of
//! "value is present". Rendering and focus handling are left to the host.
//!
//! ## Modules
//!
//! - [`text`] - Text, textarea, and password inputs
//! - [`number`] - Number inputs with a numeric default filter
//! - [`checkbox`] - Standalone and grouped checkboxes
//! - [`radio`] - Radio buttons over arbitrary value types
//! - [`file`] - File inputs
//! - [`config`] - Control declarations loaded from JSON or TOML

pub mod checkbox;
pub mod config;
pub mod file;
pub mod number;
pub mod radio;
pub mod text;

pub use checkbox::CheckboxModel;
pub use config::ControlConfig;
pub use file::FileModel;
pub use number::NumberModel;
pub use radio::RadioModel;
pub use text::{TextKind, TextModel};

//! Intake TUI - Terminal interface for the Hacker House registration session
//!
//! This crate renders the scripted intake session full-screen: the boot
//! script, the typed questions, the input line, and choice buttons on
//! narrow terminals.
//!
//! # Architecture
//!
//! - **EngineClient**: spawns the headless engine task and bridges channels
//! - **DisplayState**: view state rebuilt from `EngineMessage`s
//! - **Widgets**: the scrollable, per-kind-styled transcript viewport
//! - **Theme**: the neon terminal palette

pub mod app;
pub mod display;
pub mod engine_client;
pub mod theme;
pub mod widgets;

pub use app::App;

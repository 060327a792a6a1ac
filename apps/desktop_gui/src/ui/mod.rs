//! UI layer for desktop GUI: app shell, result presenter, clipboard, widgets, and theme.

pub mod app;
pub mod clipboard;
pub mod presenter;
pub mod theme;
pub mod widgets;

pub use app::ShortenerApp;

//! Simulated "AI": static keyword tables, no model behind them.

pub mod chat;
pub mod gallery_search;
pub mod style_fusion;

//! Unified search bar for the terminal
//!
//! The [`suggestions`] engine turns a partial query into a capped list of
//! filter tokens, recent searches, people and files. The
//! [`controller::InputController`] owns the input's focus, selection and
//! blur timing, and hands submitted queries to a [`search_sink::SearchSink`].

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod search_sink;
pub mod suggestions;
pub mod widgets;


pub use error::UnisearchError;

//! Terminal front end: the deck widget plus the app that hosts it.

pub mod app;
pub mod card;
pub mod deck;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

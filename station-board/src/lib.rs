//! Live station departure board.
//!
//! A terminal departure board for a UK railway station, fed by the
//! National Rail Darwin LDB service: a timed refresh loop, a fixed pool
//! of display rows with conditional reason sub-rows, a one-second clock,
//! and a status line.

pub mod board;
pub mod config;
pub mod darwin;
pub mod domain;
pub mod ui;

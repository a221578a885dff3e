//! Command-line interface: training runs and interactive play

pub mod commands;
pub mod config;
pub mod output;

// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logger;

pub mod augment;
pub mod file;
pub mod gui;
pub mod progress;
pub mod render;
pub mod report;
pub mod runner;
pub mod table;

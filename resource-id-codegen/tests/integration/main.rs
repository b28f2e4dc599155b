#[path = "../utils/mod.rs"]
mod utils;

mod cli;
mod config;

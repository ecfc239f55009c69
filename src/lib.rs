#![deny(unused_must_use)]

#[macro_use] extern crate log;
pub mod engine;
pub mod tataku;
pub mod prelude;

// files
pub const SETTINGS_FILE:&str = "settings.json";
pub const REPLAYS_DIR:&str = "replays";

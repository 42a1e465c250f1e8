pub mod app;
pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod notify;
pub mod patch;
pub mod process;
pub mod state;
pub mod template;
pub mod version;
pub mod whats_new;

#[cfg(test)]
pub mod test_utils;

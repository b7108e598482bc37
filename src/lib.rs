pub mod cli;
pub mod completion;
pub mod config;
pub mod repl;

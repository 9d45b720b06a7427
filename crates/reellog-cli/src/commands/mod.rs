pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod picker;
pub mod prompts;
pub mod search;
pub mod search_ui;
pub mod stats;

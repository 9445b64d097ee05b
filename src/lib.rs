pub mod config;
pub mod display;
pub mod git;
pub mod layout;
pub mod parts;
pub mod path;
pub mod render;
pub mod styling;
pub mod utils;

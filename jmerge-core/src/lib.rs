pub mod config;
pub mod error;
pub mod journal;
pub mod months;
pub mod render;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{MergeError, MergeResult};
pub use journal::{Entry, Journal};
pub use render::{RenderOptions, Renderer, View};

//! Template rendering for the built-in scaffold files.

mod interface;
mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
pub use interface::TemplateRenderer;

//! Component activation: which component owns a file, and is it enabled

mod activation_filter;
mod component_resolver;

pub use activation_filter::ActivationFilter;
pub use component_resolver::ComponentResolver;

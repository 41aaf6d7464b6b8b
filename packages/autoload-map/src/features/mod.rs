//! Feature modules, leaf-first: path filtering, walking, activation,
//! collision resolution, class extraction

pub mod activation;
pub mod class_extraction;
pub mod collision;
pub mod path_filter;
pub mod walker;

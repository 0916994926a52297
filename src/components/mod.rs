//! UI components.

pub mod gallery;

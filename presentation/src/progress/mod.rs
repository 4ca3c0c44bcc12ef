//! Progress reporting during generation

pub mod reporter;

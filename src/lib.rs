pub mod build;
pub mod cli;
pub mod error;
pub mod graph;
pub mod input;
pub mod model;
pub mod summary;
pub mod util;
pub mod window;

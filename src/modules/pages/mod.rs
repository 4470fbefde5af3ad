pub mod controllers;

pub use controllers::{configure, PageSettings};

pub mod gallery;
pub mod image_ref;

pub use gallery::*;
pub use image_ref::*;

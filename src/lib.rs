//! Terramix - terrain alphamap layer mixing and brush painting

pub mod core;
pub mod alphamap;
pub mod brush;
pub mod settings;

pub mod models;

pub use models::*;

#[cfg(test)]
mod tests;

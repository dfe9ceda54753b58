pub mod extension;
pub mod price;
pub mod registrar;
#[cfg(test)]
pub mod test_utils;

pub use extension::Extension;
pub use price::Price;
pub use registrar::Registrar;

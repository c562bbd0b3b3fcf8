//! Domain types shared by the generator, configuration and bindings

pub mod modulus;
pub mod seed;

pub use modulus::Modulus;
pub use seed::Seed;

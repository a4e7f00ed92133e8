pub mod bootstrap;
pub mod modules;

pub use modules::admin;
pub use modules::probe;

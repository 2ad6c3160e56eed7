// Utils compartidos

pub mod constants;
pub mod fingerprint;

pub use constants::*;
pub use fingerprint::*;

mod filter_limits;
mod secret;

pub use filter_limits::FilterLimits;
pub use secret::Secret;

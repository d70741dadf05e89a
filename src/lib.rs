pub mod collector;
pub mod config;
pub mod model;
pub mod output;
pub mod traits;

// Re-export common types for convenience
pub use collector::*;
pub use config::*;
pub use model::*;
pub use output::*;
pub use traits::*;

// App layer: wires config, validators and report sinks together for the binaries.

pub mod runner;

#[cfg(feature = "cli")]
pub use runner::execute;
pub use runner::{load_config, run};

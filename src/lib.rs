pub mod launch;
pub mod signal;
mod signal_test;

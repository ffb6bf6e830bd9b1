pub mod use_run_detail;

pub use use_run_detail::{use_run_detail, RunDetailHook};

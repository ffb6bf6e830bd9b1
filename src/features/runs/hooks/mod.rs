pub mod use_push_feed;
pub mod use_runs;

pub use use_push_feed::use_push_feed;
pub use use_runs::{use_runs, RunsHook};

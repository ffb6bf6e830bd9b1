pub mod run_detail;
pub mod runs;

pub mod run_list;

pub use run_list::*;

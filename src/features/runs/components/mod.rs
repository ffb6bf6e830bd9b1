pub mod run_agent_button;
pub mod run_status_icon;
pub mod runs_table;
pub mod status_feed;

pub use run_agent_button::RunAgentButton;
pub use run_status_icon::RunStatusIcon;
pub use runs_table::RunsTable;
pub use status_feed::StatusFeed;

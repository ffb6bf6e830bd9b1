pub mod agent_api;
pub mod http;
pub mod push_channel;
pub mod storage;

pub use agent_api::*;
pub use push_channel::*;
pub use storage::*;

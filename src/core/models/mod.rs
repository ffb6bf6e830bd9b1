pub mod event;
pub mod id;
pub mod message;
pub mod push;
pub mod run;

pub use event::{Event, EventPayload, Producer};
pub use id::{EventId, RecordId, RunId};
pub use message::{AiMessage, ErrorMessage, HumanMessage, Message, MessageKind, ToolCall, ToolMessage};
pub use push::PushMessage;
pub use run::{Run, RunStatus, RunsResponse};

pub mod grouping;
pub mod message_view;
pub mod rich_text;
pub mod selection;

pub use grouping::*;
pub use message_view::*;
pub use rich_text::*;
pub use selection::*;

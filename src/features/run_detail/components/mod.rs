pub mod message_card;
pub mod rich_text_view;
pub mod run_stepper;
pub mod step_panel;

pub use message_card::MessageCardView;
pub use rich_text_view::RichText;
pub use run_stepper::RunStepper;
pub use step_panel::StepPanel;

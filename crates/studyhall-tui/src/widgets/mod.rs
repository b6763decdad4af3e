//! Small reusable render helpers shared by screens.

pub mod auth_modal;
pub mod step_indicator;
pub mod sub_tabs;

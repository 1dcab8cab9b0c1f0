pub mod action_kind;
pub mod audit_event;
pub mod change_cell;
pub mod change_value;
pub mod event_filter;
pub mod page;
pub mod rich_text;

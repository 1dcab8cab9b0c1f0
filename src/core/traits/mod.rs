pub mod event_source;
pub mod translate;

pub mod archive_service;
pub mod change_describer;
pub mod event_describer;
pub mod template_renderer;
pub mod value_formatter;

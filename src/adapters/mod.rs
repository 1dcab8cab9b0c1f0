pub mod archive;
pub mod events;
pub mod i18n;

pub mod text_archive_writer;

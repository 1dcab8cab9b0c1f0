pub mod jsonl_event_source;

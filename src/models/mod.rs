pub mod source_record;
pub mod weight_event;

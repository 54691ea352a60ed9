pub mod update_event;

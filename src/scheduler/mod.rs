pub mod queue_refresh;

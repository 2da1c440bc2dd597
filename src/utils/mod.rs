pub mod app_time;

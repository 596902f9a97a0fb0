pub mod browse;
pub mod dispatch;
pub mod export;
pub mod find;
pub mod show;

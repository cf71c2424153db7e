pub mod analytics;
pub mod browse;
pub mod chat;
pub mod dashboard;
pub mod dispatch;
pub mod document;
pub mod folder;
pub mod schema;
pub mod search;
pub mod shared;
pub mod upload;

mod analytics;
mod chat;
mod document;
mod folder;
mod search;

pub use analytics::AnalyticsCommands;
pub use chat::ChatCommands;
pub use document::DocumentCommands;
pub use folder::FolderCommands;
pub use search::SearchCommands;

pub mod config;
pub mod data_storage;
pub mod document;
pub mod docx;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod scanner;
pub mod tally;
pub mod timestamp;
pub mod view;

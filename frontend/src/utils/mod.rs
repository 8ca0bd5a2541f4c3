pub mod download;
pub mod format;
pub mod id;
pub mod storage;
pub mod time;

//! Small shared helpers

pub mod constants;
pub mod format;
pub mod storage;
pub mod url;

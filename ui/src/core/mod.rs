//! Platform-agnostic plumbing shared by the shift table and the turnus list:
//! persistence, configuration, timing and small platform shims.

pub mod config;
pub mod format;
pub mod platform;
pub mod scroll;
pub mod storage;
pub mod timing;

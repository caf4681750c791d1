//! Platform plumbing shared by every view: formatting, persistence, platform probes.

pub mod format;
pub mod platform;
pub mod storage;

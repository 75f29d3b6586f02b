//! Platform seams shared by every component: task spawning, timers and the
//! persisted language preference.

pub mod platform;
pub mod storage;
pub mod timing;

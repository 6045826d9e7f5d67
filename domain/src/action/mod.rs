//! Action lifecycle shared by every user-triggerable flow.

pub mod state;

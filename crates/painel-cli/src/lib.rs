//! CLI library components for the APS indicators panel.

pub mod logging;

//! Command handlers: bridge CLI args -> API calls -> output formatting.

pub mod config_cmd;
pub mod redeem;
pub mod util;

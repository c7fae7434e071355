//! Embedded preset word lists
//!
//! Word lists compiled into the binary at build time from `data/*.txt`.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/presets.rs"));

//! Output generation for monitoring snapshots.
//!
//! # Output Structure
//!
//! Snapshots are organized by date with edition names:
//! ```text
//! json_output_dir/
//! └── 2026-02-01/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```

pub mod json;

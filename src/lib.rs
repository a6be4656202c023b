//! psst - securely share secrets inside your organization.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── members       # List organization members
//! │   ├── teams         # List teams and their members
//! │   ├── secrets       # share / get / list / rm
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal formatting
//! └── core/             # Core library components
//!     ├── config        # Invocation configuration
//!     ├── registry      # Backend selection
//!     ├── context       # Opened backends for one invocation
//!     ├── directory/    # Membership directories
//!     │   ├── mod       # Directory trait
//!     │   ├── github    # GitHub organizations
//!     │   └── cache     # On-disk membership snapshots
//!     ├── storage/      # Secret storage
//!     │   ├── mod       # Storage trait
//!     │   └── vault     # HashiCorp Vault KV v2
//!     ├── share         # Recipient resolution and per-member copies
//!     └── validation    # Secret name checks
//! ```
//!
//! A directory answers who is in the organization. A storage holds one copy
//! of each secret per recipient. Both are chosen by selector strings and
//! opened once, directory first, before any subcommand runs.

pub mod cli;
pub mod core;
pub mod error;

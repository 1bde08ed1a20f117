//! fetch-secrets - Resolve secrets tagged on the current IAM role.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── exec          # Exec-replace a program with secrets in its env
//! │   ├── cluster       # Write secrets into a Kubernetes Secret
//! │   ├── resolve       # Dry run: print resolved key names
//! │   └── session       # Runtime and AWS wiring shared by commands
//! └── core/             # Core library components
//!     ├── config        # Run settings
//!     ├── identity      # Caller identity -> role name
//!     ├── tags          # Role tags -> secret references
//!     ├── secrets       # Secret payloads -> KEY=VALUE pairs
//!     ├── pipeline      # identity -> tags -> secrets, under one deadline
//!     ├── aws           # STS, IAM and Secrets Manager providers
//!     └── sink/         # Consumers of resolved pairs
//!         ├── process   # execve hand-off
//!         └── cluster   # Kubernetes Secret create-or-update
//! ```
//!
//! # Pipeline
//!
//! 1. Parse the role name out of the STS caller ARN.
//! 2. List the role's tags and keep those whose key has the configured prefix.
//! 3. Fetch each referenced secret and flatten its JSON object into pairs.
//!    A secret that fails to fetch or parse is logged and skipped.
//! 4. Hand the pairs to a sink.

pub mod cli;
pub mod core;
pub mod error;

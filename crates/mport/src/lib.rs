//! mport - package manager front end
//!
//! The `mport` library holds the orchestration logic that sits between the
//! command line and a package store: reporting available updates, resolving
//! install requests against the remote index, and removing every installed
//! package in dependency-safe order. It follows the Hexagonal Architecture
//! pattern (Ports and Adapters): the algorithms only talk to ports, and the
//! adapters shipped here are one way of satisfying them.
//!
//! # Main Components
//!
//! - [`package`] - Package types, the store/comparator/prompter ports, and the services
//! - [`config`] - Application configuration management
//! - [`commands`] - Command execution abstractions
//! - [`fs`] - File system abstractions
//! - [`progress_reporter`] - Port for user-facing progress output
//!
//! # Examples
//!
//! ```no_run
//! use mport::{
//!     commands::ShellCommandRunner,
//!     fs::real::RealFileSystem,
//!     package::{service::update, store::yaml::YamlPackageStore, version::PkgVersion},
//! };
//!
//! let store = YamlPackageStore::new(
//!     RealFileSystem,
//!     ShellCommandRunner::new("/bin/sh"),
//!     "/var/db/mport".into(),
//!     "14.0",
//! );
//! let report = update::diff_updates(&store, &PkgVersion, "14.0", &[]).unwrap();
//! println!("{} packages need attention", report.statuses.len());
//! ```

pub mod commands;
pub mod config;
pub mod fs;
pub mod package;
pub mod progress_reporter;

//! Goforge is a configuration-driven generator for Go web services.
//! Given a validated set of project options it renders a combinatorial set of
//! named templates into a complete, internally consistent project tree.

/// Command-line interface module for the goforge application
pub mod cli;

/// Project configuration model: closed option enumerations and flag groups
pub mod config;

/// Template context construction (read-only projection of the configuration)
pub mod context;

/// Error types and handling for the goforge application
pub mod error;

/// Feature generators mapping the configuration to (template, path) pairs
pub mod generators;

/// Directory planner: architecture and feature flags to directory lists
pub mod layout;

/// Logger initialization
pub mod logger;

/// Core generation orchestration
/// Combines all components to produce the final output tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template parsing and rendering functionality
pub mod renderer;

/// Embedded named template resources
pub mod templates;

/// Configuration validation and defaulting
pub mod validation;

/// File persistence for rendered output
pub mod writer;

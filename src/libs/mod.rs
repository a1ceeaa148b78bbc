/// Application configuration stored as JSON in the data directory.
pub mod config;

/// Per-OS application data directory resolution.
pub mod data_storage;

/// CSV and JSON task export.
pub mod export;

/// User-facing messages and the display/logging macros.
pub mod messages;

/// Task domain model and pure utilities: stats, sorting, validation.
pub mod task;

/// Terminal table rendering and priority styling.
pub mod view;

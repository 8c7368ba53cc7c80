// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::ConfigError;

/// Errors returned by [`Timeline`](crate::Timeline) construction and data loading.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// No drawing surface was supplied to [`Timeline::init`](crate::Timeline::init).
    #[error("a drawing surface is required")]
    MissingSurface,
    /// The configuration overrides could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Event data was not an array of event objects.
    #[error("invalid event data: {0}")]
    InvalidData(#[source] serde_json::Error),
}

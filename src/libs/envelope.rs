//! JSON response envelope for machine-readable command output.
//!
//! Commands that accept `--json` print their result in the shape a REST
//! consumer would expect: `success` plus whichever of `data`, `stats`,
//! `message` and `error` apply. Absent fields are omitted rather than
//! emitted as null.

use crate::libs::projection::TaskStats;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<TaskStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            stats: None,
            message: None,
            error: None,
        }
    }

    pub fn ok_with_stats(data: T, stats: TaskStats) -> Self {
        Self {
            stats: Some(stats),
            ..Self::ok(data)
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

impl Envelope<()> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            stats: None,
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            stats: None,
            message: Some(message.into()),
            error: None,
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, str::FromStr};

use calview_core::{Event, EventItem};
use tokio::fs;

/// Loads the `[[events]]` list of a TOML event file.
#[tracing::instrument]
pub async fn load_events(path: &Path) -> Result<Vec<EventItem>, Box<dyn Error>> {
    let file = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read event file at {}: {}", path.display(), e))?
        .parse::<EventFile>()
        .map_err(|e| format!("Failed to parse event file at {}: {}", path.display(), e))?;

    for event in &file.events {
        if event.end() < event.start() {
            return Err(format!("Event '{}' ends before it starts", event.title()).into());
        }
    }

    tracing::debug!(count = file.events.len(), "events loaded");
    Ok(file.events)
}

#[derive(Debug, Default, serde::Deserialize)]
struct EventFile {
    #[serde(default)]
    events: Vec<EventItem>,
}

impl FromStr for EventFile {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

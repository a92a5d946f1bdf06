//! HTTP API endpoint handlers.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use axum::{Json, extract::State};
use regex::Regex;

use crate::{infrastructure::dto::http::RoomSummaryDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of live rooms with their member counts
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.list_rooms_usecase.execute().await;

    let summaries = rooms
        .into_iter()
        .map(|(room_id, count)| RoomSummaryDto {
            id: room_id.as_str().to_string(),
            count,
        })
        .collect();

    Json(summaries)
}

static EMOJI_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(gif|png|jpe?g|webp|svg)$").expect("Invalid Regex"));

/// List the emoji image files available under the public directory.
///
/// Returns relative URLs the client can render directly. An unreadable
/// directory yields an empty list, not an error.
pub async fn list_emojis(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let emoji_dir = state.public_dir.join("emojis");
    Json(list_emoji_urls(&emoji_dir).await)
}

async fn list_emoji_urls(emoji_dir: &Path) -> Vec<String> {
    let mut urls = Vec::new();

    let Ok(mut entries) = tokio::fs::read_dir(emoji_dir).await else {
        tracing::debug!("emoji directory {:?} is not readable", emoji_dir);
        return urls;
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if EMOJI_FILE_RE.is_match(&file_name) {
            urls.push(format!("/emojis/{}", file_name));
        }
    }

    // directory order is arbitrary
    urls.sort();
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_temp_emoji_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("parlor-emoji-test-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_list_emoji_urls_filters_image_files() {
        // given:
        let dir = create_temp_emoji_dir("filter");
        for file in ["wave.gif", "cat.PNG", "notes.txt", "pic.jpeg", "x.svg"] {
            std::fs::write(dir.join(file), b"x").unwrap();
        }

        // when:
        let urls = list_emoji_urls(&dir).await;

        // then: image files only, sorted, extension match case-insensitive
        assert_eq!(
            urls,
            vec![
                "/emojis/cat.PNG".to_string(),
                "/emojis/pic.jpeg".to_string(),
                "/emojis/wave.gif".to_string(),
                "/emojis/x.svg".to_string(),
            ]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_list_emoji_urls_missing_directory_yields_empty_list() {
        // given:
        let dir = std::env::temp_dir().join("parlor-emoji-test-does-not-exist");

        // when:
        let urls = list_emoji_urls(&dir).await;

        // then:
        assert!(urls.is_empty());
    }
}

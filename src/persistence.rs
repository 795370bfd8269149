// File: src/persistence.rs
use crate::config::AssistantConfig;
use crate::core::catalog::Catalog;
use crate::core::context::Conversation;
use crate::core::engine::Assistant;
use crate::core::types::{Platform, Relationship, ToneType};
use crate::error::Result;
use crate::stats::AssistantStats;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// The serializable part of a session. The catalog is reference data and
/// is never written out.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SessionSnapshot {
    conversation: Conversation,
    stats: AssistantStats,
    platform: Platform,
    relationship: Relationship,
    tone: ToneType,
}

/// Writes the session atomically: a temp file in the target directory is
/// filled and then renamed over `path`.
pub fn save_to_disk(assistant: &Assistant, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = SessionSnapshot {
        conversation: assistant.conversation.clone(),
        stats: assistant.stats.clone(),
        platform: assistant.platform,
        relationship: assistant.relationship,
        tone: assistant.tone,
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_from_disk(
    path: &Path,
    catalog: Arc<Catalog>,
    config: &AssistantConfig,
) -> Result<Assistant> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: SessionSnapshot = bincode::deserialize_from(reader)?;

    let mut assistant = Assistant::with_catalog(catalog, config);
    assistant.conversation = snapshot.conversation;
    assistant.stats = snapshot.stats;
    assistant.platform = snapshot.platform;
    assistant.relationship = snapshot.relationship;
    assistant.tone = snapshot.tone;

    Ok(assistant)
}

// src/regen/mod.rs
//! Rebuild the chapter literal from the corrected spreadsheet rows.

pub mod names;
pub mod render;

use tracing::{debug, warn};

use crate::model::{ChapterMap, ChapterRecord, Folio, TractateInstance};
use crate::specs::spreadsheet::ChapterRow;

pub use names::{english_chapter_name, normalize_tractate_name};
pub use render::render_chapter_data;

/// `2a`, `176b`. Anything else, including folio `0`, is `None`.
pub fn parse_page_ref(s: &str) -> Option<Folio> {
    s.parse().ok()
}

/// Group rows by Hebrew tractate name (first-seen order) and number the
/// chapters of each group from 1.
///
/// Rows with a blank tractate name are dropped. Rows whose start or end page
/// does not parse are skipped and do not use up an ordinal. A group left with no chapters is omitted. When two Hebrew
/// spellings map to the same key, the later group replaces the earlier one.
pub fn build_chapter_map(rows: &[ChapterRow]) -> ChapterMap {
    let mut groups: Vec<(&str, Vec<&ChapterRow>)> = Vec::new();
    for row in rows {
        if row.tractate.trim().is_empty() {
            debug!("skipping '{}' with no tractate name", row.chapter);
            continue;
        }
        match groups.iter_mut().find(|(name, _)| *name == row.tractate) {
            Some((_, members)) => members.push(row),
            None => groups.push((row.tractate.as_str(), vec![row])),
        }
    }

    let mut map = ChapterMap::new();
    for (hebrew, members) in groups {
        let key = normalize_tractate_name(hebrew);
        let chapters = group_chapters(&key, &members);
        if chapters.is_empty() {
            debug!("{hebrew}: no rows with usable page references");
            continue;
        }
        if map.insert(key.clone(), chapters).is_some() {
            warn!("{hebrew}: replaces an earlier group already mapped to '{key}'");
        }
    }
    map
}

fn group_chapters(key: &str, members: &[&ChapterRow]) -> TractateInstance {
    let mut chapters = Vec::with_capacity(members.len());
    for row in members {
        let (Some(start), Some(end)) = (parse_page_ref(&row.start_page), parse_page_ref(&row.end_page)) else {
            debug!(
                "{key}: skipping '{}' with page refs '{}'..'{}'",
                row.chapter, row.start_page, row.end_page
            );
            continue;
        };
        let number = chapters.len() as u32 + 1;
        let english_name = english_chapter_name(&row.chapter, key)
            .map_or_else(|| format!("Chapter {number}"), |name| s!(name));

        chapters.push(ChapterRecord {
            number,
            english_name,
            hebrew_name: row.chapter.clone(),
            start,
            end,
        });
    }
    chapters
}

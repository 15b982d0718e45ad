use chrono::{DateTime, Utc};
use copymanga_lib::models::{ChapterGroup, ChapterInfo, ParsedTitle, RawChapter, Scanlator};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{groups::Groups, timestamp, title, Error};

/// Reader page of a chapter, also used as the chapter url
pub fn chapter_url(base_url: &str, content_id: &str, chapter_id: &str) -> String {
    format!("{base_url}/comic/{content_id}/chapter/{chapter_id}")
}

struct Decoded<'a> {
    group_id: &'a str,
    group: &'a ChapterGroup,
    chapter: &'a RawChapter,
    timestamp: f64,
    date: DateTime<Utc>,
    parsed: ParsedTitle,
}

fn decode<'a>(
    group_id: &'a str,
    group: &'a ChapterGroup,
    chapter: &'a RawChapter,
) -> Result<Decoded<'a>, Error> {
    let timestamp = timestamp::timestamp_from_uuid(&chapter.id)?;
    let date = timestamp::to_datetime(timestamp)
        .ok_or_else(|| Error::InvalidUuidFormat(chapter.id.clone()))?;
    let parsed = title::normalize(&chapter.name, chapter.kind);

    Ok(Decoded {
        group_id,
        group,
        chapter,
        timestamp,
        date,
        parsed,
    })
}

/// Flattens all groups into one list of chapters, newest first.
///
/// Chapters whose id has no usable timestamp are logged and left out. Ties
/// keep the order of the decrypted document.
pub fn assemble(groups: &Groups, content_id: &str, base_url: &str) -> Vec<ChapterInfo> {
    let records = groups
        .iter()
        .flat_map(|(group_id, group)| {
            group
                .chapters
                .iter()
                .map(move |chapter| (group_id, group, chapter))
        })
        .collect::<Vec<_>>();

    let mut decoded = records
        .into_par_iter()
        .map(|(group_id, group, chapter)| decode(group_id, group, chapter))
        .collect::<Vec<_>>()
        .into_iter()
        .filter_map(|res| match res {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("skipping chapter of {content_id}: {e}");
                None
            }
        })
        .collect::<Vec<_>>();

    // stable, newest first
    decoded.sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp));

    decoded
        .into_iter()
        .enumerate()
        .map(|(index, decoded)| {
            let Decoded {
                group_id,
                group,
                chapter,
                date,
                parsed,
                ..
            } = decoded;

            let (title, scanlator) = if group.is_default() {
                (parsed.title, None)
            } else {
                (
                    format!("{}：{}", group.name, parsed.title),
                    Some(Scanlator {
                        id: group_id.to_string(),
                        name: group.name.clone(),
                    }),
                )
            };

            ChapterInfo {
                id: chapter.id.clone(),
                title,
                number: parsed.chapter,
                volume: parsed.volume,
                date,
                index,
                scanlator,
                content_id: content_id.to_string(),
                url: chapter_url(base_url, content_id, &chapter.id),
            }
        })
        .collect()
}

use copymanga_lib::models::ChapterInfo;

use crate::{assembler, crypto, groups, key, payload, Error};

/// Decodes the chapter list of `content_id`.
///
/// `detail_page` is the comic page holding the key, `chapter_list` the body of
/// the chapter list endpoint. A response without `results` or without
/// `groups` means the title has no chapters.
pub fn decode_chapter_list(
    detail_page: &str,
    chapter_list: &str,
    content_id: &str,
    base_url: &str,
) -> Result<Vec<ChapterInfo>, Error> {
    let key = key::extract_key(detail_page)?;

    let Some(results) = key::extract_results(chapter_list) else {
        warn!("no results in chapter list of {content_id}");
        return Ok(vec![]);
    };

    let payload = payload::split(results)?;
    let plaintext = crypto::decrypt_payload(&payload, key)?;

    let groups = match groups::parse_groups(&plaintext) {
        Ok(groups) => groups,
        Err(Error::SchemaFailure) => {
            warn!("chapter list of {content_id} has no groups");
            return Ok(vec![]);
        }
        Err(e) => return Err(e),
    };
    debug!("{content_id}: {} groups", groups.len());

    Ok(assembler::assemble(&groups, content_id, base_url))
}

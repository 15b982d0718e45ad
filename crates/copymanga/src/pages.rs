use copymanga_lib::models::Page;
use serde::Deserialize;

use crate::{crypto, key, payload, Error};

#[derive(Debug, Deserialize)]
struct PageItem {
    url: String,
}

/// Decodes the image list embedded in a chapter reader page.
pub fn decode_page_list(markup: &str) -> Result<Vec<Page>, Error> {
    let key = key::extract_key(markup)?;
    let content_key = key::extract_content_key(markup)?;

    let payload = payload::split(content_key)?;
    let plaintext = crypto::decrypt_payload(&payload, key)?;

    let items: Vec<PageItem> = serde_json::from_str(&plaintext)?;

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Page {
            index,
            url: item.url,
        })
        .collect())
}

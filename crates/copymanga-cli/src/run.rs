use copymanga::{config::Config, crypto, payload, source::CopyManga, timestamp, title};
use copymanga_lib::{extensions::Extension, models::ChapterKind};
use serde::Serialize;

use crate::fetch::Client;

fn source(config: Config) -> Result<CopyManga<Client>, anyhow::Error> {
    let client = Client::new(&config.user_agent)?;
    Ok(CopyManga::new(client, config))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn chapters(config: Config, content_id: &str) -> Result<(), anyhow::Error> {
    let chapters = source(config)?.get_chapters(content_id).await?;
    print_json(&chapters)
}

pub async fn pages(config: Config, content_id: &str, chapter_id: &str) -> Result<(), anyhow::Error> {
    let pages = source(config)?.get_pages(content_id, chapter_id).await?;
    for page in pages {
        println!("{}", page.url);
    }

    Ok(())
}

pub fn title(raw: &str, kind: ChapterKind) -> Result<(), anyhow::Error> {
    print_json(&title::normalize(raw, kind))
}

pub fn timestamp(uuid: &str) -> Result<(), anyhow::Error> {
    let ts = timestamp::timestamp_from_uuid(uuid)?;
    match timestamp::to_datetime(ts) {
        Some(date) => println!("{ts}\t{}", date.to_rfc3339()),
        None => println!("{ts}"),
    }

    Ok(())
}

pub fn decrypt(key: &str, encrypted: &str) -> Result<(), anyhow::Error> {
    let payload = payload::split(encrypted)?;
    println!("{}", crypto::decrypt_payload(&payload, key)?);
    Ok(())
}

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use copymanga_lib::{
    LIB_VERSION,
    extensions::Extension,
    models::{ChapterInfo, Page, SourceInfo},
};

use crate::{chapters, config::Config, pages};

pub const ID: &str = "zh.copymanga";
pub const NAME: &str = "拷贝漫画";

/// Fetches text bodies for the connector; retries and caching are up to it
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<String>;
}

pub struct CopyManga<C> {
    client: C,
    config: Config,
}

impl<C: HttpClient> CopyManga<C> {
    pub fn new(client: C, config: Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<C: HttpClient> Extension for CopyManga<C> {
    fn get_source_info(&self) -> SourceInfo {
        SourceInfo {
            id: ID.to_string(),
            name: NAME.to_string(),
            url: self.config.base_url(),
            version: LIB_VERSION.to_string(),
            icon: "copymanga.png".to_string(),
            languages: vec!["zh".to_string()],
            nsfw: false,
        }
    }

    fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), self.config.user_agent.clone());
        headers.insert("Referer".to_string(), self.config.base_url());
        headers
    }

    async fn get_chapters(&self, content_id: &str) -> Result<Vec<ChapterInfo>> {
        let headers = self.headers();

        let url = self.config.comic_url(content_id);
        info!("GET: {url}");
        let detail_page = self.client.get(&url, &headers).await?;

        let mut list_headers = headers.clone();
        list_headers.insert("dnts".to_string(), "1".to_string());
        let url = self.config.chapter_list_url(content_id);
        info!("GET: {url}");
        let chapter_list = self.client.get(&url, &list_headers).await?;

        let chapters = chapters::decode_chapter_list(
            &detail_page,
            &chapter_list,
            content_id,
            &self.config.base_url(),
        )?;
        debug!("{content_id}: {} chapters", chapters.len());

        Ok(chapters)
    }

    async fn get_pages(&self, content_id: &str, chapter_id: &str) -> Result<Vec<Page>> {
        let url = self.config.chapter_page_url(content_id, chapter_id);
        info!("GET: {url}");
        let markup = self.client.get(&url, &self.headers()).await?;

        Ok(pages::decode_page_list(&markup)?)
    }
}

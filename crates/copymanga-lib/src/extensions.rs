use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ChapterInfo, Page, SourceInfo};

/// A content source able to list chapters of a title and the pages of a chapter
#[async_trait]
pub trait Extension: Send + Sync {
    fn get_source_info(&self) -> SourceInfo;

    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Chapters of `content_id`, newest first, `index` starting at 0
    async fn get_chapters(&self, content_id: &str) -> Result<Vec<ChapterInfo>>;

    async fn get_pages(&self, content_id: &str, chapter_id: &str) -> Result<Vec<Page>>;
}

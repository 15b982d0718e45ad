use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use copymanga::source::HttpClient;
use reqwest::cookie::Jar;

pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .cookie_store(true)
            .cookie_provider(Arc::new(Jar::default()))
            .brotli(true)
            .deflate(true)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for Client {
    async fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<String> {
        let mut req = self.client.get(url);
        for (name, value) in headers {
            req = req.header(name, value);
        }

        let res = req.send().await?.error_for_status()?;
        debug!("{url}: {}", res.status());

        Ok(res.text().await?)
    }
}

use gloo_net::http::Request;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::cms::models::{Album, Article, GalleryImage, Tool, Video};
use crate::config::CmsConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CmsError {
    #[error("network error: {0}")]
    Network(String),
    #[error("content backend answered with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

const ARTICLES: &str = r#"*[_type == "article"] | order(_createdAt desc){
  title, _createdAt, slug, image, excerpt, tags
}"#;

const ARTICLE_BY_SLUG: &str = r#"*[_type == "article" && slug.current == $slug][0]{
  title, _createdAt, slug, image, excerpt, tags, body
}"#;

const VIDEOS: &str = r#"*[_type == "video"] | order(_createdAt desc){
  title, description, link
}"#;

const GALLERY: &str = r#"*[_type == "gallery"] | order(_createdAt desc){
  image, alt, caption
}"#;

const ALBUMS: &str = r#"*[_type == "album"] | order(_createdAt desc){
  _id, title, description, coverImage,
  "firstImage": images[0],
  "imageCount": count(images)
}"#;

const ALBUM_BY_ID: &str = r#"*[_type == "album" && _id == $id][0]{
  _id, title, description, coverImage,
  "firstImage": images[0],
  "imageCount": count(images),
  "images": images[]{ "image": @, alt, caption }
}"#;

const TOOLS: &str = r#"*[_type == "tool"] | order(_createdAt asc){
  _id, name, slug, image, briefDescription, buttonUrl, buttonText
}"#;

const TOOL_BY_SLUG: &str = r#"*[_type == "tool" && slug.current == $slug][0]{
  _id, name, slug, image, briefDescription, buttonUrl, buttonText
}"#;

/// Read-only client for the content backend's query endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CmsClient {
    config: CmsConfig,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Self {
        Self { config }
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>, CmsError> {
        self.query(ARTICLES, &[]).await
    }

    pub async fn get_article_by_slug(&self, slug: &str) -> Result<Option<Article>, CmsError> {
        self.query(ARTICLE_BY_SLUG, &[("slug", slug)]).await
    }

    pub async fn list_videos(&self) -> Result<Vec<Video>, CmsError> {
        self.query(VIDEOS, &[]).await
    }

    pub async fn list_gallery_images(&self) -> Result<Vec<GalleryImage>, CmsError> {
        self.query(GALLERY, &[]).await
    }

    pub async fn list_albums(&self) -> Result<Vec<Album>, CmsError> {
        self.query(ALBUMS, &[]).await
    }

    pub async fn get_album(&self, id: &str) -> Result<Option<Album>, CmsError> {
        self.query(ALBUM_BY_ID, &[("id", id)]).await
    }

    pub async fn list_tools(&self) -> Result<Vec<Tool>, CmsError> {
        self.query(TOOLS, &[]).await
    }

    pub async fn get_tool_by_slug(&self, slug: &str) -> Result<Option<Tool>, CmsError> {
        self.query(TOOL_BY_SLUG, &[("slug", slug)]).await
    }

    /// Runs a GROQ query and decodes the `result` field of the response.
    pub async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CmsError> {
        let url = query_url(&self.config, groq, params);
        debug!("Querying content backend: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(CmsError::Status(response.status()));
        }
        let body = response
            .json::<QueryResponse<T>>()
            .await
            .map_err(|e| CmsError::Decode(e.to_string()))?;
        Ok(body.result)
    }
}

/// Builds the query endpoint url. Parameter values are passed as JSON strings.
pub fn query_url(config: &CmsConfig, groq: &str, params: &[(&str, &str)]) -> String {
    let host = if config.use_cdn { "apicdn" } else { "api" };
    let mut url = format!(
        "https://{}.{}.sanity.io/v{}/data/query/{}?query={}",
        config.project_id,
        host,
        config.api_version,
        config.dataset,
        urlencoding::encode(groq)
    );
    for (name, value) in params {
        let value = serde_json::Value::String(value.to_string()).to_string();
        url.push_str(&format!("&%24{}={}", name, urlencoding::encode(&value)));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_cdn: bool) -> CmsConfig {
        CmsConfig {
            project_id: "proj",
            dataset: "production",
            api_version: "2023-05-03",
            use_cdn,
        }
    }

    #[test]
    fn query_url_encodes_query_and_params() {
        let url = query_url(&config(true), "*[_id == $id]", &[("id", "a b")]);
        assert_eq!(
            url,
            "https://proj.apicdn.sanity.io/v2023-05-03/data/query/production\
             ?query=%2A%5B_id%20%3D%3D%20%24id%5D&%24id=%22a%20b%22"
        );
    }

    #[test]
    fn live_api_host_without_cdn() {
        let url = query_url(&config(false), "*", &[]);
        assert!(url.starts_with("https://proj.api.sanity.io/v2023-05-03/data/query/production?query="));
    }

    #[test]
    fn missing_lookup_decodes_to_none() {
        let body: QueryResponse<Option<Tool>> =
            serde_json::from_str(r#"{ "result": null, "ms": 3 }"#).unwrap();
        assert_eq!(body.result, None);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            CmsError::Status(503).to_string(),
            "content backend answered with status 503"
        );
    }
}

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::cms::portable_text::Block;

/// Reference to an uploaded image asset.
///
/// Queries either keep the raw `_ref` or dereference the asset, which
/// exposes `_id` instead. Both carry the same asset identifier.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

impl AssetRef {
    pub fn asset_id(&self) -> Option<&str> {
        self.reference.as_deref().or(self.id.as_deref())
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ImageRef {
    pub asset: Option<AssetRef>,
}

impl ImageRef {
    pub fn asset_id(&self) -> Option<&str> {
        self.asset.as_ref().and_then(AssetRef::asset_id)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Slug {
    pub current: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Article {
    pub title: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    pub slug: Slug,
    pub image: Option<ImageRef>,
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: Vec<Block>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Video {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// One picture of the flat gallery or of an album.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct GalleryImage {
    pub image: ImageRef,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<ImageRef>,
    pub first_image: Option<ImageRef>,
    pub image_count: Option<u32>,
    /// Only present when the album was fetched in detail.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<GalleryImage>,
}

impl Album {
    /// Cover art, falling back to the first picture of the album.
    pub fn thumbnail(&self) -> Option<&ImageRef> {
        self.cover_image.as_ref().or(self.first_image.as_ref())
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Option<Slug>,
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brief_description: Vec<Block>,
    pub button_url: Option<String>,
    pub button_text: Option<String>,
}

impl Tool {
    pub fn button_label(&self) -> &str {
        self.button_text.as_deref().unwrap_or("View Tool")
    }
}

/// Formats a timestamp the way article cards show it, e.g. "March 5, 2024".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

// GROQ returns `null` for missing array fields, which `#[serde(default)]` alone rejects.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn article_tolerates_missing_tags_and_body() {
        let article: Article = serde_json::from_value(json!({
            "title": "Clinic opening",
            "_createdAt": "2024-03-05T10:00:00Z",
            "slug": { "current": "clinic-opening" },
            "image": null,
            "excerpt": "We opened a clinic",
            "tags": null
        }))
        .unwrap();

        assert_eq!(article.slug.current, "clinic-opening");
        assert!(article.tags.is_empty());
        assert!(article.body.is_empty());
        assert_eq!(article.image, None);
    }

    #[test]
    fn asset_id_prefers_reference_then_id() {
        let by_ref: ImageRef = serde_json::from_value(json!({
            "asset": { "_ref": "image-abc-10x20-png" }
        }))
        .unwrap();
        let by_id: ImageRef = serde_json::from_value(json!({
            "asset": { "_id": "image-def-10x20-jpg" }
        }))
        .unwrap();

        assert_eq!(by_ref.asset_id(), Some("image-abc-10x20-png"));
        assert_eq!(by_id.asset_id(), Some("image-def-10x20-jpg"));
        assert_eq!(ImageRef::default().asset_id(), None);
    }

    #[test]
    fn album_thumbnail_falls_back_to_first_image() {
        let album: Album = serde_json::from_value(json!({
            "_id": "a1",
            "title": "Outreach",
            "coverImage": null,
            "firstImage": { "asset": { "_ref": "image-first-1x1-jpg" } },
            "imageCount": 4
        }))
        .unwrap();

        assert_eq!(
            album.thumbnail().and_then(ImageRef::asset_id),
            Some("image-first-1x1-jpg")
        );
        assert!(album.images.is_empty());
        assert_eq!(album.image_count, Some(4));
    }

    #[test]
    fn tool_button_label_defaults() {
        let tool: Tool = serde_json::from_value(json!({
            "_id": "t1",
            "name": "Symptom checker",
            "buttonUrl": "https://example.org"
        }))
        .unwrap();

        assert_eq!(tool.button_label(), "View Tool");
        assert!(tool.brief_description.is_empty());
    }

    #[test]
    fn formats_dates_like_article_cards() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        assert_eq!(format_date(&date), "March 5, 2024");
    }
}

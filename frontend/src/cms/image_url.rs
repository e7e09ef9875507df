use crate::cms::models::ImageRef;
use crate::config::CmsConfig;

const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Album cards and album pictures are cropped to this size.
pub const CARD_SIZE: ImageSize = ImageSize { width: 600, height: 400 };

/// Resolves an image reference to an absolute CDN url.
///
/// Asset ids look like `image-<hash>-<w>x<h>-<ext>`. Returns `None` when the
/// reference is missing or does not follow that shape.
pub fn image_url(config: &CmsConfig, image: &ImageRef, size: Option<ImageSize>) -> Option<String> {
    let asset_id = image.asset_id()?;
    let rest = asset_id.strip_prefix("image-")?;
    let (file, extension) = rest.rsplit_once('-')?;
    let (hash, dimensions) = file.rsplit_once('-')?;
    if hash.is_empty() || extension.is_empty() || !is_dimensions(dimensions) {
        return None;
    }

    let mut url = format!(
        "{}/{}/{}/{}.{}",
        IMAGE_CDN, config.project_id, config.dataset, file, extension
    );
    if let Some(size) = size {
        url.push_str(&format!("?w={}&h={}&fit=crop", size.width, size.height));
    }
    Some(url)
}

/// Like [`image_url`] but never fails, falling back to `placeholder`.
pub fn image_src(
    config: &CmsConfig,
    image: Option<&ImageRef>,
    size: Option<ImageSize>,
    placeholder: &str,
) -> String {
    image
        .and_then(|image| image_url(config, image, size))
        .unwrap_or_else(|| placeholder.to_string())
}

fn is_dimensions(value: &str) -> bool {
    match value.split_once('x') {
        Some((w, h)) => {
            !w.is_empty()
                && !h.is_empty()
                && w.chars().all(|c| c.is_ascii_digit())
                && h.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::models::AssetRef;

    fn config() -> CmsConfig {
        CmsConfig {
            project_id: "proj",
            dataset: "production",
            api_version: "2023-05-03",
            use_cdn: true,
        }
    }

    fn image(reference: &str) -> ImageRef {
        ImageRef {
            asset: Some(AssetRef {
                reference: Some(reference.to_string()),
                id: None,
            }),
        }
    }

    #[test]
    fn builds_plain_url() {
        let url = image_url(&config(), &image("image-Tb9Ew8CX-2000x3000-jpg"), None);
        assert_eq!(
            url.as_deref(),
            Some("https://cdn.sanity.io/images/proj/production/Tb9Ew8CX-2000x3000.jpg")
        );
    }

    #[test]
    fn appends_crop_size() {
        let url = image_url(&config(), &image("image-abc-10x20-png"), Some(CARD_SIZE));
        assert_eq!(
            url.as_deref(),
            Some("https://cdn.sanity.io/images/proj/production/abc-10x20.png?w=600&h=400&fit=crop")
        );
    }

    #[test]
    fn rejects_malformed_references() {
        for reference in ["file-abc-10x20-pdf", "image-abc-png", "image-abc-tenxtwenty-png", "image--10x20-png"] {
            assert_eq!(image_url(&config(), &image(reference), None), None, "{reference}");
        }
        assert_eq!(image_url(&config(), &ImageRef::default(), None), None);
    }

    #[test]
    fn image_src_falls_back_to_placeholder() {
        assert_eq!(image_src(&config(), None, None, "/placeholder.svg"), "/placeholder.svg");
        assert_eq!(
            image_src(&config(), Some(&image("bogus")), None, "/placeholder.svg"),
            "/placeholder.svg"
        );
    }
}

/// Connection settings for the headless content backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CmsConfig {
    pub project_id: &'static str,
    pub dataset: &'static str,
    pub api_version: &'static str,
    pub use_cdn: bool,
}

const PROJECT_ID: &str = match option_env!("SANITY_PROJECT_ID") {
    Some(id) => id,
    None => "famkris",
};

const DATASET: &str = match option_env!("SANITY_DATASET") {
    Some(dataset) => dataset,
    None => "production",
};

const API_VERSION: &str = "2023-05-03";

#[cfg(debug_assertions)]
pub fn cms() -> CmsConfig {
    CmsConfig {
        project_id: PROJECT_ID,
        dataset: DATASET,
        api_version: API_VERSION,
        use_cdn: false, // Fresh content while editing locally
    }
}

#[cfg(not(debug_assertions))]
pub fn cms() -> CmsConfig {
    CmsConfig {
        project_id: PROJECT_ID,
        dataset: DATASET,
        api_version: API_VERSION,
        use_cdn: true,
    }
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const DEFAULT_TOOL_IMAGE: &str = "/images/default-tool.jpg";
pub const VIDEO_PLACEHOLDER_IMAGE: &str = "/images/video-placeholder.jpg";
pub const HERO_IMAGE: &str = "/images/1media.jpg";

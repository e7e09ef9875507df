use std::fmt;
use std::str::FromStr;

/// Query parameter that carries the active tab, e.g. `/media?tab=Videos`.
pub const TAB_PARAM: &str = "tab";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaTab {
    #[default]
    Articles,
    Videos,
    Gallery,
}

impl MediaTab {
    pub const ALL: [MediaTab; 3] = [MediaTab::Articles, MediaTab::Videos, MediaTab::Gallery];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaTab::Articles => "Articles",
            MediaTab::Videos => "Videos",
            MediaTab::Gallery => "Gallery",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            MediaTab::Articles => "Stay informed on project updates and stories from the field.",
            MediaTab::Videos => "Watch inspiring videos that showcase our work",
            MediaTab::Gallery => "Explore a collection of moments captured to tell our story",
        }
    }
}

impl fmt::Display for MediaTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownTab(pub String);

impl FromStr for MediaTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Reads the tab out of a query string (with or without the leading `?`).
///
/// Unknown values are ignored so the caller keeps its current tab.
pub fn tab_from_query(query: &str) -> Option<MediaTab> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .filter(|(key, _)| key == TAB_PARAM)
        .find_map(|(_, value)| value.parse().ok())
}

/// Query pairs for navigating to `tab`, keeping every other parameter.
pub fn query_with_tab(query: &str, tab: MediaTab) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> =
        url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .filter(|(key, _)| key != TAB_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
    pairs.push((TAB_PARAM.to_string(), tab.as_str().to_string()));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_tab_names_parse() {
        assert_eq!("Videos".parse::<MediaTab>(), Ok(MediaTab::Videos));
        assert_eq!(
            "videos".parse::<MediaTab>(),
            Err(UnknownTab("videos".to_string()))
        );
    }

    #[test]
    fn reads_tab_from_query() {
        assert_eq!(tab_from_query("?tab=Gallery"), Some(MediaTab::Gallery));
        assert_eq!(tab_from_query("ref=home&tab=Videos"), Some(MediaTab::Videos));
        assert_eq!(tab_from_query("?tab=Podcasts"), None);
        assert_eq!(tab_from_query(""), None);
    }

    #[test]
    fn navigation_keeps_other_parameters() {
        let pairs = query_with_tab("?utm_source=mail&tab=Articles", MediaTab::Gallery);
        assert_eq!(
            pairs,
            vec![
                ("utm_source".to_string(), "mail".to_string()),
                ("tab".to_string(), "Gallery".to_string()),
            ]
        );
    }

    #[test]
    fn query_round_trips_through_the_parser() {
        for tab in MediaTab::ALL {
            let pairs = query_with_tab("", tab);
            let query: String = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            assert_eq!(tab_from_query(&query), Some(tab));
        }
    }
}

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::cms::client::CmsError;
use crate::cms::models::{Album, Article, GalleryImage, Video};
use crate::media::albums::AlbumNavigator;
use crate::media::carousel::Carousel;
use crate::media::pagination::{paginate, Page, PAGE_SIZE};
use crate::media::requests::{Loadable, Ticket};
use crate::media::tabs::MediaTab;

/// Everything the media hub shows, owned by one mounted page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaState {
    pub active_tab: MediaTab,
    pub current_page: usize,
    pub articles: Loadable<Vec<Article>>,
    pub videos: Loadable<Vec<Video>>,
    pub gallery: Loadable<Vec<GalleryImage>>,
    pub albums: Loadable<Vec<Album>>,
    pub album_nav: AlbumNavigator,
    pub gallery_carousel: Carousel,
}

pub enum MediaAction {
    /// Tab chosen by the visitor.
    SelectTab(MediaTab),
    /// Tab read from the address bar, `None` when absent or unknown.
    SyncTabFromUrl(Option<MediaTab>),
    ChangePage(usize),

    ArticlesRequested(Ticket),
    ArticlesLoaded(Ticket, Result<Vec<Article>, CmsError>),
    VideosRequested(Ticket),
    VideosLoaded(Ticket, Result<Vec<Video>, CmsError>),
    GalleryRequested(Ticket),
    GalleryLoaded(Ticket, Result<Vec<GalleryImage>, CmsError>),
    AlbumsRequested(Ticket),
    AlbumsLoaded(Ticket, Result<Vec<Album>, CmsError>),

    AlbumRequested { album_id: String, ticket: Ticket },
    AlbumLoaded(Ticket, Result<Option<Album>, CmsError>),
    BackToAlbums,

    OpenGalleryImage(usize),
    CloseGalleryImage,
    NextGalleryImage,
    PrevGalleryImage,

    OpenAlbumImage(usize),
    CloseAlbumImage,
    NextAlbumImage,
    PrevAlbumImage,
}

impl MediaState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Default::default()
        }
    }

    fn switch_tab(&mut self, tab: MediaTab) {
        self.active_tab = tab;
        self.current_page = 1;
        self.gallery_carousel.close();
        self.album_nav.close_image();
    }

    /// Album list is fetched once per visit, or again after a failure.
    pub fn needs_album_list(&self) -> bool {
        self.active_tab == MediaTab::Gallery && self.albums.needs_fetch()
    }

    pub fn page_of<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.current_page, PAGE_SIZE)
    }

    pub fn gallery_len(&self) -> usize {
        self.gallery.ready().map_or(0, |g| g.len())
    }
}

impl Reducible for MediaState {
    type Action = MediaAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let applied = match action {
            MediaAction::SelectTab(tab) => {
                next.switch_tab(tab);
                true
            }
            MediaAction::SyncTabFromUrl(Some(tab)) if tab != next.active_tab => {
                next.switch_tab(tab);
                true
            }
            MediaAction::SyncTabFromUrl(_) => false,
            MediaAction::ChangePage(page) => {
                next.current_page = page;
                true
            }

            MediaAction::ArticlesRequested(ticket) => {
                next.articles.start(ticket);
                true
            }
            MediaAction::ArticlesLoaded(ticket, result) => next.articles.finish(ticket, result),
            MediaAction::VideosRequested(ticket) => {
                next.videos.start(ticket);
                true
            }
            MediaAction::VideosLoaded(ticket, result) => next.videos.finish(ticket, result),
            MediaAction::GalleryRequested(ticket) => {
                next.gallery.start(ticket);
                true
            }
            MediaAction::GalleryLoaded(ticket, result) => next.gallery.finish(ticket, result),
            MediaAction::AlbumsRequested(ticket) => {
                next.albums.start(ticket);
                true
            }
            MediaAction::AlbumsLoaded(ticket, result) => next.albums.finish(ticket, result),

            MediaAction::AlbumRequested { album_id, ticket } => {
                next.album_nav.select(album_id, ticket);
                true
            }
            MediaAction::AlbumLoaded(ticket, result) => next.album_nav.resolve(ticket, result),
            MediaAction::BackToAlbums => {
                next.album_nav.back();
                true
            }

            MediaAction::OpenGalleryImage(index) => {
                let len = next.gallery_len();
                next.gallery_carousel.open(index, len);
                true
            }
            MediaAction::CloseGalleryImage => {
                next.gallery_carousel.close();
                true
            }
            MediaAction::NextGalleryImage => {
                next.gallery_carousel.next();
                true
            }
            MediaAction::PrevGalleryImage => {
                next.gallery_carousel.prev();
                true
            }

            MediaAction::OpenAlbumImage(index) => {
                next.album_nav.open_image(index);
                true
            }
            MediaAction::CloseAlbumImage => {
                next.album_nav.close_image();
                true
            }
            MediaAction::NextAlbumImage => {
                next.album_nav.next_image();
                true
            }
            MediaAction::PrevAlbumImage => {
                next.album_nav.prev_image();
                true
            }
        };

        if !applied || next == *self {
            if !applied {
                debug!("Dropping stale or redundant media update");
            }
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::models::{ImageRef, Slug};
    use crate::media::albums::AlbumView;
    use crate::media::requests::TicketCounter;
    use chrono::{TimeZone, Utc};

    fn article(n: usize) -> Article {
        Article {
            title: format!("Article {n}"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            slug: Slug { current: format!("article-{n}") },
            image: None,
            excerpt: None,
            tags: vec![],
            body: vec![],
        }
    }

    fn picture(n: usize) -> GalleryImage {
        GalleryImage {
            image: ImageRef::default(),
            alt: Some(format!("picture {n}")),
            caption: None,
        }
    }

    fn album(id: &str) -> Album {
        Album {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            cover_image: None,
            first_image: None,
            image_count: Some(2),
            images: vec![picture(0), picture(1)],
        }
    }

    fn apply(state: Rc<MediaState>, actions: Vec<MediaAction>) -> Rc<MediaState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn loaded(tickets: &mut TicketCounter) -> Rc<MediaState> {
        let a = tickets.issue();
        let g = tickets.issue();
        apply(
            Rc::new(MediaState::new()),
            vec![
                MediaAction::ArticlesRequested(a),
                MediaAction::ArticlesLoaded(a, Ok((1..=14).map(article).collect())),
                MediaAction::GalleryRequested(g),
                MediaAction::GalleryLoaded(g, Ok((0..3).map(picture).collect())),
            ],
        )
    }

    #[test]
    fn switching_tabs_resets_to_first_page() {
        let mut tickets = TicketCounter::default();
        let state = loaded(&mut tickets);

        for tab in MediaTab::ALL {
            let state = apply(state.clone(), vec![MediaAction::ChangePage(3)]);
            assert_eq!(state.current_page, 3);
            let state = state.reduce(MediaAction::SelectTab(tab));
            assert_eq!(state.active_tab, tab);
            assert_eq!(state.current_page, 1);
        }
    }

    #[test]
    fn url_sync_ignores_unknown_and_unchanged_tabs() {
        let state = Rc::new(MediaState::new()).reduce(MediaAction::ChangePage(2));

        let same = state.clone().reduce(MediaAction::SyncTabFromUrl(None));
        assert!(Rc::ptr_eq(&same, &state));

        let same = state.clone().reduce(MediaAction::SyncTabFromUrl(Some(MediaTab::Articles)));
        assert_eq!(same.current_page, 2);

        let moved = state.reduce(MediaAction::SyncTabFromUrl(Some(MediaTab::Videos)));
        assert_eq!(moved.active_tab, MediaTab::Videos);
        assert_eq!(moved.current_page, 1);
    }

    #[test]
    fn page_three_of_articles_holds_the_last_two() {
        let mut tickets = TicketCounter::default();
        let state = loaded(&mut tickets).reduce(MediaAction::ChangePage(3));

        let articles = state.articles.ready().unwrap();
        let page = state.page_of(articles);
        let titles: Vec<&str> = page.items.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Article 13", "Article 14"]);
        assert_eq!(page.total_pages, 3);

        let beyond = state.reduce(MediaAction::ChangePage(4));
        assert!(beyond.page_of(beyond.articles.ready().unwrap()).items.is_empty());
    }

    #[test]
    fn gallery_carousel_wraps() {
        let mut tickets = TicketCounter::default();
        let state = apply(
            loaded(&mut tickets),
            vec![MediaAction::OpenGalleryImage(0), MediaAction::PrevGalleryImage],
        );
        assert_eq!(state.gallery_carousel.current_index(), Some(2));

        let state = apply(
            state,
            vec![MediaAction::NextGalleryImage, MediaAction::NextGalleryImage],
        );
        assert_eq!(state.gallery_carousel.current_index(), Some(1));

        let state = state.reduce(MediaAction::SelectTab(MediaTab::Videos));
        assert!(!state.gallery_carousel.is_open());
    }

    #[test]
    fn album_list_fetched_once_per_visit() {
        let mut tickets = TicketCounter::default();
        let state = Rc::new(MediaState::new());
        assert!(!state.needs_album_list());

        let state = state.reduce(MediaAction::SelectTab(MediaTab::Gallery));
        assert!(state.needs_album_list());

        let t = tickets.issue();
        let state = apply(
            state,
            vec![
                MediaAction::AlbumsRequested(t),
                MediaAction::AlbumsLoaded(t, Ok(vec![album("a1"), album("a2")])),
                MediaAction::SelectTab(MediaTab::Articles),
                MediaAction::SelectTab(MediaTab::Gallery),
            ],
        );
        assert!(!state.needs_album_list());
    }

    #[test]
    fn late_album_list_does_not_override_newer_request() {
        let mut tickets = TicketCounter::default();
        let stale = tickets.issue();
        let fresh = tickets.issue();
        let state = apply(
            Rc::new(MediaState::new()),
            vec![
                MediaAction::SelectTab(MediaTab::Gallery),
                MediaAction::AlbumsRequested(stale),
                MediaAction::AlbumsRequested(fresh),
                MediaAction::AlbumsLoaded(fresh, Ok(vec![album("new")])),
                MediaAction::AlbumsLoaded(stale, Ok(vec![album("old")])),
            ],
        );
        let ids: Vec<&str> = state.albums.ready().unwrap().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new"]);
    }

    #[test]
    fn album_drill_down_and_back_keeps_album_list() {
        let mut tickets = TicketCounter::default();
        let list = tickets.issue();
        let detail = tickets.issue();
        let state = apply(
            Rc::new(MediaState::new()),
            vec![
                MediaAction::SelectTab(MediaTab::Gallery),
                MediaAction::AlbumsRequested(list),
                MediaAction::AlbumsLoaded(list, Ok(vec![album("a1"), album("a2")])),
                MediaAction::AlbumRequested { album_id: "a2".to_string(), ticket: detail },
                MediaAction::AlbumLoaded(detail, Ok(Some(album("a2")))),
                MediaAction::OpenAlbumImage(1),
                MediaAction::NextAlbumImage,
            ],
        );
        assert_eq!(state.album_nav.selected().map(|a| a.id.as_str()), Some("a2"));
        assert_eq!(state.album_nav.carousel().current_index(), Some(0));
        let albums_before = state.albums.clone();

        let state = state.reduce(MediaAction::BackToAlbums);
        assert_eq!(state.album_nav.view(), &AlbumView::List);
        assert!(!state.album_nav.carousel().is_open());
        assert_eq!(state.albums, albums_before);
    }

    #[test]
    fn one_failed_source_leaves_the_others_usable() {
        let mut tickets = TicketCounter::default();
        let v = tickets.issue();
        let state = apply(
            loaded(&mut tickets),
            vec![
                MediaAction::VideosRequested(v),
                MediaAction::VideosLoaded(v, Err(CmsError::Network("offline".to_string()))),
            ],
        );
        assert!(matches!(state.videos, Loadable::Failed(_)));
        assert_eq!(state.articles.ready().map(|a| a.len()), Some(14));
        assert_eq!(state.gallery_len(), 3);
    }

    #[test]
    fn leaving_the_gallery_closes_the_album_lightbox_but_keeps_the_album() {
        let mut tickets = TicketCounter::default();
        let detail = tickets.issue();
        let opened = apply(
            Rc::new(MediaState::new()),
            vec![
                MediaAction::SelectTab(MediaTab::Gallery),
                MediaAction::AlbumRequested { album_id: "a".to_string(), ticket: detail },
                MediaAction::AlbumLoaded(detail, Ok(Some(album("a")))),
                MediaAction::OpenAlbumImage(1),
            ],
        );
        assert!(opened.album_nav.carousel().is_open());

        let from_url = opened
            .clone()
            .reduce(MediaAction::SyncTabFromUrl(Some(MediaTab::Articles)));
        assert_eq!(from_url.active_tab, MediaTab::Articles);
        assert!(!from_url.album_nav.carousel().is_open());
        assert_eq!(from_url.album_nav.selected().map(|a| a.id.as_str()), Some("a"));

        let clicked = opened.reduce(MediaAction::SelectTab(MediaTab::Videos));
        assert!(!clicked.album_nav.carousel().is_open());
        assert_eq!(clicked.album_nav.selected().map(|a| a.id.as_str()), Some("a"));
    }
}

use std::rc::Rc;

use crate::cms::client::CmsError;
use crate::cms::models::Album;
use crate::media::carousel::Carousel;
use crate::media::requests::Ticket;

/// What the gallery tab currently shows.
///
/// The album lightbox only exists inside `Detail`, so leaving an album always
/// closes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AlbumView {
    #[default]
    List,
    Loading { album_id: String, ticket: Ticket },
    Detail { album: Rc<Album>, carousel: Carousel },
}

/// Drill-down between the album grid and a single album.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlbumNavigator {
    view: AlbumView,
    error: Option<String>,
}

impl AlbumNavigator {
    pub fn view(&self) -> &AlbumView {
        &self.view
    }

    /// Message from the last failed album fetch, shown above the grid.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&Album> {
        match &self.view {
            AlbumView::Detail { album, .. } => Some(album.as_ref()),
            _ => None,
        }
    }

    pub fn select(&mut self, album_id: String, ticket: Ticket) {
        self.error = None;
        self.view = AlbumView::Loading { album_id, ticket };
    }

    /// Applies the album fetch for `ticket`. Results for any other request
    /// are dropped and `false` is returned.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Option<Album>, CmsError>) -> bool {
        let awaited = matches!(&self.view, AlbumView::Loading { ticket: t, .. } if *t == ticket);
        if !awaited {
            return false;
        }
        match result {
            Ok(Some(album)) => {
                self.view = AlbumView::Detail {
                    album: Rc::new(album),
                    carousel: Carousel::Closed,
                };
            }
            Ok(None) => {
                self.view = AlbumView::List;
                self.error = Some("This album is no longer available.".to_string());
            }
            Err(e) => {
                self.view = AlbumView::List;
                self.error = Some(format!("Could not open the album ({})", e));
            }
        }
        true
    }

    pub fn back(&mut self) {
        self.view = AlbumView::List;
    }

    pub fn carousel(&self) -> Carousel {
        match &self.view {
            AlbumView::Detail { carousel, .. } => *carousel,
            _ => Carousel::Closed,
        }
    }

    pub fn open_image(&mut self, index: usize) {
        if let AlbumView::Detail { album, carousel } = &mut self.view {
            carousel.open(index, album.images.len());
        }
    }

    pub fn close_image(&mut self) {
        self.with_carousel(Carousel::close);
    }

    pub fn next_image(&mut self) {
        self.with_carousel(Carousel::next);
    }

    pub fn prev_image(&mut self) {
        self.with_carousel(Carousel::prev);
    }

    fn with_carousel(&mut self, f: impl FnOnce(&mut Carousel)) {
        if let AlbumView::Detail { carousel, .. } = &mut self.view {
            f(carousel);
        }
    }
}

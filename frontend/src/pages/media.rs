use std::future::Future;

use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cms::client::{CmsClient, CmsError};
use crate::cms::image_url::{image_src, ImageSize, CARD_SIZE};
use crate::cms::models::{format_date, Album, Article, GalleryImage, Video};
use crate::components::lightbox::Lightbox;
use crate::components::loading::Loading;
use crate::components::pagination::Pagination;
use crate::config::{self, CmsConfig, HERO_IMAGE, PLACEHOLDER_IMAGE};
use crate::media::albums::AlbumView;
use crate::media::carousel::Carousel;
use crate::media::requests::{Loadable, Ticket, TicketCounter};
use crate::media::state::{MediaAction, MediaState};
use crate::media::tabs::{query_with_tab, tab_from_query, MediaTab};
use crate::media::video::thumbnail_url;
use crate::Route;

const ARTICLE_IMAGE: ImageSize = ImageSize { width: 544, height: 300 };

type Dispatcher = UseReducerDispatcher<MediaState>;

/// Runs one content fetch and feeds its outcome back into the media state.
fn spawn_fetch<T: 'static>(
    dispatcher: Dispatcher,
    ticket: Ticket,
    source: &'static str,
    fetch: impl Future<Output = Result<T, CmsError>> + 'static,
    done: fn(Ticket, Result<T, CmsError>) -> MediaAction,
) {
    spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            error!("Failed to load {}: {}", source, e);
        }
        dispatcher.dispatch(done(ticket, result));
    });
}

fn send(dispatcher: &Dispatcher, action: impl Fn() -> MediaAction + 'static) -> Callback<()> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_| dispatcher.dispatch(action()))
}

#[function_component(Media)]
pub fn media() -> Html {
    html! {
        <div class="media-page">
            <section class="media-hero" style={format!("background-image: url('{}');", HERO_IMAGE)}>
                <div class="media-hero-overlay">
                    <h1>{"Media"}</h1>
                    <p>
                        {"Explore our mission through stories, visuals, and insights that capture the impact of our work."}
                    </p>
                </div>
            </section>
            <MediaContent />
            <style>{ MEDIA_STYLE }</style>
        </div>
    }
}

#[function_component(MediaContent)]
fn media_content() -> Html {
    let state = use_reducer(MediaState::new);
    let tickets = use_mut_ref(TicketCounter::default);
    let navigator = use_navigator();
    let location = use_location();
    let cms = config::cms();
    let client = CmsClient::new(cms);

    // Load the three collections once on mount
    {
        let dispatcher = state.dispatcher();
        let tickets = tickets.clone();
        use_effect_with_deps(
            move |_| {
                let (articles, videos, gallery) = {
                    let mut tickets = tickets.borrow_mut();
                    (tickets.issue(), tickets.issue(), tickets.issue())
                };
                dispatcher.dispatch(MediaAction::ArticlesRequested(articles));
                dispatcher.dispatch(MediaAction::VideosRequested(videos));
                dispatcher.dispatch(MediaAction::GalleryRequested(gallery));

                spawn_fetch(
                    dispatcher.clone(),
                    articles,
                    "articles",
                    async move { client.list_articles().await },
                    MediaAction::ArticlesLoaded,
                );
                spawn_fetch(
                    dispatcher.clone(),
                    videos,
                    "videos",
                    async move { client.list_videos().await },
                    MediaAction::VideosLoaded,
                );
                spawn_fetch(
                    dispatcher,
                    gallery,
                    "gallery",
                    async move { client.list_gallery_images().await },
                    MediaAction::GalleryLoaded,
                );
                || ()
            },
            (),
        );
    }

    // Follow ?tab= on mount and on back/forward navigation
    let query = location
        .as_ref()
        .map(|l| l.query_str().to_string())
        .unwrap_or_default();
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |query: &String| {
                dispatcher.dispatch(MediaAction::SyncTabFromUrl(tab_from_query(query)));
                || ()
            },
            query.clone(),
        );
    }

    // Album list is fetched when the gallery tab becomes active
    {
        let dispatcher = state.dispatcher();
        let tickets = tickets.clone();
        let needs_albums = state.needs_album_list();
        use_effect_with_deps(
            move |_| {
                if needs_albums {
                    let ticket = tickets.borrow_mut().issue();
                    dispatcher.dispatch(MediaAction::AlbumsRequested(ticket));
                    spawn_fetch(
                        dispatcher,
                        ticket,
                        "albums",
                        async move { client.list_albums().await },
                        MediaAction::AlbumsLoaded,
                    );
                }
                || ()
            },
            state.active_tab,
        );
    }

    let on_tab = {
        let dispatcher = state.dispatcher();
        let query = query.clone();
        Callback::from(move |tab: MediaTab| {
            info!("Switching media tab to {}", tab);
            dispatcher.dispatch(MediaAction::SelectTab(tab));
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.push_with_query(&Route::Media, &query_with_tab(&query, tab)) {
                    warn!("Could not update tab in url: {}", e);
                }
            }
        })
    };

    let on_page_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |page: usize| dispatcher.dispatch(MediaAction::ChangePage(page)))
    };

    let on_album = {
        let dispatcher = state.dispatcher();
        let tickets = tickets.clone();
        Callback::from(move |album_id: String| {
            let ticket = tickets.borrow_mut().issue();
            dispatcher.dispatch(MediaAction::AlbumRequested {
                album_id: album_id.clone(),
                ticket,
            });
            spawn_fetch(
                dispatcher.clone(),
                ticket,
                "album",
                async move { client.get_album(&album_id).await },
                MediaAction::AlbumLoaded,
            );
        })
    };

    let dispatcher = state.dispatcher();
    let active_tab = state.active_tab;

    let content = match active_tab {
        MediaTab::Articles => render_source(&state.articles, active_tab, |items| {
            let page = state.page_of(items);
            html! {
                <>
                    <div class="article-list">
                        { for page.items.iter().enumerate().map(|(i, article)| article_card(&cms, i, article)) }
                    </div>
                    <Pagination current_page={state.current_page} total_pages={page.total_pages} on_page_change={on_page_change.clone()} />
                </>
            }
        }),
        MediaTab::Videos => render_source(&state.videos, active_tab, |items| {
            let page = state.page_of(items);
            html! {
                <>
                    <div class="card-grid">
                        { for page.items.iter().enumerate().map(|(i, video)| video_card(i, video)) }
                    </div>
                    <Pagination current_page={state.current_page} total_pages={page.total_pages} on_page_change={on_page_change.clone()} />
                </>
            }
        }),
        MediaTab::Gallery => match state.album_nav.view() {
            AlbumView::Loading { .. } => html! { <Loading /> },
            AlbumView::Detail { album, .. } => album_detail(&cms, album, &dispatcher),
            AlbumView::List => html! {
                <>
                    if let Some(message) = state.album_nav.error() {
                        <div class="scoped-error">{ message }</div>
                    }
                    <h2 class="section-title">{"Photo Albums"}</h2>
                    { render_source(&state.albums, active_tab, |albums| {
                        let page = state.page_of(albums);
                        html! {
                            <>
                                <div class="card-grid">
                                    { for page.items.iter().map(|album| album_card(&cms, album, &on_album)) }
                                </div>
                                <Pagination current_page={state.current_page} total_pages={page.total_pages} on_page_change={on_page_change.clone()} />
                            </>
                        }
                    }) }
                    { gallery_strip(&cms, &state.gallery, &dispatcher) }
                </>
            },
        },
    };

    html! {
        <>
            <div class="media-tabs">
                {
                    for MediaTab::ALL.into_iter().map(|tab| {
                        let on_tab = on_tab.clone();
                        html! {
                            <button
                                key={tab.as_str()}
                                class={classes!("media-tab", (tab == active_tab).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_tab.emit(tab))}
                            >
                                { tab.as_str() }
                            </button>
                        }
                    })
                }
            </div>

            <div class="media-content" key={active_tab.as_str()}>
                <h2 class="media-heading">{ active_tab.as_str() }</h2>
                <p class="media-blurb">{ active_tab.blurb() }</p>
                { content }
            </div>

            { gallery_lightbox(&cms, &state.gallery, state.gallery_carousel, &dispatcher) }
            if active_tab == MediaTab::Gallery {
                { album_lightbox(&cms, &state, &dispatcher) }
            }
        </>
    }
}

/// Loading, error, empty or content state of one source.
fn render_source<T>(
    source: &Loadable<Vec<T>>,
    tab: MediaTab,
    content: impl FnOnce(&[T]) -> Html,
) -> Html {
    match source {
        Loadable::Idle | Loadable::Loading(_) => html! { <Loading /> },
        Loadable::Failed(_) => html! {
            <div class="scoped-error">
                { format!("Error loading {}. Please try again later.", tab.as_str().to_lowercase()) }
            </div>
        },
        Loadable::Ready(items) if items.is_empty() => empty_state(tab),
        Loadable::Ready(items) => content(items.as_slice()),
    }
}

fn empty_state(tab: MediaTab) -> Html {
    html! {
        <div class="empty-state">
            <div class="empty-state-icon">{"∅"}</div>
            <p>{ format!("No {} available at the moment.", tab.as_str().to_lowercase()) }</p>
        </div>
    }
}

fn article_card(cms: &CmsConfig, index: usize, article: &Article) -> Html {
    html! {
        <div class="article-card" key={article.slug.current.clone()} style={stagger(index)}>
            <img
                src={image_src(cms, article.image.as_ref(), Some(ARTICLE_IMAGE), PLACEHOLDER_IMAGE)}
                alt={article.title.clone()}
                class="article-image"
            />
            <div class="article-body">
                <div>
                    <h3>{ &article.title }</h3>
                    <div class="article-date">{ format_date(&article.created_at) }</div>
                    <div class="tag-list">
                        { for article.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                    </div>
                    if let Some(excerpt) = &article.excerpt {
                        <p class="article-excerpt">{ excerpt }</p>
                    }
                </div>
                <Link<Route> to={Route::Article { slug: article.slug.current.clone() }} classes="read-more">
                    {"Read More ›"}
                </Link<Route>>
            </div>
        </div>
    }
}

fn video_card(index: usize, video: &Video) -> Html {
    html! {
        <div class="media-card" style={stagger(index)}>
            <div class="video-thumb">
                <img src={thumbnail_url(&video.link)} alt={video.title.clone()} />
                <div class="play-badge"><div class="play-triangle"></div></div>
            </div>
            <div class="media-card-body">
                <h3>{ &video.title }</h3>
                if let Some(description) = &video.description {
                    <p>{ description }</p>
                }
                <a href={video.link.clone()} target="_blank" rel="noopener noreferrer" class="read-more">
                    {"Watch Now ›"}
                </a>
            </div>
        </div>
    }
}

fn album_card(cms: &CmsConfig, album: &Album, on_album: &Callback<String>) -> Html {
    let onclick = {
        let on_album = on_album.clone();
        let id = album.id.clone();
        Callback::from(move |_: MouseEvent| on_album.emit(id.clone()))
    };
    let cover = match album.thumbnail() {
        Some(image) => html! {
            <img src={image_src(cms, Some(image), Some(CARD_SIZE), PLACEHOLDER_IMAGE)} alt={album.title.clone()} />
        },
        None => html! { <div class="no-image">{"No image"}</div> },
    };

    html! {
        <div class="media-card album-card" key={album.id.clone()} {onclick}>
            <div class="album-cover">
                { cover }
                <div class="album-caption">
                    <h3>{ &album.title }</h3>
                    <p>{ format!("{} photos", album.image_count.unwrap_or(0)) }</p>
                </div>
            </div>
            if let Some(description) = &album.description {
                <div class="media-card-body"><p class="clamp">{ description }</p></div>
            }
        </div>
    }
}

fn album_detail(cms: &CmsConfig, album: &Album, dispatcher: &Dispatcher) -> Html {
    let back = send(dispatcher, || MediaAction::BackToAlbums);
    html! {
        <div class="album-detail">
            <div class="album-detail-header">
                <button class="back-button" onclick={back.reform(|_: MouseEvent| ())}>{"‹ Back to Albums"}</button>
                <h2>{ &album.title }</h2>
            </div>
            if let Some(description) = &album.description {
                <p class="album-description">{ description }</p>
            }
            <div class="card-grid">
                {
                    for album.images.iter().enumerate().map(|(index, image)| {
                        let open = send(dispatcher, move || MediaAction::OpenAlbumImage(index));
                        html! {
                            <div class="media-card photo-card" key={index} onclick={open.reform(|_: MouseEvent| ())}>
                                <img
                                    src={image_src(cms, Some(&image.image), Some(CARD_SIZE), PLACEHOLDER_IMAGE)}
                                    alt={image.alt.clone().unwrap_or_else(|| format!("Image {}", index + 1))}
                                />
                                if let Some(caption) = &image.caption {
                                    <div class="media-card-body"><p>{ caption }</p></div>
                                }
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}

/// Loose gallery pictures shown under the album grid.
fn gallery_strip(cms: &CmsConfig, gallery: &Loadable<Vec<GalleryImage>>, dispatcher: &Dispatcher) -> Html {
    match gallery {
        Loadable::Ready(images) if !images.is_empty() => html! {
            <section class="gallery-strip">
                <h2 class="section-title">{"Highlights"}</h2>
                <div class="photo-grid">
                    {
                        for images.iter().enumerate().map(|(index, image)| {
                            let open = send(dispatcher, move || MediaAction::OpenGalleryImage(index));
                            html! {
                                <img
                                    key={index}
                                    class="photo-thumb"
                                    src={image_src(cms, Some(&image.image), Some(CARD_SIZE), PLACEHOLDER_IMAGE)}
                                    alt={image.alt.clone().unwrap_or_default()}
                                    onclick={open.reform(|_: MouseEvent| ())}
                                />
                            }
                        })
                    }
                </div>
            </section>
        },
        Loadable::Failed(_) => html! {
            <div class="scoped-error">{"Error loading gallery highlights."}</div>
        },
        _ => html! {},
    }
}

fn lightbox_for(cms: &CmsConfig, images: &[GalleryImage], carousel: Carousel, dispatcher: &Dispatcher, album: bool) -> Html {
    let image = match carousel.current_index().and_then(|index| images.get(index)) {
        Some(image) => image,
        None => return html! {},
    };
    let (on_close, on_prev, on_next) = if album {
        (
            send(dispatcher, || MediaAction::CloseAlbumImage),
            send(dispatcher, || MediaAction::PrevAlbumImage),
            send(dispatcher, || MediaAction::NextAlbumImage),
        )
    } else {
        (
            send(dispatcher, || MediaAction::CloseGalleryImage),
            send(dispatcher, || MediaAction::PrevGalleryImage),
            send(dispatcher, || MediaAction::NextGalleryImage),
        )
    };

    html! {
        <Lightbox
            src={image_src(cms, Some(&image.image), None, PLACEHOLDER_IMAGE)}
            title={image.caption.clone()}
            caption={image.alt.clone()}
            has_neighbours={carousel.neighbours().is_some()}
            {on_close}
            {on_prev}
            {on_next}
        />
    }
}

fn gallery_lightbox(cms: &CmsConfig, gallery: &Loadable<Vec<GalleryImage>>, carousel: Carousel, dispatcher: &Dispatcher) -> Html {
    match gallery.ready() {
        Some(images) => lightbox_for(cms, images, carousel, dispatcher, false),
        None => html! {},
    }
}

fn album_lightbox(cms: &CmsConfig, state: &MediaState, dispatcher: &Dispatcher) -> Html {
    match state.album_nav.selected() {
        Some(album) => lightbox_for(cms, &album.images, state.album_nav.carousel(), dispatcher, true),
        None => html! {},
    }
}

fn stagger(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f32 * 0.1)
}

const MEDIA_STYLE: &str = r#"
.media-page {
    background: #f9fafb;
    min-height: 100vh;
}
.media-hero {
    position: relative;
    height: 20rem;
    background-size: cover;
    background-position: center;
    animation: fadeIn 1s ease-out;
}
.media-hero-overlay {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    color: #fff;
    text-align: center;
}
.media-hero-overlay h1 {
    font-size: 3rem;
    font-weight: bold;
    animation: slideDown 0.8s ease-out 0.5s both;
}
.media-hero-overlay p {
    margin-top: 1rem;
    max-width: 36rem;
    font-size: 1.125rem;
    animation: slideUp 0.8s ease-out 0.8s both;
}
.media-tabs {
    position: sticky;
    top: 0;
    z-index: 10;
    background: #fff;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    padding: 1.5rem 0;
    display: flex;
    justify-content: center;
    gap: 1rem;
}
.media-tab {
    padding: 0.5rem 1.5rem;
    border-radius: 0.5rem;
    border: none;
    font-size: 1.125rem;
    font-weight: 600;
    background: #e5e7eb;
    color: #374151;
    cursor: pointer;
    transition: all 0.3s ease-in-out;
}
.media-tab:hover {
    transform: scale(1.05);
    background: #d1d5db;
}
.media-tab.active {
    background: #16a34a;
    color: #fff;
}
.media-content {
    max-width: 72rem;
    margin: 0 auto;
    padding: 3rem 1rem;
    animation: slideUp 0.5s ease-out;
}
.media-heading {
    font-size: 2.25rem;
    font-weight: bold;
    color: #1f2937;
    text-align: center;
    margin-bottom: 1.25rem;
}
.media-blurb {
    color: #374151;
    text-align: center;
    max-width: 32rem;
    margin: 0 auto 2.5rem;
}
.section-title {
    font-size: 1.875rem;
    font-weight: bold;
    color: #1f2937;
    text-align: center;
    margin: 2rem 0 1.5rem;
}
.article-list {
    max-width: 56rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 2rem;
}
.article-card {
    background: #fff;
    border-radius: 0.75rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    overflow: hidden;
    display: flex;
    animation: slideUp 0.5s ease-out both;
}
.article-image {
    width: 33%;
    object-fit: cover;
}
.article-body {
    padding: 1.5rem;
    flex: 1;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
}
.article-body h3, .media-card-body h3 {
    font-size: 1.5rem;
    font-weight: bold;
    color: #15803d;
    margin-bottom: 0.5rem;
}
.article-date {
    color: #4b5563;
    margin-bottom: 0.5rem;
}
.tag-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
}
.tag {
    padding: 0.25rem 0.75rem;
    background: #dcfce7;
    color: #166534;
    font-size: 0.875rem;
    border-radius: 9999px;
}
.read-more {
    margin-top: 1rem;
    color: #16a34a;
    font-weight: 600;
    text-decoration: none;
}
.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
    gap: 2rem;
}
.media-card {
    background: #fff;
    border-radius: 0.75rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    overflow: hidden;
    animation: slideUp 0.5s ease-out both;
}
.album-card, .photo-card, .photo-thumb {
    cursor: pointer;
}
.media-card-body {
    padding: 1.5rem;
    color: #4b5563;
}
.clamp {
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    overflow: hidden;
}
.video-thumb {
    position: relative;
    aspect-ratio: 16 / 9;
}
.video-thumb img, .album-cover img, .photo-card img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.photo-card img {
    height: 16rem;
}
.play-badge {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    width: 4rem;
    height: 4rem;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.8);
    display: flex;
    align-items: center;
    justify-content: center;
}
.play-triangle {
    width: 0;
    height: 0;
    margin-left: 0.25rem;
    border-top: 8px solid transparent;
    border-bottom: 8px solid transparent;
    border-left: 12px solid #16a34a;
}
.album-cover {
    position: relative;
    height: 16rem;
}
.no-image {
    height: 100%;
    background: #e5e7eb;
    color: #9ca3af;
    display: flex;
    align-items: center;
    justify-content: center;
}
.album-caption {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    background: rgba(0, 0, 0, 0.5);
    color: #fff;
    padding: 0.75rem;
}
.album-detail-header {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}
.album-detail-header h2 {
    font-size: 1.875rem;
    font-weight: bold;
    color: #1f2937;
}
.back-button {
    background: #16a34a;
    color: #fff;
    border: none;
    border-radius: 0.25rem;
    padding: 0.5rem 1rem;
    cursor: pointer;
}
.album-description {
    color: #4b5563;
    margin-bottom: 1.5rem;
}
.photo-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr));
    gap: 1rem;
}
.photo-thumb {
    width: 100%;
    height: 10rem;
    object-fit: cover;
    border-radius: 0.5rem;
}
.scoped-error {
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #991b1b;
    padding: 1rem;
    border-radius: 0.5rem;
    margin: 1rem auto;
    max-width: 40rem;
    text-align: center;
}
.empty-state {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 3rem 0;
    font-size: 1.25rem;
    color: #4b5563;
}
.empty-state-icon {
    font-size: 4rem;
    color: #9ca3af;
    margin-bottom: 1rem;
}
.pagination {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 2.5rem;
}
.pagination button {
    padding: 0.5rem 0.9rem;
    border-radius: 0.375rem;
    border: 1px solid #d1d5db;
    background: #fff;
    cursor: pointer;
}
.pagination button:disabled {
    opacity: 0.5;
    cursor: default;
}
.pagination-page.active {
    background: #16a34a;
    border-color: #16a34a;
    color: #fff;
}
.lightbox-backdrop {
    position: fixed;
    inset: 0;
    z-index: 60;
    background: rgba(0, 0, 0, 0.9);
    display: flex;
    align-items: center;
    justify-content: center;
}
.lightbox-figure {
    max-width: 90vw;
    max-height: 90vh;
    text-align: center;
    color: #e5e7eb;
}
.lightbox-figure img {
    max-width: 90vw;
    max-height: 80vh;
    object-fit: contain;
}
.lightbox-figure figcaption {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    margin-top: 0.75rem;
}
.lightbox-close, .lightbox-prev, .lightbox-next {
    position: absolute;
    background: none;
    border: none;
    color: #fff;
    font-size: 2.5rem;
    cursor: pointer;
}
.lightbox-close { top: 1rem; right: 1.5rem; }
.lightbox-prev { left: 1.5rem; top: 50%; }
.lightbox-next { right: 1.5rem; top: 50%; }
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes slideUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes slideDown {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}
@media (max-width: 768px) {
    .article-card {
        flex-direction: column;
    }
    .article-image {
        width: 100%;
        height: 16rem;
    }
    .media-tabs {
        gap: 0.5rem;
    }
}
"#;

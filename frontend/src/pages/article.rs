use std::cell::Cell;
use std::rc::Rc;

use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cms::client::CmsClient;
use crate::cms::image_url::{image_src, ImageSize};
use crate::cms::models::{format_date, Article};
use crate::cms::portable_text::{reading_minutes, PortableText};
use crate::components::loading::Loading;
use crate::config::{self, PLACEHOLDER_IMAGE};
use crate::Route;

const HEADER_IMAGE: ImageSize = ImageSize { width: 1200, height: 600 };

#[derive(Properties, PartialEq)]
pub struct ArticlePageProps {
    pub slug: String,
}

#[function_component(ArticlePage)]
pub fn article_page(props: &ArticlePageProps) -> Html {
    let article = use_state(|| None::<Article>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let cms = config::cms();

    {
        let article = article.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |slug: &String| {
                let slug = slug.clone();
                // Responses for a slug we navigated away from are dropped
                let current = Rc::new(Cell::new(true));
                loading.set(true);
                error.set(None);
                {
                    let current = current.clone();
                    spawn_local(async move {
                        let result = CmsClient::new(cms).get_article_by_slug(&slug).await;
                        if !current.get() {
                            return;
                        }
                        match result {
                            Ok(found) => article.set(found),
                            Err(e) => {
                                error!("Failed to load article {}: {}", slug, e);
                                error.set(Some("Failed to load article".to_string()));
                            }
                        }
                        loading.set(false);
                    });
                }
                move || current.set(false)
            },
            props.slug.clone(),
        );
    }

    let body = if *loading {
        html! { <Loading /> }
    } else if let Some(message) = (*error).as_ref() {
        html! { <div class="article-message">{ message }</div> }
    } else if let Some(article) = (*article).as_ref() {
        html! {
            <article class="article-page-body">
                <h1>{ &article.title }</h1>
                <div class="article-meta">
                    <span>{ format_date(&article.created_at) }</span>
                    <span>{ format!("{} min read", reading_minutes(&article.body)) }</span>
                </div>
                <div class="tag-list">
                    { for article.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                </div>
                if article.image.is_some() {
                    <img
                        class="article-hero"
                        src={image_src(&cms, article.image.as_ref(), Some(HEADER_IMAGE), PLACEHOLDER_IMAGE)}
                        alt={article.title.clone()}
                    />
                }
                <div class="rich-text">
                    <PortableText blocks={article.body.clone()} />
                </div>
            </article>
        }
    } else {
        html! { <div class="article-message">{"Article not found"}</div> }
    };

    html! {
        <div class="article-page">
            <Link<Route> to={Route::Media} classes="back-link">{"‹ Back to Media"}</Link<Route>>
            { body }
            <style>
                {r#"
                .article-page {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 6rem 1rem 4rem;
                }
                .back-link {
                    color: #16a34a;
                    text-decoration: none;
                    font-weight: 600;
                }
                .article-page-body h1 {
                    font-size: 2.5rem;
                    font-weight: bold;
                    color: #1f2937;
                    margin: 1.5rem 0 0.75rem;
                }
                .article-meta {
                    display: flex;
                    gap: 1.5rem;
                    color: #6b7280;
                    margin-bottom: 1rem;
                }
                .article-hero {
                    width: 100%;
                    border-radius: 0.75rem;
                    margin: 1.5rem 0;
                }
                .article-message {
                    text-align: center;
                    padding: 4rem 0;
                    font-size: 1.25rem;
                    color: #4b5563;
                }
                .tag-list {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tag {
                    padding: 0.25rem 0.75rem;
                    background: #dcfce7;
                    color: #166534;
                    font-size: 0.875rem;
                    border-radius: 9999px;
                }
                .rich-text {
                    line-height: 1.75;
                    color: #374151;
                }
                .rich-text p, .rich-text ul, .rich-text ol, .rich-text blockquote {
                    margin-bottom: 1.25rem;
                }
                .rich-text blockquote {
                    border-left: 4px solid #16a34a;
                    padding-left: 1rem;
                    font-style: italic;
                }
                "#}
            </style>
        </div>
    }
}

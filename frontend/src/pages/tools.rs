use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cms::client::CmsClient;
use crate::cms::image_url::{image_src, CARD_SIZE};
use crate::cms::models::Tool;
use crate::cms::portable_text::{truncate_blocks, PortableText};
use crate::components::loading::Loading;
use crate::config::{self, CmsConfig, DEFAULT_TOOL_IMAGE};
use crate::Route;

/// Words of the description shown on a tool card.
pub const PREVIEW_WORDS: usize = 50;

#[function_component(Tools)]
pub fn tools() -> Html {
    let tools = use_state(Vec::<Tool>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let cms = config::cms();

    {
        let tools = tools.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match CmsClient::new(cms).list_tools().await {
                        Ok(list) => tools.set(list),
                        Err(e) => {
                            error!("Failed to load tools: {}", e);
                            error.set(Some("Failed to load tools".to_string()));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let content = if *loading {
        html! { <Loading /> }
    } else if let Some(message) = (*error).as_ref() {
        html! { <div class="tools-message error">{ message }</div> }
    } else if tools.is_empty() {
        html! { <div class="tools-message">{"No tools available at the moment."}</div> }
    } else {
        html! {
            <div class="tools-grid">
                { for tools.iter().map(|tool| tool_card(&cms, tool)) }
            </div>
        }
    };

    html! {
        <div class="tools-page">
            <section class="tools-hero">
                <h1>{"Our Tools"}</h1>
                <p>{"Practical resources we build and share to support health workers and communities."}</p>
            </section>
            { content }
            <style>
                {r#"
                .tools-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    padding: 6rem 1rem 4rem;
                }
                .tools-hero {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .tools-hero h1 {
                    font-size: 2.75rem;
                    font-weight: bold;
                    color: #1f2937;
                }
                .tools-hero p {
                    color: #4b5563;
                    max-width: 36rem;
                    margin: 1rem auto 0;
                }
                .tools-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
                    gap: 2rem;
                }
                .tool-card {
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.3s ease;
                }
                .tool-card:hover {
                    transform: translateY(-4px);
                }
                .tool-card img {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                }
                .tool-card-body {
                    padding: 1.5rem;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                }
                .tool-card-body h3 a {
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #15803d;
                    text-decoration: none;
                }
                .tool-description {
                    color: #4b5563;
                    flex: 1;
                    margin: 0.75rem 0 1.25rem;
                }
                .tool-button {
                    display: inline-block;
                    text-align: center;
                    background: #16a34a;
                    color: #fff;
                    padding: 0.6rem 1.25rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-weight: 600;
                }
                .tool-button:hover {
                    background: #15803d;
                }
                .tools-message {
                    text-align: center;
                    padding: 3rem 0;
                    color: #4b5563;
                    font-size: 1.25rem;
                }
                .tools-message.error {
                    color: #991b1b;
                }
                "#}
            </style>
        </div>
    }
}

fn tool_card(cms: &CmsConfig, tool: &Tool) -> Html {
    let title = match &tool.slug {
        Some(slug) => html! {
            <Link<Route> to={Route::Tool { slug: slug.current.clone() }}>{ &tool.name }</Link<Route>>
        },
        None => html! { { &tool.name } },
    };

    html! {
        <div class="tool-card" key={tool.id.clone()}>
            <img src={image_src(cms, tool.image.as_ref(), Some(CARD_SIZE), DEFAULT_TOOL_IMAGE)} alt={tool.name.clone()} />
            <div class="tool-card-body">
                <h3>{ title }</h3>
                <div class="tool-description">
                    <PortableText blocks={truncate_blocks(&tool.brief_description, PREVIEW_WORDS)} />
                </div>
                if let Some(url) = &tool.button_url {
                    <a class="tool-button" href={url.clone()} target="_blank" rel="noopener noreferrer">
                        { tool.button_label() }
                    </a>
                }
            </div>
        </div>
    }
}

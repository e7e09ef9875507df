use std::cell::Cell;
use std::rc::Rc;

use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cms::client::CmsClient;
use crate::cms::image_url::{image_src, ImageSize};
use crate::cms::models::Tool;
use crate::cms::portable_text::PortableText;
use crate::components::loading::Loading;
use crate::config::{self, DEFAULT_TOOL_IMAGE};
use crate::Route;

const TOOL_IMAGE: ImageSize = ImageSize { width: 960, height: 540 };

#[derive(Properties, PartialEq)]
pub struct ToolPageProps {
    pub slug: String,
}

#[function_component(ToolPage)]
pub fn tool_page(props: &ToolPageProps) -> Html {
    let tool = use_state(|| None::<Tool>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let cms = config::cms();

    {
        let tool = tool.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |slug: &String| {
                let slug = slug.clone();
                let current = Rc::new(Cell::new(true));
                loading.set(true);
                error.set(None);
                {
                    let current = current.clone();
                    spawn_local(async move {
                        let result = CmsClient::new(cms).get_tool_by_slug(&slug).await;
                        if !current.get() {
                            return;
                        }
                        match result {
                            Ok(found) => tool.set(found),
                            Err(e) => {
                                error!("Failed to load tool {}: {}", slug, e);
                                error.set(Some("Failed to load tool".to_string()));
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
        html! { <div class="tool-message">{ message }</div> }
    } else if let Some(tool) = (*tool).as_ref() {
        html! {
            <div class="tool-detail">
                <h1>{ &tool.name }</h1>
                <img
                    src={image_src(&cms, tool.image.as_ref(), Some(TOOL_IMAGE), DEFAULT_TOOL_IMAGE)}
                    alt={tool.name.clone()}
                />
                <div class="tool-detail-text">
                    <PortableText blocks={tool.brief_description.clone()} />
                </div>
                if let Some(url) = &tool.button_url {
                    <a class="tool-detail-button" href={url.clone()} target="_blank" rel="noopener noreferrer">
                        { tool.button_label() }
                    </a>
                }
            </div>
        }
    } else {
        html! { <div class="tool-message">{"Tool not found"}</div> }
    };

    html! {
        <div class="tool-page">
            <Link<Route> to={Route::Tools} classes="back-link">{"‹ Back to Tools"}</Link<Route>>
            { body }
            <style>
                {r#"
                .tool-page {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 6rem 1rem 4rem;
                }
                .back-link {
                    color: #16a34a;
                    text-decoration: none;
                    font-weight: 600;
                }
                .tool-detail h1 {
                    font-size: 2.5rem;
                    font-weight: bold;
                    color: #1f2937;
                    margin: 1.5rem 0;
                }
                .tool-detail img {
                    width: 100%;
                    border-radius: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .tool-detail-text {
                    line-height: 1.75;
                    color: #374151;
                    margin-bottom: 2rem;
                }
                .tool-detail-button {
                    display: inline-block;
                    background: #16a34a;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-weight: 600;
                }
                .tool-message {
                    text-align: center;
                    padding: 4rem 0;
                    font-size: 1.25rem;
                    color: #4b5563;
                }
                "#}
            </style>
        </div>
    }
}

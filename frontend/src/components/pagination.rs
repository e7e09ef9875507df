use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

/// Page buttons under a paginated list. Only in-range pages are offered.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let PaginationProps { current_page, total_pages, on_page_change } = props;
    let (current_page, total_pages) = (*current_page, *total_pages);

    if total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: usize| {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(page);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="pagination-step"
                disabled={current_page <= 1}
                onclick={go_to(current_page.saturating_sub(1).max(1))}
            >
                {"Previous"}
            </button>
            {
                for (1..=total_pages).map(|page| html! {
                    <button
                        key={page}
                        class={classes!("pagination-page", (page == current_page).then(|| "active"))}
                        onclick={go_to(page)}
                    >
                        { page }
                    </button>
                })
            }
            <button
                class="pagination-step"
                disabled={current_page >= total_pages}
                onclick={go_to((current_page + 1).min(total_pages))}
            >
                {"Next"}
            </button>
        </nav>
    }
}

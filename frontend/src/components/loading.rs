use yew::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">
            <div class="loading-spinner"></div>
            <style>
                {r#"
                .loading {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    padding: 3rem 0;
                }
                .loading-spinner {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border-top: 2px solid #22c55e;
                    border-bottom: 2px solid #22c55e;
                    border-left: 2px solid transparent;
                    border-right: 2px solid transparent;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}

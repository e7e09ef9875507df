use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::donate_modal::DonateModal;
use crate::Route;

struct Pillar {
    title: &'static str,
    text: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Community Health",
        text: "Outreach clinics and screenings that bring care to underserved communities.",
    },
    Pillar {
        title: "Health Education",
        text: "Workshops and campaigns that help families make informed health decisions.",
    },
    Pillar {
        title: "Tools for Health Workers",
        text: "Free digital resources that make frontline work simpler and safer.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let donate_open = use_state(|| false);

    let open_donate = {
        let donate_open = donate_open.clone();
        Callback::from(move |_: MouseEvent| donate_open.set(true))
    };
    let close_donate = {
        let donate_open = donate_open.clone();
        Callback::from(move |_: ()| donate_open.set(false))
    };

    html! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero-content">
                    <h1>{"Healthcare within reach for every community"}</h1>
                    <p>
                        {"Famkris Healthcare Initiative works alongside communities to improve access to care, education and practical health tools."}
                    </p>
                    <div class="home-actions">
                        <button class="home-donate" onclick={open_donate}>{"Donate"}</button>
                        <Link<Route> to={Route::Media} classes="home-link">{"See our work"}</Link<Route>>
                        <Link<Route> to={Route::Tools} classes="home-link">{"Explore tools"}</Link<Route>>
                    </div>
                </div>
            </section>

            <section class="home-pillars">
                {
                    for PILLARS.iter().map(|pillar| html! {
                        <div class="home-pillar" key={pillar.title}>
                            <h3>{ pillar.title }</h3>
                            <p>{ pillar.text }</p>
                        </div>
                    })
                }
            </section>

            <DonateModal is_open={*donate_open} on_close={close_donate} />
            <style>
                {r#"
                .home-hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #14532d 0%, #16a34a 100%);
                    color: #fff;
                    text-align: center;
                    padding: 6rem 1rem 4rem;
                }
                .home-hero-content {
                    max-width: 48rem;
                }
                .home-hero h1 {
                    font-size: 3rem;
                    font-weight: bold;
                    line-height: 1.2;
                }
                .home-hero p {
                    font-size: 1.25rem;
                    margin: 1.5rem 0 2.5rem;
                    opacity: 0.9;
                }
                .home-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .home-donate, .home-link {
                    padding: 0.85rem 1.75rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    text-decoration: none;
                    cursor: pointer;
                }
                .home-donate {
                    background: #fff;
                    color: #15803d;
                    border: none;
                }
                .home-link {
                    border: 2px solid #fff;
                    color: #fff;
                }
                .home-pillars {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                }
                .home-pillar {
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                }
                .home-pillar h3 {
                    font-size: 1.25rem;
                    font-weight: bold;
                    color: #15803d;
                    margin-bottom: 0.75rem;
                }
                .home-pillar p {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .home-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="back-link">{"Back to home"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: #374151;
                }
                .not-found h1 {
                    font-size: 4rem;
                    font-weight: bold;
                    color: #16a34a;
                }
                "#}
            </style>
        </div>
    }
}

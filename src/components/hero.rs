use yew::prelude::*;

use crate::content::{Icon, HERO_SUBTITLE, HERO_TITLE};
use crate::state::view::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub icon: Icon,
    /// Target of "Join Our Mission".
    pub primary: Section,
    /// Target of "Learn More".
    pub secondary: Section,
    pub on_cta: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let cta = |section: Section| {
        let on_cta = props.on_cta.clone();
        Callback::from(move |_: MouseEvent| on_cta.emit(section))
    };

    html! {
        <section class="hero" id={Section::Home.id()}>
            <style>
                {r#"
                .hero {
                    padding: 8rem 1rem 5rem;
                    text-align: center;
                }
                .hero-icon {
                    font-size: 6rem;
                    color: #2563eb;
                    margin-bottom: 2rem;
                    animation: pulse 2s ease-in-out infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(90deg, #2563eb, #9333ea, #db2777);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero .subtitle {
                    font-size: 1.5rem;
                    color: #374151;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .cta-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .btn {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    border: none;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }
                .btn-primary {
                    background: #2563eb;
                    color: #ffffff;
                }
                .btn-primary:hover {
                    background: #1d4ed8;
                }
                .btn-secondary {
                    background: #ffffff;
                    color: #2563eb;
                }
                .btn-secondary:hover {
                    background: #f9fafb;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }
                    .hero .subtitle {
                        font-size: 1.2rem;
                    }
                }
                "#}
            </style>
            <div class="hero-icon">{props.icon.glyph()}</div>
            <h1>{HERO_TITLE}</h1>
            <p class="subtitle">{HERO_SUBTITLE}</p>
            <div class="cta-buttons">
                <button class="btn btn-primary" onclick={cta(props.primary)}>
                    {"Join Our Mission"}
                </button>
                <button class="btn btn-secondary" onclick={cta(props.secondary)}>
                    {"Learn More"}
                </button>
            </div>
        </section>
    }
}

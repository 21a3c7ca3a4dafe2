use yew::prelude::*;

use crate::content::{Card, MISSIONS, PRINCIPLES};
use crate::state::view::Section;

fn card(card: &Card, class: &'static str) -> Html {
    html! {
        <div class={class} key={card.title}>
            <div class="card-icon">{card.icon.glyph()}</div>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
        </div>
    }
}

const CARD_STYLE: &str = r#"
.section {
    padding: 5rem 1rem;
}
.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 3rem;
    color: #1f2937;
}
.mission-grid,
.principles-grid {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    gap: 2rem;
}
.mission-grid {
    grid-template-columns: repeat(2, 1fr);
}
.principles-grid {
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}
.principles {
    background: linear-gradient(135deg, #dbeafe, #f3e8ff);
}
.mission-card,
.principle-card {
    background: #ffffff;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    transition: box-shadow 0.3s ease;
}
.principle-card {
    padding: 1.5rem;
    border-radius: 0.75rem;
}
.principle-card:hover {
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.card-icon {
    font-size: 3rem;
    margin-bottom: 1rem;
}
.mission-card h3 {
    font-size: 1.5rem;
    margin-bottom: 1rem;
}
.mission-card p {
    color: #374151;
    line-height: 1.7;
}
.principle-card p {
    color: #4b5563;
}
@media (max-width: 768px) {
    .mission-grid,
    .principles-grid {
        grid-template-columns: 1fr;
    }
}
"#;

#[function_component(MissionSection)]
pub fn mission_section() -> Html {
    html! {
        <section class="section mission" id={Section::Mission.id()}>
            <style>{CARD_STYLE}</style>
            <h2 class="section-title">{"Our Mission"}</h2>
            <div class="mission-grid">
                { for MISSIONS.iter().map(|m| card(m, "mission-card")) }
            </div>
        </section>
    }
}

#[function_component(PrinciplesSection)]
pub fn principles_section() -> Html {
    html! {
        <section class="section principles" id={Section::Principles.id()}>
            <style>{CARD_STYLE}</style>
            <h2 class="section-title">{"Principles of Peace"}</h2>
            <div class="principles-grid">
                { for PRINCIPLES.iter().map(|p| card(p, "principle-card")) }
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::content::STATS;

#[function_component(Statistics)]
pub fn statistics() -> Html {
    html! {
        <section class="stats">
            <style>
                {r#"
                .stats {
                    padding: 4rem 1rem;
                    background: #ffffff;
                }
                .stats-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .stat-item {
                    text-align: center;
                }
                .stat-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .stat-number {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #2563eb;
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
            <div class="stats-grid">
                {
                    for STATS.iter().map(|stat| html! {
                        <div class="stat-item" key={stat.label}>
                            <div class="stat-icon">{stat.icon.glyph()}</div>
                            <div class="stat-number">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

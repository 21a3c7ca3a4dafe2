use yew::prelude::*;

use crate::content::RESOURCES;
use crate::state::view::Section;

#[function_component(EducationSection)]
pub fn education_section() -> Html {
    html! {
        <section class="section education" id={Section::Education.id()}>
            <style>
                {r#"
                .resources-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .resource-card {
                    background: #ffffff;
                    border-radius: 0.75rem;
                    border-top: 4px solid #2563eb;
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .resource-tag {
                    background: #dbeafe;
                    color: #2563eb;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .resource-card h3 {
                    font-size: 1.25rem;
                    margin: 1rem 0 0.75rem;
                }
                .resource-card p {
                    color: #4b5563;
                }
                .resource-more {
                    margin-top: 1rem;
                    background: none;
                    border: none;
                    color: #2563eb;
                    font-weight: 600;
                    cursor: pointer;
                }
                .resource-more:hover {
                    text-decoration: underline;
                }
                @media (max-width: 1024px) {
                    .resources-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .resources-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <h2 class="section-title">{"Peace Education Resources"}</h2>
            <div class="resources-grid">
                {
                    for RESOURCES.iter().map(|resource| html! {
                        <div class="resource-card" key={resource.title}>
                            <span class="resource-tag">{resource.tag}</span>
                            <h3>{resource.title}</h3>
                            <p>{resource.content}</p>
                            <button class="resource-more">{"Learn More →"}</button>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::content::ACTIONS;
use crate::state::view::Section;

#[function_component(ActionSection)]
pub fn action_section() -> Html {
    html! {
        <section class="section action" id={Section::Action.id()}>
            <style>
                {r#"
                .action {
                    background: linear-gradient(135deg, #f3e8ff, #fce7f3);
                }
                .action-list {
                    max-width: 1024px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .action-item {
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 2rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .action-item h3 {
                    font-size: 1.5rem;
                    color: #2563eb;
                    margin-bottom: 0.75rem;
                }
                .action-item p {
                    color: #374151;
                    margin-bottom: 1rem;
                }
                .action-steps {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .step-tag {
                    background: #eff6ff;
                    color: #2563eb;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                }
                "#}
            </style>
            <h2 class="section-title">{"Take Action for Peace"}</h2>
            <div class="action-list">
                {
                    for ACTIONS.iter().map(|item| html! {
                        <div class="action-item" key={item.title}>
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                            <div class="action-steps">
                                {
                                    for item.steps.iter().map(|step| html! {
                                        <span class="step-tag" key={*step}>{*step}</span>
                                    })
                                }
                            </div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::config::SITE_NAME;
use crate::content::{
    Icon, COPYRIGHT, FOOTER_LINKS, FOOTER_QUOTE, FOOTER_QUOTE_AUTHOR, FOOTER_TAGLINE,
};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub icon: Icon,
    /// Render links as `#anchor` hrefs instead of inert buttons.
    #[prop_or_default]
    pub anchors: bool,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let link = |label: &'static str| {
        if props.anchors {
            html! {
                <a key={label} class="footer-link" href={format!("#{}", label.to_lowercase())}>
                    {label}
                </a>
            }
        } else {
            html! { <button key={label} class="footer-link">{label}</button> }
        }
    };

    html! {
        <footer class="footer">
            <style>
                {r#"
                .footer {
                    background: #111827;
                    color: #ffffff;
                    padding: 3rem 1rem;
                    text-align: center;
                }
                .footer-icon {
                    font-size: 4rem;
                    margin-bottom: 1rem;
                }
                .footer h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .footer p,
                .footer-quote {
                    color: #9ca3af;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    margin: 2rem 0;
                }
                .footer-link {
                    background: none;
                    border: none;
                    font: inherit;
                    color: #9ca3af;
                    text-decoration: none;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .footer-link:hover {
                    color: #ffffff;
                }
                .footer-bottom {
                    border-top: 1px solid #1f2937;
                    padding-top: 2rem;
                }
                .footer-quote {
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
            <div class="footer-icon">{props.icon.glyph()}</div>
            <h3>{SITE_NAME}</h3>
            <p>{FOOTER_TAGLINE}</p>
            <div class="footer-links">
                { for FOOTER_LINKS.into_iter().map(link) }
            </div>
            <div class="footer-bottom">
                <p class="footer-quote">
                    {format!("\"{}\" - {}", FOOTER_QUOTE, FOOTER_QUOTE_AUTHOR)}
                </p>
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}

//! Presentation components rendered to HTML strings.
//!
//! Each section is a pure function of its config record, built with `maud`
//! so every interpolated value is escaped. Behavior wiring finds nodes again
//! through the ids and classes declared below.

use crate::core::config::{
    CollectionsConfig, FooterConfig, HeroConfig, SocialIcon, WelcomeConfig,
};
use crate::core::links::{mailto_link, tel_link};
use maud::{html, Markup, PreEscaped};

pub const GREEN: &str = "#1F4D3A";
pub const CREAM: &str = "#F5F5F3";
pub const GOLD: &str = "#C9A962";

// Ids and classes shared with the behavior layer.
pub const MAIN_ID: &str = "app";
pub const LOADER_CLASS: &str = "loader-container";
pub const LOADER_BAR_ID: &str = "loader-bar";
pub const LOADER_PERCENT_ID: &str = "loader-percent";
pub const NAV_ID: &str = "site-nav";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const HERO_ID: &str = "hero";
pub const HERO_BG_CLASS: &str = "hero-bg";
pub const HERO_CONTENT_CLASS: &str = "hero-content";
pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_SUBTITLE_ID: &str = "hero-subtitle";
pub const HERO_DESC_ID: &str = "hero-desc";
pub const WELCOME_ID: &str = "welcome";
pub const WELCOME_TITLE_ID: &str = "welcome-title";
pub const WELCOME_SUBTITLE_ID: &str = "welcome-subtitle";
pub const WELCOME_DIVIDER_ID: &str = "welcome-divider";
pub const WELCOME_DESC_ID: &str = "welcome-desc";
pub const FEATURE_CLASS: &str = "feature-item";
pub const COLLECTIONS_ID: &str = "collections";
pub const COLLECTIONS_TITLE_ID: &str = "collections-title";
pub const COLLECTIONS_DESC_ID: &str = "collections-desc";
/// Reveal target; its inline `opacity`/`transform` belong to the reveal group.
pub const CARD_CLASS: &str = "collection-card";
/// Inner layer of a card that receives the pointer tilt.
pub const CARD_TILT_CLASS: &str = "card-tilt";
pub const CARD_OVERLAY_CLASS: &str = "card-overlay";
pub const FOOTER_ID: &str = "footer";
pub const FOOTER_ANIMATE_CLASS: &str = "footer-animate";
pub const NEWSLETTER_FORM_ID: &str = "newsletter-form";
pub const NEWSLETTER_INPUT_ID: &str = "newsletter-email";
pub const WHATSAPP_BTN_ID: &str = "whatsapp-btn";
pub const SCROLL_TOP_BTN_ID: &str = "scroll-top-btn";

pub fn loader(brand: &str) -> String {
    let markup = html! {
        div class=(LOADER_CLASS) style=(format!("position:fixed; inset:0; z-index:100; display:flex; flex-direction:column; align-items:center; justify-content:center; background-color:{GREEN};")) {
            svg class="loader-ring" width="80" height="80" viewBox="0 0 80 80" fill="none" {
                circle cx="40" cy="40" r="36" stroke=(CREAM) stroke-width="2" stroke-linecap="round" stroke-dasharray="169.65" stroke-dashoffset="42.41" {}
            }
            h1 class="font-display" style=(format!("color:{CREAM}; letter-spacing:0.3em; margin:2rem 0 1.5rem;")) { (brand) }
            div style="width:12rem; height:2px; border-radius:9999px; overflow:hidden; background-color:rgba(245,245,243,0.2);" {
                div id=(LOADER_BAR_ID) style=(format!("height:100%; width:0%; background-color:{CREAM}; transition:width 300ms ease-out;")) {}
            }
            p id=(LOADER_PERCENT_ID) class="font-body" style="color:rgba(245,245,243,0.6); font-size:0.75rem; letter-spacing:0.1em; margin-top:1rem;" { "0%" }
        }
    };
    markup.into_string()
}

fn hero_markup(cfg: &HeroConfig) -> Markup {
    html! {
        section id=(HERO_ID) style="position:relative; width:100%; height:100vh; overflow:hidden;" {
            div class=(HERO_BG_CLASS) style="position:absolute; inset:0; height:120%;" {
                img src=(cfg.background_image) alt=(cfg.brand_name) style="width:100%; height:100%; object-fit:cover;";
                div class="hero-overlay" {}
            }
            nav id=(NAV_ID) class="nav-transparent" {
                div class=(format!("brand {NAV_LINK_CLASS}")) data-section=(HERO_ID) { (cfg.brand_name) }
                div class="nav-links" {
                    @for item in cfg.nav_items {
                        button class=(NAV_LINK_CLASS) data-section=(item.section_id) { (item.label) }
                    }
                }
                button id=(MENU_TOGGLE_ID) aria-label="Menu" aria-expanded="false" { "☰" }
            }
            div id=(MOBILE_MENU_ID) class="mobile-menu" hidden {
                @for (i, item) in cfg.nav_items.iter().enumerate() {
                    button class=(NAV_LINK_CLASS) data-section=(item.section_id) style=(format!("animation-delay:{:.1}s;", i as f32 * 0.1)) { (item.label) }
                }
            }
            div class=(HERO_CONTENT_CLASS) {
                p id=(HERO_SUBTITLE_ID) style="opacity:0;" { (cfg.subtitle) }
                h1 id=(HERO_TITLE_ID) class="font-display" { (cfg.main_title) }
                p id=(HERO_DESC_ID) style="opacity:0;" { (cfg.description) }
            }
            button class=(format!("{NAV_LINK_CLASS} scroll-hint")) data-section=(WELCOME_ID) { (cfg.scroll_hint) }
        }
    }
}

pub fn hero(cfg: &HeroConfig) -> String {
    hero_markup(cfg).into_string()
}

fn welcome_markup(cfg: &WelcomeConfig) -> Markup {
    html! {
        section id=(WELCOME_ID) class="section-padding" style=(format!("background-color:{CREAM};")) {
            div class="container-luxury" {
                p class="section-label" style=(format!("color:{GOLD};")) { (cfg.section_label) }
                h2 id=(WELCOME_TITLE_ID) class="font-display" style=(format!("opacity:0; color:{GREEN};")) { (cfg.title) }
                p id=(WELCOME_SUBTITLE_ID) style="opacity:0;" { (cfg.subtitle) }
                div id=(WELCOME_DIVIDER_ID) style=(format!("height:1px; width:0; margin:0 auto 2rem; background-color:{GOLD};")) {}
                p id=(WELCOME_DESC_ID) style="opacity:0;" { (cfg.description) }
                div class="features" {
                    @for f in cfg.features {
                        div class=(FEATURE_CLASS) style="opacity:0;" {
                            div class="icon-container" style=(format!("border:1px solid {GOLD};")) {}
                            h3 class="font-display" { (f.title) }
                            p { (f.description) }
                        }
                    }
                }
            }
        }
    }
}

pub fn welcome(cfg: &WelcomeConfig) -> String {
    welcome_markup(cfg).into_string()
}

fn collections_markup(cfg: &CollectionsConfig) -> Markup {
    html! {
        section id=(COLLECTIONS_ID) class="section-padding" style=(format!("background-color:{CREAM};")) {
            div class="container-luxury" {
                p class="section-label" style=(format!("color:{GOLD};")) { (cfg.section_label) }
                h2 id=(COLLECTIONS_TITLE_ID) class="font-display" style=(format!("opacity:0; color:{GREEN};")) { (cfg.title) }
                p id=(COLLECTIONS_DESC_ID) style="opacity:0;" { (cfg.description) }
                div class="collections-grid" style="perspective:1000px;" {
                    @for c in cfg.collections {
                        div class=(CARD_CLASS) data-card-id=(c.id) style="opacity:0;" {
                            div class=(CARD_TILT_CLASS) style="transform-style:preserve-3d;" {
                                div class="card-image" {
                                    img src=(c.image) alt=(c.title) loading="lazy";
                                    div class=(CARD_OVERLAY_CLASS) style="opacity:0.5; transition:opacity 500ms;" {}
                                }
                                h3 class="font-display" { (c.title) }
                                p { (c.description) }
                                button class="card-button" { (c.button_text) " →" }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn collections(cfg: &CollectionsConfig) -> String {
    collections_markup(cfg).into_string()
}

// Static icon paths, never built from config text.
fn social_icon(icon: SocialIcon) -> PreEscaped<&'static str> {
    PreEscaped(match icon {
        SocialIcon::Instagram => {
            r#"<rect x="2" y="2" width="20" height="20" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/>"#
        }
        SocialIcon::Facebook => {
            r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#
        }
        SocialIcon::Pinterest => {
            r#"<line x1="12" y1="8" x2="12" y2="21"/><path d="M5 12H2a10 10 0 0 0 20 0h-3"/>"#
        }
    })
}

fn footer_markup(cfg: &FooterConfig) -> Markup {
    let nl = &cfg.newsletter;
    html! {
        footer id=(FOOTER_ID) class="section-padding" style=(format!("background-color:{GREEN}; color:{CREAM};")) {
            div class="container-luxury" {
                div class="footer-grid" {
                    div class=(FOOTER_ANIMATE_CLASS) style="opacity:0;" {
                        h3 class="font-display" { (cfg.brand_name) }
                        p { (cfg.brand_description) }
                        div class="social" {
                            @for link in cfg.social_links {
                                a href=(link.href) aria-label=(link.label) target="_blank" rel="noopener" {
                                    svg viewBox="0 0 24 24" width="18" height="18" stroke=(CREAM) stroke-width="2" fill="none" {
                                        (social_icon(link.icon))
                                    }
                                }
                            }
                        }
                    }
                    div class=(FOOTER_ANIMATE_CLASS) style="opacity:0;" {
                        h4 class="font-display" { "Liens Rapides" }
                        ul {
                            @for q in cfg.quick_links {
                                li { a href="#" { (q) } }
                            }
                        }
                    }
                    div class=(FOOTER_ANIMATE_CLASS) style="opacity:0;" {
                        h4 class="font-display" { "Contact" }
                        p { a href=(mailto_link(cfg.contact.email)) { (cfg.contact.email) } }
                        p { a href=(tel_link(cfg.contact.phone)) { (cfg.contact.phone) } }
                        p { (cfg.contact.address) }
                    }
                    div class=(FOOTER_ANIMATE_CLASS) style="opacity:0;" {
                        h4 class="font-display" { (nl.title) }
                        p { (nl.description) }
                        form id=(NEWSLETTER_FORM_ID) {
                            input id=(NEWSLETTER_INPUT_ID) type="email" placeholder=(nl.placeholder);
                            button type="submit" aria-label=(nl.button_text) { "➤" }
                        }
                    }
                }
                div class=(FOOTER_ANIMATE_CLASS) style="opacity:0; height:1px; background-color:rgba(245,245,243,0.1);" {}
                div class=(FOOTER_ANIMATE_CLASS) style="opacity:0;" {
                    p { (cfg.copyright) }
                    a href="#" { "Politique de confidentialité" }
                    " "
                    a href="#" { "Conditions d'utilisation" }
                }
            }
        }
    }
}

pub fn footer(cfg: &FooterConfig) -> String {
    footer_markup(cfg).into_string()
}

fn floating_buttons_markup() -> Markup {
    html! {
        button id=(WHATSAPP_BTN_ID) class="whatsapp-btn" aria-label="Contact WhatsApp" style="position:fixed; bottom:1.5rem; right:1.5rem; z-index:50; background-color:#25D366;" { "✆" }
        button id=(SCROLL_TOP_BTN_ID) class="scroll-top-btn" aria-label="Retour en haut" hidden style=(format!("position:fixed; bottom:6rem; right:1.5rem; z-index:50; background-color:{GREEN}; color:{CREAM};")) { "↑" }
    }
}

pub fn floating_buttons() -> String {
    floating_buttons_markup().into_string()
}

/// The main content, sections in page order.
pub fn page(
    hero_cfg: &HeroConfig,
    welcome_cfg: &WelcomeConfig,
    collections_cfg: &CollectionsConfig,
    footer_cfg: &FooterConfig,
) -> String {
    let markup = html! {
        (hero_markup(hero_cfg))
        (welcome_markup(welcome_cfg))
        (collections_markup(collections_cfg))
        (footer_markup(footer_cfg))
        (floating_buttons_markup())
    };
    markup.into_string()
}

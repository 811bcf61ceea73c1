// Page content, links and small interaction state machines.

use amerey_web::core::config::{HeroConfig, COLLECTIONS, FOOTER, HERO, SITE, WELCOME};
use amerey_web::core::decode::TitleDecoder;
use amerey_web::core::links::{mailto_link, tel_link, whatsapp_link};
use amerey_web::core::markup::{
    self, CARD_CLASS, CARD_TILT_CLASS, FOOTER_ANIMATE_CLASS, NAV_LINK_CLASS, SCROLL_TOP_BTN_ID,
};
use amerey_web::core::nav::NavMenu;
use amerey_web::core::newsletter::{Newsletter, SubmitOutcome};
use amerey_web::core::page::PageState;
use amerey_web::core::tilt::{tilt_for_pointer, CardHover, Tilt};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn empty_newsletter_submit_is_ignored() {
    let mut form = Newsletter::default();
    assert_eq!(form.submit(), SubmitOutcome::Ignored);
}

#[test]
fn newsletter_submit_clears_the_field() {
    let mut form = Newsletter::default();
    form.set_email("a@b.com");
    assert_eq!(
        form.submit(),
        SubmitOutcome::Subscribed {
            email: "a@b.com".to_string()
        }
    );
    assert_eq!(form.email(), "");
    assert_eq!(form.submit(), SubmitOutcome::Ignored);
}

#[test]
fn whatsapp_link_encodes_message() {
    let link = whatsapp_link(FOOTER.whatsapp_number, FOOTER.whatsapp_message);
    assert!(link.starts_with("https://wa.me/+2290166393459?text=Bonjour%2C%20je"));
    assert!(!link.contains(' '));
}

#[test]
fn contact_links() {
    assert_eq!(mailto_link("x@y.fr"), "mailto:x@y.fr");
    assert_eq!(tel_link("+229 01 66 39 34 59"), "tel:+2290166393459");
}

#[test]
fn markup_escapes_config_text() {
    let cfg = HeroConfig {
        main_title: r#"<script>alert("x")</script> & co"#,
        brand_name: r#"A"B"#,
        ..HERO
    };
    let html = markup::hero(&cfg);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co"));
    // Attribute values are escaped too.
    assert!(html.contains(r#"alt="A&quot;B""#));
}

#[test]
fn brand_scrolls_to_hero() {
    let html = markup::hero(&HERO);
    let brand = format!(r#"class="brand {}" data-section="hero""#, NAV_LINK_CLASS);
    assert!(html.contains(&brand), "{}", html);
}

#[test]
fn cards_carry_a_separate_tilt_layer() {
    let html = markup::collections(&COLLECTIONS);
    let layers = html
        .matches(&format!(r#"class="{}""#, CARD_TILT_CLASS))
        .count();
    assert_eq!(layers, COLLECTIONS.collections.len());
    // The reveal target itself carries no transform of its own.
    assert!(html.contains(&format!(r#"class="{}" data-card-id="1" style="opacity:0;""#, CARD_CLASS)));
}

#[test]
fn page_renders_every_section() {
    let html = markup::page(&HERO, &WELCOME, &COLLECTIONS, &FOOTER);
    for id in ["hero", "welcome", "collections", "footer"] {
        assert!(html.contains(&format!(r#"id="{}""#, id)), "missing #{}", id);
    }
    let cards = html.matches(&format!(r#"class="{}""#, CARD_CLASS)).count();
    assert_eq!(cards, COLLECTIONS.collections.len());
    let blocks = html
        .matches(&format!(r#"class="{}""#, FOOTER_ANIMATE_CLASS))
        .count();
    assert_eq!(blocks, 6);
    assert!(html.contains(&format!(r#"id="{}""#, SCROLL_TOP_BTN_ID)));
}

#[test]
fn site_title_is_the_brand() {
    assert!(SITE.title.starts_with(HERO.brand_name));
    assert_eq!(SITE.language, "fr");
}

#[test]
fn title_decode_converges() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut decoder = TitleDecoder::new(HERO.main_title);
    let mut frames = 0;
    let text = loop {
        let (text, last) = decoder.frame(&mut rng);
        frames += 1;
        assert!(frames < 100, "decode did not finish");
        if last {
            break text;
        }
    };
    assert_eq!(text, "AMEREY SHOP");
    // Half a character per frame over 11 characters, plus the final frame.
    assert_eq!(frames, 23);
    assert!(decoder.is_finished());
}

#[test]
fn tilt_follows_pointer() {
    let origin = Vec2::new(100.0, 200.0);
    let size = Vec2::new(400.0, 600.0);

    let centre = tilt_for_pointer(Vec2::new(300.0, 500.0), origin, size);
    assert_eq!(centre, Tilt::FLAT);

    // Top-left corner: lean back and to the left.
    let corner = tilt_for_pointer(origin, origin, size);
    assert_eq!(corner.rotate_x, -15.0);
    assert_eq!(corner.rotate_y, 10.0);
    assert_eq!(
        corner.transform(),
        "perspective(1000px) rotateX(-15deg) rotateY(10deg)"
    );
}

#[test]
fn hover_overlay_highlights_one_card() {
    let mut hover = CardHover::default();
    assert_eq!(hover.overlay_opacity(1), 0.5);

    assert_eq!(hover.enter(2), Some(None));
    assert_eq!(hover.enter(2), None);
    assert_eq!(hover.overlay_opacity(2), 1.0);
    assert_eq!(hover.overlay_opacity(3), 0.5);

    assert_eq!(hover.enter(3), Some(Some(2)));
    assert_eq!(hover.leave(), Some(3));
    assert_eq!(hover.hovered(), None);
}

#[test]
fn menu_toggles_and_closes_on_navigation() {
    let mut menu = NavMenu::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    let mut visited = None;
    assert!(menu.select("collections", |id| {
        visited = Some(id.to_string());
        true
    }));
    assert_eq!(visited.as_deref(), Some("collections"));
    assert!(!menu.is_open());
}

#[test]
fn main_content_fades_in_once() {
    let mut page = PageState::default();
    assert!(page.is_loading());
    assert!(page.main_style().starts_with("opacity: 0;"));
    assert!(page.finish_loading());
    assert!(!page.finish_loading());
    assert_eq!(page.main_style(), "opacity: 1; transition: opacity 500ms ease;");
}

//! Compiled-in site content.
//!
//! Every record is `'static` and read-only; presentation code borrows these
//! directly. Nothing here is mutated after start-up.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub language: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroConfig {
    pub background_image: &'static str,
    pub brand_name: &'static str,
    pub main_title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub scroll_hint: &'static str,
    pub nav_items: &'static [NavItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeConfig {
    pub section_label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [Feature],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub button_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionsConfig {
    pub section_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub collections: &'static [Collection],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

/// Icon names understood by the footer markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Instagram,
    Facebook,
    Pinterest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub placeholder: &'static str,
    pub confirmation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterConfig {
    pub brand_name: &'static str,
    pub brand_description: &'static str,
    pub contact: Contact,
    pub social_links: &'static [SocialLink],
    pub quick_links: &'static [&'static str],
    pub newsletter: NewsletterConfig,
    pub copyright: &'static str,
    pub whatsapp_number: &'static str,
    pub whatsapp_message: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    title: "AMEREY SHOP | Mode Prêt-à-Porter de Luxe",
    description: "Votre destination pour une mode prêt-à-porter élégante. Shopping et vente au détail de vêtements homme et femme.",
    language: "fr",
};

pub const HERO: HeroConfig = HeroConfig {
    background_image: "/hero-bg.jpg",
    brand_name: "AMEREY SHOP",
    main_title: "AMEREY SHOP",
    subtitle: "Shopping et vente au détail",
    description: "Prêt-à-porter homme & femme",
    scroll_hint: "Découvrir",
    nav_items: &[
        NavItem { label: "Accueil", section_id: "hero" },
        NavItem { label: "Bienvenue", section_id: "welcome" },
        NavItem { label: "Collections", section_id: "collections" },
        NavItem { label: "Contact", section_id: "footer" },
    ],
};

pub const WELCOME: WelcomeConfig = WelcomeConfig {
    section_label: "Bienvenue",
    title: "Bienvenue à AMEREY SHOP",
    subtitle: "Votre destination pour une mode prêt à porter élégante",
    description: "Dans un univers où le luxe rencontre l'accessibilité, AMEREY SHOP vous invite à découvrir une sélection curée de pièces prêt-à-porter pour homme et femme. Chaque vêtement est choisi avec soin pour son excellence, son style intemporel et son artisanat d'exception. Notre passion pour la mode se traduit par une expérience shopping unique, alliant conseil personnalisé et collections soigneusement sélectionnées.",
    features: &[
        Feature {
            title: "Qualité Premium",
            description: "Des matériaux nobles et une finition impeccable",
        },
        Feature {
            title: "Style Intemporel",
            description: "Des pièces qui traversent les saisons avec élégance",
        },
        Feature {
            title: "Service Personnalisé",
            description: "Un accompagnement sur-mesure pour chaque client",
        },
    ],
};

pub const COLLECTIONS: CollectionsConfig = CollectionsConfig {
    section_label: "Nos Services",
    title: "Nos Collections",
    description: "Découvrez nos services exclusifs conçus pour sublimer votre style et répondre à toutes vos envies mode.",
    collections: &[
        Collection {
            id: 1,
            title: "Style Consultation",
            description: "Bénéficiez de l'expertise de nos stylistes pour révéler votre personnalité à travers votre garde-robe. Une session personnalisée pour définir votre style unique.",
            image: "/collection-1.jpg",
            button_text: "Réserver",
        },
        Collection {
            id: 2,
            title: "Custom Outfit Design",
            description: "Créez des tenues sur-mesure qui vous ressemblent. De la sélection des tissus à la coupe finale, nous donnons vie à vos aspirations mode.",
            image: "/collection-2.jpg",
            button_text: "Réserver",
        },
        Collection {
            id: 3,
            title: "Custom Outfit Design",
            description: "Exprimez votre unicité grâce à nos conseils mode sur-mesure. Nos experts vous accompagnent pour créer des looks qui reflètent parfaitement votre personnalité et votre élégance naturelle.",
            image: "/collection-3.jpg",
            button_text: "Réserver",
        },
        Collection {
            id: 4,
            title: "Custom Outfit Design",
            description: "Transformez votre garde-robe en véritable signature de style. Nos stylistes vous guident dans le choix de pièces qui allient tendance, confort et sophistication.",
            image: "/collection-4.jpg",
            button_text: "Réserver",
        },
        Collection {
            id: 5,
            title: "Custom Outfit Design",
            description: "Vivez une expérience mode exclusive et raffinée. Nos services sur-mesure vous permettent de composer des ensembles qui vous ressemblent et qui font forte impression.",
            image: "/collection-5.jpg",
            button_text: "Réserver",
        },
        Collection {
            id: 6,
            title: "Custom Outfit Design",
            description: "Sublimez votre allure avec nos conseils personnalisés. Nos stylistes vous accompagnent pas à pas pour composer une garde-robe qui reflète votre personnalité et votre élégance, à chaque occasion.",
            image: "/collection-6.jpg",
            button_text: "Réserver",
        },
    ],
};

pub const FOOTER: FooterConfig = FooterConfig {
    brand_name: "AMEREY SHOP",
    brand_description: "Votre destination privilégiée pour une mode prêt-à-porter élégante et intemporelle. Qualité, style et service personnalisé depuis 2015.",
    contact: Contact {
        email: "amereyshop@gmail.com",
        phone: "+229 01 66 39 34 59",
        address: "Cadjehoun, face au supermaché Mont Sinai",
    },
    social_links: &[SocialLink {
        icon: SocialIcon::Instagram,
        label: "Instagram",
        href: "https://www.instagram.com/amerey_shop/",
    }],
    quick_links: &["Nouveautés", "Collections", "Lookbook", "À propos", "Contact"],
    newsletter: NewsletterConfig {
        title: "Newsletter",
        description: "Inscrivez-vous pour recevoir nos dernières nouveautés et offres exclusives.",
        button_text: "S'inscrire",
        placeholder: "Votre email",
        confirmation: "Merci de votre inscription !",
    },
    copyright: "© 2026 AMEREY SHOP. Tous droits réservés.",
    whatsapp_number: "+2290166393459",
    whatsapp_message: "Bonjour, je souhaite avoir des informations sur vos collections.",
};

/// Viewport meta applied at start-up for a fixed-scale mobile layout.
pub const VIEWPORT_META: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no";

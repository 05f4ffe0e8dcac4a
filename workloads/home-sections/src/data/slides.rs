//! Hero slides.

use storefront_core::Localized;

/// One hero banner slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: Localized<&'static str>,
    pub description: Localized<&'static str>,
    pub badge: Localized<&'static str>,
    pub image_src: &'static str,
    /// Accent color.
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        id: 1,
        title: Localized::new("Laptops & PC", "حواسيب محمولة"),
        description: Localized::new(
            "Les derniers modèles des grandes marques",
            "أحدث موديلات العلامات الكبرى",
        ),
        badge: Localized::new("Prix imbattables", "أسعار لا تقبل المنافسة"),
        image_src: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=1920&q=80",
        color: "#6366F1",
        bg_color: "#EEF2FF",
    },
    Slide {
        id: 2,
        title: Localized::new("Apple Premium", "منتجات أبل"),
        description: Localized::new(
            "MacBook, iPhone, iPad, AirPods",
            "ماك بوك، آيفون، آيباد، إيربودز",
        ),
        badge: Localized::new("Garantie officielle", "ضمان رسمي"),
        image_src: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=1920&q=80",
        color: "#8B5CF6",
        bg_color: "#F5F3FF",
    },
    Slide {
        id: 3,
        title: Localized::new("Casques & Audio", "سماعات وصوتيات"),
        description: Localized::new(
            "Gaming, Studio, Sans fil premium",
            "ألعاب، ستوديو، لاسلكي فاخر",
        ),
        badge: Localized::new("Qualité supérieure", "جودة عالية"),
        image_src: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=1920&q=80",
        color: "#EC4899",
        bg_color: "#FDF2F8",
    },
    Slide {
        id: 4,
        title: Localized::new("Caméras Pro", "كاميرات احترافية"),
        description: Localized::new(
            "DSLR, Mirrorless, Accessoires photo",
            "DSLR، ميرورليس، إكسسوارات تصوير",
        ),
        badge: Localized::new("Conseil expert", "استشارة خبراء"),
        image_src: "https://media.istockphoto.com/id/1163005791/photo/bare-tree-new-pond.jpg?s=170667a&w=0&k=20&c=KHZ7oETz8oFL2zG4_Hos2QCl3s3Z4q0nuGfrS-gD8Q0=",
        color: "#F59E0B",
        bg_color: "#FFFBEB",
    },
];

/// Feature chips shown under every slide.
pub const SLIDE_FEATURES: [Localized<&'static str>; 3] = [
    Localized::new("Livraison rapide", "توصيل سريع"),
    Localized::new("Garantie", "ضمان"),
    Localized::new("Qualité", "جودة"),
];

//! Customer testimonials.

use storefront_core::Localized;

/// A customer quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub city: &'static str,
    /// Stars out of 5.
    pub rating: u8,
    pub text: Localized<&'static str>,
}

impl Testimonial {
    /// First character of the author's name, for the avatar.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        id: 1,
        name: "Yacine B.",
        city: "Alger",
        rating: 5,
        text: Localized::new(
            "Livraison en 48 h à Alger et le portable était exactement comme décrit.",
            "التوصيل في 48 ساعة إلى الجزائر العاصمة والحاسوب مطابق للوصف تماما.",
        ),
    },
    Testimonial {
        id: 2,
        name: "Amina K.",
        city: "Oran",
        rating: 5,
        text: Localized::new(
            "Service client très réactif sur WhatsApp, je recommande.",
            "خدمة عملاء سريعة جدا عبر واتساب، أنصح بهم.",
        ),
    },
    Testimonial {
        id: 3,
        name: "Karim M.",
        city: "Constantine",
        rating: 4,
        text: Localized::new(
            "Bons prix et paiement à la livraison, rien à redire.",
            "أسعار جيدة والدفع عند الاستلام، لا شيء يقال.",
        ),
    },
    Testimonial {
        id: 4,
        name: "Sarah H.",
        city: "Annaba",
        rating: 5,
        text: Localized::new(
            "Mon casque est arrivé bien emballé avec la garantie officielle.",
            "وصلت سماعتي مغلفة جيدا مع الضمان الرسمي.",
        ),
    },
    Testimonial {
        id: 5,
        name: "Mehdi R.",
        city: "Sétif",
        rating: 4,
        text: Localized::new(
            "Conseils utiles pour choisir mon appareil photo.",
            "نصائح مفيدة لاختيار آلة التصوير.",
        ),
    },
    Testimonial {
        id: 6,
        name: "Nadia T.",
        city: "Tlemcen",
        rating: 5,
        text: Localized::new(
            "Deuxième commande et toujours aussi satisfaite.",
            "الطلب الثاني وما زلت راضية تماما.",
        ),
    },
];

//! UI string table for both storefront languages.
//!
//! Renderers never look these up from ambient state: the active table is
//! passed in alongside the locale.

use crate::locale::Locale;

/// Section headings and shared call-to-action copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStrings {
    pub departments: &'static str,
    pub view_all: &'static str,
    pub collections: &'static str,
    pub featured: &'static str,
    pub best_sellers: &'static str,
    pub new_arrivals: &'static str,
    pub deals: &'static str,
    pub testimonials: &'static str,
    pub newsletter: &'static str,
    pub newsletter_sub: &'static str,
    pub email_placeholder: &'static str,
    pub subscribe: &'static str,
    pub whatsapp_cta: &'static str,
}

/// Trust badge copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustStrings {
    pub warranty: &'static str,
    pub warranty_desc: &'static str,
    pub delivery: &'static str,
    pub delivery_desc: &'static str,
    pub cod: &'static str,
    pub cod_desc: &'static str,
    pub support: &'static str,
    pub support_desc: &'static str,
}

/// Translation table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub locale: Locale,
    pub sections: SectionStrings,
    pub trust: TrustStrings,
}

impl Translations {
    /// The table for `locale`.
    pub fn for_locale(locale: Locale) -> &'static Translations {
        match locale {
            Locale::Fr => &FR,
            Locale::Ar => &AR,
        }
    }
}

pub static FR: Translations = Translations {
    locale: Locale::Fr,
    sections: SectionStrings {
        departments: "Nos départements",
        view_all: "Voir tout",
        collections: "Collections",
        featured: "Produits en vedette",
        best_sellers: "Meilleures ventes",
        new_arrivals: "Nouveautés",
        deals: "Promotions",
        testimonials: "Ce que disent nos clients",
        newsletter: "Restez informé",
        newsletter_sub: "Recevez nos offres exclusives et les nouveautés en avant-première.",
        email_placeholder: "Votre adresse e-mail",
        subscribe: "S'abonner",
        whatsapp_cta: "Commandez directement sur WhatsApp",
    },
    trust: TrustStrings {
        warranty: "Garantie officielle",
        warranty_desc: "Produits authentiques garantis jusqu'à 24 mois",
        delivery: "Livraison 58 wilayas",
        delivery_desc: "Expédition rapide partout en Algérie",
        cod: "Paiement à la livraison",
        cod_desc: "Payez en espèces à la réception",
        support: "Support 7j/7",
        support_desc: "Une équipe à votre écoute avant et après l'achat",
    },
};

pub static AR: Translations = Translations {
    locale: Locale::Ar,
    sections: SectionStrings {
        departments: "أقسامنا",
        view_all: "عرض الكل",
        collections: "المجموعات",
        featured: "منتجات مميزة",
        best_sellers: "الأكثر مبيعا",
        new_arrivals: "وصل حديثا",
        deals: "عروض",
        testimonials: "آراء عملائنا",
        newsletter: "ابق على اطلاع",
        newsletter_sub: "احصل على عروضنا الحصرية وأحدث المنتجات قبل الجميع.",
        email_placeholder: "بريدك الإلكتروني",
        subscribe: "اشترك",
        whatsapp_cta: "اطلب مباشرة عبر واتساب",
    },
    trust: TrustStrings {
        warranty: "ضمان رسمي",
        warranty_desc: "منتجات أصلية بضمان يصل إلى 24 شهرا",
        delivery: "توصيل إلى 58 ولاية",
        delivery_desc: "شحن سريع إلى كامل التراب الوطني",
        cod: "الدفع عند الاستلام",
        cod_desc: "ادفع نقدا عند استلام طلبك",
        support: "دعم 7/7",
        support_desc: "فريق في خدمتك قبل وبعد الشراء",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_locale() {
        for locale in Locale::ALL {
            assert_eq!(Translations::for_locale(locale).locale, locale);
        }
    }

    #[test]
    fn test_tables_differ() {
        let fr = Translations::for_locale(Locale::Fr);
        let ar = Translations::for_locale(Locale::Ar);
        assert_ne!(fr.sections.subscribe, ar.sections.subscribe);
        assert_ne!(fr.trust.cod, ar.trust.cod);
    }
}

//! Curated collections.

use storefront_core::Localized;

/// A curated product pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: Localized<&'static str>,
    pub description: Localized<&'static str>,
    /// Gradient stops for the tile icon.
    pub gradient: (&'static str, &'static str),
    pub product_count: u32,
}

pub const COLLECTIONS: [Collection; 5] = [
    Collection {
        id: "col-gaming",
        slug: "pack-gaming",
        name: Localized::new("Pack Gaming", "حزمة الألعاب"),
        description: Localized::new(
            "PC, écrans 144 Hz et périphériques pour joueurs exigeants",
            "حواسيب وشاشات 144 هرتز وملحقات للاعبين المحترفين",
        ),
        gradient: ("#8B5CF6", "#6366F1"),
        product_count: 24,
    },
    Collection {
        id: "col-office",
        slug: "pack-bureau",
        name: Localized::new("Pack Bureau", "حزمة المكتب"),
        description: Localized::new(
            "Tout pour équiper un poste de travail efficace",
            "كل ما تحتاجه لتجهيز مكتب عملي",
        ),
        gradient: ("#0EA5E9", "#2563EB"),
        product_count: 18,
    },
    Collection {
        id: "col-student",
        slug: "pack-etudiant",
        name: Localized::new("Pack Étudiant", "حزمة الطالب"),
        description: Localized::new(
            "Portables légers et accessoires à petit prix",
            "حواسيب خفيفة وملحقات بأسعار مناسبة",
        ),
        gradient: ("#10B981", "#059669"),
        product_count: 15,
    },
    Collection {
        id: "col-creator",
        slug: "pack-createur",
        name: Localized::new("Pack Créateur", "حزمة المبدع"),
        description: Localized::new(
            "Caméras, micros et stations de montage",
            "كاميرات وميكروفونات ومحطات مونتاج",
        ),
        gradient: ("#EC4899", "#DB2777"),
        product_count: 12,
    },
    Collection {
        id: "col-network",
        slug: "pack-reseau",
        name: Localized::new("Pack Réseau", "حزمة الشبكات"),
        description: Localized::new(
            "Routeurs, switchs et Wi-Fi pour la maison et l'entreprise",
            "موجهات ومحولات وواي فاي للمنزل والمؤسسة",
        ),
        gradient: ("#F59E0B", "#EA580C"),
        product_count: 9,
    },
];

//! Static site copy per locale.
//!
//! Everything on the public pages that is not managed from the admin panel:
//! navigation, hero, section headings, form labels, testimonials and contact
//! details. Managed records carry translation keys that are shown as stored.

use mars_paper_core::Locale;

/// Sales phone shown in the contact section.
pub const CONTACT_PHONE: &str = "+998 90 359 39 00";
/// Phone shown in the footer.
pub const FOOTER_PHONE: &str = "+998 90 034 06 04";
/// Public email address.
pub const CONTACT_EMAIL: &str = "marspaper.uz@gmail.com";

/// Workshop location (Tashkent, Chilonzor).
pub const LATITUDE: f64 = 41.233_752_635_648_65;
pub const LONGITUDE: f64 = 69.181_501_857_742_46;

/// Google Maps embed for the workshop location.
#[must_use]
pub fn map_embed_url() -> String {
    format!(
        "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d12001.697776655307!2d{LONGITUDE}!3d{LATITUDE}!3m2!1i1024!2i768!4f13.1!5e0!3m2!1sen!2s"
    )
}

/// Directions link to the workshop.
#[must_use]
pub fn directions_url() -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={LATITUDE},{LONGITUDE}")
}

/// Copy for one locale.
#[derive(Debug)]
pub struct SiteText {
    pub nav_home: &'static str,
    pub nav_products: &'static str,
    pub nav_team: &'static str,
    pub nav_gallery: &'static str,
    pub nav_contact: &'static str,

    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_description: &'static str,
    pub hero_keywords: &'static [&'static str],
    pub hero_cta: &'static str,
    pub location: &'static str,

    pub products_title: &'static str,
    pub products_description: &'static str,
    pub team_title: &'static str,
    pub team_description: &'static str,
    pub gallery_title: &'static str,
    pub gallery_description: &'static str,
    pub testimonials_title: &'static str,
    pub contact_title: &'static str,
    pub contact_description: &'static str,
    pub location_title: &'static str,
    pub directions: &'static str,

    pub first_name: &'static str,
    pub last_name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub company: &'static str,
    pub message: &'static str,
    pub send: &'static str,

    pub price_per: &'static str,
    pub details: &'static str,
    pub features: &'static str,
    pub order_title: &'static str,
    pub quantity: &'static str,
    pub total: &'static str,
    pub place_order: &'static str,
    pub back_to_products: &'static str,
    pub empty_section: &'static str,
    pub footer_rights: &'static str,
}

/// A customer quote on the landing page.
#[derive(Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub rating: u8,
    pub quote: &'static str,
}

impl Testimonial {
    /// Star string for the rating, e.g. `★★★★★`.
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

/// Copy for a locale.
#[must_use]
pub const fn text(locale: Locale) -> &'static SiteText {
    match locale {
        Locale::Uz => &UZ,
        Locale::Ru => &RU,
        Locale::En => &EN,
    }
}

/// Testimonials for a locale.
#[must_use]
pub const fn testimonials(locale: Locale) -> &'static [Testimonial] {
    match locale {
        Locale::Uz => &TESTIMONIALS_UZ,
        Locale::Ru => &TESTIMONIALS_RU,
        Locale::En => &TESTIMONIALS_EN,
    }
}

static UZ: SiteText = SiteText {
    nav_home: "Bosh sahifa",
    nav_products: "Mahsulotlar",
    nav_team: "Jamoa",
    nav_gallery: "Galereya",
    nav_contact: "Aloqa",
    hero_title: "Mars Paper",
    hero_subtitle: "Qog'oz mahsulotlari va bosma xizmatlari",
    hero_description: "Daftar, albom, A4 qog'oz, bosma va laminatsiya. Ofislar, maktablar va bizneslar uchun sifatli mahsulotlar.",
    hero_keywords: &["Bosma", "Bloknot", "Daftar", "Laminatsiya", "A4 qog'oz", "Albom"],
    hero_cta: "Mahsulotlarni ko'rish",
    location: "Toshkent, Chilonzor",
    products_title: "Mahsulotlarimiz",
    products_description: "Har bir buyurtma uchun sifatli qog'oz mahsulotlari.",
    team_title: "Bizning jamoa",
    team_description: "Tajribali mutaxassislar har bir buyurtmani nazorat qiladi.",
    gallery_title: "Galereya",
    gallery_description: "Ishlab chiqarish jarayoni va tayyor mahsulotlar.",
    testimonials_title: "Mijozlarimiz fikri",
    contact_title: "Biz bilan bog'laning",
    contact_description: "Savolingiz bormi? Xabar qoldiring, biz sizga qo'ng'iroq qilamiz.",
    location_title: "Bizning manzil",
    directions: "Yo'nalishni ko'rsatish",
    first_name: "Ism",
    last_name: "Familiya",
    phone: "Telefon",
    email: "Email",
    company: "Kompaniya",
    message: "Xabar",
    send: "Yuborish",
    price_per: "narxi",
    details: "Batafsil",
    features: "Xususiyatlari",
    order_title: "Buyurtma berish",
    quantity: "Miqdor",
    total: "Umumiy narx",
    place_order: "Buyurtma yuborish",
    back_to_products: "Mahsulotlarga qaytish",
    empty_section: "Hozircha ma'lumot yo'q.",
    footer_rights: "Barcha huquqlar himoyalangan.",
};

static RU: SiteText = SiteText {
    nav_home: "Главная",
    nav_products: "Продукция",
    nav_team: "Команда",
    nav_gallery: "Галерея",
    nav_contact: "Контакты",
    hero_title: "Mars Paper",
    hero_subtitle: "Бумажная продукция и печатные услуги",
    hero_description: "Тетради, альбомы, бумага A4, печать и ламинация. Качественная продукция для офисов, школ и бизнеса.",
    hero_keywords: &["Печать", "Блокноты", "Тетради", "Ламинация", "Бумага A4", "Альбомы"],
    hero_cta: "Смотреть продукцию",
    location: "Ташкент, Чиланзар",
    products_title: "Наша продукция",
    products_description: "Качественная бумажная продукция для любого заказа.",
    team_title: "Наша команда",
    team_description: "Опытные специалисты контролируют каждый заказ.",
    gallery_title: "Галерея",
    gallery_description: "Производство и готовая продукция.",
    testimonials_title: "Отзывы клиентов",
    contact_title: "Свяжитесь с нами",
    contact_description: "Есть вопросы? Оставьте сообщение, и мы вам перезвоним.",
    location_title: "Наш адрес",
    directions: "Проложить маршрут",
    first_name: "Имя",
    last_name: "Фамилия",
    phone: "Телефон",
    email: "Email",
    company: "Компания",
    message: "Сообщение",
    send: "Отправить",
    price_per: "цена за",
    details: "Подробнее",
    features: "Особенности",
    order_title: "Оформить заказ",
    quantity: "Количество",
    total: "Итого",
    place_order: "Отправить заказ",
    back_to_products: "Назад к продукции",
    empty_section: "Пока нет данных.",
    footer_rights: "Все права защищены.",
};

static EN: SiteText = SiteText {
    nav_home: "Home",
    nav_products: "Products",
    nav_team: "Team",
    nav_gallery: "Gallery",
    nav_contact: "Contact",
    hero_title: "Mars Paper",
    hero_subtitle: "Paper products and printing services",
    hero_description: "Notebooks, albums, A4 paper, printing and lamination. Quality products for offices, schools and businesses.",
    hero_keywords: &["Printing", "Notepads", "Notebooks", "Lamination", "A4 paper", "Albums"],
    hero_cta: "Browse products",
    location: "Tashkent, Chilonzor",
    products_title: "Our products",
    products_description: "Quality paper products for every order.",
    team_title: "Our team",
    team_description: "Experienced specialists oversee every order.",
    gallery_title: "Gallery",
    gallery_description: "Our production floor and finished products.",
    testimonials_title: "What our clients say",
    contact_title: "Contact us",
    contact_description: "Have a question? Leave a message and we will call you back.",
    location_title: "Our location",
    directions: "Get directions",
    first_name: "First name",
    last_name: "Last name",
    phone: "Phone",
    email: "Email",
    company: "Company",
    message: "Message",
    send: "Send",
    price_per: "price per",
    details: "Details",
    features: "Features",
    order_title: "Place an order",
    quantity: "Quantity",
    total: "Total",
    place_order: "Send order",
    back_to_products: "Back to products",
    empty_section: "Nothing here yet.",
    footer_rights: "All rights reserved.",
};

static TESTIMONIALS_UZ: [Testimonial; 3] = [
    Testimonial {
        name: "Aziz Karimov",
        company: "Tashkent Plaza Hotel",
        position: "Direktor",
        rating: 5,
        quote: "Ikki yildan beri hamkorlik qilamiz. Buyurtmalar doim o'z vaqtida va sifatli yetkaziladi.",
    },
    Testimonial {
        name: "Malika Abdullayeva",
        company: "Samarkand Restaurant Chain",
        position: "Xaridlar menejeri",
        rating: 5,
        quote: "Katta hajmdagi buyurtmalarni ham tez bajarishadi. Narxlar qulay.",
    },
    Testimonial {
        name: "Bobur Tursunov",
        company: "IT Solutions Group",
        position: "Ofis menejeri",
        rating: 5,
        quote: "Ofisimiz uchun A4 qog'ozni faqat Mars Paperdan olamiz.",
    },
];

static TESTIMONIALS_RU: [Testimonial; 3] = [
    Testimonial {
        name: "Азиз Каримов",
        company: "Tashkent Plaza Hotel",
        position: "Директор",
        rating: 5,
        quote: "Сотрудничаем уже два года. Заказы всегда приходят вовремя и в отличном качестве.",
    },
    Testimonial {
        name: "Малика Абдуллаева",
        company: "Samarkand Restaurant Chain",
        position: "Менеджер по закупкам",
        rating: 5,
        quote: "Даже крупные заказы выполняют быстро. Цены удобные.",
    },
    Testimonial {
        name: "Бобур Турсунов",
        company: "IT Solutions Group",
        position: "Офис-менеджер",
        rating: 5,
        quote: "Бумагу A4 для офиса берём только у Mars Paper.",
    },
];

static TESTIMONIALS_EN: [Testimonial; 3] = [
    Testimonial {
        name: "Aziz Karimov",
        company: "Tashkent Plaza Hotel",
        position: "Director",
        rating: 5,
        quote: "We have worked together for two years. Orders always arrive on time and in great shape.",
    },
    Testimonial {
        name: "Malika Abdullayeva",
        company: "Samarkand Restaurant Chain",
        position: "Purchasing manager",
        rating: 5,
        quote: "Even large orders are done quickly, and the prices are fair.",
    },
    Testimonial {
        name: "Bobur Tursunov",
        company: "IT Solutions Group",
        position: "Office manager",
        rating: 5,
        quote: "Mars Paper is the only place we buy A4 paper for our office.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_copy() {
        for locale in Locale::ALL {
            assert!(!text(locale).nav_products.is_empty());
            assert_eq!(testimonials(locale).len(), 3);
        }
        assert_eq!(text(Locale::Ru).nav_products, "Продукция");
    }

    #[test]
    fn test_map_links_use_location() {
        assert!(directions_url().ends_with("destination=41.23375263564865,69.18150185774246"));
        assert!(map_embed_url().starts_with("https://www.google.com/maps/embed"));
    }

    #[test]
    fn test_stars_are_capped() {
        let t = Testimonial {
            name: "",
            company: "",
            position: "",
            rating: 9,
            quote: "",
        };
        assert_eq!(t.stars(), "★★★★★");
    }
}

//! User-facing result messages (Uzbek).

pub const INVALID_INPUT: &str = "Ma'lumotlarni to'g'ri kiriting.";
pub const MISSING_UPDATE_ID: &str = "Tahrirlash uchun ID topilmadi.";
pub const MISSING_DELETE_ID: &str = "O'chirish uchun ID topilmadi.";
pub const SERVER_CONFIG: &str = "Server konfiguratsiyasi xatosi. Iltimos, keyinroq urinib ko'ring.";
pub const UNEXPECTED: &str = "Kutilmagan xatolik yuz berdi.";

pub const NO_FILE: &str = "Rasm fayli tanlanmagan.";
pub const FILE_TOO_LARGE: &str = "Rasm hajmi juda katta (10 MB dan oshmasligi kerak).";
pub const UPLOAD_FAILED: &str = "Rasm yuklashda xatolik yuz berdi.";
pub const URL_UNAVAILABLE: &str = "Rasm URL manzilini olishda xatolik.";
pub const UPLOAD_OK: &str = "Rasm muvaffaqiyatli yuklandi!";

pub const LOGIN_OK: &str = "Muvaffaqiyatli kirdingiz!";
pub const BAD_CREDENTIALS: &str = "Noto'g'ri telefon raqami yoki parol.";

pub const CONTACT_OK: &str = "Xabaringiz muvaffaqiyatli yuborildi!";
pub const CONTACT_RELAY_FAILED: &str = "Telegramga yuborishda xatolik yuz berdi.";
pub const ORDER_OK: &str = "Buyurtmangiz muvaffaqiyatli yuborildi! Tez orada siz bilan bog'lanamiz.";
pub const ORDER_RELAY_FAILED: &str =
    "Buyurtma yuborishda xatolik yuz berdi. Iltimos, qayta urinib ko'ring.";
pub const NETWORK_ERROR: &str =
    "Tarmoq xatosi. Iltimos, internet aloqangizni tekshiring va qayta urinib ko'ring.";

/// Result messages for one managed resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceMessages {
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

pub const TEAM: ResourceMessages = ResourceMessages {
    created: "Jamoa a'zosi muvaffaqiyatli qo'shildi!",
    create_failed: "Jamoa a'zosini qo'shishda xatolik yuz berdi.",
    updated: "Jamoa a'zosi muvaffaqiyatli yangilandi!",
    update_failed: "Jamoa a'zosini yangilashda xatolik yuz berdi.",
    deleted: "Jamoa a'zosi muvaffaqiyatli o'chirildi!",
    delete_failed: "Jamoa a'zosini o'chirishda xatolik yuz berdi.",
};

pub const PRODUCTS: ResourceMessages = ResourceMessages {
    created: "Mahsulot muvaffaqiyatli qo'shildi!",
    create_failed: "Mahsulot qo'shishda xatolik yuz berdi.",
    updated: "Mahsulot muvaffaqiyatli yangilandi!",
    update_failed: "Mahsulotni yangilashda xatolik yuz berdi.",
    deleted: "Mahsulot muvaffaqiyatli o'chirildi!",
    delete_failed: "Mahsulotni o'chirishda xatolik yuz berdi.",
};

pub const GALLERY: ResourceMessages = ResourceMessages {
    created: "Galereya elementi muvaffaqiyatli qo'shildi!",
    create_failed: "Galereya elementini qo'shishda xatolik yuz berdi.",
    updated: "Galereya elementi muvaffaqiyatli yangilandi!",
    update_failed: "Galereya elementini yangilashda xatolik yuz berdi.",
    deleted: "Galereya elementi muvaffaqiyatli o'chirildi!",
    delete_failed: "Galereya elementini o'chirishda xatolik yuz berdi.",
};

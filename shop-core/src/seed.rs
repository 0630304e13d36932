//! First-run defaults
//!
//! Seed values used when a collection has never been persisted (or its
//! document is corrupt). Content mirrors the shop's launch catalog.

use rust_decimal::Decimal;
use shared::models::{CarouselImage, Category, ContactInfo, PageContent, Product};

/// Default shop name
pub const SHOP_NAME: &str = "GK公仔玩具專賣店";

/// Default admin credential
pub const ADMIN_PASSWORD: &str = "admin";

/// Launch category forest: two top-level groups plus a 七龍珠 subtree
pub fn categories() -> Vec<Category> {
    let cat = |id: &str, name: &str, parent: Option<&str>| Category {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: parent.map(str::to_string),
    };
    vec![
        cat("1", "預購商品", None),
        cat("2", "現貨商品", None),
        cat("3", "七龍珠", None),
        cat("c-goku", "孫悟空", Some("3")),
        cat("c-vegeta", "達爾", Some("3")),
    ]
}

/// Launch product catalog
pub fn products() -> Vec<Product> {
    let product = |id: &str, name: &str, price: i64, image_url: &str, description: &str, category: Option<&str>| Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
        image_url: image_url.to_string(),
        description: description.to_string(),
        category_id: category.map(str::to_string),
    };
    vec![
        product(
            "p1",
            "【七龍珠】億覓·STUDIO－悟吉塔",
            8800,
            "https://images.unsplash.com/photo-1619025873875-a8d39f88a282?auto=format&fit=crop&w=800&q=80",
            "震撼的悟吉塔模型，完美重現經典場景。\n限定版，附帶特殊地台與特效件。\n材質: PVC, ABS\n尺寸: 高約35cm",
            Some("c-vegeta"),
        ),
        product(
            "p2",
            "【航海王】索隆三刀流奧義",
            7500,
            "https://images.unsplash.com/photo-1607963628652-16a760d9a244?auto=format&fit=crop&w=800&q=80",
            "展現索隆三刀流的極致魄力。\n精細塗裝，動態感十足。\n材質: 樹脂\n尺寸: 高約40cm",
            Some("2"),
        ),
        product(
            "p3",
            "【火影忍者】宇智波鼬 曉組織Ver.",
            9200,
            "https://images.unsplash.com/photo-1611604548018-d8bf4138d218?auto=format&fit=crop&w=800&q=80",
            "身穿曉組織服裝的宇智波鼬，眼神冷酷，氣場強大。\n附帶可替換手部配件與烏鴉特效。\n材質: PVC\n尺寸: 高約30cm",
            Some("1"),
        ),
        product(
            "p4",
            "【鬼滅之刃】竈門炭治郎 水之呼吸",
            6300,
            "https://images.unsplash.com/photo-1610461193144-3b2d1cbe5b19?auto=format&fit=crop&w=800&q=80",
            "炭治郎使用水之呼吸的動態模型。\n水花特效件採用透明材質，生動逼真。\n材質: PVC, ABS\n尺寸: 高約25cm",
            Some("2"),
        ),
        product(
            "p5",
            "【七龍珠】超級賽亞人 孫悟空",
            6800,
            "https://images.unsplash.com/photo-1598056157134-2d65d4a13a48?auto=format&fit=crop&w=800&q=80",
            "經典超級賽亞人形態的孫悟空，氣勢磅礴。\n附帶龜派氣功特效件。\n材質: PVC\n尺寸: 高約28cm",
            Some("c-goku"),
        ),
    ]
}

/// Launch carousel images
pub fn carousel_images() -> Vec<CarouselImage> {
    let image = |id: &str, url: &str| CarouselImage {
        id: id.to_string(),
        image_url: url.to_string(),
    };
    vec![
        image(
            "ci1",
            "https://images.unsplash.com/photo-1598992645311-59a0f05f7c32?auto=format&fit=crop&w=1740&q=80",
        ),
        image(
            "ci2",
            "https://images.unsplash.com/photo-1613904985222-0d5751625f16?auto=format&fit=crop&w=1740&q=80",
        ),
        image(
            "ci3",
            "https://images.unsplash.com/photo-1562326522-8e7c1a01883c?auto=format&fit=crop&w=1740&q=80",
        ),
    ]
}

/// Footer / contact details
pub fn contact_info() -> ContactInfo {
    ContactInfo {
        phone: "0912-345-678".to_string(),
        email: "service@gkuncle.com".to_string(),
        address: "123 Toy Street, Taipei, Taiwan".to_string(),
        facebook_url: "https://facebook.com".to_string(),
        instagram_url: "https://instagram.com".to_string(),
    }
}

fn page(title: &str, content: &str, image_url: &str) -> PageContent {
    PageContent {
        title: title.to_string(),
        content: content.to_string(),
        image_url: image_url.to_string(),
    }
}

/// About page body
pub fn about_info() -> PageContent {
    page(
        "關於GK公仔玩具專賣店",
        "歡迎來到GK公仔玩具專賣店！我們是熱衷於高品質模型與公仔的收藏家團隊，致力於為所有同好帶來最精緻、最稀有的收藏品。\n\n我們的商店創立於2020年，源於一份對動漫文化的熱愛。從七龍珠到航海王，從火影忍者到鬼滅之刃，我們精心挑選每一款商品，確保它們不僅是玩具，更是能夠觸動人心的藝術品。我們與世界各地的頂尖工作室合作，引進限定版與獨家商品，讓您的收藏與眾不同。\n\n我們的使命是打造一個讓所有模型愛好者都能找到歸屬感的社群。無論您是資深收藏家，還是剛入門的新手，我們都樂於分享我們的知識與熱情。感謝您的光臨，希望您在這裡能找到心儀的寶藏！",
        "https://images.unsplash.com/photo-1587219213523-2b270dba2549?auto=format&fit=crop&w=1740&q=80",
    )
}

/// Contact page body
pub fn contact_page_info() -> PageContent {
    page(
        "聯絡我們",
        "有任何問題嗎？歡迎隨時透過以下方式與我們聯繫，我們的團隊將很樂意為您服務。\n\n營業時間：\n週一至週五: 10:00 AM - 7:00 PM\n週末及國定假日休息",
        "https://images.unsplash.com/photo-1586769852836-bc069f19e1b6?auto=format&fit=crop&w=1740&q=80",
    )
}

/// Shopping guide page body
pub fn shopping_guide_info() -> PageContent {
    page(
        "購物指南",
        "步驟一：瀏覽商品\n您可以透過頂部導航欄的分類或使用搜索功能找到您喜歡的商品。\n\n步驟二：加入購物車\n在商品頁面選擇您要的數量，點擊「加入購物車」。\n\n步驟三：結帳\n點擊右上角的購物車圖標，確認商品無誤後，點擊「結帳」按鈕。\n\n步驟四：填寫資料\n填寫您的收件人資訊、選擇運送及付款方式。\n\n步驟五：完成訂單\n確認所有資訊無誤後，提交訂單，您將會收到一封訂單確認郵件。",
        "https://images.unsplash.com/photo-1522204523234-8729aa6e3d54?auto=format&fit=crop&w=1740&q=80",
    )
}

/// Payment page body
pub fn payment_info() -> PageContent {
    page(
        "付款方式",
        "我們提供多種付款方式，讓您輕鬆購物：\n\n信用卡\n支援 VISA, MasterCard, JCB 等國內外信用卡一次付清。\n\n銀行轉帳／ATM\n請於下單後48小時內完成匯款，並告知我們您的帳號後五碼以便對帳。\n\n貨到付款\n商品將由宅配人員送達，請將現金交給宅配人員即可。",
        "https://images.unsplash.com/photo-1565932690088-53c880d444a2?auto=format&fit=crop&w=1740&q=80",
    )
}

/// Shipping page body
pub fn shipping_info() -> PageContent {
    page(
        "運送方式",
        "現貨商品\n訂單成立後，約需1-3個工作天（不含假日）進行出貨。\n\n預購商品\n商品頁面會標示預計到貨時間，到貨後將依訂單順序陸續出貨。\n\n運送選項\n- 宅配到府: 運費 NT$100\n- 超商取貨 (7-11/全家): 運費 NT$60\n\n全館消費滿 NT$3,000 即享免運優惠。",
        "https://images.unsplash.com/photo-1587145820137-a9315ee5656c?auto=format&fit=crop&w=1740&q=80",
    )
}

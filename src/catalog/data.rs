use crate::models::{CuisineType, MealCategory, MenuItem};

fn item(
    id: u32,
    name: &str,
    secondary: &str,
    category: MealCategory,
    cuisine: CuisineType,
    healthy: bool,
    calories: u32,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        secondary_name: Some(secondary.to_string()),
        category,
        cuisine,
        is_healthy_option: healthy,
        approx_calories: calories,
    }
}

/// The built-in menu catalog.
///
/// Thai primary names with English secondary labels, spread across all
/// three categories so every filter leaves something on the wheel.
pub fn builtin_menu() -> Vec<MenuItem> {
    use CuisineType::*;
    use MealCategory::*;

    vec![
        item(1, "ข้าวผัดกุ้ง", "Shrimp Fried Rice", MainCourse, Thai, false, 550),
        item(2, "ผัดไทย", "Pad Thai", MainCourse, Thai, false, 600),
        item(3, "ต้มยำกุ้ง", "Tom Yum Goong", MainCourse, Thai, true, 250),
        item(4, "ส้มตำ", "Papaya Salad", MainCourse, Thai, true, 180),
        item(5, "ข้าวมันไก่", "Chicken Rice", MainCourse, Thai, false, 650),
        item(6, "แกงเขียวหวานไก่", "Green Curry Chicken", MainCourse, Thai, false, 480),
        item(7, "กะเพราหมูสับ", "Basil Minced Pork", MainCourse, Thai, false, 630),
        item(8, "ข้าวซอยไก่", "Khao Soi", MainCourse, Thai, false, 700),
        item(9, "ปลากะพงนึ่งมะนาว", "Steamed Sea Bass with Lime", MainCourse, Thai, true, 320),
        item(10, "สปาเก็ตตี้คาร์โบนาร่า", "Spaghetti Carbonara", MainCourse, International, false, 750),
        item(11, "สลัดอกไก่ย่าง", "Grilled Chicken Salad", MainCourse, International, true, 350),
        item(12, "แซลมอนเทอริยากิดง", "Salmon Teriyaki Bowl", MainCourse, Fusion, true, 520),
        item(13, "เบอร์เกอร์ข้าวเหนียวหมูย่าง", "Grilled Pork Sticky-Rice Burger", MainCourse, Fusion, false, 580),
        item(14, "ปอเปี๊ยะทอด", "Fried Spring Rolls", Snack, Thai, false, 320),
        item(15, "สาคูไส้หมู", "Tapioca Pork Dumplings", Snack, Thai, false, 280),
        item(16, "กล้วยบวชชี", "Banana in Coconut Milk", Snack, Thai, false, 300),
        item(17, "ข้าวเหนียวมะม่วง", "Mango Sticky Rice", Snack, Thai, false, 420),
        item(18, "ผลไม้รวม", "Mixed Fruit Plate", Snack, International, true, 120),
        item(19, "โยเกิร์ตกราโนล่า", "Yogurt Granola Cup", Snack, International, true, 210),
        item(20, "เฟรนช์ฟรายส์", "French Fries", Snack, International, false, 400),
        item(21, "ชาไทยเย็น", "Thai Iced Tea", Beverage, Thai, false, 240),
        item(22, "น้ำมะพร้าว", "Coconut Water", Beverage, Thai, true, 60),
        item(23, "น้ำส้มคั้นสด", "Fresh Orange Juice", Beverage, International, true, 110),
        item(24, "ชาเขียวมัทฉะลาเต้", "Matcha Latte", Beverage, Fusion, false, 200),
        item(25, "สมูทตี้ผักโขมสับปะรด", "Spinach Pineapple Smoothie", Beverage, Fusion, true, 140),
        item(26, "โกโก้เย็น", "Iced Cocoa", Beverage, International, false, 280),
    ]
}

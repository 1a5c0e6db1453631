//! Deterministic mock data standing in for a remote API

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::{
    Activity, ActivityKind, Address, CategoryShare, DocLink, Faq, InventoryItem, MonthlyVolume,
    Order, OrderItem, OrderStatus, PaymentStatus, RevenuePoint, Shipment, ShipmentStatus,
    StockStatus, User, UserRole, UserStatus,
};

const SHIPMENT_COUNT: u64 = 37;
const ORDER_COUNT: u64 = 28;
const INVENTORY_COUNT: u64 = 23;
const USER_COUNT: u64 = 14;

const CITIES: &[(&str, (f64, f64))] = &[
    ("New York, USA", (40.7128, -74.006)),
    ("London, UK", (51.505, -0.09)),
    ("Paris, France", (48.8566, 2.3522)),
    ("Berlin, Germany", (52.52, 13.405)),
    ("Madrid, Spain", (40.4168, -3.7038)),
    ("Tokyo, Japan", (35.6762, 139.6503)),
    ("Toronto, Canada", (43.6532, -79.3832)),
    ("Sydney, Australia", (-33.8688, 151.2093)),
    ("Rotterdam, Netherlands", (51.9244, 4.4777)),
    ("Singapore", (1.3521, 103.8198)),
];

const CUSTOMERS: &[&str] = &[
    "John Doe",
    "Jane Smith",
    "Bob Wilson",
    "Alice Brown",
    "Carlos Diaz",
    "Mei Chen",
    "Omar Haddad",
    "Priya Patel",
    "Lena Novak",
];

const PRODUCTS: &[(&str, &str, f64)] = &[
    ("Product A", "Electronics", 499.99),
    ("Product B", "Clothing", 300.00),
    ("Product C", "Electronics", 799.99),
    ("Product D", "Furniture", 1299.00),
    ("Product E", "Clothing", 49.90),
    ("Product F", "Others", 19.99),
    ("Product G", "Furniture", 249.50),
];

const WAREHOUSES: &[&str] = &["Warehouse A", "Warehouse B", "Warehouse C"];

const STREETS: &[(&str, &str, &str, &str)] = &[
    ("123 Main St", "New York", "NY", "10001"),
    ("456 Oak Ave", "Los Angeles", "CA", "90001"),
    ("789 Pine Rd", "Chicago", "IL", "60601"),
    ("12 Lake Dr", "Seattle", "WA", "98101"),
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn pick<T: Copy>(items: &[T], i: u64) -> T {
    items[(i as usize) % items.len()]
}

pub fn shipments() -> Vec<Shipment> {
    let base = date(2024, 2, 10);
    (1..=SHIPMENT_COUNT)
        .map(|id| {
            let (origin, _) = pick(CITIES, id * 2 + 2);
            let (destination, coordinates) = pick(CITIES, id * 3 + 1);
            Shipment {
                id,
                tracking_number: format!("TN-{:03}-2024", id),
                origin: origin.to_string(),
                destination: destination.to_string(),
                status: pick(ShipmentStatus::all(), id * 7 % 5),
                estimated_delivery: base + Duration::days((id * 5 % 23) as i64),
                customer: pick(CUSTOMERS, id - 1).to_string(),
                coordinates,
            }
        })
        .collect()
}

pub fn orders() -> Vec<Order> {
    let base = date(2024, 2, 15);
    (1..=ORDER_COUNT)
        .map(|id| {
            let items: Vec<OrderItem> = (0..(id % 3 + 1))
                .map(|n| {
                    let (name, _, price) = pick(PRODUCTS, id + n * 2);
                    OrderItem {
                        id: id * 10 + n,
                        name: name.to_string(),
                        quantity: ((id + n) % 4 + 1) as u32,
                        price,
                    }
                })
                .collect();
            let total = (items.iter().map(OrderItem::subtotal).sum::<f64>() * 100.0).round() / 100.0;
            let (street, city, state, zip) = pick(STREETS, id);
            Order {
                id,
                order_number: format!("ORD-{:03}-2024", id),
                customer: pick(CUSTOMERS, id - 1).to_string(),
                date: base - Duration::days((id - 1) as i64),
                total,
                status: pick(OrderStatus::all(), id * 3 % 7),
                payment_status: pick(PaymentStatus::all(), id / 4),
                items,
                shipping_address: Address {
                    street: street.to_string(),
                    city: city.to_string(),
                    state: state.to_string(),
                    zip: zip.to_string(),
                    country: "USA".to_string(),
                },
            }
        })
        .collect()
}

pub fn inventory() -> Vec<InventoryItem> {
    let base = date(2024, 2, 15);
    (1..=INVENTORY_COUNT)
        .map(|id| {
            let (name, category, _) = pick(PRODUCTS, id - 1);
            let quantity = if id % 8 == 0 { 0 } else { ((id * 37) % 180) as u32 };
            let reorder_point = 20 + ((id * 11) % 4) as u32 * 10;
            let status = if quantity == 0 {
                StockStatus::OutOfStock
            } else if quantity <= reorder_point {
                StockStatus::LowStock
            } else {
                StockStatus::InStock
            };
            InventoryItem {
                id,
                sku: format!("SKU-{:03}", id),
                name: format!("{} {}", name, (b'A' + ((id - 1) / 7) as u8) as char),
                category: category.to_string(),
                quantity,
                reorder_point,
                status,
                location: pick(WAREHOUSES, id - 1).to_string(),
                last_updated: base - Duration::days((id % 9) as i64),
            }
        })
        .collect()
}

pub fn users() -> Vec<User> {
    const DEPARTMENTS: &[&str] = &["Management", "Warehouse", "Logistics", "Sales"];
    let base = date(2024, 2, 15);
    (1..=USER_COUNT)
        .map(|id| {
            let base_name = pick(CUSTOMERS, id - 1);
            let name = if id as usize > CUSTOMERS.len() {
                format!("{} {}", base_name, id)
            } else {
                base_name.to_string()
            };
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
            let login: NaiveDateTime = (base - Duration::days((id / 3) as i64))
                .and_hms_opt(((8 + id * 3) % 24) as u32, ((id * 15) % 60) as u32, 0)
                .unwrap_or_default();
            User {
                id,
                name,
                email,
                role: pick(UserRole::all(), id - 1),
                status: if id % 5 == 3 {
                    UserStatus::Inactive
                } else {
                    UserStatus::Active
                },
                last_login: login,
                department: pick(DEPARTMENTS, id - 1).to_string(),
            }
        })
        .collect()
}

pub fn monthly_volume() -> Vec<MonthlyVolume> {
    [
        ("Jan", 400, 240),
        ("Feb", 300, 139),
        ("Mar", 200, 980),
        ("Apr", 278, 390),
        ("May", 189, 480),
        ("Jun", 239, 380),
    ]
    .into_iter()
    .map(|(month, shipments, orders)| MonthlyVolume {
        month: month.to_string(),
        shipments,
        orders,
    })
    .collect()
}

pub fn revenue() -> Vec<RevenuePoint> {
    [
        ("Jul", 39000, 105, 30000),
        ("Aug", 41000, 110, 31000),
        ("Sep", 43000, 112, 31500),
        ("Oct", 40000, 108, 30500),
        ("Nov", 47000, 125, 33000),
        ("Dec", 58000, 150, 37000),
        ("Jan", 45000, 120, 32000),
        ("Feb", 52000, 140, 35000),
        ("Mar", 48000, 130, 33000),
        ("Apr", 61000, 155, 38000),
        ("May", 55000, 145, 36000),
        ("Jun", 67000, 170, 41000),
    ]
    .into_iter()
    .map(|(month, revenue, orders, expenses)| RevenuePoint {
        month: month.to_string(),
        revenue,
        orders,
        expenses,
    })
    .collect()
}

pub fn category_shares() -> Vec<CategoryShare> {
    [("Electronics", 45), ("Clothing", 25), ("Furniture", 15), ("Others", 15)]
        .into_iter()
        .map(|(name, value)| CategoryShare {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::Shipment,
            title: "New shipment created".to_string(),
            description: "Shipment #12345 has been created and is ready for pickup".to_string(),
            time: "5 minutes ago".to_string(),
        },
        Activity {
            id: 2,
            kind: ActivityKind::Order,
            title: "Order delivered".to_string(),
            description: "Order #67890 has been successfully delivered to the customer".to_string(),
            time: "2 hours ago".to_string(),
        },
        Activity {
            id: 3,
            kind: ActivityKind::Location,
            title: "Location updated".to_string(),
            description: "Shipment #34567 location has been updated".to_string(),
            time: "4 hours ago".to_string(),
        },
    ]
}

pub fn faqs() -> Vec<Faq> {
    [
        (
            "How do I track a shipment?",
            "Open the Shipments page and type the tracking number into the search bar. The table narrows down to the matching shipment and Enter shows its status and position.",
        ),
        (
            "How do I manage inventory levels?",
            "The Inventory page lists current stock levels and reorder points. Quantities at or below the reorder point are highlighted so low stock stands out.",
        ),
        (
            "How do I create a new order?",
            "Open the Orders page and press c. Fill in the customer, items and shipping details; an order number is generated automatically.",
        ),
        (
            "How do I generate reports?",
            "Reports are generated from the Analytics page. Pick a time range with f, then press x to export the report.",
        ),
        (
            "How do I add a new user?",
            "Open the Users page and press c. Enter the user's name, email, role and department.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

pub fn documentation() -> Vec<DocLink> {
    [
        ("Getting Started Guide", "Learn the basics of using TrackNStock", "/docs/getting-started"),
        ("User Manual", "Detailed documentation of all features", "/docs/user-manual"),
        ("API Documentation", "Integration guides and API reference", "/docs/api"),
        ("Best Practices", "Tips and recommendations for optimal use", "/docs/best-practices"),
    ]
    .into_iter()
    .map(|(title, description, link)| DocLink {
        title: title.to_string(),
        description: description.to_string(),
        link: link.to_string(),
    })
    .collect()
}

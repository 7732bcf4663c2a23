//! 示範資料集
//!
//! 儀表板啟動時載入的靜態模擬資料；測試與示範程式共用

use chrono::NaiveDate;
use rust_decimal::Decimal;

use erp_core::{
    InventoryItem, MaterialLine, MaterialRequirement, ProductionSchedule, PurchaseOrder,
    PurchaseOrderStatus, RequirementStatus, ScheduleStatus,
};

use crate::MemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 建立載入示範資料的記憶體儲存
pub fn demo_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    let seeded = date(2025, 10, 1);

    // 庫存
    let items = vec![
        InventoryItem::new(
            "INV-0001".to_string(),
            "鋼板".to_string(),
            "原物料".to_string(),
            Decimal::from(500),
            Decimal::from(100),
            Decimal::from(1000),
            seeded,
        )
        .with_location("A-01".to_string())
        .with_unit_price(Decimal::from(120)),
        InventoryItem::new(
            "INV-0002".to_string(),
            "軸承".to_string(),
            "零件".to_string(),
            Decimal::from(85),
            Decimal::from(100),
            Decimal::from(600),
            seeded,
        )
        .with_location("B-03".to_string())
        .with_unit_price(Decimal::from(35)),
        InventoryItem::new(
            "INV-0003".to_string(),
            "馬達".to_string(),
            "零件".to_string(),
            Decimal::ZERO,
            Decimal::from(20),
            Decimal::from(200),
            seeded,
        )
        .with_location("B-07".to_string())
        .with_unit_price(Decimal::from(450)),
        InventoryItem::new(
            "INV-0004".to_string(),
            "鋁型材".to_string(),
            "原物料".to_string(),
            Decimal::from(320),
            Decimal::from(150),
            Decimal::from(800),
            seeded,
        )
        .with_location("A-05".to_string())
        .with_unit_price(Decimal::from(95)),
        InventoryItem::new(
            "INV-0005".to_string(),
            "電路板".to_string(),
            "電子件".to_string(),
            Decimal::from(45),
            Decimal::from(30),
            Decimal::from(300),
            seeded,
        )
        .with_location("C-02".to_string())
        .with_unit_price(Decimal::from(260)),
    ];
    for item in items {
        store.add_item(item).expect("示範庫存資料應通過驗證");
    }

    // 採購訂單
    let orders = vec![
        PurchaseOrder::new(
            "PO-2025-001".to_string(),
            "精工軸承".to_string(),
            "軸承".to_string(),
            "INV-0002".to_string(),
            Decimal::from(50),
            Decimal::from(35),
            date(2025, 10, 20),
        )
        .with_status(PurchaseOrderStatus::Ordered),
        PurchaseOrder::new(
            "PO-2025-002".to_string(),
            "台灣馬達".to_string(),
            "馬達".to_string(),
            "INV-0003".to_string(),
            Decimal::from(100),
            Decimal::from(450),
            date(2025, 11, 5),
        )
        .with_status(PurchaseOrderStatus::Pending),
        PurchaseOrder::new(
            "PO-2025-003".to_string(),
            "大同鋼鐵".to_string(),
            "鋼板".to_string(),
            "INV-0001".to_string(),
            Decimal::from(200),
            Decimal::from(120),
            date(2025, 11, 12),
        )
        .with_status(PurchaseOrderStatus::Approved),
    ];
    for order in orders {
        store.add_order(order).expect("示範採購資料應通過驗證");
    }

    // 產品用料
    store
        .define_product(
            "齒輪箱".to_string(),
            vec![
                MaterialLine::new("INV-0001".to_string(), "鋼板".to_string(), Decimal::from(4)),
                MaterialLine::new("INV-0002".to_string(), "軸承".to_string(), Decimal::from(8)),
            ],
        )
        .expect("示範用料定義應通過驗證");
    store
        .define_product(
            "輸送帶".to_string(),
            vec![
                MaterialLine::new(
                    "INV-0004".to_string(),
                    "鋁型材".to_string(),
                    Decimal::from(12),
                ),
                MaterialLine::new("INV-0003".to_string(), "馬達".to_string(), Decimal::from(2)),
            ],
        )
        .expect("示範用料定義應通過驗證");

    // 物料需求
    let requirements = vec![
        MaterialRequirement::new(
            "INV-0001".to_string(),
            "鋼板".to_string(),
            Decimal::from(4),
            Decimal::from(500),
        )
        .with_supplier("大同鋼鐵".to_string())
        .with_related_order("ORD-2025-101".to_string())
        .with_status(RequirementStatus::Available),
        MaterialRequirement::new(
            "INV-0002".to_string(),
            "軸承".to_string(),
            Decimal::from(8),
            Decimal::from(85),
        )
        .with_supplier("精工軸承".to_string())
        .with_related_order("ORD-2025-101".to_string())
        .with_status(RequirementStatus::Ordered),
        MaterialRequirement::new(
            "INV-0003".to_string(),
            "馬達".to_string(),
            Decimal::from(2),
            Decimal::ZERO,
        )
        .with_supplier("台灣馬達".to_string())
        .with_related_order("ORD-2025-102".to_string())
        .with_status(RequirementStatus::Shortage),
    ];
    for requirement in requirements {
        store
            .add_requirement(requirement)
            .expect("示範需求資料應通過驗證");
    }

    // 生產排程
    let schedules = vec![
        ProductionSchedule::new(
            "PS-2025-001".to_string(),
            "齒輪箱".to_string(),
            "ORD-2025-101".to_string(),
            date(2025, 11, 1),
            date(2025, 11, 10),
        ),
        ProductionSchedule::new(
            "PS-2025-002".to_string(),
            "輸送帶".to_string(),
            "ORD-2025-102".to_string(),
            date(2025, 11, 5),
            date(2025, 11, 20),
        )
        .with_status(ScheduleStatus::InProgress),
    ];
    for schedule in schedules {
        store.add_schedule(schedule).expect("示範排程資料應通過驗證");
    }

    store
}

//! 採購收貨流程示例

use chrono::NaiveDate;
use erp::{process_procurement_receipt, seed, PurchaseOrderStatus, RecordStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 採購收貨流程示例 ===\n");

    let mut store = seed::demo_store();
    let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();

    println!("收貨前庫存:");
    for item in store.items() {
        println!(
            "  - {} {}: {}（{}）",
            item.item_code, item.item_name, item.current_stock, item.status
        );
    }

    // UI 將採購單標記為已收貨，再交給同步規則傳播
    let po_number = "PO-2025-001";
    let previous = store.set_order_status(po_number, PurchaseOrderStatus::Received)?;
    let applied = process_procurement_receipt(
        &mut store,
        po_number,
        previous,
        PurchaseOrderStatus::Received,
        today,
    )?;

    println!("\n收貨結果:");
    println!("{}", serde_json::to_string_pretty(&applied)?);

    // 同一轉換再觸發一次：狀態守門擋下
    let current = store
        .order(po_number)
        .map(|o| o.status)
        .unwrap_or(PurchaseOrderStatus::Received);
    let again = process_procurement_receipt(
        &mut store,
        po_number,
        current,
        PurchaseOrderStatus::Received,
        today,
    );
    println!("\n重複收貨: {}", again.unwrap_err());

    Ok(())
}

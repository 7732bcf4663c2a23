//! 生產完工流程示例

use chrono::NaiveDate;
use erp::{
    check_inventory_availability, process_production_completion, seed, RecordStore, ScheduleStatus,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 生產完工流程示例 ===\n");

    let mut store = seed::demo_store();
    let today = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();

    // 缺料的排程：輸送帶需要馬達，庫存為 0
    let check = check_inventory_availability(&store, "輸送帶");
    println!("輸送帶物料檢查: available = {}", check.available);
    for missing in &check.missing {
        println!(
            "  短缺 {}：需要 {}，可用 {}",
            missing.material_name, missing.required, missing.available
        );
    }

    let blocked = process_production_completion(&mut store, "輸送帶", "ORD-2025-102", today)?;
    println!("輸送帶完工: success = {}", blocked.success);
    for error in &blocked.errors {
        println!("  {}", error);
    }

    // 料齊的排程：齒輪箱
    println!("\n齒輪箱完工:");
    store.set_schedule_status("PS-2025-001", ScheduleStatus::Completed)?;
    let report = process_production_completion(&mut store, "齒輪箱", "ORD-2025-101", today)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\n扣帳後物料需求:");
    for req in store.requirements() {
        println!(
            "  - {} 需求 {} / 可用 {} / 缺口 {}（{:?}）",
            req.material_name, req.required_qty, req.available_qty, req.shortfall, req.status
        );
    }

    Ok(())
}

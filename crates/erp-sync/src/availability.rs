//! 物料可用性檢查

use rust_decimal::Decimal;

use erp_core::MaterialLine;
use erp_store::RecordStore;

use crate::{AvailabilityReport, MaterialShortage};

/// 檢查產品所需物料是否全數可滿足
///
/// 用料先依庫存編號彙總，同一物料的多行以總量比對庫存；
/// 短缺全部收集後一次回報，不提前中斷。未定義用料的產品
/// 視為不可滿足且無短缺明細（沿用來源系統的行為）
pub fn check_inventory_availability<S: RecordStore>(
    store: &S,
    product_name: &str,
) -> AvailabilityReport {
    let lines = match store.product_materials(product_name) {
        Some(lines) => lines,
        None => {
            tracing::debug!("產品 {} 未定義用料，視為不可滿足", product_name);
            return AvailabilityReport::insufficient(Vec::new());
        }
    };

    let mut missing = Vec::new();
    for line in &MaterialLine::aggregate(lines) {
        // 找不到庫存列時可用量以 0 計
        let available = store
            .item(&line.item_code)
            .map(|item| item.current_stock)
            .unwrap_or(Decimal::ZERO);

        if available < line.required_qty {
            tracing::debug!(
                "物料 {} 短缺：需要 {}，可用 {}",
                line.material_name,
                line.required_qty,
                available
            );
            missing.push(MaterialShortage {
                item_code: line.item_code.clone(),
                material_name: line.material_name.clone(),
                required: line.required_qty,
                available,
            });
        }
    }

    if missing.is_empty() {
        AvailabilityReport::sufficient()
    } else {
        AvailabilityReport::insufficient(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_core::MaterialLine;
    use erp_store::{seed, MemoryStore};

    #[test]
    fn test_availability_sufficient() {
        // 齒輪箱：鋼板 4（庫存 500）、軸承 8（庫存 85）
        let store = seed::demo_store();
        let report = check_inventory_availability(&store, "齒輪箱");

        assert!(report.available);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_availability_collects_all_shortages() {
        // 輸送帶：鋁型材 12（庫存 320）、馬達 2（庫存 0）
        let store = seed::demo_store();
        let report = check_inventory_availability(&store, "輸送帶");

        assert!(!report.available);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].item_code, "INV-0003");
        assert_eq!(report.missing[0].required, Decimal::from(2));
        assert_eq!(report.missing[0].available, Decimal::ZERO);
    }

    #[test]
    fn test_availability_unmapped_product() {
        let store = seed::demo_store();
        let report = check_inventory_availability(&store, "不存在的產品");

        // 未定義用料：不可滿足且無明細
        assert!(!report.available);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_availability_missing_inventory_row() {
        let mut store = MemoryStore::new();
        store
            .define_product(
                "原型機".to_string(),
                vec![MaterialLine::new(
                    "INV-0404".to_string(),
                    "特規零件".to_string(),
                    Decimal::from(3),
                )],
            )
            .unwrap();

        let report = check_inventory_availability(&store, "原型機");
        assert!(!report.available);
        assert_eq!(report.missing[0].available, Decimal::ZERO);
        assert_eq!(report.missing[0].required, Decimal::from(3));
    }

    #[test]
    fn test_availability_sums_duplicate_lines() {
        // 同一物料兩行各 300、庫存 500：以總量 600 比對，必須判為短缺
        let mut store = MemoryStore::new();
        store
            .add_item(erp_core::InventoryItem::new(
                "INV-0020".to_string(),
                "鑄件".to_string(),
                "零件".to_string(),
                Decimal::from(500),
                Decimal::from(50),
                Decimal::from(1000),
                chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            ))
            .unwrap();
        store
            .define_product(
                "機座".to_string(),
                vec![
                    MaterialLine::new("INV-0020".to_string(), "鑄件".to_string(), Decimal::from(300)),
                    MaterialLine::new("INV-0020".to_string(), "鑄件".to_string(), Decimal::from(300)),
                ],
            )
            .unwrap();

        let report = check_inventory_availability(&store, "機座");
        assert!(!report.available);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].required, Decimal::from(600));
        assert_eq!(report.missing[0].available, Decimal::from(500));
    }

    #[test]
    fn test_availability_shortage_detail() {
        // 場景：需求 4、可用 1 → missing 一筆 {required: 4, available: 1}
        let mut store = MemoryStore::new();
        store
            .add_item(erp_core::InventoryItem::new(
                "INV-0010".to_string(),
                "油封".to_string(),
                "零件".to_string(),
                Decimal::from(1),
                Decimal::from(5),
                Decimal::from(50),
                chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            ))
            .unwrap();
        store
            .define_product(
                "泵浦".to_string(),
                vec![MaterialLine::new(
                    "INV-0010".to_string(),
                    "油封".to_string(),
                    Decimal::from(4),
                )],
            )
            .unwrap();

        let report = check_inventory_availability(&store, "泵浦");
        assert!(!report.available);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].required, Decimal::from(4));
        assert_eq!(report.missing[0].available, Decimal::from(1));
    }
}

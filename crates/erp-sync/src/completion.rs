//! 生產完工同步
//!
//! 排程轉入 Completed 時，先整批驗證物料，再逐料扣帳並
//! 回寫關聯的物料需求列

use chrono::NaiveDate;

use erp_core::{ErpError, MaterialLine};
use erp_store::RecordStore;

use crate::{check_inventory_availability, CompletionReport, MaterialConsumption};

/// 處理生產完工的庫存同步
///
/// 全有或全無：任一物料不足即回報全部短缺訊息且零變動。
/// 用料依庫存編號彙總後扣帳，與可用性檢查使用同一份總量，
/// 通過檢查的清單必定可完整扣完。未定義用料的產品回傳
/// ProductNotFound
pub fn process_production_completion<S: RecordStore>(
    store: &mut S,
    product_name: &str,
    order_number: &str,
    as_of: NaiveDate,
) -> erp_core::Result<CompletionReport> {
    let lines: Vec<MaterialLine> = store
        .product_materials(product_name)
        .map(MaterialLine::aggregate)
        .ok_or_else(|| ErpError::ProductNotFound(product_name.to_string()))?;

    tracing::info!(
        "生產完工扣帳：產品 {}，訂單 {}，用料 {} 筆",
        product_name,
        order_number,
        lines.len()
    );

    // 扣帳前整批重驗，不足則零變動
    let report = check_inventory_availability(store, product_name);
    if !report.available {
        let errors: Vec<String> = report
            .missing
            .iter()
            .map(|m| {
                format!(
                    "{} 庫存不足：需要 {}, 可用 {}",
                    m.material_name, m.required, m.available
                )
            })
            .collect();
        tracing::info!("產品 {} 物料不足，取消扣帳：{} 筆短缺", product_name, errors.len());
        return Ok(CompletionReport::failed(errors));
    }

    let mut updates = Vec::new();
    for line in &lines {
        let item = store
            .item_mut(&line.item_code)
            .ok_or_else(|| ErpError::ItemNotFound(line.item_code.clone()))?;

        item.consume(line.required_qty, as_of)?;
        let remaining = item.current_stock;
        let new_status = item.status;

        tracing::debug!(
            "扣帳 {}：-{}，剩餘 {}（{}）",
            line.material_name,
            line.required_qty,
            remaining,
            new_status
        );

        // 回寫關聯訂單的物料需求列。名稱採雙向子字串模糊比對，
        // 非穩定外鍵；重疊名稱可能交叉更新（已知問題，維持原行為）
        for req in store.requirements_mut() {
            let order_matches = req
                .related_order
                .as_deref()
                .is_some_and(|o| o == order_number);
            if order_matches && names_overlap(&req.material_name, &line.material_name) {
                req.refresh_availability(remaining);
            }
        }

        updates.push(MaterialConsumption {
            item_code: line.item_code.clone(),
            material_name: line.material_name.clone(),
            consumed: line.required_qty,
            remaining,
            new_status,
        });
    }

    Ok(CompletionReport::succeeded(updates))
}

/// 名稱模糊比對：不分大小寫，任一方為另一方的子字串即視為相符
fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

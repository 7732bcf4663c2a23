//! 採購收貨同步
//!
//! 採購訂單轉入 Received 時，將訂單數量加回關聯庫存，恰好一列

use chrono::NaiveDate;

use erp_core::{ErpError, PurchaseOrderStatus};
use erp_store::RecordStore;

use crate::ReceiptApplied;

/// 處理採購收貨的庫存同步
///
/// 僅在 `new_status == Received && previous_status != Received` 時生效；
/// 其餘轉換回傳 NoOp 且零變動。冪等性由狀態守門保證：同一張單
/// 第二次呼叫時 previous_status 已是 Received
pub fn process_procurement_receipt<S: RecordStore>(
    store: &mut S,
    po_number: &str,
    previous_status: PurchaseOrderStatus,
    new_status: PurchaseOrderStatus,
    as_of: NaiveDate,
) -> erp_core::Result<ReceiptApplied> {
    if new_status != PurchaseOrderStatus::Received
        || previous_status == PurchaseOrderStatus::Received
    {
        return Err(ErpError::NoOp(format!(
            "採購單 {} 狀態轉換 {:?} → {:?} 不觸發收貨",
            po_number, previous_status, new_status
        )));
    }

    let order = store
        .order(po_number)
        .ok_or_else(|| ErpError::OrderNotFound(po_number.to_string()))?;
    let item_code = order.item_code.clone();
    let quantity = order.quantity;

    let item = store
        .item_mut(&item_code)
        .ok_or_else(|| ErpError::ItemNotFound(item_code.clone()))?;

    item.receive(quantity, as_of);

    let applied = ReceiptApplied {
        po_number: po_number.to_string(),
        item_code,
        item_name: item.item_name.clone(),
        quantity_received: quantity,
        new_stock: item.current_stock,
        new_status: item.status,
    };

    tracing::info!(
        "採購收貨入庫：{} → {} 數量 {}，庫存 {}（{}）",
        applied.po_number,
        applied.item_code,
        applied.quantity_received,
        applied.new_stock,
        applied.new_status
    );

    Ok(applied)
}

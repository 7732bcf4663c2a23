//! # ERP Store
//!
//! 記錄存取層：同步規則只依賴 `RecordStore` 介面，儲存後端可替換

pub mod memory;
pub mod seed;

// Re-export 主要類型
pub use memory::MemoryStore;

use erp_core::{
    InventoryItem, MaterialLine, MaterialRequirement, ProductionSchedule, PurchaseOrder,
};

/// 記錄存取介面
///
/// 以表為單位的查詢與可變存取；同步規則透過此介面讀寫，
/// 不直接碰觸底層集合
pub trait RecordStore {
    /// 依庫存編號查詢庫存項目
    fn item(&self, item_code: &str) -> Option<&InventoryItem>;

    /// 依庫存編號取得可變庫存項目
    fn item_mut(&mut self, item_code: &str) -> Option<&mut InventoryItem>;

    /// 依採購單號查詢採購訂單
    fn order(&self, po_number: &str) -> Option<&PurchaseOrder>;

    /// 依採購單號取得可變採購訂單
    fn order_mut(&mut self, po_number: &str) -> Option<&mut PurchaseOrder>;

    /// 依排程編號查詢生產排程
    fn schedule(&self, schedule_id: &str) -> Option<&ProductionSchedule>;

    /// 依排程編號取得可變生產排程
    fn schedule_mut(&mut self, schedule_id: &str) -> Option<&mut ProductionSchedule>;

    /// 所有物料需求
    fn requirements(&self) -> &[MaterialRequirement];

    /// 所有物料需求（可變）
    fn requirements_mut(&mut self) -> &mut [MaterialRequirement];

    /// 查詢產品用料定義
    fn product_materials(&self, product_name: &str) -> Option<&[MaterialLine]>;
}

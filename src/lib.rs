//! # ERP
//!
//! 企業資源規劃儀表板的核心：記憶體記錄存取與跨模組同步規則。
//! 展示層（路由、表單、表格）不在此 crate 範圍內，由呼叫端
//! 將回傳結果轉成使用者通知

pub use erp_core::{
    ErpError, InventoryItem, MaterialLine, MaterialRequirement, ProductionSchedule, PurchaseOrder,
    PurchaseOrderStatus, RequirementStatus, Result, ScheduleStatus, StockStatus,
};
pub use erp_store::{seed, MemoryStore, RecordStore};
pub use erp_sync::{
    check_inventory_availability, process_procurement_receipt, process_production_completion,
    AvailabilityReport, CompletionReport, MaterialConsumption, MaterialShortage, ReceiptApplied,
};

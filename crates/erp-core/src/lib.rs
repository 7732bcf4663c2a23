//! # ERP Core
//!
//! 核心資料模型與類型定義

pub mod inventory;
pub mod procurement;
pub mod product;
pub mod requirement;
pub mod schedule;

// Re-export 主要類型
pub use inventory::{InventoryItem, StockStatus};
pub use procurement::{PurchaseOrder, PurchaseOrderStatus};
pub use product::MaterialLine;
pub use requirement::{MaterialRequirement, RequirementStatus};
pub use schedule::{ProductionSchedule, ScheduleStatus};

/// ERP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ErpError {
    #[error("找不到採購訂單: {0}")]
    OrderNotFound(String),

    #[error("找不到庫存項目: {0}")]
    ItemNotFound(String),

    #[error("找不到產品用料定義: {0}")]
    ProductNotFound(String),

    #[error("找不到生產排程: {0}")]
    ScheduleNotFound(String),

    #[error("欄位驗證失敗: {0}")]
    Validation(String),

    #[error("狀態轉換不觸發同步: {0}")]
    NoOp(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ErpError>;

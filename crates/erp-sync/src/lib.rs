//! # ERP Sync
//!
//! 跨模組同步規則：採購收貨與生產完工對庫存的傳播

pub mod availability;
pub mod completion;
pub mod receipt;

// Re-export 主要類型與入口
pub use availability::check_inventory_availability;
pub use completion::process_production_completion;
pub use receipt::process_procurement_receipt;

use rust_decimal::Decimal;
use serde::Serialize;

use erp_core::StockStatus;

/// 收貨同步結果
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptApplied {
    /// 採購單號
    pub po_number: String,

    /// 入庫的庫存編號
    pub item_code: String,

    /// 品名
    pub item_name: String,

    /// 入庫數量
    pub quantity_received: Decimal,

    /// 入庫後庫存
    pub new_stock: Decimal,

    /// 入庫後狀態
    pub new_status: StockStatus,
}

/// 單一物料的短缺明細
#[derive(Debug, Clone, Serialize)]
pub struct MaterialShortage {
    /// 庫存編號
    pub item_code: String,

    /// 物料名稱
    pub material_name: String,

    /// 需求數量
    pub required: Decimal,

    /// 可用數量
    pub available: Decimal,
}

/// 物料可用性檢查結果
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityReport {
    /// 全部物料是否可滿足
    pub available: bool,

    /// 短缺明細（全部收集，不提前中斷）
    pub missing: Vec<MaterialShortage>,
}

impl AvailabilityReport {
    /// 可滿足的檢查結果
    pub fn sufficient() -> Self {
        Self {
            available: true,
            missing: Vec::new(),
        }
    }

    /// 不可滿足的檢查結果
    pub fn insufficient(missing: Vec<MaterialShortage>) -> Self {
        Self {
            available: false,
            missing,
        }
    }
}

/// 單一物料的扣帳明細
#[derive(Debug, Clone, Serialize)]
pub struct MaterialConsumption {
    /// 庫存編號
    pub item_code: String,

    /// 物料名稱
    pub material_name: String,

    /// 扣帳數量
    pub consumed: Decimal,

    /// 扣帳後庫存
    pub remaining: Decimal,

    /// 扣帳後狀態
    pub new_status: StockStatus,
}

/// 完工同步結果
///
/// 物料不足不是異常流程，直接以 success 旗標與訊息清單回報，
/// 由呼叫端轉成使用者通知
#[derive(Debug, Clone, Serialize)]
pub struct CompletionReport {
    /// 是否完成扣帳
    pub success: bool,

    /// 各物料扣帳明細
    pub updates: Vec<MaterialConsumption>,

    /// 錯誤訊息（全部收集）
    pub errors: Vec<String>,
}

impl CompletionReport {
    /// 扣帳成功的結果
    pub fn succeeded(updates: Vec<MaterialConsumption>) -> Self {
        Self {
            success: true,
            updates,
            errors: Vec::new(),
        }
    }

    /// 扣帳失敗的結果（零變動）
    pub fn failed(errors: Vec<String>) -> Self {
        Self {
            success: false,
            updates: Vec::new(),
            errors,
        }
    }
}

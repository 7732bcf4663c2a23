//! 採購訂單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 採購訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    /// 待審核
    Pending,
    /// 已核准
    Approved,
    /// 已下單
    Ordered,
    /// 已收貨（觸發庫存同步）
    Received,
    /// 已交付
    Delivered,
}

/// 採購訂單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// 採購單號（唯一鍵）
    pub po_number: String,

    /// 供應商
    pub supplier: String,

    /// 物料名稱
    pub material_name: String,

    /// 關聯庫存編號
    pub item_code: String,

    /// 採購數量
    pub quantity: Decimal,

    /// 單價
    pub unit_price: Decimal,

    /// 總金額（數量 × 單價）
    pub total_amount: Decimal,

    /// 預計交期
    pub expected_delivery: NaiveDate,

    /// 訂單狀態
    pub status: PurchaseOrderStatus,
}

impl PurchaseOrder {
    /// 創建新的採購訂單
    pub fn new(
        po_number: String,
        supplier: String,
        material_name: String,
        item_code: String,
        quantity: Decimal,
        unit_price: Decimal,
        expected_delivery: NaiveDate,
    ) -> Self {
        let total_amount = quantity * unit_price;
        Self {
            po_number,
            supplier,
            material_name,
            item_code,
            quantity,
            unit_price,
            total_amount,
            expected_delivery,
            status: PurchaseOrderStatus::Pending,
        }
    }

    /// 建構器模式：設置訂單狀態
    pub fn with_status(mut self, status: PurchaseOrderStatus) -> Self {
        self.status = status;
        self
    }

    /// 驗證必填欄位
    pub fn validate(&self) -> crate::Result<()> {
        if self.po_number.trim().is_empty() {
            return Err(crate::ErpError::Validation("採購單號不可為空".to_string()));
        }
        if self.supplier.trim().is_empty() {
            return Err(crate::ErpError::Validation("供應商不可為空".to_string()));
        }
        if self.item_code.trim().is_empty() {
            return Err(crate::ErpError::Validation(
                "關聯庫存編號不可為空".to_string(),
            ));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(crate::ErpError::Validation(format!(
                "採購數量必須為正: {}",
                self.quantity
            )));
        }
        Ok(())
    }

    /// 檢查是否已收貨
    pub fn is_received(&self) -> bool {
        matches!(
            self.status,
            PurchaseOrderStatus::Received | PurchaseOrderStatus::Delivered
        )
    }
}

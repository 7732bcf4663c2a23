//! 物料需求模型（MRP 記錄）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 物料需求狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementStatus {
    /// 需求確立
    Required,
    /// 已下採購單
    Ordered,
    /// 庫存可滿足
    Available,
    /// 短缺
    Shortage,
    /// 已收料
    Received,
}

/// 物料需求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// 需求ID
    pub id: Uuid,

    /// 物料編號
    pub material_code: String,

    /// 物料名稱
    pub material_name: String,

    /// 需求數量
    pub required_qty: Decimal,

    /// 可用數量
    pub available_qty: Decimal,

    /// 缺口（恆等於 max(0, 需求 - 可用)）
    pub shortfall: Decimal,

    /// 供應商
    pub supplier: Option<String>,

    /// 需求狀態
    pub status: RequirementStatus,

    /// 關聯生產訂單號（鬆散連結，非穩定外鍵）
    pub related_order: Option<String>,
}

impl MaterialRequirement {
    /// 創建新的物料需求
    pub fn new(
        material_code: String,
        material_name: String,
        required_qty: Decimal,
        available_qty: Decimal,
    ) -> Self {
        let shortfall = Self::compute_shortfall(required_qty, available_qty);
        Self {
            id: Uuid::new_v4(),
            material_code,
            material_name,
            required_qty,
            available_qty,
            shortfall,
            supplier: None,
            status: RequirementStatus::Required,
            related_order: None,
        }
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// 建構器模式：設置關聯生產訂單
    pub fn with_related_order(mut self, order_number: String) -> Self {
        self.related_order = Some(order_number);
        self
    }

    /// 建構器模式：設置需求狀態
    pub fn with_status(mut self, status: RequirementStatus) -> Self {
        self.status = status;
        self
    }

    /// 驗證必填欄位與數量
    pub fn validate(&self) -> crate::Result<()> {
        if self.material_code.trim().is_empty() {
            return Err(crate::ErpError::Validation("物料編號不可為空".to_string()));
        }
        if self.required_qty < Decimal::ZERO {
            return Err(crate::ErpError::Validation(format!(
                "需求數量不可為負: {}",
                self.required_qty
            )));
        }
        if self.available_qty < Decimal::ZERO {
            return Err(crate::ErpError::Validation(format!(
                "可用數量不可為負: {}",
                self.available_qty
            )));
        }
        Ok(())
    }

    /// 計算缺口
    pub fn compute_shortfall(required: Decimal, available: Decimal) -> Decimal {
        (required - available).max(Decimal::ZERO)
    }

    /// 更新可用數量，並重算缺口與狀態
    pub fn refresh_availability(&mut self, available_qty: Decimal) {
        self.available_qty = available_qty;
        self.shortfall = Self::compute_shortfall(self.required_qty, available_qty);
        self.status = if self.shortfall > Decimal::ZERO {
            RequirementStatus::Shortage
        } else {
            RequirementStatus::Available
        };
    }

    /// 檢查是否有缺口
    pub fn has_shortage(&self) -> bool {
        self.shortfall > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requirement() {
        let req = MaterialRequirement::new(
            "INV-0001".to_string(),
            "鋼板".to_string(),
            Decimal::from(40),
            Decimal::from(25),
        )
        .with_supplier("大同鋼鐵".to_string())
        .with_related_order("ORD-2025-101".to_string());

        assert_eq!(req.shortfall, Decimal::from(15));
        assert!(req.has_shortage());
        assert_eq!(req.related_order, Some("ORD-2025-101".to_string()));
        assert_eq!(req.status, RequirementStatus::Required);
    }

    #[test]
    fn test_validate_rejects_negative_quantities() {
        let mut req = MaterialRequirement::new(
            "INV-0001".to_string(),
            "鋼板".to_string(),
            Decimal::from(-4),
            Decimal::ZERO,
        );
        assert!(req.validate().is_err());

        req.required_qty = Decimal::from(4);
        req.available_qty = Decimal::from(-1);
        assert!(req.validate().is_err());

        req.available_qty = Decimal::ZERO;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_shortfall_never_negative() {
        let req = MaterialRequirement::new(
            "INV-0002".to_string(),
            "軸承".to_string(),
            Decimal::from(10),
            Decimal::from(50),
        );
        assert_eq!(req.shortfall, Decimal::ZERO);
        assert!(!req.has_shortage());
    }

    #[test]
    fn test_refresh_availability() {
        let mut req = MaterialRequirement::new(
            "INV-0003".to_string(),
            "馬達".to_string(),
            Decimal::from(30),
            Decimal::from(5),
        );
        assert_eq!(req.shortfall, Decimal::from(25));

        // 可用量補足後，狀態翻轉為 Available
        req.refresh_availability(Decimal::from(60));
        assert_eq!(req.shortfall, Decimal::ZERO);
        assert_eq!(req.status, RequirementStatus::Available);

        // 可用量下降，回到 Shortage
        req.refresh_availability(Decimal::from(12));
        assert_eq!(req.shortfall, Decimal::from(18));
        assert_eq!(req.status, RequirementStatus::Shortage);
    }
}

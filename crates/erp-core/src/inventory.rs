//! 庫存模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存狀態（由庫存量推導，UI 顯示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// 庫存充足
    InStock,
    /// 低於最低庫存
    LowStock,
    /// 無庫存
    OutOfStock,
}

impl StockStatus {
    /// 由庫存量推導狀態
    ///
    /// 分層表保留原始順序；`>= maximum` 分支實際被 `> minimum` 涵蓋
    pub fn derive(current: Decimal, minimum: Decimal, maximum: Decimal) -> Self {
        if current >= maximum {
            StockStatus::InStock
        } else if current > minimum {
            StockStatus::InStock
        } else if current > Decimal::ZERO {
            StockStatus::LowStock
        } else {
            StockStatus::OutOfStock
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        };
        write!(f, "{}", label)
    }
}

/// 庫存項目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 庫存編號（唯一鍵）
    pub item_code: String,

    /// 品名
    pub item_name: String,

    /// 分類
    pub category: String,

    /// 現有庫存
    pub current_stock: Decimal,

    /// 最低庫存
    pub minimum_stock: Decimal,

    /// 最高庫存
    pub maximum_stock: Decimal,

    /// 儲位
    pub location: Option<String>,

    /// 單價
    pub unit_price: Decimal,

    /// 庫存狀態（推導值）
    pub status: StockStatus,

    /// 最後異動日期
    pub last_updated: NaiveDate,
}

impl InventoryItem {
    /// 創建新的庫存項目
    pub fn new(
        item_code: String,
        item_name: String,
        category: String,
        current_stock: Decimal,
        minimum_stock: Decimal,
        maximum_stock: Decimal,
        last_updated: NaiveDate,
    ) -> Self {
        let status = StockStatus::derive(current_stock, minimum_stock, maximum_stock);
        Self {
            item_code,
            item_name,
            category,
            current_stock,
            minimum_stock,
            maximum_stock,
            location: None,
            unit_price: Decimal::ZERO,
            status,
            last_updated,
        }
    }

    /// 建構器模式：設置儲位
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// 建構器模式：設置單價
    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// 驗證必填欄位與庫存上下限
    pub fn validate(&self) -> crate::Result<()> {
        if self.item_code.trim().is_empty() {
            return Err(crate::ErpError::Validation("庫存編號不可為空".to_string()));
        }
        if self.item_name.trim().is_empty() {
            return Err(crate::ErpError::Validation("品名不可為空".to_string()));
        }
        if self.current_stock < Decimal::ZERO {
            return Err(crate::ErpError::Validation(format!(
                "庫存量不可為負: {}",
                self.current_stock
            )));
        }
        if self.minimum_stock > self.maximum_stock {
            return Err(crate::ErpError::Validation(format!(
                "最低庫存 {} 不可高於最高庫存 {}",
                self.minimum_stock, self.maximum_stock
            )));
        }
        Ok(())
    }

    /// 重新推導庫存狀態
    pub fn recompute_status(&mut self) {
        self.status = StockStatus::derive(self.current_stock, self.minimum_stock, self.maximum_stock);
    }

    /// 收貨入庫
    pub fn receive(&mut self, quantity: Decimal, as_of: NaiveDate) {
        self.current_stock += quantity;
        self.recompute_status();
        self.last_updated = as_of;
    }

    /// 領料出庫
    pub fn consume(&mut self, quantity: Decimal, as_of: NaiveDate) -> crate::Result<()> {
        if quantity > self.current_stock {
            return Err(crate::ErpError::Validation(format!(
                "庫存不足：需要 {}, 可用 {}",
                quantity, self.current_stock
            )));
        }
        self.current_stock -= quantity;
        self.recompute_status();
        self.last_updated = as_of;
        Ok(())
    }

    /// 檢查庫存是否低於最低庫存
    pub fn is_below_minimum(&self) -> bool {
        self.current_stock <= self.minimum_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_item() {
        let item = InventoryItem::new(
            "INV-0001".to_string(),
            "鋼板".to_string(),
            "原物料".to_string(),
            Decimal::from(500),
            Decimal::from(100),
            Decimal::from(1000),
            date(2025, 10, 1),
        )
        .with_location("A-01".to_string())
        .with_unit_price(Decimal::from(120));

        assert_eq!(item.item_code, "INV-0001");
        assert_eq!(item.status, StockStatus::InStock);
        assert_eq!(item.location, Some("A-01".to_string()));
        assert!(item.validate().is_ok());
    }

    #[rstest]
    #[case(0, StockStatus::OutOfStock)]
    #[case(1, StockStatus::LowStock)]
    #[case(100, StockStatus::LowStock)] // 等於最低庫存仍是 Low
    #[case(101, StockStatus::InStock)]
    #[case(600, StockStatus::InStock)] // 達到最高庫存
    fn test_status_tiers(#[case] stock: i64, #[case] expected: StockStatus) {
        let status = StockStatus::derive(
            Decimal::from(stock),
            Decimal::from(100),
            Decimal::from(600),
        );
        assert_eq!(status, expected);
    }

    #[test]
    fn test_receive_recomputes_status() {
        let mut item = InventoryItem::new(
            "INV-0002".to_string(),
            "軸承".to_string(),
            "零件".to_string(),
            Decimal::from(85),
            Decimal::from(100),
            Decimal::from(600),
            date(2025, 10, 1),
        );
        assert_eq!(item.status, StockStatus::LowStock);

        item.receive(Decimal::from(50), date(2025, 10, 15));
        assert_eq!(item.current_stock, Decimal::from(135));
        assert_eq!(item.status, StockStatus::InStock);
        assert_eq!(item.last_updated, date(2025, 10, 15));
    }

    #[test]
    fn test_consume_guards_stock() {
        let mut item = InventoryItem::new(
            "INV-0003".to_string(),
            "馬達".to_string(),
            "零件".to_string(),
            Decimal::from(10),
            Decimal::from(20),
            Decimal::from(200),
            date(2025, 10, 1),
        );

        // 超量領料應該失敗，且不改變庫存
        assert!(item.consume(Decimal::from(11), date(2025, 10, 2)).is_err());
        assert_eq!(item.current_stock, Decimal::from(10));

        assert!(item.consume(Decimal::from(10), date(2025, 10, 2)).is_ok());
        assert_eq!(item.current_stock, Decimal::ZERO);
        assert_eq!(item.status, StockStatus::OutOfStock);
    }

    #[test]
    fn test_validate_min_max() {
        let item = InventoryItem::new(
            "INV-0009".to_string(),
            "螺絲".to_string(),
            "耗材".to_string(),
            Decimal::from(10),
            Decimal::from(500),
            Decimal::from(100), // 最低 > 最高
            date(2025, 10, 1),
        );
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(StockStatus::InStock.to_string(), "In Stock");
        assert_eq!(StockStatus::LowStock.to_string(), "Low Stock");
        assert_eq!(StockStatus::OutOfStock.to_string(), "Out of Stock");
    }
}

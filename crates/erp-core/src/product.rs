//! 產品用料定義

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品用料行：完工一張排程所消耗的物料與數量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialLine {
    /// 關聯庫存編號
    pub item_code: String,

    /// 物料名稱
    pub material_name: String,

    /// 需求數量
    pub required_qty: Decimal,
}

impl MaterialLine {
    /// 創建新的用料行
    pub fn new(item_code: String, material_name: String, required_qty: Decimal) -> Self {
        Self {
            item_code,
            material_name,
            required_qty,
        }
    }

    /// 驗證用料行
    pub fn validate(&self) -> crate::Result<()> {
        if self.item_code.trim().is_empty() {
            return Err(crate::ErpError::Validation(
                "用料行庫存編號不可為空".to_string(),
            ));
        }
        if self.required_qty <= Decimal::ZERO {
            return Err(crate::ErpError::Validation(format!(
                "用料數量必須為正: {} {}",
                self.material_name, self.required_qty
            )));
        }
        Ok(())
    }

    /// 依庫存編號彙總用料行
    ///
    /// 同一物料出現多行時需求數量相加，名稱取首見行；
    /// 可用性檢查與扣帳都必須以彙總後的總量為準，
    /// 逐行各自比對會讓總量超過庫存的清單通過檢查
    pub fn aggregate(lines: &[MaterialLine]) -> Vec<MaterialLine> {
        let mut totals: Vec<MaterialLine> = Vec::new();
        for line in lines {
            match totals.iter_mut().find(|t| t.item_code == line.item_code) {
                Some(total) => total.required_qty += line.required_qty,
                None => totals.push(line.clone()),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_line() {
        let line = MaterialLine::new("INV-0001".to_string(), "鋼板".to_string(), Decimal::from(4));
        assert_eq!(line.item_code, "INV-0001");
        assert_eq!(line.required_qty, Decimal::from(4));
        assert!(line.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_qty() {
        let line = MaterialLine::new("INV-0001".to_string(), "鋼板".to_string(), Decimal::ZERO);
        assert!(line.validate().is_err());

        let line = MaterialLine::new("INV-0001".to_string(), "鋼板".to_string(), Decimal::from(-3));
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_aggregate_merges_duplicate_item_codes() {
        let lines = vec![
            MaterialLine::new("INV-0001".to_string(), "鋼板".to_string(), Decimal::from(300)),
            MaterialLine::new("INV-0002".to_string(), "軸承".to_string(), Decimal::from(8)),
            MaterialLine::new("INV-0001".to_string(), "鋼板".to_string(), Decimal::from(300)),
        ];

        let totals = MaterialLine::aggregate(&lines);
        assert_eq!(totals.len(), 2);
        // 首見順序保留，數量相加
        assert_eq!(totals[0].item_code, "INV-0001");
        assert_eq!(totals[0].required_qty, Decimal::from(600));
        assert_eq!(totals[1].item_code, "INV-0002");
        assert_eq!(totals[1].required_qty, Decimal::from(8));
    }
}

//! 生產排程模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 排程狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// 已排程
    Scheduled,
    /// 生產中
    InProgress,
    /// 已完工（觸發庫存同步）
    Completed,
    /// 延誤
    Delayed,
    /// 暫停
    OnHold,
}

/// 生產排程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSchedule {
    /// 排程編號（唯一鍵）
    pub schedule_id: String,

    /// 產品名稱
    pub product_name: String,

    /// 生產訂單號
    pub order_number: String,

    /// 計劃開工日
    pub planned_start: NaiveDate,

    /// 計劃完工日
    pub planned_end: NaiveDate,

    /// 排程狀態
    pub status: ScheduleStatus,
}

impl ProductionSchedule {
    /// 創建新的生產排程
    pub fn new(
        schedule_id: String,
        product_name: String,
        order_number: String,
        planned_start: NaiveDate,
        planned_end: NaiveDate,
    ) -> Self {
        Self {
            schedule_id,
            product_name,
            order_number,
            planned_start,
            planned_end,
            status: ScheduleStatus::Scheduled,
        }
    }

    /// 建構器模式：設置排程狀態
    pub fn with_status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    /// 驗證必填欄位與日期順序
    pub fn validate(&self) -> crate::Result<()> {
        if self.schedule_id.trim().is_empty() {
            return Err(crate::ErpError::Validation("排程編號不可為空".to_string()));
        }
        if self.product_name.trim().is_empty() {
            return Err(crate::ErpError::Validation("產品名稱不可為空".to_string()));
        }
        if self.planned_end < self.planned_start {
            return Err(crate::ErpError::Validation(format!(
                "計劃完工日 {} 早於開工日 {}",
                self.planned_end, self.planned_start
            )));
        }
        Ok(())
    }

    /// 檢查是否已完工
    pub fn is_completed(&self) -> bool {
        self.status == ScheduleStatus::Completed
    }
}

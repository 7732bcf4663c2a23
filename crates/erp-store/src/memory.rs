//! 記憶體儲存實作

use std::collections::HashMap;

use erp_core::{
    ErpError, InventoryItem, MaterialLine, MaterialRequirement, ProductionSchedule, PurchaseOrder,
    PurchaseOrderStatus, ScheduleStatus,
};

use crate::RecordStore;

/// 記憶體儲存：以 Vec 承載各模組集合，生命週期同頁面工作階段
///
/// 觀察到的流程中記錄只增改、不硬刪除
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<InventoryItem>,
    orders: Vec<PurchaseOrder>,
    requirements: Vec<MaterialRequirement>,
    schedules: Vec<ProductionSchedule>,
    product_materials: HashMap<String, Vec<MaterialLine>>,
}

impl MemoryStore {
    /// 創建空的儲存
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增庫存項目（對應「新增品項」對話框）
    pub fn add_item(&mut self, item: InventoryItem) -> erp_core::Result<()> {
        item.validate()?;
        if self.item(&item.item_code).is_some() {
            return Err(ErpError::Validation(format!(
                "庫存編號重複: {}",
                item.item_code
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// 更新既有庫存項目（對應「編輯品項」對話框）
    pub fn update_item(&mut self, item: InventoryItem) -> erp_core::Result<()> {
        item.validate()?;
        let slot = self
            .item_mut(&item.item_code)
            .ok_or_else(|| ErpError::ItemNotFound(item.item_code.clone()))?;
        *slot = item;
        Ok(())
    }

    /// 新增採購訂單
    pub fn add_order(&mut self, order: PurchaseOrder) -> erp_core::Result<()> {
        order.validate()?;
        if self.order(&order.po_number).is_some() {
            return Err(ErpError::Validation(format!(
                "採購單號重複: {}",
                order.po_number
            )));
        }
        self.orders.push(order);
        Ok(())
    }

    /// 新增物料需求
    pub fn add_requirement(&mut self, requirement: MaterialRequirement) -> erp_core::Result<()> {
        requirement.validate()?;
        self.requirements.push(requirement);
        Ok(())
    }

    /// 新增生產排程
    pub fn add_schedule(&mut self, schedule: ProductionSchedule) -> erp_core::Result<()> {
        schedule.validate()?;
        if self.schedule(&schedule.schedule_id).is_some() {
            return Err(ErpError::Validation(format!(
                "排程編號重複: {}",
                schedule.schedule_id
            )));
        }
        self.schedules.push(schedule);
        Ok(())
    }

    /// 定義產品用料
    ///
    /// 允許同一物料出現多行（同步規則以彙總後總量計算），
    /// 但逐行拒絕空編號與非正數量
    pub fn define_product(
        &mut self,
        product_name: String,
        lines: Vec<MaterialLine>,
    ) -> erp_core::Result<()> {
        if product_name.trim().is_empty() {
            return Err(ErpError::Validation("產品名稱不可為空".to_string()));
        }
        for line in &lines {
            line.validate()?;
        }
        self.product_materials.insert(product_name, lines);
        Ok(())
    }

    /// 變更採購訂單狀態，回傳變更前狀態
    ///
    /// 回傳值直接餵給收貨同步規則作為 previous_status
    pub fn set_order_status(
        &mut self,
        po_number: &str,
        status: PurchaseOrderStatus,
    ) -> erp_core::Result<PurchaseOrderStatus> {
        let order = self
            .order_mut(po_number)
            .ok_or_else(|| ErpError::OrderNotFound(po_number.to_string()))?;
        let previous = order.status;
        order.status = status;
        Ok(previous)
    }

    /// 變更生產排程狀態，回傳變更前狀態
    pub fn set_schedule_status(
        &mut self,
        schedule_id: &str,
        status: ScheduleStatus,
    ) -> erp_core::Result<ScheduleStatus> {
        let schedule = self
            .schedule_mut(schedule_id)
            .ok_or_else(|| ErpError::ScheduleNotFound(schedule_id.to_string()))?;
        let previous = schedule.status;
        schedule.status = status;
        Ok(previous)
    }

    /// 所有庫存項目
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// 所有採購訂單
    pub fn orders(&self) -> &[PurchaseOrder] {
        &self.orders
    }

    /// 所有生產排程
    pub fn schedules(&self) -> &[ProductionSchedule] {
        &self.schedules
    }
}

impl RecordStore for MemoryStore {
    fn item(&self, item_code: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.item_code == item_code)
    }

    fn item_mut(&mut self, item_code: &str) -> Option<&mut InventoryItem> {
        self.items.iter_mut().find(|i| i.item_code == item_code)
    }

    fn order(&self, po_number: &str) -> Option<&PurchaseOrder> {
        self.orders.iter().find(|o| o.po_number == po_number)
    }

    fn order_mut(&mut self, po_number: &str) -> Option<&mut PurchaseOrder> {
        self.orders.iter_mut().find(|o| o.po_number == po_number)
    }

    fn schedule(&self, schedule_id: &str) -> Option<&ProductionSchedule> {
        self.schedules.iter().find(|s| s.schedule_id == schedule_id)
    }

    fn schedule_mut(&mut self, schedule_id: &str) -> Option<&mut ProductionSchedule> {
        self.schedules
            .iter_mut()
            .find(|s| s.schedule_id == schedule_id)
    }

    fn requirements(&self) -> &[MaterialRequirement] {
        &self.requirements
    }

    fn requirements_mut(&mut self) -> &mut [MaterialRequirement] {
        &mut self.requirements
    }

    fn product_materials(&self, product_name: &str) -> Option<&[MaterialLine]> {
        self.product_materials
            .get(product_name)
            .map(|lines| lines.as_slice())
    }
}

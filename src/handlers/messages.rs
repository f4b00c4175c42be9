//! Operator-facing text. All console output goes through this module.

pub const MENU_HEADER: &str = "\n***************選單***************";
pub const MENU_ADD: &str = "1. 新增訂單";
pub const MENU_LIST: &str = "2. 顯示訂單報表";
pub const MENU_FULFILL: &str = "3. 出餐處理";
pub const MENU_QUIT: &str = "4. 離開";
pub const MENU_FOOTER: &str = "**********************************";
pub const MENU_PROMPT: &str = "請選擇操作項目(Enter 離開)：";
pub const MENU_INVALID: &str = "輸入錯誤，請重新選擇。";
pub const GOODBYE: &str = "程式結束，感謝使用。";
pub const UNREADABLE_INPUT: &str = "【錯誤】無法辨識輸入內容，請使用 UTF-8 編碼重新輸入。";

pub const PROMPT_ORDER_ID: &str = "請輸入訂單編號(例如 O001)：";
pub const EMPTY_ORDER_ID: &str = "訂單編號不可為空，請重新輸入。";
pub const PROMPT_CUSTOMER: &str = "請輸入顧客姓名：";
pub const PROMPT_ITEM_NAME: &str = "\n請輸入商品名稱(按 Enter 直接結束輸入商品)：";
pub const PROMPT_PRICE: &str = "請輸入商品價格：";
pub const INVALID_PRICE: &str = "【錯誤】商品價格必須為正整數，請重新輸入。";
pub const PROMPT_QUANTITY: &str = "請輸入商品數量：";
pub const INVALID_QUANTITY: &str = "【錯誤】商品數量必須為正整數，請重新輸入。";
pub const NO_ITEMS: &str = "未輸入任何商品，此筆訂單不建立。";

pub const NO_PENDING: &str = "目前沒有尚未出餐的訂單。";
pub const NO_ORDER_DATA: &str = "目前無任何訂單資料。";
pub const REPORT_HEADING: &str = "\n---【尚未出餐的訂單報表】---";

pub const FULFILL_HEADING: &str = "\n---【目前尚未出餐的訂單列表】---";
pub const PROMPT_SELECTION: &str = "\n請輸入要出餐的訂單「序號」(按 Enter 取消)：";
pub const FULFILL_CANCELLED: &str = "已取消出餐操作。";
pub const INVALID_SELECTION: &str = "請輸入有效的數字序號。";
pub const SELECTION_OUT_OF_RANGE: &str = "序號超出範圍，請重新輸入。";
pub const FULFILLED: &str = "\n已成功出餐，以下為該筆訂單明細：";

pub fn duplicate_order_id(order_id: &str) -> String {
    format!("訂單編號 {order_id} 已存在！請重新輸入。")
}

pub fn order_added(order_id: &str, location: &str) -> String {
    format!("\n訂單 {order_id} 已新增完成，存入 {location}。\n")
}

pub fn pending_summary(position: usize, order_id: &str, customer: &str) -> String {
    format!("{position}. 訂單編號：{order_id} / 客戶：{customer}")
}

pub fn corrupt_store(path: &str, detail: &str) -> String {
    format!("【錯誤】訂單檔案 {path} 內容無法解析，未進行任何變更：{detail}")
}

pub fn storage_failure(detail: &str) -> String {
    format!("【錯誤】訂單檔案讀寫失敗：{detail}")
}

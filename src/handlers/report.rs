use icu_decimal::input::Decimal;
use icu_decimal::DecimalFormatter;
use icu_locale_core::locale;

use crate::domain::order::Order;

use super::messages;

const SEPARATOR_WIDTH: usize = 50;

/// Comma-grouping formatter for `NT$` amounts.
///
/// `None` only if the compiled locale data is missing; amounts are then
/// printed ungrouped.
fn amount_formatter() -> Option<DecimalFormatter> {
    match DecimalFormatter::try_new(locale!("en").into(), Default::default()) {
        Ok(formatter) => Some(formatter),
        Err(e) => {
            log::warn!("Decimal formatter unavailable, amounts will not be grouped: {e}");
            None
        }
    }
}

fn format_amount(formatter: Option<&DecimalFormatter>, n: u128) -> String {
    match formatter {
        Some(formatter) => formatter.format(&Decimal::from(n)).to_string(),
        None => n.to_string(),
    }
}

/// Formats `n` with a comma every three digits, e.g. `1234567` → `1,234,567`.
pub fn group_thousands(n: u128) -> String {
    format_amount(amount_formatter().as_ref(), n)
}

/// Renders the order report: one block per order, closed by a separator.
///
/// Display indices start at 1. An empty slice renders the "no data" line.
pub fn render_report(orders: &[Order]) -> String {
    if orders.is_empty() {
        return format!("{}\n", messages::NO_ORDER_DATA);
    }

    let formatter = amount_formatter();
    let amount = |n: u128| format_amount(formatter.as_ref(), n);
    let separator = "=".repeat(SEPARATOR_WIDTH);

    let mut out = String::new();
    for (idx, order) in orders.iter().enumerate() {
        out.push_str(&format!("{separator}\n"));
        out.push_str(&format!(
            "[訂單 {}] 編號：{} | 客戶：{}\n",
            idx + 1,
            order.order_id,
            order.customer
        ));
        for item in &order.items {
            out.push_str(&format!(
                "  - {} / NT${} x {} = NT${}\n",
                item.name,
                amount(u128::from(item.price)),
                item.quantity,
                amount(item.subtotal())
            ));
        }
        out.push_str(&format!("  >>> 總金額：NT${}\n", amount(order.total())));
    }
    out.push_str(&format!("{separator}\n"));
    out
}

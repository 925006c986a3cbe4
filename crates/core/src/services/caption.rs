use rust_decimal::Decimal;

/// `Order paid by {buyer} for {item} ${amount}`, with the amount rendered
/// exactly as the gateway reported it.
pub fn compose_caption(buyer_name: &str, item_name: &str, amount: Decimal) -> String {
    format!("Order paid by {} for {} ${}", buyer_name, item_name, amount)
}

/// Joins the payer's given name and surname; `"Customer"` when PayPal sent neither.
pub fn buyer_full_name(given_name: Option<&str>, surname: Option<&str>) -> String {
    let full = [given_name, surname]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if full.is_empty() {
        "Customer".to_string()
    } else {
        full
    }
}

//! Static user-facing message templates.
//!
//! Amounts are rendered with `f64`'s `Display`, so whole values print without
//! a fractional part (`1500`) and converted sums keep at most two decimals.

pub const CALORIES_FORBIDDEN: &str = "Хватит есть!";
pub const CASH_SPENT: &str = "Денег нет, держись";
pub const UNKNOWN_CURRENCY: &str = "Неизвестная валюта";

pub fn calories_allowed(left: f64) -> String {
    format!("Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {left} кКал")
}

pub fn cash_left(amount: f64, currency: &str) -> String {
    format!("На сегодня осталось {amount} {currency}")
}

pub fn cash_debt(amount: f64, currency: &str) -> String {
    format!("{CASH_SPENT}: твой долг - {amount} {currency}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_drop_fraction() {
        assert_eq!(
            calories_allowed(1500.0),
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 1500 кКал"
        );
        assert_eq!(cash_left(12.5, "Euro"), "На сегодня осталось 12.5 Euro");
        assert_eq!(cash_debt(7.14, "USD"), "Денег нет, держись: твой долг - 7.14 USD");
    }
}

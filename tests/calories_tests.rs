mod common;

use common::{calories, record};
use limit_tracker::ledger::DailyLimit;
use limit_tracker::messages::CALORIES_FORBIDDEN;

#[test]
fn allowed_message_interpolates_remaining() {
    let mut calc = calories(2000.0);
    calc.add_record(record(500.0, 0));
    assert_eq!(calc.today_remained(), 1500.0);
    assert_eq!(
        calc.calories_remained(),
        "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 1500 кКал"
    );
}

#[test]
fn exhausted_or_exceeded_limit_is_forbidden() {
    let mut calc = calories(2000.0);
    calc.add_record(record(2000.0, 0));
    assert_eq!(calc.calories_remained(), CALORIES_FORBIDDEN);
    calc.add_record(record(1.0, 0));
    assert_eq!(calc.calories_remained(), CALORIES_FORBIDDEN);
}

#[test]
fn untouched_limit_is_forbidden() {
    // left == limit sits outside 0 < left < limit.
    let calc = calories(2000.0);
    assert_eq!(calc.calories_remained(), CALORIES_FORBIDDEN);

    let mut refund = calories(2000.0);
    refund.add_record(record(-100.0, 0));
    assert_eq!(refund.calories_remained(), CALORIES_FORBIDDEN);
}

#[test]
fn older_meals_do_not_count_today() {
    let mut calc = calories(1800.0);
    calc.add_record(record(1500.0, 1));
    calc.add_record(record(300.0, 0));
    assert_eq!(
        calc.calories_remained(),
        "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 1500 кКал"
    );
    assert_eq!(calc.week_stats(), 1800.0);
}

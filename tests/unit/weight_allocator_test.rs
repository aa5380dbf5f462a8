// Weight-proportional allocator tests.
//
// The allocator strips GST from the override total, distributes the net
// subtotal by quantity, and corrects rounding drift cent by cent so the
// allocated amounts always sum to the net subtotal exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use gstbill::{BillingCalculator, CalcError, LineItem, TaxConfig};

fn calculator() -> BillingCalculator {
    BillingCalculator::new(TaxConfig::default())
}

fn item(description: &str, quantity: Decimal) -> LineItem {
    LineItem::with_amount(description, "7113", quantity, Decimal::ZERO, Decimal::ZERO)
}

#[test]
fn test_two_thirds_one_third_split() {
    // 2500.00 inclusive at 3% strips to 2427.18; weights 10 and 5 split it
    // two-thirds/one-third and the shares must sum back exactly.
    let items = vec![item("Bangle", dec!(10)), item("Ring", dec!(5))];
    let updated = calculator()
        .allocate_by_weight(&items, dec!(2500.00))
        .unwrap();

    assert_eq!(updated[0].amount, dec!(1618.12));
    assert_eq!(updated[1].amount, dec!(809.06));

    let total: Decimal = updated.iter().map(|i| i.amount).sum();
    assert_eq!(total, dec!(2427.18));

    assert_eq!(updated[0].rate, dec!(161.81));
    assert_eq!(updated[1].rate, dec!(161.81));
}

#[test]
fn test_metadata_preserved() {
    let items = vec![item("Gold chain", dec!(12.5)), item("Stud pair", dec!(2))];
    let updated = calculator()
        .allocate_by_weight(&items, dec!(50000))
        .unwrap();

    assert_eq!(updated.len(), 2);
    assert_eq!(updated[0].description, "Gold chain");
    assert_eq!(updated[0].hsn_code, "7113");
    assert_eq!(updated[0].quantity, dec!(12.500));
    assert_eq!(updated[1].description, "Stud pair");
    assert_eq!(updated[1].quantity, dec!(2.000));
}

#[test]
fn test_correction_spreads_cents_deterministically() {
    // Six equal weights on a net subtotal of 100.00: each share rounds up
    // to 16.67 (sum 100.02), so two cents come back off the first two
    // items in input order.
    let items: Vec<LineItem> = (0..6).map(|_| item("Coin", dec!(1))).collect();
    let updated = calculator()
        .allocate_by_weight(&items, dec!(103.00))
        .unwrap();

    let amounts: Vec<Decimal> = updated.iter().map(|i| i.amount).collect();
    assert_eq!(
        amounts,
        vec![
            dec!(16.66),
            dec!(16.66),
            dec!(16.67),
            dec!(16.67),
            dec!(16.67),
            dec!(16.67),
        ]
    );

    let total: Decimal = amounts.iter().sum();
    assert_eq!(total, dec!(100.00));
}

#[test]
fn test_allocation_is_reproducible() {
    let items = vec![
        item("A", dec!(3.333)),
        item("B", dec!(3.333)),
        item("C", dec!(3.334)),
    ];

    let first = calculator()
        .allocate_by_weight(&items, dec!(9999.99))
        .unwrap();
    let second = calculator()
        .allocate_by_weight(&items, dec!(9999.99))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_larger_override_raises_every_amount() {
    let items = vec![item("A", dec!(10)), item("B", dec!(5))];

    let lower = calculator()
        .allocate_by_weight(&items, dec!(2500.00))
        .unwrap();
    let higher = calculator()
        .allocate_by_weight(&items, dec!(2600.00))
        .unwrap();

    for (before, after) in lower.iter().zip(&higher) {
        assert!(
            after.amount > before.amount,
            "amount should rise with the override: {} -> {}",
            before.amount,
            after.amount
        );
    }
}

#[test]
fn test_zero_override_total_rejected() {
    let items = vec![item("A", dec!(10))];
    let result = calculator().allocate_by_weight(&items, Decimal::ZERO);

    assert!(matches!(result, Err(CalcError::InvalidOverrideTotal(_))));
}

#[test]
fn test_negative_override_total_rejected() {
    let items = vec![item("A", dec!(10))];
    let result = calculator().allocate_by_weight(&items, dec!(-100));

    assert!(matches!(result, Err(CalcError::InvalidOverrideTotal(_))));
}

#[test]
fn test_zero_total_weight_rejected() {
    let items = vec![item("A", Decimal::ZERO), item("B", Decimal::ZERO)];
    let result = calculator().allocate_by_weight(&items, dec!(1000));

    assert!(matches!(result, Err(CalcError::InvalidOverrideTotal(_))));
}

#[test]
fn test_negative_weight_rejected() {
    let items = vec![item("A", dec!(-1)), item("B", dec!(5))];
    let result = calculator().allocate_by_weight(&items, dec!(1000));

    assert!(matches!(result, Err(CalcError::InvalidOverrideTotal(_))));
}

#[test]
fn test_empty_item_list_rejected() {
    let result = calculator().allocate_by_weight(&[], dec!(1000));

    assert!(matches!(result, Err(CalcError::InvalidOverrideTotal(_))));
}

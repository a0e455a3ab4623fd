//! End-to-end checkout flow: catalog maintenance, billing against it, and
//! receipt generation, exercised the way the terminal drives the core.

use tally_core::{Bill, Catalog, CoreError, LoginOutcome, Money, Role, RoleGate};

/// The canonical scenario: price changes never reach existing lines,
/// modification re-freezes at the current price, removal zeroes out.
#[test]
fn pen_scenario_snapshots_and_repricing() {
    let mut catalog = Catalog::new();
    let mut bill = Bill::new();

    catalog.upsert(1, "Pen", Money::from_cents(10));

    // Add 3 pens at 10.
    let pen = catalog.get(1).expect("pen exists").clone();
    let line = bill.add_line(&pen, 3);
    assert_eq!(line.quantity, 3);
    assert_eq!(line.unit_price, Money::from_cents(10));
    assert_eq!(line.line_total, Money::from_cents(30));
    assert_eq!(bill.total(), Money::from_cents(30));

    // Re-price the pen: the existing line must not move.
    catalog.upsert(1, "Pen", Money::from_cents(20));
    assert_eq!(bill.lines()[0].line_total, Money::from_cents(30));
    assert_eq!(bill.total(), Money::from_cents(30));

    // Modify the line: re-freezes at the NEW catalog price.
    let pen = catalog.get(1).expect("pen exists").clone();
    let line = bill.modify_line(&pen, 5).expect("line exists");
    assert_eq!(line.line_total, Money::from_cents(100));
    assert_eq!(bill.total(), Money::from_cents(100));

    // Remove it: empty bill, zero total.
    bill.remove_line(1).expect("line exists");
    assert!(bill.is_empty());
    assert_eq!(bill.total(), Money::zero());
    assert_eq!(bill.recomputed_total(), Money::zero());
}

/// The operator flow checks the catalog before billing; a product removed
/// by the admin stops being billable but stays on the bill if already
/// there.
#[test]
fn removed_product_stays_on_bill() {
    let mut catalog = Catalog::new();
    let mut bill = Bill::new();

    catalog.upsert(3, "Ink", Money::from_cents(99));
    let ink = catalog.get(3).unwrap().clone();
    bill.add_line(&ink, 2);

    catalog.remove(3).unwrap();
    assert!(!catalog.exists(3));

    // The line is a snapshot; it does not care that the product is gone.
    assert_eq!(bill.total(), Money::from_cents(198));
    assert!(bill.contains(3));

    // But the operator's pre-check now fails, which is how the terminal
    // refuses new lines for it.
    assert!(catalog.get(3).is_none());
}

#[test]
fn receipt_serializes_to_json_and_back() {
    let mut catalog = Catalog::new();
    let mut bill = Bill::new();

    catalog.upsert(1, "Pen", Money::from_cents(10));
    catalog.upsert(2, "Pad", Money::from_cents(55));
    bill.add_line(catalog.get(1).unwrap(), 3);
    bill.add_line(catalog.get(2).unwrap(), 1);

    let receipt = bill.receipt();
    let json = serde_json::to_string(&receipt).expect("receipt serializes");
    let parsed: tally_core::Receipt = serde_json::from_str(&json).expect("receipt parses");

    assert_eq!(parsed, receipt);
    assert_eq!(parsed.total, Money::from_cents(85));
    assert_eq!(parsed.lines.len(), 2);
}

/// A whole session in miniature: admin logs in and stocks the catalog,
/// operator logs in and builds the bill.
#[test]
fn two_role_session() {
    let mut catalog = Catalog::new();
    let mut bill = Bill::new();
    let mut gate = RoleGate::new();

    // Admin shift.
    gate.select_role(1).unwrap();
    assert_eq!(
        gate.verify(tally_core::auth::ADMIN_PASSWORD),
        LoginOutcome::Authenticated(Role::Admin)
    );
    catalog.upsert(1, "Pen", Money::from_cents(10));
    catalog.upsert(2, "Pad", Money::from_cents(55));
    gate.sign_out();

    // Operator shift: a failed login first, then the real one.
    gate.select_role(2).unwrap();
    assert_eq!(gate.verify(1111), LoginOutcome::Rejected);
    gate.select_role(2).unwrap();
    assert_eq!(
        gate.verify(tally_core::auth::OPERATOR_PASSWORD),
        LoginOutcome::Authenticated(Role::Operator)
    );

    bill.add_line(catalog.get(1).unwrap(), 3);
    bill.add_line(catalog.get(2).unwrap(), 2);
    assert_eq!(bill.total(), Money::from_cents(140));

    // Operator looks up an id the admin never entered.
    assert!(catalog.get(42).is_none());
    let err = bill.remove_line(42).unwrap_err();
    assert!(matches!(err, CoreError::LineNotFound(42)));
    assert_eq!(bill.total(), Money::from_cents(140));
}

use anyhow::Result;
use spendwise::application::LedgerScreen;
use spendwise::domain::{
    validate_expense, Category, Cents, ExpenseId, ExpenseLedger, Field, ValidationErrors,
};

fn add(ledger: &mut ExpenseLedger, description: &str, amount: &str, category: Category) -> ExpenseId {
    let expense = validate_expense(description, amount, Some(category)).unwrap();
    ledger.add(expense).id
}

fn sum_present(ledger: &ExpenseLedger) -> Cents {
    ledger.records().iter().map(|r| r.amount_cents).sum()
}

#[test]
fn test_add_grows_by_one_and_total_by_amount() {
    let mut ledger = ExpenseLedger::new();
    let cases = [
        ("Bread", "2.10", Category::Food, 210),
        ("Rent", "950", Category::Housing, 95000),
        ("Dentist", "80.5", Category::Health, 8050),
        ("Concert tickets", "120.00", Category::Entertainment, 12000),
        ("Gift", "0.01", Category::Other, 1),
    ];

    for (description, amount, category, cents) in cases {
        let len_before = ledger.len();
        let total_before = ledger.total();

        add(&mut ledger, description, amount, category);

        assert_eq!(ledger.len(), len_before + 1);
        assert_eq!(ledger.total(), total_before + cents);
    }
}

#[test]
fn test_total_matches_present_records_in_any_order() {
    let mut forward = ExpenseLedger::new();
    let a = add(&mut forward, "Bread", "2.10", Category::Food);
    let b = add(&mut forward, "Rent", "950", Category::Housing);
    let c = add(&mut forward, "Cinema", "11.75", Category::Entertainment);
    forward.remove(b);
    assert_eq!(forward.total(), sum_present(&forward));
    assert_eq!(forward.total(), 210 + 1175);

    let mut reordered = ExpenseLedger::new();
    let c2 = add(&mut reordered, "Cinema", "11.75", Category::Entertainment);
    let b2 = add(&mut reordered, "Rent", "950", Category::Housing);
    reordered.remove(b2);
    add(&mut reordered, "Bread", "2.10", Category::Food);
    assert_eq!(reordered.total(), forward.total());

    forward.remove(a);
    forward.remove(c);
    reordered.remove(c2);
    assert_eq!(forward.total(), 0);
    assert_eq!(reordered.total(), 210);
    assert_eq!(reordered.total(), sum_present(&reordered));
}

#[test]
fn test_remove_unknown_id_changes_nothing() {
    let mut ledger = ExpenseLedger::new();
    let id = add(&mut ledger, "Pharmacy", "15", Category::Health);

    let missing = ExpenseId::from(id.as_i64() + 1000);
    assert!(ledger.remove(missing).is_none());
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total(), 1500);
}

#[test]
fn test_validation_rejections() {
    let cases: [(&str, &str, Option<Category>, Field); 6] = [
        ("", "10", Some(Category::Food), Field::Description),
        ("Bus 42", "10", Some(Category::Other), Field::Description),
        ("Lunch", "twelve", Some(Category::Food), Field::Amount),
        ("Lunch", "0", Some(Category::Food), Field::Amount),
        ("Lunch", "-3", Some(Category::Food), Field::Amount),
        ("Lunch", "12", None, Field::Category),
    ];

    for (description, amount, category, field) in cases {
        let errors = validate_expense(description, amount, category).unwrap_err();
        assert_eq!(errors.invalid_fields(), vec![field], "case {description:?} {amount:?}");
    }

    let all = validate_expense("", "", None).unwrap_err();
    assert_eq!(all.invalid_fields().len(), 3);
}

#[test]
fn test_screen_session_flow() -> Result<()> {
    let mut screen = LedgerScreen::new();

    screen.set_description("Groceries");
    screen.set_amount("40");
    screen.toggle_category_dropdown();
    screen.select_category(Category::Food);
    let groceries = screen.submit()?;

    screen.set_description("Electricity");
    screen.set_amount("60.25");
    screen.select_category(Category::Housing);
    screen.submit()?;

    assert_eq!(screen.total_display(), "$100.25");

    // Invalid submission leaves the ledger untouched
    screen.set_description("Electricity 2");
    screen.set_amount("1");
    screen.select_category(Category::Housing);
    assert!(screen.submit().is_err());
    assert_eq!(screen.dialog().message(), Some(ValidationErrors::MESSAGE));
    assert_eq!(screen.expenses().len(), 2);

    assert!(screen.delete(groceries));
    assert_eq!(screen.total_display(), "$60.25");

    Ok(())
}

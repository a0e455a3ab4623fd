//! # Rendering
//!
//! Menus, tables, and receipts written to any `Write`. Pure formatting:
//! nothing here reads input or touches core state.

use std::io::{self, Write};

use tally_core::{Catalog, LineItem, Product, Receipt};

use crate::config::TerminalConfig;

/// The session banner, printed once at startup.
pub fn banner(out: &mut impl Write, config: &TerminalConfig) -> io::Result<()> {
    writeln!(out, "Welcome to {}", config.store_name)
}

/// The role selection menu.
pub fn role_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Select your role: (choose a number)")?;
    writeln!(out, " 1) Admin\t 2) Counter operator")
}

/// The administrator menu.
pub fn admin_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "What operation do you want to perform? (choose a number)")?;
    writeln!(out, " 1) Add product\t\t 2) Remove product")?;
    writeln!(out, " 3) Clear all products\t 4) Show all products")?;
    writeln!(out, " 5) Exit")
}

/// The counter operator menu.
pub fn operator_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "What operation do you want to perform? (choose a number)")?;
    writeln!(out, " 1) Add item to bill\t\t 2) Modify item on bill")?;
    writeln!(out, " 3) Remove item from bill\t 4) Show bill amount")?;
    writeln!(out, " 5) Generate bill\t\t 6) Exit")
}

/// The product table, sorted by id for stable display.
///
/// The catalog itself has no meaningful order; sorting here is purely a
/// rendering choice.
pub fn product_table(
    out: &mut impl Write,
    catalog: &Catalog,
    config: &TerminalConfig,
) -> io::Result<()> {
    let mut products: Vec<&Product> = catalog.iter().collect();
    products.sort_by_key(|product| product.id);

    writeln!(out, "ID\tName\tPrice")?;
    for product in products {
        writeln!(
            out,
            "{}\t{}\t{}",
            product.id,
            product.name,
            config.format_money(product.price)
        )?;
    }
    Ok(())
}

/// One bill line in detail, shown after add/modify.
pub fn line_item(out: &mut impl Write, line: &LineItem, config: &TerminalConfig) -> io::Result<()> {
    writeln!(out, "Item ID: {}", line.product_id)?;
    writeln!(out, "Item name: {}", line.name)?;
    writeln!(out, "Item qty: {}", line.quantity)?;
    writeln!(out, "Item price: {}", config.format_money(line.line_total))
}

/// The full bill, rendered as a receipt.
pub fn receipt(out: &mut impl Write, receipt: &Receipt, config: &TerminalConfig) -> io::Result<()> {
    writeln!(out, "Generated bill:")?;
    writeln!(out, "{} / receipt {}", config.store_name, receipt.id)?;
    writeln!(out, "ID\tName\tQty\tPrice")?;
    for line in &receipt.lines {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            line.product_id,
            line.name,
            line.quantity,
            config.format_money(line.line_total)
        )?;
    }
    writeln!(out, "Bill amount: {}", config.format_money(receipt.total))?;
    writeln!(
        out,
        "Generated at {}",
        receipt.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Bill, Money};

    fn render_to_string(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_product_table_sorted_rows() {
        let mut catalog = Catalog::new();
        catalog.upsert(2, "Pad", Money::from_cents(55));
        catalog.upsert(1, "Pen", Money::from_cents(10));

        let config = TerminalConfig::default();
        let table = render_to_string(|out| product_table(out, &catalog, &config));

        assert_eq!(table, "ID\tName\tPrice\n1\tPen\t$0.10\n2\tPad\t$0.55\n");
    }

    #[test]
    fn test_receipt_includes_lines_and_total() {
        let mut catalog = Catalog::new();
        catalog.upsert(1, "Pen", Money::from_cents(10));
        let mut bill = Bill::new();
        bill.add_line(catalog.get(1).unwrap(), 3);

        let config = TerminalConfig::default();
        let printed = render_to_string(|out| receipt(out, &bill.receipt(), &config));

        assert!(printed.contains("1\tPen\t3\t$0.30"));
        assert!(printed.contains("Bill amount: $0.30"));
        assert!(printed.contains(&config.store_name));
    }

    #[test]
    fn test_menus_list_every_option() {
        let admin = render_to_string(|out| admin_menu(out));
        for needle in ["1)", "2)", "3)", "4)", "5)"] {
            assert!(admin.contains(needle));
        }

        let operator = render_to_string(|out| operator_menu(out));
        for needle in ["1)", "2)", "3)", "4)", "5)", "6)"] {
            assert!(operator.contains(needle));
        }
    }
}

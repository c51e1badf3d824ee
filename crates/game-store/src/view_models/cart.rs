//! Cart totals
//!
//! Recomputed from the cart on every render, never stored.

use rust_decimal::Decimal;

use crate::domain_models::CartLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Tax rate as a fraction, 8 percent becomes 0.08
pub fn tax_rate(percent: u32) -> Decimal {
    Decimal::new(i64::from(percent), 2)
}

pub fn cart_totals(cart: &[CartLine], tax_rate: Decimal) -> CartTotals {
    let subtotal: Decimal = cart.iter().map(CartLine::line_total).sum();
    let tax = subtotal * tax_rate;
    CartTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Number of units in the cart, shown as the navigation badge
pub fn item_count(cart: &[CartLine]) -> u32 {
    cart.iter().map(|line| line.quantity).sum()
}

/// Render an amount with two decimals
pub fn format_price(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::seed_catalog;

    #[test]
    fn test_totals_with_default_tax() {
        let catalog = seed_catalog();
        let cart = vec![
            CartLine {
                game: catalog[0].clone(),
                quantity: 2,
            },
            CartLine::new(catalog[5].clone()),
        ];

        let totals = cart_totals(&cart, tax_rate(8));
        // 2 * 59.99 + 29.99
        assert_eq!(totals.subtotal, Decimal::new(14997, 2));
        assert_eq!(totals.tax, Decimal::new(119976, 4));
        assert_eq!(totals.total, totals.subtotal + totals.tax);
        assert_eq!(format_price("$", totals.total), "$161.97");
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = cart_totals(&[], tax_rate(8));
        assert_eq!(totals.total, Decimal::ZERO);
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let catalog = seed_catalog();
        let cart = vec![
            CartLine {
                game: catalog[1].clone(),
                quantity: 3,
            },
            CartLine::new(catalog[2].clone()),
        ];
        assert_eq!(item_count(&cart), 4);
    }
}

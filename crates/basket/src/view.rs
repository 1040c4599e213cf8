//! Basket page projection.

use serde::Serialize;
use storefront_core::{Money, Notice, ProductId};

use crate::basket::{Basket, BasketPresentation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketRow {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub price_label: String,
    pub input_quantity: u32,
    pub min_quantity: u32,
    pub max_quantity: u32,
    pub line_total: Money,
    pub line_total_label: String,
    /// Quantity input and delete button are disabled.
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketView {
    pub presentation: BasketPresentation,
    pub rows: Vec<BasketRow>,
    pub total: Money,
    pub total_label: String,
    pub notice: Option<Notice>,
}

impl BasketView {
    pub fn project(basket: &Basket, currency_symbol: &str) -> Self {
        let rows = basket
            .lines()
            .iter()
            .map(|line| BasketRow {
                product_id: line.product_id(),
                name: line.name().to_string(),
                unit_price: line.unit_price(),
                price_label: format!("{currency_symbol}{}", line.unit_price()),
                input_quantity: line.input_quantity(),
                min_quantity: line.min_quantity(),
                max_quantity: line.max_quantity(),
                line_total: line.line_total(),
                line_total_label: format!("{currency_symbol}{}", line.line_total()),
                busy: line.is_busy(),
            })
            .collect();

        let total = basket.total();
        Self {
            presentation: basket.presentation(),
            rows,
            total,
            total_label: format!("Total Cost: {currency_symbol}{total}"),
            notice: basket.notice().cloned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.presentation == BasketPresentation::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::BasketLine;

    #[test]
    fn projects_rows_and_total_label() {
        let basket = Basket::new(vec![
            BasketLine::new(ProductId::new(1), "Notebook", Money::from_minor(999), 2, 1, 5)
                .unwrap(),
            BasketLine::new(ProductId::new(2), "Pens", Money::from_minor(250), 1, 1, 10).unwrap(),
        ])
        .unwrap();

        let view = BasketView::project(&basket, "£");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].line_total_label, "£19.98");
        assert_eq!(view.rows[1].price_label, "£2.50");
        assert_eq!(view.total_label, "Total Cost: £22.48");
        assert!(!view.is_empty());
    }

    #[test]
    fn empty_basket_projects_empty_presentation() {
        let view = BasketView::project(&Basket::new(Vec::new()).unwrap(), "£");
        assert!(view.is_empty());
        assert_eq!(view.total_label, "Total Cost: £0.00");
    }
}

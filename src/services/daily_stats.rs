// src/services/daily_stats.rs

// Agregação do resumo diário exibido no Dashboard.
// O "dia" é o intervalo semiaberto [meia-noite, próxima meia-noite) no fuso fixo da loja:
// fração de segundo no último segundo do dia entra, a meia-noite seguinte não.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::{dashboard::DailyStats, inventory::Product, operations::Order},
};

// Corte fixo do card "estoque baixo" do Dashboard.
// Não é o mesmo critério da tela de Estoque (que usa `min_stock`).
pub const DASHBOARD_LOW_STOCK_CUTOFF: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    // Janela do dia civil que contém `now`, no deslocamento `offset`.
    pub fn containing(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        let date = now.with_timezone(&offset).date_naive();
        let local_midnight = date.and_time(NaiveTime::MIN);
        let start = (local_midnight - TimeDelta::seconds(i64::from(offset.local_minus_utc()))).and_utc();

        Self {
            date,
            start,
            end: start + TimeDelta::days(1),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

pub fn compute_daily_stats(
    orders: &[Order],
    products: &[Product],
    window: &DayWindow,
) -> Result<DailyStats, AppError> {
    let (today_sales, total_orders) = orders
        .iter()
        .filter(|order| window.contains(order.created_at))
        .try_fold((Decimal::ZERO, 0u64), |(sum, count), order| {
            sum.checked_add(order.amount_or_zero())
                .map(|sum| (sum, count + 1))
                .ok_or(AppError::SalesOverflow)
        })?;

    let low_stock_count = products
        .iter()
        .filter(|p| p.stock_qty < DASHBOARD_LOW_STOCK_CUTOFF)
        .count() as u64;

    Ok(DailyStats {
        today_sales,
        total_orders,
        products_count: products.len() as u64,
        low_stock_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn order(amount: Option<i64>, created_at: DateTime<Utc>) -> Order {
        Order {
            id: Uuid::new_v4(),
            created_at,
            total_amount: amount.map(Decimal::from),
        }
    }

    fn product(stock_qty: i32, min_stock: i32) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: format!("item-{stock_qty}"),
            barcode: None,
            price: Decimal::from(20),
            stock_qty,
            min_stock,
        }
    }

    fn utc_window(now: DateTime<Utc>) -> DayWindow {
        DayWindow::containing(now, FixedOffset::east_opt(0).unwrap())
    }

    #[test]
    fn only_todays_orders_are_summed() {
        let now = utc(2026, 3, 10, 15, 0, 0);
        let orders = vec![
            order(Some(100), utc(2026, 3, 10, 9, 30, 0)),
            order(Some(50), utc(2026, 3, 9, 18, 0, 0)),
        ];

        let stats = compute_daily_stats(&orders, &[], &utc_window(now)).unwrap();

        assert_eq!(stats.today_sales, Decimal::from(100));
        assert_eq!(stats.total_orders, 1);
    }

    #[test]
    fn missing_amount_counts_as_zero_but_still_counts_as_order() {
        let now = utc(2026, 3, 10, 15, 0, 0);
        let orders = vec![
            order(None, utc(2026, 3, 10, 8, 0, 0)),
            order(Some(40), utc(2026, 3, 10, 9, 0, 0)),
        ];

        let stats = compute_daily_stats(&orders, &[], &utc_window(now)).unwrap();

        assert_eq!(stats.today_sales, Decimal::from(40));
        assert_eq!(stats.total_orders, 2);
    }

    #[test]
    fn low_stock_uses_fixed_cutoff_not_min_stock() {
        let products = vec![product(3, 2), product(10, 5)];
        let now = utc(2026, 3, 10, 12, 0, 0);

        let stats = compute_daily_stats(&[], &products, &utc_window(now)).unwrap();

        assert_eq!(stats.low_stock_count, 1);
        assert_eq!(stats.products_count, 2);
    }

    #[test]
    fn cutoff_is_strict() {
        let products = vec![product(4, 0), product(5, 100)];
        let now = utc(2026, 3, 10, 12, 0, 0);

        let stats = compute_daily_stats(&[], &products, &utc_window(now)).unwrap();

        assert_eq!(stats.low_stock_count, 1);
    }

    #[test]
    fn last_fraction_of_the_day_is_included_and_next_midnight_is_not() {
        let now = utc(2026, 3, 10, 1, 0, 0);
        let late = utc(2026, 3, 10, 23, 59, 59) + TimeDelta::milliseconds(750);
        let next_midnight = utc(2026, 3, 11, 0, 0, 0);
        let orders = vec![order(Some(7), late), order(Some(9), next_midnight)];

        let stats = compute_daily_stats(&orders, &[], &utc_window(now)).unwrap();

        assert_eq!(stats.today_sales, Decimal::from(7));
        assert_eq!(stats.total_orders, 1);
    }

    #[test]
    fn window_follows_business_offset() {
        // 2026-03-10 20:00 UTC é 2026-03-11 03:00 em Bangkok (UTC+7)
        let bangkok = FixedOffset::east_opt(7 * 3600).unwrap();
        let window = DayWindow::containing(utc(2026, 3, 10, 20, 0, 0), bangkok);

        assert_eq!(window.date(), NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());
        assert_eq!(window.start(), utc(2026, 3, 10, 17, 0, 0));
        assert_eq!(window.end(), utc(2026, 3, 11, 17, 0, 0));
        assert!(window.contains(utc(2026, 3, 10, 17, 0, 0)));
        assert!(!window.contains(utc(2026, 3, 10, 16, 59, 59)));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let now = utc(2026, 3, 10, 15, 0, 0);
        let window = utc_window(now);
        let orders = vec![order(Some(12), utc(2026, 3, 10, 10, 0, 0))];
        let products = vec![product(1, 1), product(8, 2)];

        let first = compute_daily_stats(&orders, &products, &window).unwrap();
        let second = compute_daily_stats(&orders, &products, &window).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn sales_beyond_decimal_range_are_an_error() {
        let now = utc(2026, 3, 10, 15, 0, 0);
        let mut huge = order(None, utc(2026, 3, 10, 9, 0, 0));
        huge.total_amount = Some(Decimal::MAX);
        let orders = vec![huge.clone(), huge];

        let result = compute_daily_stats(&orders, &[], &utc_window(now));

        assert!(matches!(result, Err(AppError::SalesOverflow)));
    }

    #[test]
    fn empty_inputs_give_zeroed_stats() {
        let stats = compute_daily_stats(&[], &[], &utc_window(utc(2026, 1, 1, 0, 0, 0))).unwrap();
        assert_eq!(stats, DailyStats::default());
    }
}

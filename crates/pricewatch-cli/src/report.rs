//! Report command: print recorded discrepancies for operators.

use pricewatch_core::PriceDiscrepancy;
use pricewatch_store::PriceStore;

pub(crate) async fn print_discrepancies(store: &PriceStore, id_filter: Option<&str>) {
    let discrepancies = match id_filter {
        Some(id) => store.discrepancies_by_identifier(id).await,
        None => store.discrepancies().await,
    };

    if discrepancies.is_empty() {
        match id_filter {
            Some(id) => println!("no discrepancies recorded for {id}"),
            None => println!("no discrepancies recorded"),
        }
        return;
    }

    for discrepancy in &discrepancies {
        print_one(discrepancy);
    }
    println!("{} discrepancies total", discrepancies.len());
}

fn print_one(discrepancy: &PriceDiscrepancy) {
    println!(
        "{} spread ${:.2} ({:.2}%) detected {}",
        discrepancy.product_id,
        discrepancy.price_difference,
        discrepancy.percentage_difference,
        discrepancy.detected_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );
    for price in &discrepancy.constituent_prices {
        println!(
            "  {:>8} ${:>8.2}  {}",
            price.retailer, price.price_amount, price.product_name
        );
    }
}

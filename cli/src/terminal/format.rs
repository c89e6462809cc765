use colored::*;
use courier_common::model::{Delivery, Driver, DriverDistance};
use courier_common::time::format_delivery_time;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn delivery_to_details(delivery: &Delivery) -> Vec<Detail> {
    vec![
        ("Id".to_string(), delivery.id.to_string().color(colors::ACCENT)),
        ("Driver".to_string(), delivery.driver.as_str().color(colors::PRIMARY)),
        ("Restaurant".to_string(), delivery.restaurant.as_str().normal()),
        ("Customer".to_string(), delivery.customer.as_str().normal()),
        (
            "Time".to_string(),
            format_delivery_time(&delivery.delivery_time).normal(),
        ),
        (
            "Distance".to_string(),
            format!("{:.2}", delivery.distance).color(colors::DISTANCE),
        ),
    ]
}

pub fn driver_to_details(driver: &Driver) -> Vec<Detail> {
    vec![
        ("City".to_string(), driver.city.name.as_str().color(colors::CITY)),
        (
            "Distance".to_string(),
            format!("{:.2}", driver.distance()).color(colors::DISTANCE),
        ),
    ]
}

/// One ranking row: position, name and city padded to the widest entry.
pub fn ranking_row(position: usize, row: &DriverDistance, name_width: usize) -> String {
    let driver = row.driver();
    let padding: String = " ".repeat(name_width.saturating_sub(driver.name.chars().count()));
    format!(
        "{:>3}. {}{} {:<12} {:>6}",
        position,
        driver.name.as_str().color(colors::PRIMARY),
        padding,
        driver.city.name.as_str().color(colors::CITY),
        row.total_distance().to_string().color(colors::DISTANCE),
    )
}

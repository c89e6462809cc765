#![cfg(test)]
use courier_common::model::City;
use courier_core::selector::DriverSelector;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

use crate::support::{CITY, at, city_store, runtime, shared, slot};

#[tokio::test]
async fn least_busy_driver_wins() {
    // Mary has two deliveries, Daniel none, neither is busy at 18:00
    let store = shared(city_store(&[("Mary", &[15, 16]), ("Daniel", &[])]));
    let selector = DriverSelector::from_store(store);

    let chosen = selector
        .select_driver(&City::new(CITY), &slot(18))
        .await
        .unwrap()
        .expect("a driver is free");

    assert_eq!(chosen.name, "Daniel");
}

#[tokio::test]
async fn busy_driver_is_skipped_despite_lower_count() {
    let store = shared(city_store(&[("Mary", &[15]), ("Daniel", &[10, 11, 12])]));
    let selector = DriverSelector::from_store(store);

    let chosen = selector
        .select_driver(&City::new(CITY), &slot(15))
        .await
        .unwrap()
        .expect("Daniel is free");

    assert_eq!(chosen.name, "Daniel");
}

#[tokio::test]
async fn empty_city_has_no_driver() {
    let store = shared(city_store(&[("Mary", &[])]));
    let selector = DriverSelector::from_store(store);

    let chosen = selector
        .select_driver(&City::new("Y"), &at("01-10-2021 15:00"))
        .await
        .unwrap();

    assert!(chosen.is_none());
}

proptest! {
    #[test]
    fn selection_matches_definition(
        schedules in vec(btree_set(0u32..6, 0..5), 0..6),
        requested in 0u32..6,
    ) {
        let names: Vec<String> = (0..schedules.len()).map(|i| format!("driver-{i}")).collect();
        let slots: Vec<Vec<u32>> = schedules.iter().map(|s| s.iter().copied().collect()).collect();
        let drivers: Vec<(&str, &[u32])> = names
            .iter()
            .zip(&slots)
            .map(|(name, s)| (name.as_str(), s.as_slice()))
            .collect();

        let selector = DriverSelector::from_store(shared(city_store(&drivers)));
        let chosen = runtime()
            .block_on(selector.select_driver(&City::new(CITY), &slot(requested)))
            .unwrap();

        // (index, count) of every driver free at the requested slot, in city order
        let free: Vec<(usize, usize)> = schedules
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.contains(&requested))
            .map(|(i, s)| (i, s.len()))
            .collect();

        match free.iter().map(|(_, count)| *count).min() {
            None => prop_assert!(chosen.is_none()),
            Some(min) => {
                let first = free.iter().find(|(_, count)| *count == min).map(|(i, _)| *i);
                let expected = first.map(|i| names[i].clone());
                prop_assert_eq!(chosen.map(|d| d.name), expected);
            }
        }
    }
}

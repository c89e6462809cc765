#![cfg(test)]
use courier_common::model::{City, Driver, DriverDistance};
use courier_common::store::DriverRepository;
use courier_core::ranking::{RankingEngine, rank_by_distance};
use courier_core::seed::demo_store;
use proptest::collection::vec;
use proptest::prelude::*;

use crate::support::shared;

fn names(report: &[DriverDistance]) -> Vec<String> {
    report.iter().map(|row| row.driver().name.clone()).collect()
}

#[test]
fn equal_distances_keep_input_order() {
    let x = City::new("X");
    let report = rank_by_distance(vec![
        Driver::with_distance("A", x.clone(), 10.0).unwrap(),
        Driver::with_distance("B", x.clone(), 25.0).unwrap(),
        Driver::with_distance("C", x, 25.0).unwrap(),
    ]);

    assert_eq!(names(&report), ["B", "C", "A"]);
}

#[tokio::test]
async fn demo_city_report() {
    let store = shared(demo_store().unwrap());
    let engine = RankingEngine::new(store.clone());

    let tlv = engine
        .rank_by_distance_in_city(&City::new("Tel-Aviv"))
        .await
        .unwrap();

    // Patricia 27.5, Mary 22.75, Daniel 4.75
    assert_eq!(names(&tlv), ["Patricia", "Mary", "Daniel"]);
    let totals: Vec<i64> = tlv.iter().map(|row| row.total_distance()).collect();
    assert_eq!(totals, [27, 22, 4]);

    let direct = rank_by_distance(store.drivers_in_city(&City::new("Tel-Aviv")).await.unwrap());
    assert_eq!(tlv, direct);
}

#[tokio::test]
async fn demo_global_report_lists_idle_drivers_in_store_order() {
    let store = shared(demo_store().unwrap());
    let engine = RankingEngine::new(store);

    let all = engine.rank_all().await.unwrap();

    assert_eq!(all.len(), 11);
    assert_eq!(names(&all[..3]), ["Patricia", "Mary", "Daniel"]);
    // Drivers without deliveries tie at zero and keep store order
    assert_eq!(
        names(&all[3..]),
        ["Jennifer", "James", "John", "Robert", "David", "Noa", "Ofri", "Neta"]
    );
}

#[tokio::test]
async fn unknown_or_empty_city_ranks_nobody() {
    let store = demo_store().unwrap();
    store.add_city(City::new("Eilat")).unwrap();
    let engine = RankingEngine::new(shared(store));

    assert!(engine.rank_by_distance_in_city(&City::new("Eilat")).await.unwrap().is_empty());
    assert!(engine.rank_by_distance_in_city(&City::new("Gotham")).await.unwrap().is_empty());
}

proptest! {
    #[test]
    fn report_is_sorted_permutation(distances in vec(0.0f64..1_000.0, 0..20)) {
        let city = City::new("X");
        let drivers: Vec<Driver> = distances
            .iter()
            .enumerate()
            .map(|(i, d)| Driver::with_distance(format!("d{i}"), city.clone(), *d).unwrap())
            .collect();

        let report = rank_by_distance(drivers.clone());

        prop_assert_eq!(report.len(), drivers.len());
        prop_assert!(report
            .windows(2)
            .all(|w| w[0].driver().distance() >= w[1].driver().distance()));
        prop_assert!(report
            .iter()
            .all(|row| row.total_distance() == row.driver().distance().trunc() as i64));

        let mut input_names: Vec<String> = drivers.iter().map(|d| d.name.clone()).collect();
        let mut output_names = names(&report);
        input_names.sort();
        output_names.sort();
        prop_assert_eq!(input_names, output_names);

        prop_assert_eq!(rank_by_distance(drivers), report);
    }
}

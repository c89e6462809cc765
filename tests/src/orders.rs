#![cfg(test)]
use std::collections::HashSet;
use std::sync::Arc;

use courier_common::error::{OrderError, StoreError};
use courier_common::model::{City, NewDelivery};
use courier_common::order::{Assignment, OrderRequest};
use courier_common::store::{DeliveryRepository, DriverRepository};
use courier_core::distance::FixedDistance;
use courier_core::intake::OrderIntake;
use courier_core::seed::demo_store;
use courier_core::store::{InMemoryStore, Snapshot};

use crate::support::{at, shared, slot};

fn request(customer: &str, restaurant: &str, time: &str) -> OrderRequest {
    OrderRequest {
        customer: customer.into(),
        restaurant: restaurant.into(),
        delivery_time: at(time),
    }
}

fn demo_intake(distance: f64) -> (Arc<InMemoryStore>, Arc<OrderIntake>) {
    let store = shared(demo_store().unwrap());
    let intake = OrderIntake::new(store.clone(), Box::new(FixedDistance(distance)));
    (store, Arc::new(intake))
}

#[tokio::test]
async fn order_at_free_slot_goes_to_least_busy_driver() {
    let (store, intake) = demo_intake(5.0);

    let outcome = intake
        .place_order(&request("Beethoven", "vegan", "01-10-2021 16:00"))
        .await
        .unwrap();

    // Mary and Patricia deliver at 16:00
    let delivery = outcome.delivery().expect("Daniel is free");
    assert_eq!(delivery.driver, "Daniel");

    let daniel = store.driver_by_name("Daniel").await.unwrap().unwrap();
    assert_eq!(daniel.distance(), 9.75);
    assert_eq!(store.deliveries_for_driver(&daniel).await.unwrap().len(), 2);
}

#[tokio::test]
async fn rejection_and_absence_are_distinct() {
    let (_, intake) = demo_intake(5.0);

    let rejected = intake
        .place_order(&request("Chopin", "cafe", "01-10-2021 15:00"))
        .await;
    assert_eq!(
        rejected,
        Err(OrderError::CityMismatch {
            customer_city: "Haifa".into(),
            restaurant_city: "Tel-Aviv".into(),
        })
    );

    let absent = intake
        .place_order(&request("Bach", "cafe", "01-10-2021 15:00"))
        .await
        .unwrap();
    assert!(matches!(absent, Assignment::NoDriverAvailable { ref city, .. } if city == &City::new("Tel-Aviv")));
}

#[tokio::test]
async fn store_refuses_double_booking() {
    let store = demo_store().unwrap();

    let err = store
        .commit_delivery(NewDelivery {
            driver: "Mary".into(),
            restaurant: "vegan".into(),
            customer: "Bach".into(),
            delivery_time: at("01-10-2021 15:00"),
            distance: 2.0,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateDelivery { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_orders_never_double_book() {
    let (store, intake) = demo_intake(1.0);

    let mut handles = Vec::new();
    for _ in 0..10 {
        let intake = intake.clone();
        handles.push(tokio::spawn(async move {
            intake
                .place_order(&request("Bach", "chinese", "03-10-2021 12:00"))
                .await
        }));
    }

    let mut assigned = Vec::new();
    let mut absent = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            Assignment::Assigned(delivery) => assigned.push(delivery.driver),
            Assignment::NoDriverAvailable { .. } => absent += 1,
        }
    }

    // Tel-Aviv has three drivers, each can take the slot once
    let unique: HashSet<&String> = assigned.iter().collect();
    assert_eq!(assigned.len(), 3);
    assert_eq!(unique.len(), 3);
    assert_eq!(absent, 7);
    assert_eq!(store.delivery_count(), 9);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_orders_keep_every_distance() {
    let (store, intake) = demo_intake(2.0);
    let before: f64 = total_distance(&store).await;

    let mut handles = Vec::new();
    for n in 0..30 {
        let intake = intake.clone();
        handles.push(tokio::spawn(async move {
            let request = OrderRequest {
                customer: "Rachmaninoff".into(),
                restaurant: "mexican".into(),
                delivery_time: slot(100 + n),
            };
            intake.place_order(&request).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().delivery().is_some());
    }

    let after: f64 = total_distance(&store).await;
    assert_eq!(after - before, 60.0);
    assert_eq!(store.delivery_count(), 36);
}

async fn total_distance(store: &InMemoryStore) -> f64 {
    store
        .all_drivers()
        .await
        .unwrap()
        .iter()
        .map(|driver| driver.distance())
        .sum()
}

#[tokio::test]
async fn placed_orders_survive_a_snapshot() {
    let (store, intake) = demo_intake(3.0);
    intake
        .place_order(&request("Bach", "cafe", "02-10-2021 19:00"))
        .await
        .unwrap();

    let json = store.to_snapshot().to_json().unwrap();
    let restored = InMemoryStore::from_snapshot(Snapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.to_snapshot(), store.to_snapshot());
    assert_eq!(restored.delivery_count(), 7);
}

#![cfg(test)]
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use courier_common::model::{City, Customer, Driver, NewDelivery, Restaurant};
use courier_common::time::parse_delivery_time;
use courier_core::store::InMemoryStore;

pub const CITY: &str = "X";

pub fn at(s: &str) -> NaiveDateTime {
    parse_delivery_time(s).expect("test time should parse")
}

/// Slot `n` hours after midnight on 1 October 2021.
pub fn slot(n: u32) -> NaiveDateTime {
    at("01-10-2021 00:00") + Duration::hours(i64::from(n))
}

/// City `X` (plus an empty city `Y`) whose drivers, in order, have
/// deliveries at the given slots. Each delivery is 1.5 long.
pub fn city_store(drivers: &[(&str, &[u32])]) -> InMemoryStore {
    let store = InMemoryStore::new();
    let x = City::new(CITY);
    store.add_city(x.clone()).expect("fresh city");
    store.add_city(City::new("Y")).expect("fresh city");
    store
        .add_customer(Customer::new("cust", x.clone(), "Main St 1"))
        .expect("fresh customer");
    store
        .add_restaurant(Restaurant::new("rest", x.clone(), "Main St 2"))
        .expect("fresh restaurant");

    for (name, slots) in drivers {
        store
            .add_driver(Driver::new(*name, x.clone()))
            .expect("fresh driver");
        for n in *slots {
            store
                .record_delivery(NewDelivery {
                    driver: name.to_string(),
                    restaurant: "rest".into(),
                    customer: "cust".into(),
                    delivery_time: slot(*n),
                    distance: 1.5,
                })
                .expect("slots of one driver are distinct");
        }
    }
    store
}

pub fn shared(store: InMemoryStore) -> Arc<InMemoryStore> {
    Arc::new(store)
}

pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build")
}

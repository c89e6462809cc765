//! Demo data: four cities, eleven drivers and six deliveries on 1 October 2021.

use chrono::NaiveDateTime;

use courier_common::error::StoreError;
use courier_common::model::{City, Customer, Driver, NewDelivery, Restaurant};
use courier_common::time::parse_delivery_time;

use crate::store::memory::InMemoryStore;

const CITIES: &[&str] = &["Jerusalem", "Tel-Aviv", "Beer-Sheva", "Haifa"];

const DRIVERS: &[(&str, &str)] = &[
    ("Mary", "Tel-Aviv"),
    ("Patricia", "Tel-Aviv"),
    ("Jennifer", "Haifa"),
    ("James", "Beer-Sheva"),
    ("John", "Beer-Sheva"),
    ("Robert", "Jerusalem"),
    ("David", "Jerusalem"),
    ("Daniel", "Tel-Aviv"),
    ("Noa", "Haifa"),
    ("Ofri", "Haifa"),
    ("Neta", "Jerusalem"),
];

const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Beethoven", "Tel-Aviv", "Ludwig van Beethoven"),
    ("Mozart", "Jerusalem", "Wolfgang Amadeus Mozart"),
    ("Chopin", "Haifa", "Frédéric François Chopin"),
    ("Rachmaninoff", "Tel-Aviv", "Sergei Rachmaninoff"),
    ("Bach", "Tel-Aviv", "Sebastian Bach. Johann"),
];

const RESTAURANTS: &[(&str, &str, &str)] = &[
    ("meat", "Jerusalem", "All meat restaurant"),
    ("vegan", "Tel-Aviv", "Only vegan"),
    ("cafe", "Tel-Aviv", "Coffee shop"),
    ("chinese", "Tel-Aviv", "chinese restaurant"),
    ("mexican", "Tel-Aviv", "mexican restaurant"),
];

/// (driver, restaurant, customer, time, distance)
const DELIVERIES: &[(&str, &str, &str, &str, f64)] = &[
    ("Mary", "vegan", "Beethoven", "01-10-2021 15:00", 7.5),
    ("Mary", "cafe", "Rachmaninoff", "01-10-2021 16:00", 12.25),
    ("Mary", "chinese", "Bach", "01-10-2021 17:00", 3.0),
    ("Patricia", "vegan", "Beethoven", "01-10-2021 15:00", 18.0),
    ("Patricia", "cafe", "Rachmaninoff", "01-10-2021 16:00", 9.5),
    ("Daniel", "mexican", "Bach", "01-10-2021 15:00", 4.75),
];

pub fn demo_store() -> Result<InMemoryStore, StoreError> {
    let store = InMemoryStore::new();

    for name in CITIES {
        store.add_city(City::new(*name))?;
    }
    for (name, city) in DRIVERS {
        store.add_driver(Driver::new(*name, City::new(*city)))?;
    }
    for (name, city, address) in CUSTOMERS {
        store.add_customer(Customer::new(*name, City::new(*city), *address))?;
    }
    for (name, city, address) in RESTAURANTS {
        store.add_restaurant(Restaurant::new(*name, City::new(*city), *address))?;
    }
    for (driver, restaurant, customer, time, distance) in DELIVERIES {
        store.record_delivery(NewDelivery {
            driver: driver.to_string(),
            restaurant: restaurant.to_string(),
            customer: customer.to_string(),
            delivery_time: demo_time(time),
            distance: *distance,
        })?;
    }

    Ok(store)
}

fn demo_time(s: &str) -> NaiveDateTime {
    // Constants above are in request format.
    parse_delivery_time(s).unwrap_or_default()
}

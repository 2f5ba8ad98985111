//! Runs the scripted people-store walkthrough and logs every result.

use clap::Parser;
use std::fmt::Debug;

use office_hours::config::ObservabilityConfig;
use office_hours::observability::logging;
use office_hours::people::{
    NewPerson, PersonFilter, PersonStore, PersonUpdate, Projection, SortKey, SortOrder,
    StoreError,
};

#[derive(Parser)]
#[command(name = "people-demo")]
#[command(about = "Walk through create, read, update, delete and chained queries", long_about = None)]
struct Cli {
    /// Food used by the chained query at the end.
    #[arg(short, long, default_value = "Burritos")]
    food: String,

    /// Log level when RUST_LOG is unset.
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&ObservabilityConfig {
        log_level: cli.log_level,
        ..ObservabilityConfig::default()
    });

    let store = PersonStore::new();

    let alice = report(
        "create",
        store.create(
            NewPerson::new("Alice")
                .age(28)
                .favorite_foods(["Sushi", "Burger"]),
        ),
    );

    report(
        "create_many",
        store.create_many(vec![
            NewPerson::new("John").age(30).favorite_foods(["Pizza", "Burger"]),
            NewPerson::new("Jane").age(25).favorite_foods(["Sushi", "Pasta"]),
            NewPerson::new("Jake").age(35).favorite_foods(["Tacos", "Salad"]),
        ]),
    );

    tracing::info!(people = ?store.find_by_name("John"), "People found by name");
    tracing::info!(person = ?store.find_one_by_food("Pizza"), "Person found by food");

    if let Some(alice) = alice {
        tracing::info!(person = ?store.find_by_id(alice.id), "Person found by id");

        report(
            "find_edit_then_save",
            store.update_by_id(alice.id, |person| {
                person.favorite_foods.push("Hamburger".to_string())
            }),
        );
    }

    report(
        "find_one_and_update",
        store.find_one_and_update("Jane", PersonUpdate::age(20)),
    );

    if let Some(alice) = store.find_by_name("Alice").into_iter().next() {
        tracing::info!(person = ?store.remove_by_id(alice.id), "Person removed");
    }

    tracing::info!(removed = store.remove_many("Mary"), "People removed");

    let chained = Projection::parse("-age").and_then(|projection| {
        store
            .find(PersonFilter::by_food(cli.food.as_str()))
            .sort(SortKey::Name, SortOrder::Ascending)
            .limit(2)
            .select(projection)
            .exec()
    });
    if let Some(documents) = report("query_chain", chained) {
        println!("{}", serde_json::to_string_pretty(&documents)?);
    }

    Ok(())
}

/// Log the outcome of one store operation; failures are logged and skipped.
fn report<T: Debug>(operation: &str, result: Result<T, StoreError>) -> Option<T> {
    match result {
        Ok(value) => {
            tracing::info!(operation, result = ?value, "Operation succeeded");
            Some(value)
        }
        Err(e) => {
            tracing::error!(operation, error = %e, "Operation failed");
            None
        }
    }
}

//! Complete counter application demonstrating updates, batches, and actions

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use satchel::{Observer, Store, Update};

#[derive(Clone, Debug)]
struct CounterState {
    count: i32,
    history: Vec<i32>,
}

impl CounterState {
    fn new() -> Self {
        Self {
            count: 0,
            history: vec![0],
        }
    }

    fn record(&mut self) {
        self.history.push(self.count);
    }
}

fn main() {
    println!("=== Counter Application ===\n");

    println!("1. Building the store");
    let store: Store<CounterState, i32> = Store::builder()
        .state(CounterState::new())
        .update("increment", |state, _| {
            state.count += 1;
            state.record();
        })
        .update("decrement", |state, _| {
            state.count -= 1;
            state.record();
        })
        .update("increment_by", |state, amount| {
            state.count += amount.unwrap_or(0);
            state.record();
        })
        .update("decrement_by", |state, amount| {
            state.count -= amount.unwrap_or(0);
            state.record();
        })
        .action("increment_later", |store, _| {
            // Defer the update; the handle keeps working after this handler
            // returns.
            let store = store.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(100));
                store.update("increment").unwrap();
            });
        })
        .build()
        .expect("store configuration is complete");

    println!("\n2. Registering an observer");
    let logger: Observer = {
        let store = store.clone();
        Arc::new(move |applied: &[&'static str]| {
            let count = store.read(|state| state.count).unwrap_or_default();
            println!("   [Store] applied {:?} -> count = {}", applied, count);
        })
    };
    store.register(&logger).unwrap();

    println!("\n3. Single updates");
    store.update("increment").unwrap();
    store.update("increment").unwrap();
    store.update_with("increment_by", 5).unwrap();

    println!("\n4. A batch collapses into one notification");
    store
        .batch_update(vec![
            Update::with_payload("increment_by", 5),
            Update::new("decrement"),
            Update::with_payload("decrement_by", 2),
            Update::new("increment"),
        ])
        .unwrap();

    println!("\n5. Dispatching a deferred action");
    store.dispatch_action("increment_later").unwrap();
    println!("   (nothing landed yet)");
    thread::sleep(Duration::from_millis(200));

    println!("\n6. History so far");
    store.read(|state| {
        println!("   {:?}", state.history);
    });

    println!("\n7. Deregistering the observer silences notifications");
    store.deregister(&logger).unwrap();
    store.update("increment").unwrap();
    println!(
        "   count = {} (no log line above)",
        store.read(|state| state.count).unwrap_or_default()
    );

    println!("\n8. Destroying the store");
    store.destroy();
    match store.update("increment") {
        Err(error) => println!("   update after destroy: {}", error),
        Ok(()) => unreachable!(),
    }
    println!("   state after destroy: {:?}", store.get());

    println!("\n✓ Counter application complete!");
}

//! Todo list on the reduced store variant: direct updates, argumentless
//! notification

use std::sync::Arc;

use satchel::{BasicObserver, BasicStore};

#[derive(Clone, Debug)]
struct TodoItem {
    title: String,
    completed: bool,
}

#[derive(Clone, Debug)]
struct TodoState {
    todos: Vec<TodoItem>,
}

impl TodoState {
    fn new() -> Self {
        Self { todos: Vec::new() }
    }

    fn stats(&self) -> (usize, usize) {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|t| t.completed).count();
        (total, completed)
    }
}

fn main() {
    println!("=== Todo App (BasicStore) ===\n");

    println!("1. Building the store");
    let store: BasicStore<TodoState, String> = BasicStore::builder()
        .state(TodoState::new())
        .update("add", |state, title| {
            state.todos.push(TodoItem {
                title: title.unwrap_or_default(),
                completed: false,
            });
        })
        .update("complete_next", |state, _| {
            if let Some(todo) = state.todos.iter_mut().find(|t| !t.completed) {
                todo.completed = true;
            }
        })
        .update("clear_completed", |state, _| {
            state.todos.retain(|t| !t.completed);
        })
        .build()
        .expect("todo store configuration is complete");

    println!("\n2. Registering an observer");
    let logger: BasicObserver = {
        let store = store.clone();
        Arc::new(move || {
            let (total, completed) = store.read(|state| state.stats());
            println!("   [Store] total: {}, completed: {}", total, completed);
        })
    };
    store.register(&logger);

    println!("\n3. Adding todos");
    store.update_state_with("add", "Learn Rust".to_string());
    store.update_state_with("add", "Port the state container".to_string());
    store.update_state_with("add", "Write documentation".to_string());

    println!("\n4. Current todos:");
    store.read(|state| {
        for todo in &state.todos {
            let status = if todo.completed { "✓" } else { " " };
            println!("   [{}] {}", status, todo.title);
        }
    });

    println!("\n5. Completing two of them");
    store.update_state("complete_next");
    store.update_state("complete_next");

    println!("\n6. An unknown update name is ignored");
    store.update_state("somethingInvalid");

    println!("\n7. Clearing completed todos");
    store.update_state("clear_completed");

    println!("\n8. Remaining todos:");
    store.read(|state| {
        for todo in &state.todos {
            println!("   [ ] {}", todo.title);
        }
    });

    println!("\n✓ Todo app complete!");
}

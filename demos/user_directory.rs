//! Demonstrates a small user directory whose lookups return `Optional`.
//!
//! Shows how a component can hand back "maybe a user" without exposing
//! `None` to callers, and how callers chain lookups across services.
//!
//! Run with: cargo run --example user_directory

use optional_value::{Optional, OptionalError};
use std::collections::HashMap;

fn main() -> Result<(), OptionalError> {
    let mut directory = UserDirectory::default();
    directory.add(User::new(1, "alice", Some(2)));
    directory.add(User::new(2, "bob", None));
    directory.add(User::new(3, "carol", Some(99)));

    for id in [1, 2, 3, 4] {
        let user = directory.find(id);
        println!("\nLookup {}: {}", id, user.as_ref().map(Some(|u: &User| Some(u.name.clone())))?);

        // Follow the manager link, if any, and make sure the manager exists
        let manager = user
            .clone()
            .flat_map(Some(|u: User| Some(Optional::of_nullable(u.manager_id))))?
            .flat_map(Some(|manager_id: u32| Some(directory.find(manager_id))))?;

        manager.if_present_or_else(
            Some(|m: &User| println!("  Manager: {}", m.name)),
            Some(|| println!("  No manager on record")),
        )?;

        // Compare against a fresh lookup
        println!("  Stable lookup: {}", user.equals(&directory.find(id)));
    }

    // Insist on a user that must exist
    let admin = directory.find(1).into_inner()?;
    println!("\nAdmin: {}", admin.name);

    match directory.find(42).get() {
        Ok(user) => println!("Found {}", user.name),
        Err(e) => println!("Lookup failed: {}", e),
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    manager_id: Option<u32>,
}

impl User {
    fn new(id: u32, name: &str, manager_id: Option<u32>) -> Self {
        Self {
            id,
            name: name.to_string(),
            manager_id,
        }
    }
}

#[derive(Default)]
struct UserDirectory {
    users: HashMap<u32, User>,
}

impl UserDirectory {
    fn add(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    fn find(&self, id: u32) -> Optional<User> {
        Optional::of_nullable(self.users.get(&id).cloned())
    }
}

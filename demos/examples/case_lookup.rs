// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case lookup over a navigation stack.
//!
//! Builds a stack mixing several screen cases, then asks for the first and
//! last occurrence of each case — the id, the payload, or both.
//!
//! Run:
//! - `cargo run -p switchback_examples --example case_lookup`

use switchback_lookup::case_path;
use switchback_lookup::lookup::CaseLookup;
use switchback_lookup::types::Direction;
use switchback_stack::Stack;

#[derive(Debug)]
enum Screen {
    Home,
    Detail(DetailState),
    Compose(ComposeState),
}

#[derive(Debug)]
struct DetailState {
    item: u32,
}

#[derive(Debug)]
struct ComposeState {
    draft: &'static str,
}

fn main() {
    let mut stack = Stack::new();
    stack.push(Screen::Home);
    stack.push(Screen::Detail(DetailState { item: 1 }));
    stack.push(Screen::Compose(ComposeState { draft: "hello" }));
    stack.push(Screen::Detail(DetailState { item: 2 }));
    stack.push(Screen::Detail(DetailState { item: 3 }));

    let detail = case_path!(Screen::Detail);
    let compose = case_path!(Screen::Compose);

    println!("== Stack ==");
    for (id, screen) in &stack {
        println!("  {id:?}  {screen:?}");
    }

    println!("first detail: {:?}", stack.first_entry(&detail));
    println!("last detail:  {:?}", stack.last_entry(&detail));
    println!("last compose draft: {:?}", stack.last_state(&compose).map(|c| c.draft));

    // Direction can be data instead of a method choice.
    for direction in [Direction::FromFirst, Direction::FromLast] {
        println!(
            "detail id scanning {direction:?}: {:?}",
            stack.id_for(&detail, direction)
        );
    }

    // Popping the top detail moves the "last detail" answer.
    if let Some(id) = stack.last_id(&detail) {
        stack.pop_from(id);
    }
    println!("last detail after pop: {:?}", stack.last_entry(&detail));
}

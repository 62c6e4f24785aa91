// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack basics.
//!
//! This minimal example pushes a few screens, addresses one by id while the
//! stack changes around it, and pops back to a mid-stack entry.
//!
//! Run:
//! - `cargo run -p switchback_examples --example stack_basics`

use switchback_stack::Stack;

#[derive(Debug)]
enum Screen {
    Home,
    Detail(u32),
    Settings,
}

fn main() {
    let mut stack = Stack::new();

    let home = stack.push(Screen::Home);
    let detail = stack.push(Screen::Detail(42));
    let settings = stack.push(Screen::Settings);

    println!("== Stack after three pushes ==");
    for (id, screen) in &stack {
        println!("  {id:?}  {screen:?}");
    }

    // Id-addressed access is independent of position.
    println!("detail by id: {:?}", stack.get(detail));

    // Pop back to (and including) the detail screen.
    stack.pop_from(detail);
    println!("== After pop_from(detail) ==");
    for (id, screen) in &stack {
        println!("  {id:?}  {screen:?}");
    }

    println!("home still live: {}", stack.contains(home));
    println!("settings still live: {}", stack.contains(settings));
}

// Copyright 2025 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use switchback_lookup::case_path;
use switchback_lookup::lookup::CaseLookup;
use switchback_lookup::types::Direction;
use switchback_stack::Stack;

#[derive(Clone, Debug)]
enum Screen {
    Plain,
    Detail(u32),
    Sheet,
}

/// Stack of `depth` screens with a single `Detail` at `detail_pos`.
fn stack_with_detail_at(depth: usize, detail_pos: usize) -> Stack<Screen> {
    let mut stack = Stack::new();
    for i in 0..depth {
        if i == detail_pos {
            stack.push(Screen::Detail(i as u32));
        } else if i % 2 == 0 {
            stack.push(Screen::Plain);
        } else {
            stack.push(Screen::Sheet);
        }
    }
    stack
}

/// Stack of `depth` screens where every third entry is a `Detail`.
fn mixed_stack(depth: usize) -> Stack<Screen> {
    let mut stack = Stack::new();
    for i in 0..depth {
        match i % 3 {
            0 => stack.push(Screen::Plain),
            1 => stack.push(Screen::Detail(i as u32)),
            _ => stack.push(Screen::Sheet),
        };
    }
    stack
}

fn stack_without_detail(depth: usize) -> Stack<Screen> {
    let mut stack = Stack::new();
    for i in 0..depth {
        if i % 2 == 0 {
            stack.push(Screen::Plain);
        } else {
            stack.push(Screen::Sheet);
        }
    }
    stack
}

fn bench_short_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_circuit");
    for &depth in &[8usize, 64, 512] {
        let near = stack_with_detail_at(depth, 1);
        let far = stack_with_detail_at(depth, depth - 2);
        let detail = case_path!(Screen::Detail);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("first_id_match_near_front_n{}", depth), |b| {
            b.iter(|| black_box(near.first_id(&detail)))
        });
        group.bench_function(format!("first_id_match_near_back_n{}", depth), |b| {
            b.iter(|| black_box(far.first_id(&detail)))
        });
        group.bench_function(format!("last_id_match_near_back_n{}", depth), |b| {
            b.iter(|| black_box(far.last_id(&detail)))
        });
    }
    group.finish();
}

fn bench_full_scan_no_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan_no_match");
    for &depth in &[8usize, 64, 512] {
        let stack = stack_without_detail(depth);
        let detail = case_path!(Screen::Detail);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("first_id_n{}", depth), |b| {
            b.iter(|| black_box(stack.id_for(&detail, Direction::FromFirst)))
        });
        group.bench_function(format!("last_id_n{}", depth), |b| {
            b.iter(|| black_box(stack.id_for(&detail, Direction::FromLast)))
        });
    }
    group.finish();
}

fn bench_entry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_lookup");
    for &depth in &[64usize, 512] {
        let stack = mixed_stack(depth);
        let detail = case_path!(Screen::Detail);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("first_entry_n{}", depth), |b| {
            b.iter(|| black_box(stack.first_entry(&detail)))
        });
        group.bench_function(format!("last_entry_n{}", depth), |b| {
            b.iter(|| black_box(stack.last_entry(&detail)))
        });
    }
    group.finish();
}

fn bench_id_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("id_access");
    for &depth in &[64usize, 512] {
        let stack = mixed_stack(depth);
        let mid = stack.ids().nth(depth / 2).unwrap();
        group.bench_function(format!("get_mid_n{}", depth), |b| {
            b.iter(|| black_box(stack.get(mid)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_short_circuit,
    bench_full_scan_no_match,
    bench_entry_lookup,
    bench_id_access,
);
criterion_main!(benches);

/*!
 * Ready Queue Benchmarks
 * Heap churn under enqueue/dequeue load
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sched_sim::{ProcessControlBlock, ProcessTable, ReadyQueue};

fn bench_enqueue_dequeue(c: &mut Criterion) {
    for count in [64u32, 1024] {
        c.bench_function(&format!("ready_queue_churn_{}", count), |b| {
            b.iter(|| {
                let mut table = ProcessTable::new(count as usize);
                let mut queue = ReadyQueue::new();
                for pid in 0..count {
                    table.put(
                        ProcessControlBlock::new(pid, "bench", (pid % 50) + 1, 10, 0),
                        pid,
                    );
                    queue.enqueue(&mut table, pid);
                }
                while let Some(pid) = queue.dequeue_max(&mut table) {
                    black_box(pid);
                }
            })
        });
    }
}

fn bench_peek_all_descending(c: &mut Criterion) {
    let count = 256u32;
    let mut table = ProcessTable::new(count as usize);
    let mut queue = ReadyQueue::new();
    for pid in 0..count {
        table.put(
            ProcessControlBlock::new(pid, "bench", (pid * 13) % 50, 10, 0),
            pid,
        );
        queue.enqueue(&mut table, pid);
    }

    c.bench_function("ready_queue_peek_all_256", |b| {
        b.iter(|| black_box(queue.peek_all_descending(&table)))
    });
}

criterion_group!(benches, bench_enqueue_dequeue, bench_peek_all_descending);
criterion_main!(benches);

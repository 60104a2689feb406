use pattern_catalog::singleton::{self, ProcessManager, ProcessRegistry};
use std::sync::{Arc, Barrier};
use std::thread;

const RACERS: usize = 16;

fn address_of(manager: &ProcessManager) -> usize {
    manager as *const ProcessManager as usize
}

/// Many OS threads released at once all race the first `acquire`.
#[test]
fn test_concurrent_first_acquire_constructs_once() {
    let registry = ProcessRegistry::new();
    let barrier = Barrier::new(RACERS);
    let (registry_ref, barrier_ref) = (&registry, &barrier);

    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..RACERS)
            .map(|_| {
                scope.spawn(move || {
                    barrier_ref.wait();
                    address_of(registry_ref.acquire())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("racer panicked"))
            .collect()
    });

    assert_eq!(registry.constructions(), 1);
    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(addresses[0], address_of(registry.acquire()));
}

/// Same race, driven from tasks on a multi-threaded tokio runtime.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_acquire_from_runtime_tasks() {
    let registry = Arc::new(ProcessRegistry::new());

    let handles: Vec<_> = (0..RACERS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                let manager = registry.acquire();
                manager.spawn(format!("task_{i}"));
                address_of(manager)
            })
        })
        .collect();

    let mut addresses = Vec::with_capacity(RACERS);
    for handle in handles {
        addresses.push(handle.await.expect("task panicked"));
    }

    assert_eq!(registry.constructions(), 1);
    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(registry.acquire().num_process(), RACERS as u64);
}

#[test]
fn test_global_acquire_returns_same_instance() {
    let first = singleton::acquire();
    let second = thread::spawn(|| address_of(singleton::acquire()))
        .join()
        .expect("thread panicked");

    assert_eq!(address_of(first), second);
    assert_eq!(singleton::registry().constructions(), 1);
}

//! Concurrent writers against one shared store.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use rstest::rstest;
use taskboard::domain::ports::DataStore;
use taskboard::domain::{NewTask, NewUser, TaskStatus, TaskTitle, UserId};
use taskboard::outbound::memory::InMemoryDataStore;

fn spawn_writers<T, F>(store: &Arc<InMemoryDataStore>, writers: u64, write: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(&InMemoryDataStore, u64) -> T + Send + Sync + Copy + 'static,
{
    let handles: Vec<_> = (0..writers)
        .map(|n| {
            let store = Arc::clone(store);
            thread::spawn(move || write(&*store, n))
        })
        .collect();
    handles
        .into_iter()
        .map(|handle| handle.join().expect("writer thread panicked"))
        .collect()
}

#[rstest]
#[case(1)]
#[case(16)]
#[case(64)]
fn parallel_user_inserts_get_distinct_sequential_ids(#[case] writers: u64) {
    let store = Arc::new(InMemoryDataStore::seeded().expect("seed data is valid"));

    let ids: BTreeSet<u64> = spawn_writers(&store, writers, |store, n| {
        let user = NewUser::try_from_strings(
            &format!("Writer {n}"),
            &format!("writer{n}@example.com"),
            "tester",
        )
        .expect("valid user");
        store.add_user(user).id().get()
    })
    .into_iter()
    .collect();

    assert_eq!(ids, (4..=3 + writers).collect::<BTreeSet<_>>());
    assert_eq!(store.list_users().len() as u64, 3 + writers);
}

#[rstest]
fn parallel_task_inserts_get_distinct_sequential_ids() {
    let writers = 32;
    let store = Arc::new(InMemoryDataStore::seeded().expect("seed data is valid"));

    let ids: BTreeSet<u64> = spawn_writers(&store, writers, |store, n| {
        let task = NewTask {
            title: TaskTitle::new(format!("Task {n}")).expect("valid title"),
            status: TaskStatus::Pending,
            user_id: UserId::new(1),
        };
        store.add_task(task).id().get()
    })
    .into_iter()
    .collect();

    assert_eq!(ids, (4..=3 + writers).collect::<BTreeSet<_>>());
    assert_eq!(store.stats().tasks.pending, 1 + writers as usize);
}

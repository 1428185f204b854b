use std::sync::{Arc, Barrier};
use std::thread;
use transfer_service::models::{account::AccountRecord, transfer::TransferRequest};
use transfer_service::{AccountRegistry, TransferError, execute_transfer};

fn shared<const N: usize>(records: [AccountRecord; N]) -> Arc<AccountRegistry> {
    Arc::new(AccountRegistry::with_accounts(records).unwrap())
}

fn balance(registry: &AccountRegistry, name: &str) -> i64 {
    registry.lookup(name).unwrap().balance()
}

/// Run every request on its own thread, released together by a barrier.
fn run_concurrently(
    registry: &Arc<AccountRegistry>,
    requests: Vec<TransferRequest>,
) -> Vec<Result<i64, TransferError>> {
    let barrier = Arc::new(Barrier::new(requests.len()));
    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                execute_transfer(&registry, request).map(|response| response.from_balance)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().expect("transfer thread panicked"))
        .collect()
}

#[test]
fn test_cyclic_transfers_complete() {
    let registry = shared([
        AccountRecord::new("Mark", 100),
        AccountRecord::new("Jane", 50),
        AccountRecord::new("Adam", 0),
    ]);

    let results = run_concurrently(
        &registry,
        vec![
            TransferRequest::new("Mark", "Jane", 20),
            TransferRequest::new("Jane", "Mark", 20),
            TransferRequest::new("Mark", "Adam", 20),
        ],
    );

    assert!(results.iter().all(Result::is_ok), "{results:?}");
    assert_eq!(balance(&registry, "mark"), 80);
    assert_eq!(balance(&registry, "jane"), 50);
    assert_eq!(balance(&registry, "adam"), 20);
}

#[test]
fn test_opposing_transfers_under_contention() {
    let registry = shared([
        AccountRecord::new("a", 1_000),
        AccountRecord::new("b", 1_000),
    ]);

    let mut requests = Vec::new();
    for _ in 0..200 {
        requests.push(TransferRequest::new("a", "B", 3));
        requests.push(TransferRequest::new("b", "A", 3));
    }

    for _ in 0..10 {
        let results = run_concurrently(&registry, requests.clone());
        assert!(results.iter().all(Result::is_ok));
    }

    assert_eq!(balance(&registry, "a"), 1_000);
    assert_eq!(balance(&registry, "b"), 1_000);
}

#[test]
fn test_total_is_conserved_and_never_negative() {
    let names = ["alice", "bob", "carol", "dave", "erin"];
    let registry = shared(names.map(|name| AccountRecord::new(name, 10)));
    let total_before = registry.total_balance();

    // Every ordered pair, several times over, with amounts large enough that
    // many transfers must fail for lack of funds.
    let mut requests = Vec::new();
    for round in 0..4 {
        for from in names {
            for to in names {
                if from != to {
                    requests.push(TransferRequest::new(from, to, 3 + round));
                }
            }
        }
    }

    let results = run_concurrently(&registry, requests);

    for result in &results {
        match result {
            Ok(from_balance) => assert!(*from_balance >= 0),
            Err(err) => assert_eq!(*err, TransferError::InsufficientFunds),
        }
    }
    assert_eq!(registry.total_balance(), total_before);
    for account in registry.snapshots() {
        assert!(account.balance >= 0, "{account:?}");
    }
}

// The pre-lock funds check rejects most of the losers here. Only a loser
// that passed it before the winner committed exercises the recheck under
// the guards, so that branch is covered deterministically in
// `transfer_service` unit tests instead.
#[test]
fn test_drain_race_allows_exactly_one_winner() {
    let registry = shared([
        AccountRecord::new("source", 100),
        AccountRecord::new("x", 0),
        AccountRecord::new("y", 0),
        AccountRecord::new("z", 0),
    ]);

    let results = run_concurrently(
        &registry,
        vec![
            TransferRequest::new("source", "x", 100),
            TransferRequest::new("source", "y", 100),
            TransferRequest::new("source", "z", 100),
        ],
    );

    let successes = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(successes, 1);
    assert_eq!(balance(&registry, "source"), 0);
    assert_eq!(registry.total_balance(), 100);
}

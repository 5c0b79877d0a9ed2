use std::sync::Arc;

use tempfile::TempDir;

use payfetch_core::{Outcome, PaymentId};
use payfetch_store::{CsvStore, OutcomeStore};

fn outcome(id: &str) -> Outcome {
    Outcome::success(&PaymentId::new(id), format!("order-{id}"), format!("ref-{id}"), 200)
}

#[tokio::test]
async fn header_is_written_before_any_outcome() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let _store = CsvStore::create(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "payment_id,order_id,external_reference,http_status,error\n"
    );
}

#[tokio::test]
async fn writes_one_row_per_outcome_plus_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let store = CsvStore::create(&path).unwrap();

    for i in 0..7 {
        store.append_outcome(&outcome(&i.to_string())).await.unwrap();
    }

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 8);
}

#[tokio::test]
async fn rows_round_trip_through_the_reader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let store = CsvStore::create(&path).unwrap();

    let failed = Outcome::failure(&PaymentId::new("42"), 404, "Payment not found");
    store.append_outcome(&outcome("1")).await.unwrap();
    store.append_outcome(&failed).await.unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<Outcome> = reader.deserialize().map(Result::unwrap).collect();
    assert_eq!(rows, vec![outcome("1"), failed]);
}

#[tokio::test]
async fn quotes_fields_containing_delimiters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let store = CsvStore::create(&path).unwrap();

    let tricky = Outcome::failure(&PaymentId::new("9"), 400, "bad amount, check \"currency\"");
    store.append_outcome(&tricky).await.unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<Outcome> = reader.deserialize().map(Result::unwrap).collect();
    assert_eq!(rows[0].error, "bad amount, check \"currency\"");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_writers_never_interleave_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let store = Arc::new(CsvStore::create(&path).unwrap());

    let per_writer = 25usize;
    let writers = 8usize;
    let mut handles = Vec::new();
    for w in 0..writers {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..per_writer {
                let id = format!("{w}-{i}");
                store.append_outcome(&outcome(&id)).await.unwrap();
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), writers * per_writer + 1);

    // Every row must parse into the full five-column schema and every
    // identifier must appear exactly once.
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let mut seen = std::collections::BTreeSet::new();
    for row in reader.deserialize::<Outcome>() {
        let row = row.unwrap();
        assert!(seen.insert(row.payment_id.clone()), "duplicate {}", row.payment_id);
    }
    assert_eq!(seen.len(), writers * per_writer);
}

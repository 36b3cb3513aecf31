use criterion::{Criterion, black_box, criterion_group, criterion_main};
use blockfrost_client::domain::{ApiError, Order, Pagination, Transaction, TransactionUtxo};
use validator::Validate;

const TRANSACTION: &str = include_str!("../tests/fixtures/transaction.json");
const UTXOS: &str = include_str!("../tests/fixtures/transaction_utxos.json");

fn bench_pagination_validation(c: &mut Criterion) {
    let params = Pagination::new(100, 21_474_836, Order::Desc);

    c.bench_function("validate_pagination", |b| {
        b.iter(|| {
            let _ = black_box(&params).validate();
        })
    });
}

fn bench_decoding(c: &mut Criterion) {
    c.bench_function("decode_transaction", |b| {
        b.iter(|| {
            let _: Transaction = serde_json::from_str(black_box(TRANSACTION)).unwrap();
        })
    });

    c.bench_function("decode_transaction_utxos", |b| {
        b.iter(|| {
            let _: TransactionUtxo = serde_json::from_str(black_box(UTXOS)).unwrap();
        })
    });

    let error_body = br#"{"status_code":404,"error":"Not Found","message":"The requested component has not been found."}"#;
    c.bench_function("map_error_response", |b| {
        b.iter(|| ApiError::from_response(404, Some("Not Found"), black_box(error_body)))
    });
}

criterion_group!(benches, bench_pagination_validation, bench_decoding);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use mockup_runner::layout::corporate;
use mockup_runner::rpc::{decode_response, extract_tool_result};
use serde_json::json;

fn export_like_body() -> String {
    let envelope = json!({
        "jsonrpc": "2.0",
        "id": 601,
        "result": {
            "content": [{"type": "text", "text": json!({"id": "scr_Q9k4Hy2vNg", "elements": 38}).to_string()}],
            "isError": false
        }
    });
    format!("event: message\ndata: {}\n\n", envelope)
}

fn bench_decode(c: &mut Criterion) {
    let framed = export_like_body();
    let bare = framed
        .lines()
        .find_map(|l| l.strip_prefix("data: "))
        .unwrap_or_default()
        .to_string();

    c.bench_function("decode_event_stream", |b| {
        b.iter(|| decode_response(&framed).unwrap())
    });
    c.bench_function("decode_bare_json", |b| b.iter(|| decode_response(&bare).unwrap()));
    c.bench_function("decode_and_extract", |b| {
        b.iter(|| {
            let result = decode_response(&framed).unwrap();
            extract_tool_result("mockup_add_screen", result).unwrap()
        })
    });
}

fn bench_batch_encode(c: &mut Criterion) {
    c.bench_function("encode_services_batch", |b| {
        b.iter(|| serde_json::to_vec(&json!({"elements": corporate::services()})).unwrap())
    });
}

criterion_group!(benches, bench_decode, bench_batch_encode);
criterion_main!(benches);

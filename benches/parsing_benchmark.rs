use ais_rs::{dispatch, AisDecoder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const POSITION_LINE: &str = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";
const VOYAGE_FRAG_1: &str =
    "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E";
const VOYAGE_FRAG_2: &str = "!AIVDM,2,2,3,B,1@0000000000000,2*55";

fn benchmark_decode_position(c: &mut Criterion) {
    c.bench_function("decode_position_report", |b| {
        let mut decoder = AisDecoder::new();
        b.iter(|| {
            let result = decoder.decode_line(black_box(POSITION_LINE));
            let _ = black_box(result);
        })
    });
}

fn benchmark_decode_multi_fragment(c: &mut Criterion) {
    c.bench_function("decode_voyage_two_fragments", |b| {
        let mut decoder = AisDecoder::new();
        b.iter(|| {
            let _ = black_box(decoder.decode_line(black_box(VOYAGE_FRAG_1)));
            let result = decoder.decode_line(black_box(VOYAGE_FRAG_2));
            let _ = black_box(result);
        })
    });
}

fn benchmark_dispatch_only(c: &mut Criterion) {
    let bits = ais_rs::nmea::decode_payload("177KQJ5000G?tO`K>RA1wUbN0TKH", 0).unwrap();
    c.bench_function("dispatch_complete_vector", |b| {
        b.iter(|| {
            let result = dispatch(black_box(&bits));
            let _ = black_box(result);
        })
    });
}

criterion_group!(
    benches,
    benchmark_decode_position,
    benchmark_decode_multi_fragment,
    benchmark_dispatch_only
);
criterion_main!(benches);

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use geoform::{GeoJsonCodec, Geometry, MultiPolygon, decode_str};
use std::hint::black_box;

// A multipolygon of `polygons` squares, each with a ring of `ring_size` positions.
fn large_multi_polygon(polygons: usize, ring_size: usize) -> Geometry {
	let coordinates: Vec<Vec<Vec<[f64; 2]>>> = (0..polygons)
		.map(|p| {
			let x0 = (p % 100) as f64 * 1.5 - 75.0;
			let y0 = (p / 100) as f64 * 1.5 - 60.0;
			let mut ring: Vec<[f64; 2]> = (0..ring_size - 1)
				.map(|i| {
					let angle = i as f64 / (ring_size - 1) as f64 * std::f64::consts::TAU;
					[x0 + angle.cos() * 0.5, y0 + angle.sin() * 0.5]
				})
				.collect();
			ring.push(ring[0]);
			vec![ring]
		})
		.collect();
	MultiPolygon::from(coordinates).into()
}

fn bench_decode(c: &mut Criterion) {
	let geometry = large_multi_polygon(2000, 64);
	let json = geometry.to_json().unwrap();

	let mut group = c.benchmark_group("decode");
	group.throughput(Throughput::Elements(geometry.count_positions() as u64));

	group.bench_function("multi_polygon", |b| {
		b.iter(|| black_box(decode_str::<Geometry>(black_box(&json)).unwrap()));
	});

	group.bench_function("multi_polygon_encode", |b| {
		b.iter(|| black_box(geometry.to_json().unwrap()));
	});

	group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);

use criterion::criterion_main;


criterion_main!(aggregation::aggregation_benches, rendering::rendering_benches);

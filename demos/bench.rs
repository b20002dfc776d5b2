mod demo_util;

use benchmarking::measure_function_with_times;
use std::fs::read;
use std::time::Duration;

use doom_wad::Archive;

use demo_util::wad_path;

const ITERATIONS: u64 = 10;

fn measure_parse(bytes: Vec<u8>) -> Duration {
    let results = measure_function_with_times(ITERATIONS, move |measurer| {
        measurer.measure(|| {
            Archive::from_bytes(&bytes).unwrap();
        });
    })
    .unwrap();

    results.elapsed()
}

fn main() {
    let path = wad_path();
    let bytes = read(&path).expect("Could not read file");
    let size = bytes.len();

    println!("Took {:?} to parse {} ({} bytes)", measure_parse(bytes), path, size);
}

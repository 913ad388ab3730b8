#![cfg(feature = "unstable")]
#![cfg_attr(feature = "unstable", feature(test))]

extern crate test;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rs_spelling_bee_solver::details::*;
use rs_spelling_bee_solver::*;

use test::Bencher;

fn random_words(num_words: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(1234);
    (0..num_words)
        .map(|_| {
            let length = rng.gen_range(4..=10);
            (0..length)
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}

#[bench]
fn bench_word_index_build(b: &mut Bencher) {
    let words = random_words(20_000);

    b.iter(|| WordIndex::build(&words));
}

#[bench]
fn bench_word_index_clone(b: &mut Bencher) {
    let index = WordIndex::build(random_words(20_000));

    b.iter(|| index.clone());
}

#[bench]
fn bench_canonical_key(b: &mut Bencher) {
    let words = random_words(1_000);
    let mut word_iter = words.iter().cycle();

    b.iter(|| canonical_key(word_iter.next().unwrap()));
}

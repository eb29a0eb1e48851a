use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sanscript_core::{Engine, Group, Options, Scheme, SchemeMap};

fn hk() -> Scheme {
    Scheme::new(true)
        .with_group(Group::Vowels, ["a", "A", "i", "I", "u", "U", "e", "ai", "o", "au"])
        .with_group(Group::Marks, ["A", "i", "I", "u", "U", "e", "ai", "o", "au"])
        .with_group(Group::Virama, [""])
        .with_group(Group::Other, ["M", "H"])
        .with_group(
            Group::Consonants,
            [
                "k", "kh", "g", "gh", "c", "j", "T", "D", "N", "t", "th", "d", "dh", "n", "p",
                "b", "bh", "m", "y", "r", "l", "v", "z", "S", "s", "h",
            ],
        )
}

fn devanagari() -> Scheme {
    Scheme::new(false)
        .with_group(Group::Vowels, ["अ", "आ", "इ", "ई", "उ", "ऊ", "ए", "ऐ", "ओ", "औ"])
        .with_group(Group::Marks, ["ा", "ि", "ी", "ु", "ू", "े", "ै", "ो", "ौ"])
        .with_group(Group::Virama, ["्"])
        .with_group(Group::Other, ["ं", "ः"])
        .with_group(
            Group::Consonants,
            [
                "क", "ख", "ग", "घ", "च", "ज", "ट", "ड", "ण", "त", "थ", "द", "ध", "न", "प",
                "ब", "भ", "म", "य", "र", "ल", "व", "श", "ष", "स", "ह",
            ],
        )
}

const VERSE: &str = "dharmakSetre kurukSetre samavetA yuyutsavaH mAmakAH pANDavAz caiva kim akurvata saMjaya";

fn bench_roman(c: &mut Criterion) {
    let map = SchemeMap::new(&hk(), &devanagari());
    let options = Options::default();
    let mut group = c.benchmark_group("roman_to_brahmic");
    for repeat in [1usize, 16, 256] {
        let input = VERSE.repeat(repeat);
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &input, |b, input| {
            b.iter(|| Engine::new(&map, &options).run(input))
        });
    }
    group.finish();
}

fn bench_brahmic(c: &mut Criterion) {
    let options = Options::default();
    let forward = SchemeMap::new(&hk(), &devanagari());
    let deva = Engine::new(&forward, &options).run(&VERSE.repeat(16));
    let map = SchemeMap::new(&devanagari(), &hk());
    c.bench_function("brahmic_to_roman", |b| {
        b.iter(|| Engine::new(&map, &options).run(&deva))
    });
}

fn bench_scheme_map(c: &mut Criterion) {
    let (from, to) = (hk(), devanagari());
    c.bench_function("scheme_map_build", |b| b.iter(|| SchemeMap::new(&from, &to)));
}

criterion_group!(benches, bench_roman, bench_brahmic, bench_scheme_map);
criterion_main!(benches);

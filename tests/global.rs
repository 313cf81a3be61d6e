use std::thread;

use cryptal_rand as random;

#[test]
fn test_global_read_fills_the_whole_buffer() {
    for len in [0, 1, 7, 8, 9, 255, 4096, 1 << 20] {
        let mut buf = vec![0u8; len];
        assert_eq!(random::read(&mut buf).unwrap(), len);
    }
}

#[test]
fn test_global_read_bytes_look_uniform() {
    let mut buf = vec![0u8; 256 * 1_000];
    random::read(&mut buf).unwrap();

    let mut counts = [0u64; 256];
    for &b in &buf {
        counts[b as usize] += 1;
    }

    // 255 degrees of freedom: mean 255, standard deviation about 22.6.
    let expected = 1_000.0;
    let stat: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(stat < 400.0, "chi-squared = {stat}");
}

#[test]
fn test_global_seed_has_no_effect() {
    random::seed(1);
    let a: Vec<u64> = (0..8).map(|_| random::uint64()).collect();
    random::seed(1);
    let b: Vec<u64> = (0..8).map(|_| random::uint64()).collect();

    assert_ne!(a, b);
}

#[test]
fn test_global_default_generator_is_a_singleton() {
    let a = random::default_rand() as *const _;
    let b = random::default_rand() as *const _;

    assert_eq!(a, b);
}

#[test]
fn test_global_package_functions_honor_their_ranges() {
    for _ in 0..10_000 {
        assert!(random::int63() >= 0);
        assert!(random::int31() >= 0);
        assert!(random::int() <= isize::MAX as usize);
        assert!(random::intn(10) < 10);
        assert!((0..10).contains(&random::int31n(10)));
        assert!((0..10).contains(&random::int63n(10)));
        assert!((0.0..1.0).contains(&random::float64()));
        assert!((0.0..1.0).contains(&random::float32()));
        assert!(random::exp_float64() >= 0.0);
        assert!(random::norm_float64().is_finite());
    }

    let _ = random::uint32();
}

#[test]
fn test_global_package_perm_and_shuffle() {
    let mut p = random::perm(50);
    p.sort_unstable();
    assert_eq!(p, (0..50).collect::<Vec<_>>());

    let mut items: Vec<usize> = (0..50).collect();
    random::shuffle(items.len(), |i, j| items.swap(i, j));
    items.sort_unstable();
    assert_eq!(items, (0..50).collect::<Vec<_>>());
}

#[test]
fn test_global_new_generators_are_independent_handles() {
    let a = random::new();
    let b = random::new();

    assert_ne!(a.uint64(), b.uint64());
    assert!(random::new_source() == random::new_source());
}

#[test]
fn test_global_concurrent_draws_are_safe() {
    let results: Vec<(Vec<u64>, f64)> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    let mut counts = vec![0u64; 4];
                    let mut sum = 0.0;
                    let mut buf = [0u8; 32];

                    for _ in 0..20_000 {
                        counts[random::intn(4)] += 1;
                        sum += random::float64();
                        assert_eq!(random::read(&mut buf).unwrap(), 32);
                    }

                    (counts, sum / 20_000.0)
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (counts, mean) in results {
        assert_eq!(counts.iter().sum::<u64>(), 20_000);
        for c in counts {
            // Expected 5000, standard deviation about 61.
            assert!((4_500..5_500).contains(&c), "count = {c}");
        }
        assert!((mean - 0.5).abs() < 0.02, "mean = {mean}");
    }
}

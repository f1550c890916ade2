use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::huffman::{
    build_tree, count_frequencies, encode, generate_codes, huffman_encode_bytes, CodeTable,
    FrequencyTable, HuffmanConfig, HuffmanEncoder, TieBreak,
};

/// Random byte strings over an alphabet of `alphabet` symbols with a skewed distribution.
fn random_input(rng: &mut StdRng, alphabet: u8, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| {
            let a = rng.gen_range(0..alphabet);
            let b = rng.gen_range(0..alphabet);
            a.min(b)
        })
        .collect()
}

/// Minimum weighted path length over all binary trees with these leaf weights.
fn optimal_cost(frequencies: &FrequencyTable<u8>) -> usize {
    let mut weights: Vec<usize> = frequencies.iter().map(|(_, count)| count).collect();
    if weights.len() == 1 {
        return weights[0];
    }
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let x = weights.pop().unwrap();
        let y = weights.pop().unwrap();
        cost += x + y;
        weights.push(x + y);
    }
    cost
}

/// Splits `bits` back into symbols by matching whole codes, relying on prefix-freedom.
fn parse_codes(bits: &str, codes: &CodeTable<u8>) -> Option<Vec<u8>> {
    let lookup: HashMap<&str, u8> = codes.iter().map(|(symbol, code)| (code, symbol)).collect();
    let mut symbols = Vec::new();
    let mut start = 0;
    for end in 1..=bits.len() {
        if let Some(&symbol) = lookup.get(&bits[start..end]) {
            symbols.push(symbol);
            start = end;
        }
    }
    (start == bits.len()).then_some(symbols)
}

#[test]
fn test_random_inputs_satisfy_code_properties() {
    let mut rng = StdRng::seed_from_u64(0x4855_4646);
    for round in 0..200 {
        let alphabet = rng.gen_range(2..=64);
        let len = rng.gen_range(2..500);
        let input = random_input(&mut rng, alphabet, len);
        let frequencies = count_frequencies(input.iter().copied());
        if frequencies.len() < 2 {
            continue;
        }

        for tie_break in [TieBreak::Sequence, TieBreak::Deepest] {
            let root = build_tree(&frequencies, tie_break).unwrap();
            assert_eq!(root.freq(), input.len(), "round {}", round);

            let codes = generate_codes(&root);
            let mut covered: Vec<u8> = codes.iter().map(|(symbol, _)| symbol).collect();
            covered.sort_unstable();
            let expected: Vec<u8> = frequencies.sorted().into_iter().map(|(s, _)| s).collect();
            assert_eq!(covered, expected, "round {}", round);
            assert!(codes.is_prefix_free(), "round {}", round);

            let bits = encode(input.iter().copied(), &codes).unwrap();
            assert_eq!(bits.len(), optimal_cost(&frequencies), "round {}", round);
            assert_eq!(bits.len(), codes.encoded_len(&frequencies));
            assert_eq!(parse_codes(&bits, &codes), Some(input.clone()));
        }
    }
}

#[test]
fn test_kraft_sum_is_exactly_one() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let input = random_input(&mut rng, 40, 300);
        let frequencies = count_frequencies(input.iter().copied());
        if frequencies.len() < 2 {
            continue;
        }
        let codes = generate_codes(&build_tree(&frequencies, TieBreak::Sequence).unwrap());
        let longest = codes.iter().map(|(_, code)| code.len()).max().unwrap();
        // sum of 2^(longest - len) == 2^longest  <=>  sum of 2^-len == 1
        let kraft: u128 = codes
            .iter()
            .map(|(_, code)| 1u128 << (longest - code.len()))
            .sum();
        assert_eq!(kraft, 1u128 << longest);
    }
}

#[test]
fn test_deepest_never_shortens_the_tree() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let input = random_input(&mut rng, 32, 400);
        let frequencies = count_frequencies(input.iter().copied());
        let sequence = build_tree(&frequencies, TieBreak::Sequence).unwrap();
        let deepest = build_tree(&frequencies, TieBreak::Deepest).unwrap();
        assert!(deepest.height() >= sequence.height());
        assert_eq!(
            generate_codes(&deepest).encoded_len(&frequencies),
            generate_codes(&sequence).encoded_len(&frequencies)
        );
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(2024);
    let input = random_input(&mut rng, 26, 1_000);
    let first = huffman_encode_bytes(&input).unwrap();
    for _ in 0..20 {
        assert_eq!(huffman_encode_bytes(&input).unwrap(), first);
    }
}

#[test]
fn test_equal_frequencies_give_balanced_codes() {
    let input: Vec<u8> = (0..=255u8).collect();
    let encoded = huffman_encode_bytes(&input).unwrap();
    assert!(encoded.codes.iter().all(|(_, code)| code.len() == 8));
    assert_eq!(encoded.bit_len(), 256 * 8);
}

#[test]
fn test_large_input_uses_parallel_counting() {
    let mut rng = StdRng::seed_from_u64(31337);
    let input = random_input(&mut rng, 100, 200_000);
    let config = HuffmanConfig {
        parallel_threshold: 100_000,
        shard_size: 4_096,
        ..Default::default()
    };
    let encoder = HuffmanEncoder::new(config).unwrap();
    let parallel = encoder.encode(&input).unwrap();
    let sequential = HuffmanEncoder::default().encode(&input).unwrap();
    assert_eq!(parallel, sequential);
    assert_eq!(parse_codes(&parallel.bits, &parallel.codes), Some(input));
}

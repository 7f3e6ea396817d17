use proptest::prelude::*;
use pullseq::{
    Producer, Status, from_results, from_reverse_slice, from_slice, generate, step_sequence,
};

/// Property: forward and reverse slice producers replay the collection
#[test]
fn property_slice_roundtrip() {
    proptest!(|(values in proptest::collection::vec(any::<i64>(), 0..64))| {
        let forward = from_slice(values.as_slice()).to_vec().into_result().unwrap();
        prop_assert_eq!(&forward, &values);

        let mut reversed = values.clone();
        reversed.reverse();
        let backward = from_reverse_slice(values.as_slice()).to_vec().into_result().unwrap();
        prop_assert_eq!(backward, reversed);
    });
}

/// Property: map preserves length and order
#[test]
fn property_map_is_elementwise() {
    proptest!(|(values in proptest::collection::vec(any::<i32>(), 0..64))| {
        let mapped = from_slice(values.as_slice())
            .map(|v| i64::from(v) * 3 - 1)
            .to_vec()
            .into_result()
            .unwrap();

        let expected: Vec<i64> = values.iter().map(|&v| i64::from(v) * 3 - 1).collect();
        prop_assert_eq!(mapped, expected);
    });
}

/// Property: filter yields the ordered subsequence satisfying the predicate
#[test]
fn property_filter_is_subsequence() {
    proptest!(|(values in proptest::collection::vec(any::<u16>(), 0..64), modulus in 1u16..8)| {
        let kept = from_slice(values.as_slice())
            .filter(|v| v % modulus == 0)
            .to_vec()
            .into_result()
            .unwrap();

        let expected: Vec<u16> = values.iter().copied().filter(|v| v % modulus == 0).collect();
        prop_assert!(kept.len() <= values.len());
        prop_assert_eq!(kept, expected);
    });
}

/// Property: reduce is the left fold over the drained sequence
#[test]
fn property_reduce_is_left_fold() {
    proptest!(|(values in proptest::collection::vec(0u8..10, 0..32))| {
        // Non-commutative combine so ordering mistakes show up
        let combine = |acc: String, v: u8| format!("({acc}{v})");

        let folded = from_slice(values.as_slice())
            .reduce(String::new(), combine)
            .into_result()
            .unwrap();
        let expected = values.iter().fold(String::new(), |acc, &v| combine(acc, v));
        prop_assert_eq!(folded, expected);
    });
}

/// Property: an exhausted producer stays exhausted and re-drains to nothing
#[test]
fn property_exhaustion_is_stable() {
    proptest!(|(values in proptest::collection::vec(any::<i32>(), 0..16), extra in 1usize..8)| {
        let mut chain = from_slice(values.clone()).filter(|v| v % 2 == 0).map(|v| v / 2);
        let first = (&mut chain).to_vec();
        prop_assert!(first.is_ok());

        for _ in 0..extra {
            prop_assert_eq!(chain.next_value(), None);
        }
        let second = (&mut chain).to_vec();
        prop_assert!(second.value.is_empty());
        prop_assert!(second.is_ok());
    });
}

/// Property: step sequences walk from start toward end in |step| strides
#[test]
fn property_step_sequence_shape() {
    proptest!(|(start in -200i32..200, end in -200i32..200, step in prop_oneof![-20i32..0, 1i32..20])| {
        let out = step_sequence(start, end, step).unwrap().to_vec().into_result().unwrap();

        let magnitude = step.abs();
        let expected_len = ((end - start).abs() / magnitude + 1) as usize;
        prop_assert_eq!(out.len(), expected_len);
        prop_assert_eq!(out[0], start);

        for pair in out.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).abs(), magnitude);
        }
        for v in &out {
            prop_assert!(*v >= start.min(end) && *v <= start.max(end));
        }
        if start > end {
            prop_assert!(out.windows(2).all(|p| p[1] < p[0]));
        }
    });
}

/// Property: generate calls the function with counts 0..repeat
#[test]
fn property_generate_counts() {
    proptest!(|(repeat in 0usize..64)| {
        let out = generate(repeat, |c, r| (c, r)).to_vec().into_result().unwrap();
        prop_assert_eq!(out.len(), repeat);
        for (i, (c, r)) in out.into_iter().enumerate() {
            prop_assert_eq!(c, i);
            prop_assert_eq!(r, repeat);
        }
    });
}

/// Property: a failure is forwarded unchanged and truncates the output there
#[test]
fn property_failure_is_transparent() {
    proptest!(|(values in proptest::collection::vec(any::<i16>(), 0..32), fail_at in 0usize..32, msg in "[a-z]{1,12}")| {
        let fail_at = fail_at.min(values.len());
        let mut results: Vec<pullseq::Result<i16>> = values.iter().copied().map(Ok).collect();
        results.insert(fail_at, Err(Status::custom(msg.clone())));

        let out = from_results(results)
            .filter(|_| true)
            .map(|v| i32::from(v) + 1)
            .to_vec();

        let expected: Vec<i32> = values[..fail_at].iter().map(|&v| i32::from(v) + 1).collect();
        prop_assert_eq!(out.value, expected);
        prop_assert_eq!(out.status, Err(Status::custom(msg)));
    });
}

use digest_core::{digest, digest_bytes, padded_len};
use rand::RngCore;

const RFC1321: &[(&str, &str)] = &[
    ("", "d41d8cd98f00b204e9800998ecf8427e"),
    ("a", "0cc175b9c0f1b6a831c399e269772661"),
    ("abc", "900150983cd24fb0d6963f7d28e17f72"),
    ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
    ("abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b"),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "d174ab98d277d9f5a5611c2c9f419d9f",
    ),
    (
        "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        "57edf4a22be3c955ac49da2e2107b67a",
    ),
];

#[test]
fn rfc1321_test_suite() {
    for (input, expected) in RFC1321 {
        assert_eq!(digest(input.as_bytes()).unwrap(), *expected, "{input:?}");
    }
}

#[test]
fn pangram() {
    assert_eq!(
        digest(b"The quick brown fox jumps over the lazy dog").unwrap(),
        "9e107d9d372bb6826bd81d3542a419d6"
    );
}

#[test]
fn block_boundary_lengths() {
    let cases: &[(usize, usize, &str)] = &[
        (55, 64, "ef1772b6dff9a122358552954ad0df65"),
        (56, 128, "3b0c8ac703f828b04c6c197006d17218"),
        (63, 128, "b06521f39153d618550606be297466d5"),
        (64, 128, "014842d480b571495a4a0363793f7367"),
        (119, 128, "8a7bd0732ed6a28ce75f6dabc90e1613"),
        (120, 192, "5f61c0ccad4cac44c75ff505e1f1e537"),
    ];
    for &(len, padded, expected) in cases {
        let message = vec![b'a'; len];
        assert_eq!(padded_len(len), padded, "len {len}");
        assert_eq!(digest(&message).unwrap(), expected, "len {len}");
    }
}

#[test]
fn multi_block_zeros() {
    assert_eq!(
        digest(&[0u8; 1000]).unwrap(),
        "ede3d3b685b4e137ba4cb2521329a75e"
    );
}

#[test]
fn repeated_calls_are_deterministic() {
    let mut rng = rand::thread_rng();
    for len in [0usize, 1, 63, 64, 65, 511] {
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);
        assert_eq!(digest(&message).unwrap(), digest(&message).unwrap());
    }
}

#[test]
fn concurrent_calls_agree() {
    let mut rng = rand::thread_rng();
    let mut message = vec![0u8; 4096];
    rng.fill_bytes(&mut message);
    let expected = digest_bytes(&message).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| digest_bytes(&message).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

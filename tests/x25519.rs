use avb_curve25519::Error;
use avb_curve25519::keys::x25519::{BASEPOINT, exchange, public_from_private, x_scalar_mult};

fn decode(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut out).expect("valid 32-byte hex");
    out
}

#[test]
fn test_x25519_rfc7748_vectors() {
    let cases = [
        (
            "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
            "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
            "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
        ),
        (
            "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
            "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
            "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
        ),
    ];

    for (scalar, point, expected) in cases {
        assert_eq!(x_scalar_mult(&decode(scalar), &decode(point)), decode(expected));
    }
}

#[test]
fn test_x25519_iterated() {
    let mut k = BASEPOINT;
    let mut u = BASEPOINT;

    for i in 1..=1000 {
        let result = x_scalar_mult(&k, &u);
        u = k;
        k = result;

        if i == 1 {
            assert_eq!(
                k,
                decode("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
            );
        }
    }

    assert_eq!(
        k,
        decode("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
    );
}

#[test]
fn test_x25519_key_exchange() {
    let alice_private = decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let bob_private = decode("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

    let alice_public = public_from_private(&alice_private);
    let bob_public = public_from_private(&bob_private);
    assert_eq!(
        alice_public,
        decode("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
    );
    assert_eq!(
        bob_public,
        decode("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
    );

    let alice_shared = exchange(&alice_private, &bob_public).expect("honest peer");
    let bob_shared = exchange(&bob_private, &alice_public).expect("honest peer");
    assert_eq!(alice_shared, bob_shared);
    assert_eq!(
        alice_shared,
        decode("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
    );
}

#[test]
fn test_x25519_rejects_low_order_peers() {
    let private = [0x55u8; 32];

    let zero = [0u8; 32];
    assert_eq!(x_scalar_mult(&private, &zero), zero);
    assert_eq!(exchange(&private, &zero), Err(Error::LowOrderPoint));

    let mut one = [0u8; 32];
    one[0] = 1;
    assert_eq!(exchange(&private, &one), Err(Error::LowOrderPoint));
}

#[test]
fn test_x25519_ignores_top_bit_of_point() {
    let private = [0x21u8; 32];
    let mut point = decode("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = x_scalar_mult(&private, &point);
    point[31] |= 0x80;
    assert_eq!(x_scalar_mult(&private, &point), expected);
}

use avb_curve25519::curve25519::scalar::{is_canonical, mul_add, reduce};
use num_bigint::BigUint;
use proptest::prelude::*;

fn group_order() -> BigUint {
    let l = hex::decode("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010")
        .expect("valid hex");
    BigUint::from_bytes_le(&l)
}

fn to_scalar(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_le();
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

#[test]
fn test_reduce_known_answer() {
    let expected = hex::decode("000f9c44e31106a447938568a71b0ed065bef517d273ecce3d9a307c1b419903")
        .expect("valid hex");
    assert_eq!(reduce(&[0xff; 64]).to_vec(), expected);
}

#[test]
fn test_mul_add_known_answer() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    let mut c = [0u8; 32];
    for i in 0..32 {
        a[i] = i as u8;
        b[i] = 100 + i as u8;
        c[i] = 200 + i as u8;
    }

    let expected = hex::decode("8e468d83287c7716d83a208ac81402b7694bf4839d84d74963108212e712870f")
        .expect("valid hex");
    assert_eq!(mul_add(&a, &b, &c).to_vec(), expected);
}

#[test]
fn test_reduce_of_zero() {
    assert_eq!(reduce(&[0u8; 64]), [0u8; 32]);
}

proptest! {
    #[test]
    fn test_reduce_matches_bigint(wide in prop::collection::vec(any::<u8>(), 64)) {
        let mut input = [0u8; 64];
        input.copy_from_slice(&wide);

        let expected = BigUint::from_bytes_le(&wide) % group_order();
        prop_assert_eq!(reduce(&input), to_scalar(&expected));
    }

    #[test]
    fn test_mul_add_matches_bigint(
        a in any::<[u8; 32]>(),
        b in any::<[u8; 32]>(),
        c in any::<[u8; 32]>(),
    ) {
        let l = group_order();
        let big = |bytes: &[u8; 32]| BigUint::from_bytes_le(bytes);

        let product = (big(&a) * big(&b)) % &l;
        prop_assert_eq!(mul_add(&a, &b, &[0u8; 32]), to_scalar(&product));

        let expected = (big(&a) * big(&b) + big(&c)) % &l;
        let result = mul_add(&a, &b, &c);
        prop_assert!(is_canonical(&result));
        prop_assert_eq!(result, to_scalar(&expected));
    }
}


use _fixtures::{pair, sample_gas, sample_proof, sample_rollup, Pair};
use insta::assert_snapshot;
use record_wire::hex::InvalidHex;
use record_wire::records::{GasRecord, ProofBundle, RollupInput};
use record_wire::ser::SerError;
use record_wire::{Blob, CodecError, EncodedBuffer, FixedBytes, Record};

#[test]
fn pair_has_known_layout() {
    let encoded = pair().encode();
    assert_eq!(
        encoded.as_slice(),
        &[0x00, 0x00, 0x00, 0x2a, 0xde, 0xad, 0xbe, 0xef]
    );
    assert_snapshot!(encoded.to_hex(), @"0000002adeadbeef");
    assert_eq!(Pair::from_hex("0000002adeadbeef").unwrap(), pair());
    assert_eq!(Pair::from_hex("0x0000002ADEADBEEF").unwrap(), pair());
}

#[test]
fn gas_record_layout() {
    let hex = sample_gas().to_hex();
    let expected = concat!(
        "0000000000005208",
        "0000000000007530",
        "0000000000000007",
        "01",
        "0000000000000002",
        "00",
    );
    assert_eq!(hex, expected);
}

#[test]
fn absent_optional_roundtrips_as_absent() {
    let mut gas = sample_gas();
    gas.priority_fee = None;
    let encoded = gas.encode();
    assert_eq!(encoded.len(), 8 + 8 + 8 + 1 + 1);
    let decoded = GasRecord::decode(encoded.as_slice()).unwrap();
    assert_eq!(decoded.priority_fee, None);
    assert_eq!(decoded, gas);

    gas.priority_fee = Some(0);
    let decoded = GasRecord::decode(gas.encode().as_slice()).unwrap();
    assert_eq!(decoded.priority_fee, Some(0));
}

#[test]
fn nested_records_roundtrip() {
    let rollup = sample_rollup();
    let encoded = rollup.encode();
    assert_eq!(RollupInput::decode(encoded.as_slice()).unwrap(), rollup);

    let mut aggregated = sample_proof();
    aggregated.aggregated_from = Some(FixedBytes::repeat(0x99));
    let decoded = ProofBundle::decode(aggregated.encode().as_slice()).unwrap();
    assert_eq!(decoded, aggregated);
}

#[test]
fn nested_records_are_inlined() {
    let rollup = sample_rollup();
    let gas = rollup.gas.encode();
    let proof = rollup.proof.encode();
    let encoded = rollup.encode();

    let gas_start = 8 + 32 + 32 + 4;
    let proof_start = gas_start + gas.len();
    assert_eq!(&encoded.as_slice()[gas_start..proof_start], gas.as_slice());
    assert_eq!(
        &encoded.as_slice()[proof_start..proof_start + proof.len()],
        proof.as_slice()
    );
    assert_eq!(encoded.len(), proof_start + proof.len() + 4 + 3);
}

#[test]
fn every_truncation_is_detected() {
    let encoded = sample_rollup().encode();
    let bytes = encoded.as_slice();
    for cut in 1..=bytes.len() {
        let err = RollupInput::decode(&bytes[..bytes.len() - cut]).expect_err("truncated input");
        assert!(
            matches!(err, SerError::TruncatedRecord { record: "rollup_input", .. }),
            "cut {cut}: {err:?}"
        );
    }
}

#[test]
fn truncation_inside_nested_record_names_outer_record() {
    let rollup = sample_rollup();
    let gas_len = rollup.gas.encode().len();
    // batch_index, roots, tx_count, gas, proof.version, proof.circuit_id, then
    // six bytes into proof.commitment.root.
    let cut = 8 + 32 + 32 + 4 + gas_len + 2 + 32 + 6;
    let encoded = rollup.encode();
    let err = RollupInput::decode(&encoded.as_slice()[..cut]).unwrap_err();
    assert_eq!(
        err,
        SerError::TruncatedRecord {
            record: "rollup_input",
            field: "root",
        }
    );
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut bytes = pair().encode().into_vec();
    bytes.push(0x00);
    let err = Pair::decode(&bytes).unwrap_err();
    assert_eq!(
        err,
        SerError::TrailingBytes {
            record: "pair",
            consumed: 8,
            remaining: 1,
        }
    );

    let mut bytes = sample_rollup().encode().into_vec();
    let len = bytes.len();
    bytes.extend_from_slice(&[0xff, 0xff]);
    assert_eq!(
        RollupInput::decode(&bytes).unwrap_err(),
        SerError::TrailingBytes {
            record: "rollup_input",
            consumed: len,
            remaining: 2,
        }
    );
}

#[test]
fn invalid_boolean_is_not_truncation() {
    let mut bytes = sample_gas().encode().into_vec();
    let last = bytes.len() - 1;
    bytes[last] = 2;
    assert_eq!(
        GasRecord::decode(&bytes).unwrap_err(),
        SerError::InvalidValue {
            field: "refunded",
            value: 2,
        }
    );
}

#[test]
fn empty_buffer_is_truncated() {
    assert_eq!(
        Pair::decode(&[]).unwrap_err(),
        SerError::TruncatedRecord {
            record: "pair",
            field: "a",
        }
    );
}

#[test]
fn hex_errors_surface_through_codec_error() {
    assert!(matches!(
        Pair::from_hex("0000002adeadbee"),
        Err(CodecError::Hex(InvalidHex::OddLength { len: 15 }))
    ));
    assert!(matches!(
        Pair::from_hex("0000002adeadbeeg"),
        Err(CodecError::Hex(InvalidHex::InvalidCharacter { character: 'g', index: 15 }))
    ));
    assert!(matches!(
        Pair::from_hex("0000002a"),
        Err(CodecError::Ser(SerError::TruncatedRecord { field: "b", .. }))
    ));
}

#[test]
fn encoded_buffer_hex_roundtrip() {
    let buffer = sample_rollup().encode();
    let text = buffer.to_hex();
    assert_eq!(text.len(), buffer.len() * 2);
    assert_eq!(text, text.to_lowercase());
    assert_eq!(EncodedBuffer::from_hex(&text).unwrap(), buffer);
}

#[test]
fn digest_tracks_encoding() {
    let rollup = sample_rollup();
    assert_eq!(rollup.digest(), rollup.encode().digest());
    let mut changed = rollup.clone();
    changed.batch_index += 1;
    assert_ne!(rollup.digest(), changed.digest());
}

#[test]
fn minimal_records_encode_to_schema_minimum() {
    let mut proof = sample_proof();
    proof.proof = Blob::empty();
    proof.aggregated_from = None;
    assert_eq!(proof.encode().len(), ProofBundle::schema().min_encoded_len());

    let mut gas = sample_gas();
    gas.priority_fee = None;
    assert_eq!(gas.encode().len(), GasRecord::schema().min_encoded_len());

    let rollup = sample_rollup();
    assert!(rollup.encode().len() > RollupInput::schema().min_encoded_len());
}

//! Cross-base encode/decode matrix.
//!
//! One reference quantity, `31756185168571`, pushed through every supported
//! configuration shape: plain, with a source base, with convert/deconvert
//! transforms and with readable substitution.

use rebase_attr::{AttributeCodec, RebaseOptions, Transform, Value};

const DECODED: i128 = 31756185168571;

/// Asserts encode and decode both directions, plus nil pass-through.
fn assert_codec(options: RebaseOptions, decoded: Value, encoded: &str) {
    let codec = AttributeCodec::new(options.build().unwrap());
    assert_eq!(
        codec.encode(Some(decoded.clone())).unwrap(),
        Some(Value::text(encoded)),
        "encode mismatch for {decoded}"
    );
    assert_eq!(
        codec.decode(Some(Value::text(encoded))).unwrap(),
        Some(decoded),
        "decode mismatch for {encoded:?}"
    );
    assert_eq!(codec.encode(None).unwrap(), None);
    assert_eq!(codec.decode(None).unwrap(), None);
}

mod base2 {
    use super::*;

    const ENCODED: &str = "111001110000111010000001000101110101010111011";
    const ENCODED_CHOPPED: &str = "11100111000011101000000100010111010101011101";
    const ENCODED_READABLE: &str = "yyyxxyyyxxxxyyyxyxxxxxxyxxxyxyyyxyxyxyxyyyxyy";
    const ENCODED_CHOPPED_READABLE: &str = "yyyxxyyyxxxxyyyxyxxxxxxyxxxyxyyyxyxyxyxyyyxy";

    #[test]
    fn plain() {
        assert_codec(RebaseOptions::new().to(2), Value::Int(DECODED), ENCODED);
    }

    #[test]
    fn converted() {
        // Chop drops the final bit; the paired deconvert restores it.
        assert_codec(
            RebaseOptions::new()
                .to(2)
                .convert(Transform::Chop)
                .deconvert(Transform::Append("1".into())),
            Value::Int(DECODED),
            ENCODED_CHOPPED,
        );
    }

    #[test]
    fn converted_by_closure() {
        assert_codec(
            RebaseOptions::new()
                .to(2)
                .convert(Transform::custom(|s| s[..s.len() - 1].to_string()))
                .deconvert(Transform::custom(|s| s + "1")),
            Value::Int(DECODED),
            ENCODED_CHOPPED,
        );
    }

    #[test]
    fn readable() {
        assert_codec(
            RebaseOptions::new().to(2).readable(true),
            Value::Int(DECODED),
            ENCODED_READABLE,
        );
    }

    #[test]
    fn converted_readable() {
        assert_codec(
            RebaseOptions::new()
                .to(2)
                .readable(true)
                .convert(Transform::Chop)
                .deconvert(Transform::Append("y".into())),
            Value::Int(DECODED),
            ENCODED_CHOPPED_READABLE,
        );
    }

    #[test]
    fn from_octal() {
        assert_codec(
            RebaseOptions::new().from(8).to(2),
            Value::text("716072010565273"),
            ENCODED,
        );
    }

    #[test]
    fn from_octal_readable() {
        assert_codec(
            RebaseOptions::new().from(8).to(2).readable(true),
            Value::text("716072010565273"),
            ENCODED_READABLE,
        );
    }
}

mod base8 {
    use super::*;

    const ENCODED: &str = "716072010565273";
    const ENCODED_CHOPPED: &str = "71607201056527";
    const ENCODED_READABLE: &str = "7y6x72xyx565273";
    const ENCODED_CHOPPED_READABLE: &str = "7y6x72xyx56527";

    #[test]
    fn plain() {
        assert_codec(RebaseOptions::new().to(8), Value::Int(DECODED), ENCODED);
    }

    #[test]
    fn converted() {
        assert_codec(
            RebaseOptions::new()
                .to(8)
                .convert(Transform::Chop)
                .deconvert(Transform::Append("3".into())),
            Value::Int(DECODED),
            ENCODED_CHOPPED,
        );
    }

    #[test]
    fn readable() {
        assert_codec(
            RebaseOptions::new().to(8).readable(true),
            Value::Int(DECODED),
            ENCODED_READABLE,
        );
    }

    #[test]
    fn converted_readable() {
        assert_codec(
            RebaseOptions::new()
                .to(8)
                .readable(true)
                .convert(Transform::Chop)
                .deconvert(Transform::Append("3".into())),
            Value::Int(DECODED),
            ENCODED_CHOPPED_READABLE,
        );
    }

    #[test]
    fn from_base7() {
        assert_codec(
            RebaseOptions::new().from(7).to(8),
            Value::text("6455210605126033"),
            ENCODED,
        );
    }

    #[test]
    fn from_base7_readable() {
        assert_codec(
            RebaseOptions::new().from(7).to(8).readable(true),
            Value::text("6455210605126033"),
            ENCODED_READABLE,
        );
    }
}

mod base16 {
    use super::*;

    const ENCODED: &str = "1ce1d022eabb";
    const ENCODED_UPPER: &str = "1CE1D022EABB";
    const ENCODED_READABLE: &str = "yceydx22eabb";
    const ENCODED_UPPER_READABLE: &str = "YCEYDX22EABB";

    #[test]
    fn plain() {
        assert_codec(RebaseOptions::new().to(16), Value::Int(DECODED), ENCODED);
    }

    #[test]
    fn converted() {
        // No deconvert needed: the numeral parser is case-insensitive.
        assert_codec(
            RebaseOptions::new().to(16).convert(Transform::Uppercase),
            Value::Int(DECODED),
            ENCODED_UPPER,
        );
    }

    #[test]
    fn readable() {
        assert_codec(
            RebaseOptions::new().to(16).readable(true),
            Value::Int(DECODED),
            ENCODED_READABLE,
        );
    }

    #[test]
    fn converted_readable() {
        assert_codec(
            RebaseOptions::new()
                .to(16)
                .readable(true)
                .convert(Transform::Uppercase),
            Value::Int(DECODED),
            ENCODED_UPPER_READABLE,
        );
    }

    #[test]
    fn from_octal() {
        assert_codec(
            RebaseOptions::new().from(8).to(16),
            Value::text("716072010565273"),
            ENCODED,
        );
    }
}

mod base32 {
    use super::*;

    const ENCODED: &str = "ss7825qlr";
    const ENCODED_UPPER: &str = "SS7825QLR";
    const ENCODED_READABLE: &str = "ss7825qwr";
    const ENCODED_UPPER_READABLE: &str = "SS7825QWR";

    #[test]
    fn plain() {
        assert_codec(RebaseOptions::new().to(32), Value::Int(DECODED), ENCODED);
    }

    #[test]
    fn converted() {
        assert_codec(
            RebaseOptions::new().to(32).convert(Transform::Uppercase),
            Value::Int(DECODED),
            ENCODED_UPPER,
        );
    }

    #[test]
    fn readable() {
        assert_codec(
            RebaseOptions::new().to(32).readable(true),
            Value::Int(DECODED),
            ENCODED_READABLE,
        );
    }

    #[test]
    fn converted_readable() {
        assert_codec(
            RebaseOptions::new()
                .to(32)
                .readable(true)
                .convert(Transform::Uppercase),
            Value::Int(DECODED),
            ENCODED_UPPER_READABLE,
        );
    }
}

mod base36 {
    use super::*;

    const ENCODED: &str = "b98l8q8qj";
    const ENCODED_UPPER: &str = "B98L8Q8QJ";

    #[test]
    fn plain() {
        assert_codec(RebaseOptions::new().to(36), Value::Int(DECODED), ENCODED);
    }

    #[test]
    fn converted() {
        assert_codec(
            RebaseOptions::new().to(36).convert(Transform::Uppercase),
            Value::Int(DECODED),
            ENCODED_UPPER,
        );
    }

    #[test]
    fn from_octal() {
        assert_codec(
            RebaseOptions::new().from(8).to(36),
            Value::text("716072010565273"),
            ENCODED,
        );
    }
}

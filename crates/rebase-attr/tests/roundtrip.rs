//! Property tests: round-trip laws and readable bijection.

use proptest::prelude::*;
use rebase_attr::{numeral, readable, AttributeCodec, RebaseOptions, Value};

fn codec(options: RebaseOptions) -> AttributeCodec {
    AttributeCodec::new(options.build().unwrap())
}

proptest! {
    #[test]
    fn decode_inverts_encode(n in any::<u64>(), to in 2u32..=36) {
        let codec = codec(RebaseOptions::new().to(to));
        let encoded = codec.encode(Some(Value::Int(n as i128))).unwrap();
        prop_assert_eq!(codec.decode(encoded).unwrap(), Some(Value::Int(n as i128)));
    }

    #[test]
    fn decode_inverts_encode_readable(n in any::<u64>(), to in 2u32..=32) {
        let codec = codec(RebaseOptions::new().to(to).readable(true));
        let encoded = codec.encode(Some(Value::Int(n as i128))).unwrap();
        prop_assert_eq!(codec.decode(encoded).unwrap(), Some(Value::Int(n as i128)));
    }

    #[test]
    fn decode_inverts_encode_with_source_base(n in any::<u64>(), from in 2u32..=36, to in 2u32..=36) {
        let canonical = numeral::to_base(n as i128, from);
        let codec = codec(RebaseOptions::new().from(from).to(to));
        let encoded = codec.encode(Some(Value::text(canonical.clone()))).unwrap();
        prop_assert_eq!(codec.decode(encoded).unwrap(), Some(Value::text(canonical)));
    }

    #[test]
    fn numeral_round_trips_from_string(n in any::<i64>(), base in 2u32..=36) {
        let rendered = numeral::to_base(n as i128, base);
        prop_assert_eq!(numeral::from_base(&rendered, base), Some(n as i128));
    }

    #[test]
    fn rendered_numerals_are_canonical_lowercase(n in any::<u64>(), base in 2u32..=36) {
        let rendered = numeral::to_base(n as i128, base);
        prop_assert_eq!(rendered.to_lowercase(), rendered.clone());
        // Parsing is case-insensitive over the same value.
        prop_assert_eq!(numeral::from_base(&rendered.to_uppercase(), base), Some(n as i128));
    }

    #[test]
    fn readable_substitution_is_a_bijection(n in any::<u64>(), base in 2u32..=32) {
        // Numerals over digits 0-9a-v: exactly the strings readable
        // substitution is defined for.
        let numeral = numeral::to_base(n as i128, base);
        let substituted = readable::to_readable(&numeral);
        prop_assert_eq!(readable::from_readable(&substituted), numeral);
    }

    #[test]
    fn readable_output_avoids_ambiguous_glyphs(n in any::<u64>(), base in 2u32..=32) {
        let substituted = readable::to_readable(&numeral::to_base(n as i128, base));
        prop_assert!(!substituted.contains(['0', '1', 'l', 'o']));
    }
}
